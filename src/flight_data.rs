use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use regex::Regex;

use crate::flight::Flight;

/// Read flight records from a CSV or TSV file with a header line.
///
/// * The field separator is a TAB when the header line contains one, a comma otherwise
/// * Separators inside double quotes are part of the field, `""` inside quotes is a quote
/// * Header names are matched ignoring case and surrounding blanks
/// * Empty lines are ignored, rows with too few fields and rows without an integer delay are
///   skipped and counted, see [FlightData::skipped]
///
/// # Examples
/// ```no_run
/// use std::path::PathBuf;
/// use flight_delay_sort::flight_data::FlightData;
///
/// fn read_flights(path: PathBuf) -> Result<(), anyhow::Error> {
///     let mut flight_data = FlightData::new(path);
///     // columns default to carrier, airport_name and arr_delay
///     flight_data.with_arr_delay_column("dep_delay");
///     let flights = flight_data.read()?;
///     println!("read {} flights, skipped {} rows", flights.len(), flight_data.skipped());
///     Ok(())
/// }
/// ```
pub struct FlightData {
    path: PathBuf,
    field_separator: Option<char>,
    carrier_column: String,
    airport_name_column: String,
    arr_delay_column: String,
    skipped: usize,
}

impl FlightData {
    /// Create a FlightData reader for `path` with the default column names
    pub fn new(path: PathBuf) -> FlightData {
        FlightData {
            path,
            field_separator: None,
            carrier_column: "carrier".to_string(),
            airport_name_column: "airport_name".to_string(),
            arr_delay_column: "arr_delay".to_string(),
            skipped: 0,
        }
    }

    /// Use `field_separator` instead of detecting it from the header line
    pub fn with_field_separator(&mut self, field_separator: char) {
        self.field_separator = Some(field_separator);
    }

    pub fn with_carrier_column(&mut self, name: &str) {
        self.carrier_column = name.to_string();
    }

    pub fn with_airport_name_column(&mut self, name: &str) {
        self.airport_name_column = name.to_string();
    }

    pub fn with_arr_delay_column(&mut self, name: &str) {
        self.arr_delay_column = name.to_string();
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Number of malformed rows skipped by the last read
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Read all valid records from the file
    pub fn read(&mut self) -> Result<Vec<Flight>, anyhow::Error> {
        let file = File::open(&self.path)
            .with_context(|| anyhow!("path: {}", self.path.display()))?;
        log::info!("Start reading {}", self.path.display());
        let flights = self.read_from(BufReader::new(file))
            .with_context(|| anyhow!("path: {}", self.path.display()))?;
        log::info!("Finish reading {}, flights: {}, skipped: {}", self.path.display(), flights.len(), self.skipped);
        Ok(flights)
    }

    /// Read all valid records from `reader`. The first line must be the header.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than failing the read.
    pub fn read_from<R: BufRead>(&mut self, mut reader: R) -> Result<Vec<Flight>, anyhow::Error> {
        let delay_regex = Regex::new(r"^[+-]?\d+")?;
        self.skipped = 0;

        let header = match read_line(&mut reader)? {
            None => {
                log::warn!("No header line, nothing to read");
                return Ok(Vec::new());
            }
            Some(header) => header,
        };

        let field_separator = self.field_separator.unwrap_or_else(|| detect_separator(&header));
        let columns = Columns::resolve(
            &split_line(&header, field_separator),
            &self.carrier_column,
            &self.airport_name_column,
            &self.arr_delay_column,
        )?;

        let mut flights = Vec::new();
        while let Some(line) = read_line(&mut reader)? {
            if line.trim().is_empty() {
                continue;
            }

            let fields = split_line(&line, field_separator);
            if fields.len() <= columns.max_index() {
                self.skipped += 1;
                continue;
            }

            match parse_delay(&delay_regex, &fields[columns.arr_delay]) {
                Some(arr_delay) => {
                    flights.push(
                        Flight::new(&fields[columns.carrier], &fields[columns.airport_name], arr_delay)
                    );
                }
                None => {
                    self.skipped += 1;
                }
            }
        }

        if self.skipped > 0 {
            log::warn!("Skipped {} malformed rows", self.skipped);
        }
        Ok(flights)
    }
}

/// Next line without its line ending, None at end of input
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, anyhow::Error> {
    let mut buffer = Vec::new();
    if reader.read_until(b'\n', &mut buffer)? == 0 {
        return Ok(None);
    }
    if buffer.last() == Some(&b'\n') {
        buffer.pop();
    }
    Ok(Some(String::from_utf8_lossy(&buffer).into_owned()))
}

/// Read flights from `path` with default settings
pub fn read_flights(path: &Path) -> Result<Vec<Flight>, anyhow::Error> {
    FlightData::new(path.to_path_buf()).read()
}

struct Columns {
    carrier: usize,
    airport_name: usize,
    arr_delay: usize,
}

impl Columns {
    fn resolve(header: &[String], carrier: &str, airport_name: &str, arr_delay: &str) -> Result<Columns, anyhow::Error> {
        // a repeated header name resolves to its last occurrence
        let find = |name: &str| {
            let name = name.trim().to_lowercase();
            header.iter()
                .rposition(|h| h.to_lowercase() == name)
                .ok_or_else(|| anyhow!("Required column not found in the header: {name}"))
        };

        Ok(
            Columns {
                carrier: find(carrier)?,
                airport_name: find(airport_name)?,
                arr_delay: find(arr_delay)?,
            }
        )
    }

    fn max_index(&self) -> usize {
        self.carrier.max(self.airport_name).max(self.arr_delay)
    }
}

fn detect_separator(header: &str) -> char {
    if header.contains('\t') {
        '\t'
    } else {
        ','
    }
}

fn trim_field(field: &str) -> String {
    field.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\r' | '\n')).to_string()
}

/// Split a delimited line into trimmed fields, honouring double quotes.
pub fn split_line(line: &str, field_separator: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut inside_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '"' {
            if inside_quotes && chars.peek() == Some(&'"') {
                current.push('"');
                chars.next();
            } else {
                inside_quotes = !inside_quotes;
            }
        } else if c == field_separator && !inside_quotes {
            fields.push(trim_field(&current));
            current.clear();
        } else {
            current.push(c);
        }
    }
    fields.push(trim_field(&current));
    fields
}

/// Parse the leading integer of a delay field. `"12.0"` is 12, `"n/a"` and values out of
/// range are None.
fn parse_delay(delay_regex: &Regex, field: &str) -> Option<i64> {
    let m = delay_regex.find(field.trim_start())?;
    m.as_str().parse::<i64>().ok()
}
