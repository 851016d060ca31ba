use std::collections::{BTreeSet, VecDeque};
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Context;

use crate::algorithm::Algorithm;
use crate::benchmark::Benchmark;
use crate::filter::{carriers, Filter};
use crate::flight::Flight;

/// Interactive menu that repeatedly asks for a sort algorithm and a filter, then benchmarks
/// the selected flights.
///
/// Reads answers from any [BufRead] and writes prompts and results to any [Write], so a
/// session can be driven by stdin/stdout or scripted. End of input ends the session.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use flight_delay_sort::flight::Flight;
/// use flight_delay_sort::session::Session;
///
/// let flights = vec![Flight::new("AA", "Chicago, IL", 10), Flight::new("DL", "Atlanta, GA", -4)];
/// // merge sort, all data, then stop
/// let input = Cursor::new("2\n3\nN\n");
/// let mut session = Session::new(input, Vec::new(), flights);
/// session.with_seed(1);
/// let runs = session.run().unwrap();
/// assert_eq!(runs, 1);
/// ```
pub struct Session<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
    flights: Vec<Flight>,
    carriers: BTreeSet<String>,
    seed: Option<u64>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, flights: Vec<Flight>) -> Session<R, W> {
        let carriers = carriers(&flights);
        Session {
            input,
            output,
            pending: VecDeque::new(),
            flights,
            carriers,
            seed: None,
        }
    }

    /// Seed every benchmark run in this session
    pub fn with_seed(&mut self, seed: u64) {
        self.seed = Some(seed);
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until the user declines to continue or the input ends.
    ///
    /// Returns the number of benchmarks that were run.
    pub fn run(&mut self) -> Result<usize, anyhow::Error> {
        let mut runs = 0;
        loop {
            let algorithm = match self.read_algorithm()? {
                Some(algorithm) => algorithm,
                None => break,
            };
            let filter = match self.read_filter()? {
                Some(filter) => filter,
                None => break,
            };

            let selected = filter.apply(&self.flights)?;
            if selected.is_empty() {
                match &filter {
                    Filter::Carrier(carrier) => {
                        writeln!(self.output, "No flights found for the airline: {carrier}")?;
                    }
                    Filter::Airport(airport) => {
                        writeln!(self.output, "No flights found for airport city containing: {airport}")?;
                    }
                    Filter::All => {
                        writeln!(self.output, "No flights found.")?;
                    }
                }
                self.prompt("Do you want to try again? (Y/N): ")?;
                match self.next_token()? {
                    Some(answer) if is_yes(&answer) => continue,
                    _ => break,
                }
            }

            writeln!(self.output, "\nYou selected {algorithm}.")?;
            let mut benchmark = Benchmark::new(algorithm);
            if let Some(seed) = self.seed {
                benchmark.with_seed(seed);
            }
            let report = benchmark.run(&selected);
            write!(self.output, "{report}")?;
            runs += 1;

            self.prompt("\nDo you want to perform another operation? (Y/N): ")?;
            match self.read_yes_no()? {
                Some(true) => continue,
                _ => break,
            }
        }

        writeln!(self.output, "Exiting the program. Goodbye!")?;
        self.output.flush()?;
        Ok(runs)
    }

    fn read_algorithm(&mut self) -> Result<Option<Algorithm>, anyhow::Error> {
        writeln!(self.output, "\nSelect the sorting method to test:")?;
        writeln!(self.output, "1. Quick Sort")?;
        writeln!(self.output, "2. Merge Sort")?;
        self.prompt("Enter your choice (1 or 2): ")?;
        loop {
            let token = match self.next_token()? {
                Some(token) => token,
                None => return Ok(None),
            };
            match token.as_str() {
                "1" | "2" => return Ok(Some(Algorithm::from_str(&token)?)),
                _ => self.prompt("Invalid choice. Please enter 1 or 2: ")?,
            }
        }
    }

    fn read_filter(&mut self) -> Result<Option<Filter>, anyhow::Error> {
        writeln!(self.output, "\nDo you want to sort delays based on:")?;
        writeln!(self.output, "1. An airline carrier")?;
        writeln!(self.output, "2. An airport (city name)")?;
        writeln!(self.output, "3. All data")?;
        self.prompt("Enter a number (1, 2, or 3): ")?;
        let option = loop {
            let token = match self.next_token()? {
                Some(token) => token,
                None => return Ok(None),
            };
            match token.as_str() {
                "1" | "2" | "3" => break token,
                _ => self.prompt("Invalid choice. Please enter 1, 2, or 3: ")?,
            }
        };
        // the rest of the answer line is ignored
        self.pending.clear();

        match option.as_str() {
            "1" => {
                self.prompt("Enter the airline carrier code (e.g., AA, DL, UA): ")?;
                loop {
                    let carrier = match self.next_token()? {
                        Some(carrier) => carrier,
                        None => return Ok(None),
                    };
                    if self.carriers.contains(&carrier) {
                        return Ok(Some(Filter::Carrier(carrier)));
                    }
                    self.prompt("Invalid airline carrier code. Please enter a valid airline code: ")?;
                }
            }
            "2" => {
                self.prompt("Enter the airport city name (e.g., Chicago, Birmingham): ")?;
                Ok(self.next_line()?.map(Filter::Airport))
            }
            _ => Ok(Some(Filter::All)),
        }
    }

    fn read_yes_no(&mut self) -> Result<Option<bool>, anyhow::Error> {
        loop {
            let token = match self.next_token()? {
                Some(token) => token,
                None => return Ok(None),
            };
            match token.as_str() {
                "Y" | "y" => return Ok(Some(true)),
                "N" | "n" => return Ok(Some(false)),
                _ => self.prompt("Invalid choice. Please enter Y or N: ")?,
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<(), anyhow::Error> {
        write!(self.output, "{text}")?;
        self.output.flush().with_context(|| "flush prompt")
    }

    /// Next whitespace separated token, reading more lines as needed
    fn next_token(&mut self) -> Result<Option<String>, anyhow::Error> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line).with_context(|| "read answer")? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(|s| s.to_string()));
        }
        Ok(self.pending.pop_front())
    }

    /// Next complete line, without the line ending
    fn next_line(&mut self) -> Result<Option<String>, anyhow::Error> {
        let mut line = String::new();
        if self.input.read_line(&mut line).with_context(|| "read answer")? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn is_yes(answer: &str) -> bool {
    answer == "Y" || answer == "y"
}
