use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use flight_delay_sort::config::Config;
use flight_delay_sort::flight_data::FlightData;
use flight_delay_sort::session::Session;

const BANNER: &str = r"
 _______  __       __    _______  __    __  .___________.    _______   _______  __          ___   ____    ____
|   ____||  |     |  |  /  _____||  |  |  | |           |   |       \ |   ____||  |        /   \  \   \  /   /
|  |__   |  |     |  | |  |  __  |  |__|  | `---|  |----`   |  .--.  ||  |__   |  |       /  ^  \  \   \/   /
|   __|  |  |     |  | |  | |_ | |   __   |     |  |        |  |  |  ||   __|  |  |      /  /_\  \  \_    _/
|  |     |  `----.|  | |  |__| | |  |  |  |     |  |        |  '--'  ||  |____ |  `----./  _____  \   |  |
|__|     |_______||__|  \______| |__|  |__|     |__|        |_______/ |_______||_______/__/     \__\  |__|
";

/// Benchmark quick sort and merge sort over flight delay records
#[derive(Parser)]
#[command(name = "flight-delay-sort")]
#[command(version)]
#[command(about = "Benchmark quick sort and merge sort over flight delay records", long_about = None)]
struct Cli {
    /// CSV or TSV file with carrier, airport_name and arr_delay columns
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Seed for shuffling and pivot selection, random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::new().with_log_level(self.log_level);
        if let Some(file) = &self.file {
            config = config.with_input(file.clone());
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn main() -> Result<(), anyhow::Error> {
    let config = Cli::parse().config();
    SimpleLogger::new()
        .with_level(config.log_level())
        .init()
        .with_context(|| "init logger")?;

    println!("{BANNER}");

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let path = match config.input() {
        Some(path) => path.clone(),
        None => {
            print!("Enter the path to the flight data CSV file: ");
            std::io::stdout().flush()?;
            let mut line = String::new();
            input.read_line(&mut line)?;
            PathBuf::from(line.trim())
        }
    };

    let mut flight_data = FlightData::new(path);
    let flights = flight_data.read()?;
    if flights.is_empty() {
        return Err(anyhow!("No data to sort."));
    }
    log::info!(
        "Loaded {} flights from {}, skipped {} rows",
        flights.len(),
        flight_data.path().display(),
        flight_data.skipped(),
    );

    let mut session = Session::new(input, std::io::stdout(), flights);
    if let Some(seed) = config.seed() {
        session.with_seed(seed);
    }
    session.run()?;
    Ok(())
}
