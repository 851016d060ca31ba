use std::path::PathBuf;

use anyhow::Error;
use simple_logger::SimpleLogger;

use flight_delay_sort::algorithm::Algorithm;
use flight_delay_sort::benchmark::Benchmark;
use flight_delay_sort::filter::Filter;
use flight_delay_sort::flight_data::FlightData;

fn benchmark(filter: Filter, algorithm: Algorithm, input_path: &PathBuf) -> Result<(), Error> {
    let flights = FlightData::new(input_path.clone()).read()?;
    let selected = filter.apply(&flights)?;
    let mut benchmark = Benchmark::new(algorithm);
    benchmark.with_seed(2023);
    println!("{algorithm}, {filter:?}:");
    println!("{}", benchmark.run(&selected));
    Ok(())
}

// cargo run -r --example benchmark_flights
pub fn main() -> Result<(), Error> {
    SimpleLogger::new().with_level(log::LevelFilter::Info).init()?;
    let input_path = PathBuf::from("./tests/fixtures/flights-sample.csv");

    benchmark(Filter::All, Algorithm::PartitionSort, &input_path)?;
    benchmark(Filter::All, Algorithm::MergeSort, &input_path)?;
    benchmark(Filter::Carrier("AA".to_string()), Algorithm::MergeSort, &input_path)?;
    benchmark(Filter::Airport("chicago".to_string()), Algorithm::PartitionSort, &input_path)?;

    Ok(())
}
