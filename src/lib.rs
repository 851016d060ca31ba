//! This crate benchmarks two comparison sorts over flight delay records: a quicksort with a
//! random pivot and a stable two-way merge sort.
//!
//! Each benchmark sorts three copies of the same records: already sorted (best case), reverse
//! sorted (worst case) and uniformly shuffled (average case), and reports the elapsed time of
//! every sort together with the shortest and longest delay found. Records are read from a CSV
//! or TSV file such as the
//! [airline delay](https://www.kaggle.com/datasets/sriharshaeedala/airline-delay/data) data set,
//! and can be narrowed down to one carrier or airport before sorting.
//!
//! The random source is injected everywhere it is used, so a fixed seed makes shuffles and
//! pivot choices reproducible.
//!
//! # Examples
//! ```
//! use flight_delay_sort::algorithm::Algorithm;
//! use flight_delay_sort::benchmark::Benchmark;
//! use flight_delay_sort::cases::Case;
//! use flight_delay_sort::filter::Filter;
//! use flight_delay_sort::flight::Flight;
//!
//! fn benchmark(flights: &[Flight]) -> Result<(), anyhow::Error> {
//!     let selected = Filter::Carrier("AA".to_string()).apply(flights)?;
//!     let mut benchmark = Benchmark::new(Algorithm::PartitionSort);
//!     benchmark.with_seed(7);
//!     let report = benchmark.run(&selected);
//!     if let Some(result) = report.result(Case::Worst) {
//!         println!("{:.2} ms", result.elapsed_ms());
//!     }
//!     Ok(())
//! }
//! # benchmark(&[Flight::new("AA", "Chicago, IL", 3), Flight::new("AA", "Dallas, TX", -1)]).unwrap();
//! ```
//!

pub(crate) mod range;

pub mod flight;
pub mod cases;
pub mod partition_sort;
pub mod merge_sort;
pub mod algorithm;
pub mod benchmark;
pub mod flight_data;
pub mod filter;
pub mod config;
pub mod session;
