use std::io::Write;
use std::path::PathBuf;

use data_encoding::HEXLOWER;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::NamedTempFile;

use flight_delay_sort::flight::{Flight, Keyed};

#[allow(dead_code)]
const CARRIERS: [&str; 5] = ["AA", "DL", "UA", "WN", "9E"];
#[allow(dead_code)]
const AIRPORTS: [&str; 4] = [
    "Chicago, IL: Chicago O'Hare International",
    "Birmingham, AL: Birmingham-Shuttlesworth International",
    "Atlanta, GA: Hartsfield-Jackson Atlanta International",
    "Denver, CO: Denver International",
];

/// A record with an explicit input position, used to observe stability
#[allow(dead_code)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tagged {
    pub key: i64,
    pub index: usize,
}

impl Keyed for Tagged {
    type Key = i64;

    fn key(&self) -> i64 {
        self.key
    }
}

#[allow(dead_code)]
pub fn sample_csv() -> PathBuf {
    PathBuf::from("./tests/fixtures/flights-sample.csv")
}

#[allow(dead_code)]
pub fn sample_tsv() -> PathBuf {
    PathBuf::from("./tests/fixtures/flights-sample.tsv")
}

#[allow(dead_code)]
pub fn random_flights(count: usize, seed: u64) -> Vec<Flight> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Flight::new(
                CARRIERS[rng.gen_range(0..CARRIERS.len())],
                AIRPORTS[rng.gen_range(0..AIRPORTS.len())],
                rng.gen_range(-120..=1500),
            )
        })
        .collect()
}

#[allow(dead_code)]
pub fn tagged(keys: &[i64]) -> Vec<Tagged> {
    keys.iter()
        .enumerate()
        .map(|(index, key)| Tagged { key: *key, index })
        .collect()
}

#[allow(dead_code)]
pub fn keys<T: Keyed>(records: &[T]) -> Vec<T::Key> {
    records.iter().map(|r| r.key()).collect()
}

#[allow(dead_code)]
pub fn is_sorted<T: Keyed>(records: &[T]) -> bool {
    records.windows(2).all(|w| w[0].key() <= w[1].key())
}

/// Sorted keys, for comparing multisets
#[allow(dead_code)]
pub fn key_multiset<T: Keyed>(records: &[T]) -> Vec<T::Key> {
    let mut result = keys(records);
    result.sort();
    result
}

#[allow(dead_code)]
pub fn write_temp_file(content: &str) -> Result<NamedTempFile, anyhow::Error> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[allow(dead_code)]
pub fn temp_file_name(dir: &str) -> PathBuf {
    let mut result = PathBuf::from(dir);
    let name = HEXLOWER.encode(&rand::random::<[u8; 16]>());
    result.push(name);
    result
}
