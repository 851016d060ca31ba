use std::fmt::{Debug, Display, Formatter};
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algorithm::Algorithm;
use crate::cases::Case;
use crate::flight::Keyed;

/// Time a sort algorithm over the best, worst and average case orderings of a record set.
///
/// # Examples
/// ```
/// use flight_delay_sort::algorithm::Algorithm;
/// use flight_delay_sort::benchmark::Benchmark;
///
/// let delays: Vec<i64> = vec![12, -3, 45, 0, 7];
/// let mut benchmark = Benchmark::new(Algorithm::MergeSort);
/// // a fixed seed makes the shuffled case and the quick sort pivots reproducible
/// benchmark.with_seed(42);
/// let report = benchmark.run(&delays);
/// for result in report.results() {
///     assert_eq!(*result.shortest(), -3);
///     assert_eq!(*result.longest(), 45);
/// }
/// ```
pub struct Benchmark {
    algorithm: Algorithm,
    seed: Option<u64>,
}

impl Benchmark {
    /// Create a Benchmark for `algorithm`. Without a seed the random source is seeded from
    /// system entropy.
    pub fn new(algorithm: Algorithm) -> Benchmark {
        Benchmark {
            algorithm,
            seed: None,
        }
    }

    /// Seed the random source used for shuffling and pivot selection
    pub fn with_seed(&mut self, seed: u64) {
        self.seed = Some(seed);
    }

    /// Run all three cases in order: best, worst, average.
    ///
    /// Each case sorts its own fresh copy of `records`, the input is never modified. An empty
    /// input is not timed and yields [BenchmarkReport::Empty].
    pub fn run<T>(&self, records: &[T]) -> BenchmarkReport<T::Key>
        where T: Keyed + Clone, T::Key: Debug {
        let (expected_min, expected_max) = match key_bounds(records) {
            None => {
                log::warn!("No records to sort with {}", self.algorithm);
                return BenchmarkReport::Empty { algorithm: self.algorithm };
            }
            Some(bounds) => bounds,
        };

        let mut rng = self.create_rng();
        let mut results = Vec::with_capacity(3);
        for case in Case::all() {
            if let Some((_sorted, result)) = self.time_case(case, records, &mut rng) {
                if result.shortest != expected_min || result.longest != expected_max {
                    log::error!(
                        "{} {}: sorted bounds [{:?}, {:?}] differ from input bounds [{:?}, {:?}]",
                        self.algorithm,
                        case,
                        result.shortest,
                        result.longest,
                        expected_min,
                        expected_max,
                    );
                }
                results.push(result);
            }
        }

        BenchmarkReport::Completed {
            algorithm: self.algorithm,
            records: records.len(),
            results,
        }
    }

    /// Generate the `case` ordering of `records`, sort it and measure only the sort.
    ///
    /// Returns the sorted copy together with the measurement, or None for an empty input.
    pub fn time_case<T, R>(&self, case: Case, records: &[T], rng: &mut R) -> Option<(Vec<T>, CaseResult<T::Key>)>
        where T: Keyed + Clone, R: Rng + ?Sized {
        if records.is_empty() {
            return None;
        }

        let mut data = case.generate(records, rng);
        log::info!("Start {} of {} records, {}", self.algorithm, data.len(), case);
        let start = Instant::now();
        self.algorithm.sort(&mut data, rng);
        let elapsed = start.elapsed();
        log::info!("Finish {} of {} records, {}, elapsed: {:?}", self.algorithm, data.len(), case, elapsed);

        let shortest = data.first()?.key();
        let longest = data.last()?.key();
        let result = CaseResult {
            case,
            records: data.len(),
            elapsed,
            shortest,
            longest,
        };
        Some((data, result))
    }

    fn create_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Smallest and largest key in `records`
pub fn key_bounds<T: Keyed>(records: &[T]) -> Option<(T::Key, T::Key)> {
    let min = records.iter().map(|r| r.key()).min()?;
    let max = records.iter().map(|r| r.key()).max()?;
    Some((min, max))
}

/// Measurement of one sort over one case ordering
#[derive(Clone, Debug)]
pub struct CaseResult<K> {
    case: Case,
    records: usize,
    elapsed: Duration,
    shortest: K,
    longest: K,
}

impl<K> CaseResult<K> {
    pub fn case(&self) -> Case {
        self.case
    }

    /// Number of records sorted
    pub fn records(&self) -> usize {
        self.records
    }

    /// Elapsed sort time in fractional milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Key at the front of the sorted output
    pub fn shortest(&self) -> &K {
        &self.shortest
    }

    /// Key at the back of the sorted output
    pub fn longest(&self) -> &K {
        &self.longest
    }
}

impl<K: Display> Display for CaseResult<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} Sorting Time: {:.2} ms", self.case, self.elapsed_ms())?;
        writeln!(f, "Shortest delay: {} minutes", self.shortest)?;
        write!(f, "Longest delay: {} minutes", self.longest)
    }
}

/// Outcome of [Benchmark::run]
#[derive(Clone, Debug)]
pub enum BenchmarkReport<K> {
    /// There were no records, nothing was timed
    Empty {
        algorithm: Algorithm,
    },
    /// Results for best, worst and average case, in that order
    Completed {
        algorithm: Algorithm,
        records: usize,
        results: Vec<CaseResult<K>>,
    },
}

impl<K> BenchmarkReport<K> {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            BenchmarkReport::Empty { algorithm } => *algorithm,
            BenchmarkReport::Completed { algorithm, .. } => *algorithm,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, BenchmarkReport::Empty { .. })
    }

    /// Number of records each case sorted
    pub fn records(&self) -> usize {
        match self {
            BenchmarkReport::Empty { .. } => 0,
            BenchmarkReport::Completed { records, .. } => *records,
        }
    }

    pub fn results(&self) -> &[CaseResult<K>] {
        match self {
            BenchmarkReport::Empty { .. } => &[],
            BenchmarkReport::Completed { results, .. } => results,
        }
    }

    pub fn result(&self, case: Case) -> Option<&CaseResult<K>> {
        self.results().iter().find(|r| r.case == case)
    }
}

impl<K: Display> Display for BenchmarkReport<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BenchmarkReport::Empty { algorithm } => {
                write!(f, "No records to sort with {algorithm}.")
            }
            BenchmarkReport::Completed { results, .. } => {
                for result in results {
                    writeln!(f)?;
                    writeln!(f, "{result}")?;
                }
                Ok(())
            }
        }
    }
}
