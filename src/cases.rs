use std::cmp::Reverse;
use std::fmt::{Display, Formatter};

use rand::Rng;

use crate::flight::Keyed;

/// Input orderings used to benchmark a sort
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Case {
    /// Already sorted, ascending by key
    Best,
    /// Reverse sorted, descending by key
    Worst,
    /// Uniformly shuffled
    Average,
}

impl Case {
    /// All cases in the order they are benchmarked
    pub fn all() -> [Case; 3] {
        [Case::Best, Case::Worst, Case::Average]
    }

    /// Create a copy of `records` in the order this case describes.
    pub fn generate<T, R>(&self, records: &[T], rng: &mut R) -> Vec<T>
        where T: Keyed + Clone, R: Rng + ?Sized {
        match self {
            Case::Best => best_case(records),
            Case::Worst => worst_case(records),
            Case::Average => average_case(records, rng),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Case::Best => "Best Case (Already Sorted)",
            Case::Worst => "Worst Case (Reverse Sorted)",
            Case::Average => "Average Case (Random Order)",
        }
    }
}

impl Display for Case {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Copy of `records` ordered by key ascending
pub fn best_case<T: Keyed + Clone>(records: &[T]) -> Vec<T> {
    let mut result = records.to_vec();
    result.sort_by_key(|r| r.key());
    result
}

/// Copy of `records` ordered by key descending
pub fn worst_case<T: Keyed + Clone>(records: &[T]) -> Vec<T> {
    let mut result = records.to_vec();
    result.sort_by_key(|r| Reverse(r.key()));
    result
}

/// Copy of `records` in uniformly random order.
///
/// Walks from the last position down to 1 and swaps each position with a uniformly chosen
/// position at or before it, so each of the n! permutations is equally likely.
pub fn average_case<T, R>(records: &[T], rng: &mut R) -> Vec<T>
    where T: Clone, R: Rng + ?Sized {
    let mut result = records.to_vec();
    for i in (1..result.len()).rev() {
        let j = rng.gen_range(0..=i);
        result.swap(i, j);
    }
    result
}
