use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;
use rand::Rng;

use crate::flight::Keyed;
use crate::merge_sort::merge_sort;
use crate::partition_sort::partition_sort;

/// Sort algorithm selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Randomized pivot quicksort, see [partition_sort]
    PartitionSort,
    /// Stable two-way merge sort, see [merge_sort]
    MergeSort,
}

impl Algorithm {
    /// Sort `v` in place by key ascending. The random source is only used by
    /// [Algorithm::PartitionSort].
    pub fn sort<T, R>(&self, v: &mut [T], rng: &mut R)
        where T: Keyed + Clone, R: Rng + ?Sized {
        match self {
            Algorithm::PartitionSort => partition_sort(v, rng),
            Algorithm::MergeSort => merge_sort(v),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::PartitionSort => write!(f, "Quick Sort"),
            Algorithm::MergeSort => write!(f, "Merge Sort"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = anyhow::Error;

    /// Accepts the menu numbers `1` and `2` as well as `quick` and `merge`, case insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "quick" | "quicksort" | "partition" => Ok(Algorithm::PartitionSort),
            "2" | "merge" | "mergesort" => Ok(Algorithm::MergeSort),
            other => Err(anyhow!("Unknown sort algorithm: {other}")),
        }
    }
}
