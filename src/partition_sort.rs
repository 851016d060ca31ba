use rand::Rng;

use crate::flight::Keyed;
use crate::range::inclusive_range;

/// Sort `v` in place by key ascending using quicksort with a random pivot.
///
/// The sort is not stable. Average time is O(n log n), the worst case is still O(n²) when
/// the random pivots keep landing badly or when most keys are equal. Stack depth stays
/// O(log n) because only the smaller partition is sorted recursively.
///
/// # Examples
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use flight_delay_sort::partition_sort::partition_sort;
///
/// let mut delays: Vec<i64> = vec![3, 1, 2];
/// partition_sort(&mut delays, &mut StdRng::seed_from_u64(7));
/// assert_eq!(delays, vec![1, 2, 3]);
/// ```
pub fn partition_sort<T, R>(v: &mut [T], rng: &mut R)
    where T: Keyed, R: Rng + ?Sized {
    quicksort(v, rng);
}

/// Sort the inclusive range `[low, high]` of `v` in place.
///
/// Ranges with `low >= high`, negative indices or `high` past the end are left untouched,
/// so `partition_sort_range(&mut v, 0, v.len() as isize - 1, rng)` is safe on an empty `v`.
pub fn partition_sort_range<T, R>(v: &mut [T], low: isize, high: isize, rng: &mut R)
    where T: Keyed, R: Rng + ?Sized {
    if let Some(range) = inclusive_range(v.len(), low, high) {
        quicksort(&mut v[range], rng);
    }
}

fn quicksort<T, R>(mut v: &mut [T], rng: &mut R)
    where T: Keyed, R: Rng + ?Sized {
    while v.len() > 1 {
        let pivot_pos = partition(v, rng);
        let (left, right) = std::mem::take(&mut v).split_at_mut(pivot_pos);
        // the pivot is in its final position
        let right = &mut right[1..];
        if left.len() < right.len() {
            quicksort(left, rng);
            v = right;
        } else {
            quicksort(right, rng);
            v = left;
        }
    }
}

/// Lomuto partition around a randomly chosen pivot. Keys equal to the pivot end up on the
/// left. Returns the final position of the pivot.
fn partition<T, R>(v: &mut [T], rng: &mut R) -> usize
    where T: Keyed, R: Rng + ?Sized {
    let high = v.len() - 1;
    let pivot_index = rng.gen_range(0..=high);
    v.swap(pivot_index, high);

    let pivot = v[high].key();
    let mut boundary = 0;
    for j in 0..high {
        if v[j].key() <= pivot {
            v.swap(boundary, j);
            boundary += 1;
        }
    }
    v.swap(boundary, high);
    boundary
}
