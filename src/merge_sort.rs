use crate::flight::Keyed;
use crate::range::inclusive_range;

/// Sort `v` in place by key ascending using a top-down two-way merge sort.
///
/// The sort is stable: records with equal keys keep their relative order. It runs in
/// O(n log n) regardless of the input order and uses a scratch buffer of about n/2 records.
///
/// # Examples
/// ```
/// use flight_delay_sort::merge_sort::merge_sort;
///
/// let mut delays: Vec<i64> = vec![3, 1, 2];
/// merge_sort(&mut delays);
/// assert_eq!(delays, vec![1, 2, 3]);
/// ```
pub fn merge_sort<T>(v: &mut [T])
    where T: Keyed + Clone {
    if v.len() < 2 {
        return;
    }
    let mut buffer = Vec::with_capacity(v.len() / 2 + 1);
    sort(v, &mut buffer);
}

/// Sort the inclusive range `[left, right]` of `v` in place.
///
/// Ranges with `left >= right`, negative indices or `right` past the end are left untouched.
pub fn merge_sort_range<T>(v: &mut [T], left: isize, right: isize)
    where T: Keyed + Clone {
    if let Some(range) = inclusive_range(v.len(), left, right) {
        merge_sort(&mut v[range]);
    }
}

fn sort<T>(v: &mut [T], buffer: &mut Vec<T>)
    where T: Keyed + Clone {
    if v.len() < 2 {
        return;
    }
    // left run is [0, mid], right run is [mid + 1, len)
    let mid = (v.len() - 1) / 2;
    sort(&mut v[..=mid], buffer);
    sort(&mut v[mid + 1..], buffer);
    merge(v, mid + 1, buffer);
}

/// Merge the sorted runs `v[..split]` and `v[split..]`.
///
/// Only the left run is copied out. The write position never passes the read position of
/// the right run, so right run records are moved into place by swapping.
fn merge<T>(v: &mut [T], split: usize, buffer: &mut Vec<T>)
    where T: Keyed + Clone {
    buffer.clear();
    buffer.extend_from_slice(&v[..split]);

    let (mut i, mut j, mut k) = (0, split, 0);
    while i < buffer.len() && j < v.len() {
        if buffer[i].key() <= v[j].key() {
            std::mem::swap(&mut v[k], &mut buffer[i]);
            i += 1;
        } else {
            v.swap(k, j);
            j += 1;
        }
        k += 1;
    }

    while i < buffer.len() {
        std::mem::swap(&mut v[k], &mut buffer[i]);
        i += 1;
        k += 1;
    }
    // whatever is left of the right run is already in place
}
