use std::ops::RangeInclusive;

/// Resolve an inclusive `[low, high]` index pair against a slice of length `len`.
///
/// Returns None when there is nothing to sort: the range is empty or a single element, an
/// index is negative, or `high` is past the end of the slice. `low = 0, high = -1` on an
/// empty slice is the common case.
pub(crate) fn inclusive_range(len: usize, low: isize, high: isize) -> Option<RangeInclusive<usize>> {
    if low < 0 || high <= low {
        return None;
    }
    let (low, high) = (low as usize, high as usize);
    if high >= len {
        log::debug!("Range [{}, {}] is out of bounds for length {}, nothing to sort", low, high, len);
        return None;
    }
    Some(low..=high)
}
