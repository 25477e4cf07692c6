use std::cmp::Ordering;

/// Index of the first element equal to `target`.
pub fn linear<T: PartialEq>(values: &[T], target: &T) -> Option<usize> {
    values.iter().position(|v| v == target)
}

/// Index of an element equal to `target` in an ascending slice.
pub fn binary<T: Ord>(values: &[T], target: &T) -> Option<usize> {
    let (mut low, mut high) = (0, values.len());

    while low < high {
        let mid = low + (high - low) / 2;
        match values[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Greater => high = mid,
            Ordering::Less => low = mid + 1,
        }
    }

    None
}
