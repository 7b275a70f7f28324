//! Stable merge sort over randomly-indexable sequences
//!
//! The arithmetic engine sorts coordinate entries by `(row, col)` before
//! merge-walking them. Callers hand in a key extractor; elements with equal
//! keys keep their input order (the merge takes from the left half on ties).

/// Sorts `items` in place by the key returned from `key`, stably.
///
/// Recursive midpoint split with an O(n) merge per level. The merge works on
/// cloned copies of the two halves, so `T: Clone` is required.
pub fn merge_sort_by_key<T, K, F>(items: &mut [T], key: F)
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K + Copy,
{
    let len = items.len();
    if len <= 1 {
        return;
    }

    let mid = len / 2;
    merge_sort_by_key(&mut items[..mid], key);
    merge_sort_by_key(&mut items[mid..], key);
    merge_halves(items, mid, key);
}

/// Merges two sorted halves `items[..mid]` and `items[mid..]` back into `items`.
fn merge_halves<T, K, F>(items: &mut [T], mid: usize, key: F)
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let left: Vec<T> = items[..mid].to_vec();
    let right: Vec<T> = items[mid..].to_vec();

    let mut left_index = 0;
    let mut right_index = 0;
    let mut merged_index = 0;

    while left_index < left.len() && right_index < right.len() {
        // <= keeps the sort stable
        if key(&left[left_index]) <= key(&right[right_index]) {
            items[merged_index] = left[left_index].clone();
            left_index += 1;
        } else {
            items[merged_index] = right[right_index].clone();
            right_index += 1;
        }
        merged_index += 1;
    }

    while left_index < left.len() {
        items[merged_index] = left[left_index].clone();
        left_index += 1;
        merged_index += 1;
    }

    while right_index < right.len() {
        items[merged_index] = right[right_index].clone();
        right_index += 1;
        merged_index += 1;
    }
}
