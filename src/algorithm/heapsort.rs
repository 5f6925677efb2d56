use std::cmp::Ordering;

use crate::container::MinHeap;

/// Sorts ascending: one linear build, then `n` extractions.
pub fn heap_sort<T: Ord>(items: Vec<T>) -> Vec<T> {
    MinHeap::from(items).into_sorted_vec()
}

/// Sorts so that `cmp` never reports a later element as `Less` than an earlier one.
pub fn heap_sort_by<T, F>(items: Vec<T>, cmp: F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let capacity = items.len();
    MinHeap::from_items_by(items, capacity, cmp).into_sorted_vec()
}

#[cfg(test)]
mod test_heapsort {
    use super::*;

    #[test]
    fn sorts_ints() {
        assert_eq!(heap_sort(vec![2, 4, 6, 8, 5, 3, 7]), vec![2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(heap_sort(Vec::<u64>::new()), Vec::<u64>::new());
    }

    #[test]
    fn sorts_descending_with_comparator() {
        let sorted = heap_sort_by(vec![2, 4, 6, 8, 5, 3, 7], |a: &i32, b: &i32| b.cmp(a));
        assert_eq!(sorted, vec![8, 7, 6, 5, 4, 3, 2]);
    }

    #[test]
    fn sorts_strings_by_len() {
        let words = vec!["ccc".to_string(), "a".to_string(), "bb".to_string()];
        let sorted = heap_sort_by(words, |a: &String, b: &String| a.len().cmp(&b.len()));
        assert_eq!(sorted, vec!["a", "bb", "ccc"]);
    }
}
