use super::MinHeap;

impl <T: Ord> From<Vec<T>> for MinHeap<T> {
    fn from(vec: Vec<T>) -> Self {
        let capacity = vec.len();
        Self::from_items(vec, capacity)
    }
}

impl <T: Ord, const N: usize> From<[T; N]> for MinHeap<T> {
    fn from(array: [T; N]) -> Self {
        Self::from_items(Vec::from(array), N)
    }
}

impl <T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

#[test]
fn from_array_and_iter() {
    let heap = MinHeap::from([5, 3, 8]);
    assert_eq!(heap.find_min(), Ok(&3));
    assert_eq!(heap.capacity(), 3);
    let heap: MinHeap<i32> = (0..10).rev().collect();
    assert_eq!(heap.len(), 10);
    assert!(heap.is_correct());
    assert_eq!(heap.find_min(), Ok(&0));
}
