use super::{Compare, MinHeap};

impl <T, C> MinHeap<T, C> {
    /// The live elements in heap (array) order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl <T, C: Compare<T>> MinHeap<T, C> {
    /// Drains the heap smallest-first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        while let Some(item) = self.pop_min() {
            vec.push(item);
        }
        vec
    }
}

#[test]
fn into_sorted() {
    let heap = MinHeap::from_items(vec![5, 3, 8, 1, 9, 2], 6);
    assert_eq!(heap.clone().into_vec().len(), 6);
    assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 5, 8, 9]);
}
