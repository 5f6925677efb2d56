use super::MinHeap;

impl <T: Clone, C: Clone> Clone for MinHeap<T, C> {
    /// Copies the array as is; heap order carries over without a rebuild.
    fn clone(&self) -> Self {
        let mut heap = MinHeap {
            data: self.data.clone(),
            capacity: self.capacity,
            cmp: self.cmp.clone(),
        };
        heap.reserve_slots();
        heap
    }
}

#[test]
fn clone_is_independent() {
    let mut heap = MinHeap::from_items(vec![4, 8, 1], 5);
    let copy = heap.clone();
    heap.delete_min().unwrap();
    assert_eq!(copy.as_slice(), &[1, 8, 4]);
    assert_eq!(copy.capacity(), 5);
    assert_eq!(heap.find_min(), Ok(&4));
}

#[test]
fn clone_huge_capacity() {
    let mut heap = MinHeap::new(usize::MAX);
    heap.insert(2);
    let copy = heap.clone();
    assert_eq!(copy.capacity(), usize::MAX);
    assert_eq!(copy.as_slice(), &[2]);
}
