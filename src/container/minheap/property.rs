use super::MinHeap;

impl <T, C> MinHeap<T, C> {
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// Number of live elements; same as `len`.
    pub fn size(&self) -> usize {
        self.data.len()
    }
    /// Slots available before the next growth.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Removes every element. The capacity is kept.
    pub fn make_empty(&mut self) {
        self.data.clear();
    }
    pub fn comparator(&self) -> &C {
        &self.cmp
    }
}

#[test]
fn make_empty_keeps_capacity() {
    let mut heap = MinHeap::new(2);
    for i in 0..5 {
        heap.insert(i);
    }
    let capacity = heap.capacity();
    heap.make_empty();
    assert!(heap.is_empty());
    assert_eq!(heap.size(), 0);
    assert_eq!(heap.capacity(), capacity);
    heap.make_empty();
    assert!(heap.is_empty());
    assert_eq!(heap.capacity(), capacity);
}
