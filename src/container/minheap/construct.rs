use log::debug;

use super::{IntHeap, MinHeap, Natural};
use crate::config::{DEFAULT_CAPACITY, INT_DEFAULT_CAPACITY};
use crate::error::HeapError;

impl <T: Ord> MinHeap<T> {
    /// Creates an empty heap; a zero `capacity` is raised to 1.
    pub fn new(capacity: usize) -> Self {
        Self::with_comparator(capacity, Natural)
    }

    pub fn new_default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Like `new`, but rejects a non-positive `capacity` instead of clamping it.
    pub fn try_new(capacity: i64) -> Result<Self, HeapError> {
        if capacity <= 0 {
            return Err(HeapError::InvalidArgument(format!(
                "capacity must be positive, got {}",
                capacity
            )));
        }
        let capacity = usize::try_from(capacity).map_err(|_| {
            HeapError::InvalidArgument(format!("capacity {} does not fit this platform", capacity))
        })?;
        Ok(Self::new(capacity))
    }

    /// Builds a heap from `items` in linear time.
    ///
    /// The capacity is expanded to fit `items` when it is too small.
    pub fn from_items(items: Vec<T>, capacity: usize) -> Self {
        Self::from_items_by(items, capacity, Natural)
    }
}

impl <T, C> MinHeap<T, C> {
    pub fn with_comparator(capacity: usize, cmp: C) -> Self {
        let mut heap = MinHeap {
            data: Vec::new(),
            capacity: capacity.max(1),
            cmp,
        };
        heap.reserve_slots();
        heap
    }

    /// Allocates room for the logical capacity when the allocator allows it.
    /// The capacity is bookkeeping only, so a refused reservation just
    /// leaves the `Vec` to grow on its own.
    pub(crate) fn reserve_slots(&mut self) {
        let additional = self.capacity.saturating_sub(self.data.len());
        if let Err(e) = self.data.try_reserve_exact(additional) {
            debug!("reserve {} slots skipped: {}", additional, e);
        }
    }
}

impl <T, C: super::Compare<T>> MinHeap<T, C> {
    pub fn from_items_by(items: Vec<T>, capacity: usize, cmp: C) -> Self {
        let capacity = capacity.max(items.len()).max(1);
        debug!("building heap of {} items, capacity {}", items.len(), capacity);
        let mut heap = MinHeap { data: items, capacity, cmp };
        heap.reserve_slots();
        heap.build_heap();
        heap
    }
}

/// An empty integer heap with `INT_DEFAULT_CAPACITY` slots.
pub fn int_heap() -> IntHeap {
    IntHeap::new(INT_DEFAULT_CAPACITY)
}

#[test]
fn test_new_clamps_zero() {
    let heap: MinHeap<i32> = MinHeap::new(0);
    assert_eq!(heap.capacity(), 1);
    assert_eq!(heap.len(), 0);
}

#[test]
fn test_default_capacities() {
    let heap: MinHeap<String> = MinHeap::new_default();
    assert_eq!(heap.capacity(), DEFAULT_CAPACITY);
    let ints = int_heap();
    assert_eq!(ints.capacity(), INT_DEFAULT_CAPACITY);
    assert!(ints.is_empty());
}

#[test]
fn test_try_new() {
    assert!(matches!(
        MinHeap::<i32>::try_new(0),
        Err(HeapError::InvalidArgument(_))
    ));
    assert!(matches!(
        MinHeap::<i32>::try_new(-4),
        Err(HeapError::InvalidArgument(_))
    ));
    let heap = MinHeap::<i32>::try_new(7).unwrap();
    assert_eq!(heap.capacity(), 7);
}

#[test]
fn test_huge_capacity_is_bookkeeping_only() {
    match MinHeap::<i32>::try_new(i64::MAX) {
        Ok(mut heap) => {
            assert_eq!(heap.capacity() as u64, i64::MAX as u64);
            heap.insert(3);
            heap.insert(1);
            assert_eq!(heap.delete_min(), Ok(1));
            assert_eq!(heap.find_min(), Ok(&3));
        }
        Err(e) => assert!(matches!(e, HeapError::InvalidArgument(_))),
    }
    let heap = MinHeap::from_items(vec![2, 1], usize::MAX);
    assert_eq!(heap.capacity(), usize::MAX);
    assert_eq!(heap.find_min(), Ok(&1));
}

#[test]
fn test_from_items_expands() {
    let heap = MinHeap::from_items(vec![4, 2, 9], 1);
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.capacity(), 3);
    let heap = MinHeap::from_items(vec![4, 2, 9], 8);
    assert_eq!(heap.capacity(), 8);
    let heap = MinHeap::<i32>::from_items(Vec::new(), 0);
    assert_eq!(heap.capacity(), 1);
    assert!(heap.is_empty());
}
