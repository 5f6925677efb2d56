use std::cmp::Ordering;

use super::{Compare, MinHeap};
use crate::utility::{lchild, rchild};

impl <T, C> MinHeap<T, C> {
    /// The element in slot `index`, if that slot is live.
    pub fn element(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Live elements in heap (array) order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// One entry per backing slot; unused slots are `None`.
    pub fn slots(&self) -> Vec<Option<&T>> {
        let mut out: Vec<Option<&T>> = self.data.iter().map(Some).collect();
        out.resize(self.capacity, None);
        out
    }
}

impl <T, C: Compare<T>> MinHeap<T, C> {
    /// Checks the structure: the live prefix fits the capacity and no
    /// live element is greater than one of its live children.
    pub fn is_correct(&self) -> bool {
        let len = self.data.len();
        if len > self.capacity {
            return false;
        }
        (0..len).all(|i| {
            [lchild(i), rchild(i)].iter().all(|&c| {
                c >= len || self.cmp.compare(&self.data[i], &self.data[c]) != Ordering::Greater
            })
        })
    }
}

#[test]
fn slots_cover_capacity() {
    let mut heap = MinHeap::new(4);
    heap.insert(3);
    heap.insert(1);
    assert_eq!(heap.slots(), vec![Some(&1), Some(&3), None, None]);
    assert_eq!(heap.element(1), Some(&3));
    assert_eq!(heap.element(2), None);
}

#[test]
fn detects_broken_order() {
    let mut heap = MinHeap::from_items(vec![1, 2, 3], 3);
    assert!(heap.is_correct());
    heap.data.swap(0, 2);
    assert!(!heap.is_correct());
}

#[test]
fn default_valued_elements_are_live() {
    let mut heap = MinHeap::new(2);
    heap.insert(0);
    heap.insert(0);
    assert_eq!(heap.len(), 2);
    assert_eq!(heap.slots(), vec![Some(&0), Some(&0)]);
    assert!(heap.is_correct());
}
