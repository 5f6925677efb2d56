use log::debug;

use super::{Compare, MinHeap};
use crate::config;

impl <T, C: Compare<T>> MinHeap<T, C> {
    /// Establishes heap order over an arbitrary arrangement in linear time.
    ///
    /// Subtrees are fixed bottom-up, so each parent is sifted only after
    /// both of its children already head valid heaps.
    pub(crate) fn build_heap(&mut self) {
        let start = (self.data.len() + 1) / 2;
        for i in (0..=start).rev() {
            self.sift_down(i);
        }
        debug!("build heap over {} items", self.data.len());
        config::record_build();
    }
}

#[test]
fn build_sorted_input_is_untouched() {
    let heap = MinHeap::from_items(vec![1, 2, 3, 4, 5, 6, 7], 7);
    assert_eq!(heap.as_slice(), &[1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn build_reversed_input() {
    let heap = MinHeap::from_items(vec![7, 6, 5, 4, 3, 2, 1], 7);
    assert!(heap.is_correct());
    assert_eq!(heap.find_min(), Ok(&1));
    assert_eq!(heap.as_slice(), &[1, 3, 2, 4, 6, 7, 5]);
}

#[test]
fn build_tiny() {
    let heap = MinHeap::from_items(vec![42], 1);
    assert_eq!(heap.as_slice(), &[42]);
    let heap = MinHeap::from_items(vec![2, 1], 2);
    assert_eq!(heap.as_slice(), &[1, 2]);
}
