use std::iter::FusedIterator;

use super::{Compare, MinHeap};

/// Consuming iterator yielding elements smallest-first.
pub struct IntoIterSorted<T, C> {
    inner: MinHeap<T, C>,
}

impl <T, C: Compare<T>> Iterator for IntoIterSorted<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.pop_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.len(), Some(self.inner.len()))
    }
}

impl <T, C: Compare<T>> ExactSizeIterator for IntoIterSorted<T, C> {}

impl <T, C: Compare<T>> FusedIterator for IntoIterSorted<T, C> {}

impl <T, C> MinHeap<T, C> {
    /// Visits the live elements in arbitrary (heap) order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_iter_sorted(self) -> IntoIterSorted<T, C> {
        IntoIterSorted { inner: self }
    }
}

impl <'a, T, C> IntoIterator for &'a MinHeap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Arbitrary order, like `into_vec`.
impl <T, C> IntoIterator for MinHeap<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

#[test]
fn test_iter_counts() {
    let mut heap = MinHeap::new(8);
    for i in 0..100 {
        heap.insert(i);
    }
    for i in &heap {
        if !(0..100).contains(i) {
            panic!("Iterator returned invalid value: {}", i);
        }
    }
    assert_eq!(heap.iter().count(), 100);
    assert_eq!(heap.clone().into_iter().count(), 100);
}

#[test]
fn test_iter_sorted() {
    let heap = MinHeap::from(vec![4, 4, 1, 9]);
    let mut iter = heap.into_iter_sorted();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), Some(4));
    assert_eq!(iter.next(), Some(4));
    assert_eq!(iter.next(), Some(9));
    assert_eq!(iter.next(), None);
}
