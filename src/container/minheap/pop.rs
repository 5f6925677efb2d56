use log::trace;

use super::{Compare, MinHeap};
use crate::config;
use crate::error::HeapError;
use crate::utility::{lchild, rchild};

impl <T, C> MinHeap<T, C> {
    /// Returns the smallest element without removing it.
    pub fn find_min(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Underflow)
    }
}

impl <T, C: Compare<T>> MinHeap<T, C> {
    /// Removes and returns the smallest element.
    ///
    /// The last element takes the root slot and sifts down from there.
    pub fn delete_min(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Underflow);
        }
        let min = self.data.swap_remove(0);
        self.sift_down(0);
        Ok(min)
    }

    /// `delete_min` for callers that only care whether an element came out.
    pub fn pop_min(&mut self) -> Option<T> {
        self.delete_min().ok()
    }

    /// Moves the element at `hole` toward the leaves while some child is
    /// smaller. The smaller child is taken; on a tie the left one wins.
    /// A `hole` outside the live prefix is left alone.
    pub(crate) fn sift_down(&mut self, hole: usize) {
        let len = self.data.len();
        let mut hole = hole;
        let mut moves = 0;
        loop {
            let l = lchild(hole);
            if l >= len {
                break;
            }
            let r = rchild(hole);
            let mut smaller = l;
            if r < len && self.greater(l, r) {
                smaller = r;
            }
            if !self.greater(hole, smaller) {
                break;
            }
            self.data.swap(hole, smaller);
            hole = smaller;
            moves += 1;
        }
        trace!("sift down settled at {} after {} moves", hole, moves);
        config::record_sift_down(moves);
    }
}

#[test]
fn pop_empty() {
    let mut heap = MinHeap::<i32>::new(3);
    assert_eq!(heap.find_min(), Err(HeapError::Underflow));
    assert_eq!(heap.delete_min(), Err(HeapError::Underflow));
    assert_eq!(heap.pop_min(), None);
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.capacity(), 3);
}

#[test]
fn pop_one() {
    let mut heap = MinHeap::new(1);
    heap.insert("hello".to_string());
    assert_eq!(heap.delete_min().as_deref(), Ok("hello"));
    assert!(heap.is_empty());
}

#[test]
fn sift_down_prefers_left_on_tie() {
    let mut heap = MinHeap::from_items_by(
        vec![(0, 'r'), (9, 'x'), (2, 'l'), (2, 'm')],
        4,
        |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0),
    );
    assert_eq!(heap.delete_min(), Ok((0, 'r')));
    // 9 lands on the root above two equal children; the left one rises
    assert_eq!(heap.as_slice(), &[(2, 'm'), (9, 'x'), (2, 'l')]);

    let mut heap = MinHeap::from_items_by(
        vec![(9, 'x'), (2, 'l'), (2, 'r')],
        3,
        |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0),
    );
    assert_eq!(heap.find_min(), Ok(&(2, 'l')));
    assert_eq!(heap.as_slice(), &[(2, 'l'), (9, 'x'), (2, 'r')]);
    heap.make_empty();
    assert!(heap.is_empty());
}
