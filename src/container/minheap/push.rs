use log::{debug, trace};

use super::{Compare, MinHeap};
use crate::config;
use crate::utility::parent;

impl <T, C: Compare<T>> MinHeap<T, C> {
    /// Inserts `item`, keeping heap order. Duplicates are allowed.
    pub fn insert(&mut self, item: T) {
        if self.data.len() == self.capacity {
            self.enlarge(config::grown_capacity(self.capacity));
        }
        self.data.push(item);
        let hole = self.data.len() - 1;
        self.sift_up(hole);
    }

    fn enlarge(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.capacity);
        debug!("enlarge heap: {} -> {}", self.capacity, capacity);
        self.capacity = capacity;
        // existing elements keep their slots
        self.reserve_slots();
        config::record_grow();
    }

    /// Moves the element at `hole` toward the root while it is strictly
    /// smaller than its parent.
    pub(crate) fn sift_up(&mut self, hole: usize) {
        debug_assert!(hole < self.data.len());
        let mut hole = hole;
        let mut moves = 0;
        while hole > 0 {
            let p = parent(hole);
            if !self.less(hole, p) {
                break;
            }
            self.data.swap(hole, p);
            hole = p;
            moves += 1;
        }
        trace!("sift up settled at {} after {} moves", hole, moves);
        config::record_sift_up(moves);
    }
}

#[test]
fn insert_keeps_min_on_top() {
    let mut heap = super::MinHeap::new(4);
    heap.insert(5);
    assert_eq!(heap.find_min(), Ok(&5));
    heap.insert(3);
    assert_eq!(heap.find_min(), Ok(&3));
    heap.insert(4);
    assert_eq!(heap.find_min(), Ok(&3));
    heap.insert(1);
    assert_eq!(heap.find_min(), Ok(&1));
    assert!(heap.is_correct());
}

#[test]
fn equal_element_does_not_climb() {
    let mut heap = super::MinHeap::new(4);
    heap.insert((1, 'a'));
    heap.insert((2, 'b'));
    let by_key = |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0);
    let mut keyed = super::MinHeap::from_items_by(heap.into_vec(), 4, by_key);
    keyed.insert((1, 'z'));
    assert_eq!(keyed.find_min(), Ok(&(1, 'a')));
    assert_eq!(keyed.as_slice()[2], (1, 'z'));
}
