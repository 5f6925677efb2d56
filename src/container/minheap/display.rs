use std::fmt;

use super::MinHeap;

/// Lists every slot: live elements in array order, `_` for unused slots.
impl <T: fmt::Display, C> fmt::Display for MinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for item in self.data.iter() {
            write!(f, "{} ", item)?;
        }
        for _ in self.data.len()..self.capacity {
            write!(f, "_ ")?;
        }
        write!(f, "]")
    }
}

impl <T: fmt::Debug, C> fmt::Debug for MinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("data", &self.data)
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[test]
fn display_lists_all_slots() {
    let mut heap = MinHeap::new(4);
    heap.insert(5);
    heap.insert(2);
    assert_eq!(heap.to_string(), "[ 2 5 _ _ ]");
    heap.make_empty();
    assert_eq!(heap.to_string(), "[ _ _ _ _ ]");
}

#[test]
fn debug_shows_live_prefix() {
    let heap = MinHeap::from_items(vec![3, 1], 3);
    assert_eq!(format!("{:?}", heap), "MinHeap { data: [1, 3], capacity: 3 }");
}
