//! Array-backed binary min-heap.
//!
//! The tree is stored implicitly in `data`: the children of slot `i` live at
//! `2i + 1` and `2i + 2`, its parent at `(i - 1) / 2`. Live elements always
//! occupy the prefix `[0, len)`; the slots in `[len, capacity)` are logically
//! absent and never observed.

/// A minimum-oriented priority queue ordered by the comparator `C`.
///
/// # Functionality
/// `insert`: Add an element, growing the backing storage when full.
/// `find_min`: Get a reference to the minimum element.
/// `delete_min`: Remove and return the minimum element.
/// `is_empty`: Check if the heap holds no element.
/// `make_empty`: Drop every element, keeping the capacity.
///
/// `find_min` and `delete_min` fail with `HeapError::Underflow` on an empty
/// heap and leave it unchanged.
pub struct MinHeap <T, C = Natural> {
    pub(crate) data: Vec<T>,
    pub(crate) capacity: usize,
    pub(crate) cmp: C,
}

/// Heap over machine integers.
pub type IntHeap = MinHeap<i32>;

mod build;
mod clone;
mod construct;
mod default;
mod display;
mod extend;
mod from;
mod into;
mod iter;
mod order;
mod pop;
mod property;
mod push;
mod view;

pub use construct::int_heap;
pub use iter::IntoIterSorted;
pub use order::{Compare, Natural};
