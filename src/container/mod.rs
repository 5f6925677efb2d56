pub mod minheap;

pub use minheap::{int_heap, Compare, IntHeap, MinHeap, Natural};

#[cfg(test)]
mod tests;
