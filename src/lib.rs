pub mod algorithm;
pub mod config;
pub mod container;
pub mod error;
pub mod logging;
pub mod utility;

pub use container::{int_heap, Compare, IntHeap, MinHeap, Natural};
pub use error::HeapError;
