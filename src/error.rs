use thiserror::Error;

/// Failures surfaced by the heap and its front ends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `find_min`/`delete_min` on an empty heap.
    #[error("heap underflow: the heap is empty")]
    Underflow,
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
