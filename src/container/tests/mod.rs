use super::*;
use crate::error::HeapError;

/// Drains `heap` through `delete_min`, checking heap order after every step.
fn drain<T, C: Compare<T>>(heap: &mut MinHeap<T, C>) -> Vec<T> {
    let mut out = Vec::new();
    while !heap.is_empty() {
        out.push(heap.delete_min().unwrap());
        assert!(heap.is_correct());
    }
    out
}

mod scenario_test;
mod grow_test;
mod dup_test;
mod random_test;
