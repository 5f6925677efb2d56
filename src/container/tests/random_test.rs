use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;

#[test]
fn random_operations_match_sorted_model() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut heap = MinHeap::new(1);
    let mut model: Vec<i32> = Vec::new();
    for _ in 0..2000 {
        if rng.gen_bool(0.6) {
            let value = rng.gen_range(-50..50);
            heap.insert(value);
            model.push(value);
        } else {
            model.sort_unstable();
            let expected = if model.is_empty() {
                Err(HeapError::Underflow)
            } else {
                Ok(model.remove(0))
            };
            assert_eq!(heap.delete_min(), expected);
        }
        assert_eq!(heap.len(), model.len());
        assert!(heap.is_correct());
    }
    model.sort_unstable();
    assert_eq!(drain(&mut heap), model);
}

#[test]
fn random_build_then_drain() {
    let mut rng = StdRng::seed_from_u64(271);
    for len in [0usize, 1, 2, 3, 10, 33, 500] {
        let items: Vec<i64> = (0..len).map(|_| rng.gen_range(-1000..1000)).collect();
        let capacity = rng.gen_range(0..len + 2);
        let mut heap = MinHeap::from_items(items.clone(), capacity);
        assert!(heap.capacity() >= len);
        assert!(heap.is_correct());
        let mut sorted = items;
        sorted.sort_unstable();
        assert_eq!(drain(&mut heap), sorted);
    }
}
