use super::*;
use crate::config;

#[test]
fn grows_only_when_full() {
    let mut heap = MinHeap::new(1);
    let expected = [1, 3, 3, 7, 7, 7, 7, 15];
    for (i, cap) in expected.iter().enumerate() {
        heap.insert(100 - i as i32);
        assert_eq!(heap.capacity(), *cap, "after {} inserts", i + 1);
        assert!(heap.len() <= heap.capacity());
        assert!(heap.is_correct());
    }
}

#[test]
fn growth_preserves_slots() {
    let mut heap = MinHeap::new(3);
    heap.insert(1);
    heap.insert(4);
    heap.insert(2);
    let before: Vec<i32> = heap.as_slice().to_vec();
    // the fourth insert grows 3 -> 7 and must not move anything
    heap.insert(9);
    assert_eq!(heap.capacity(), 7);
    assert_eq!(&heap.as_slice()[..3], &before[..]);
    assert_eq!(heap.element(3), Some(&9));
}

#[test]
fn hundred_inserts_from_capacity_one() {
    config::reset();
    let mut heap = MinHeap::new(1);
    for i in (0..100).rev() {
        heap.insert(i);
    }
    assert_eq!(heap.len(), 100);
    assert_eq!(heap.capacity(), 127);
    assert_eq!(config::stats().grow, 6);
    assert!(heap.is_correct());
    assert_eq!(drain(&mut heap), (0..100).collect::<Vec<_>>());
}

#[test]
fn make_empty_does_not_shrink() {
    let mut heap = MinHeap::new(1);
    heap.extend(0..20);
    let capacity = heap.capacity();
    heap.make_empty();
    assert_eq!(heap.capacity(), capacity);
    heap.extend(0..20);
    assert_eq!(heap.capacity(), capacity);
}

#[test]
fn stats_follow_operations() {
    config::reset();
    let mut heap = MinHeap::from_items(vec![3, 2, 1], 3);
    assert_eq!(config::stats().build, 1);
    // 3 at the root swaps with 1
    assert_eq!(config::stats().sift_down, 1);
    heap.insert(0);
    assert_eq!(config::stats().grow, 1);
    assert_eq!(config::stats().sift_up, 2);
}
