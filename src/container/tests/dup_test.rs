use super::*;

#[test]
fn duplicates_all_come_back() {
    let mut heap = MinHeap::new(2);
    for i in [4, 1, 4, 4, 1, 0, 4] {
        heap.insert(i);
        assert!(heap.is_correct());
    }
    assert_eq!(drain(&mut heap), vec![0, 1, 1, 4, 4, 4, 4]);
}

#[test]
fn all_equal() {
    let mut heap = MinHeap::from_items(vec![7; 9], 9);
    assert!(heap.is_correct());
    heap.insert(7);
    assert_eq!(heap.len(), 10);
    assert_eq!(drain(&mut heap), vec![7; 10]);
}

#[test]
fn equal_keys_keep_payloads() {
    let by_key = |a: &(u8, &str), b: &(u8, &str)| a.0.cmp(&b.0);
    let mut heap: MinHeap<(u8, &str), _> = MinHeap::with_comparator(1, by_key);
    heap.extend(vec![(2, "b"), (1, "x"), (2, "c"), (1, "y")]);
    let mut out = drain(&mut heap);
    assert_eq!(out.iter().map(|p| p.0).collect::<Vec<_>>(), vec![1, 1, 2, 2]);
    out.sort();
    assert_eq!(out, vec![(1, "x"), (1, "y"), (2, "b"), (2, "c")]);
}
