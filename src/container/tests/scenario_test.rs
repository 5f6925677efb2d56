use super::*;

#[test]
fn insert_then_extract() {
    let mut heap = MinHeap::new_default();
    for i in [7, 2, 9, 1, 5] {
        heap.insert(i);
        assert!(heap.is_correct());
    }
    assert_eq!(heap.find_min(), Ok(&1));
    assert_eq!(heap.delete_min(), Ok(1));
    assert_eq!(heap.delete_min(), Ok(2));
    assert_eq!(heap.delete_min(), Ok(5));
    assert_eq!(heap.delete_min(), Ok(7));
    assert_eq!(heap.delete_min(), Ok(9));
    assert!(heap.is_empty());
}

#[test]
fn build_then_drain() {
    let mut heap = MinHeap::from_items(vec![5, 3, 8, 1, 9, 2], 6);
    assert!(heap.is_correct());
    assert_eq!(drain(&mut heap), vec![1, 2, 3, 5, 8, 9]);
}

#[test]
fn underflow_leaves_heap_untouched() {
    let mut heap: MinHeap<i32> = MinHeap::new(5);
    assert_eq!(heap.find_min(), Err(HeapError::Underflow));
    assert_eq!(heap.delete_min(), Err(HeapError::Underflow));
    assert!(heap.is_empty());
    assert_eq!(heap.capacity(), 5);
    heap.insert(3);
    assert_eq!(heap.delete_min(), Ok(3));
    assert_eq!(heap.delete_min(), Err(HeapError::Underflow));
    assert_eq!(heap.len(), 0);
}

#[test]
fn make_empty_then_reuse() {
    let mut heap = MinHeap::new(4);
    heap.make_empty();
    assert!(heap.is_empty());
    for i in [10, 20, 30] {
        heap.insert(i);
    }
    heap.make_empty();
    assert!(heap.is_empty());
    assert_eq!(heap.find_min(), Err(HeapError::Underflow));
    heap.insert(25);
    assert_eq!(heap.len(), 1);
    assert_eq!(heap.find_min(), Ok(&25));
    assert_eq!(heap.to_string(), "[ 25 _ _ _ ]");
    assert_eq!(drain(&mut heap), vec![25]);
}

#[test]
fn custom_order() {
    let mut heap = MinHeap::with_comparator(4, |a: &&str, b: &&str| {
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    });
    for word in ["pear", "fig", "banana", "kiwi", "apple"] {
        heap.insert(word);
    }
    assert_eq!(heap.find_min(), Ok(&"fig"));
    assert_eq!(drain(&mut heap), vec!["fig", "kiwi", "pear", "apple", "banana"]);
}

#[test]
fn reversed_order_is_still_min_oriented_by_its_comparator() {
    let mut heap = MinHeap::from_items_by(vec![1, 5, 3], 3, |a: &i32, b: &i32| b.cmp(a));
    assert_eq!(heap.find_min(), Ok(&5));
    assert_eq!(drain(&mut heap), vec![5, 3, 1]);
}

#[test]
fn int_heap_default() {
    let mut heap = int_heap();
    heap.extend([i32::MAX, 0, i32::MIN, -1]);
    assert_eq!(drain(&mut heap), vec![i32::MIN, -1, 0, i32::MAX]);
    assert_eq!(heap.capacity(), crate::config::INT_DEFAULT_CAPACITY);
}
