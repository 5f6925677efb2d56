use super::{Compare, MinHeap};

impl <T, C: Compare<T>> Extend<T> for MinHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl <'a, T: Copy + 'a, C: Compare<T>> Extend<&'a T> for MinHeap<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

#[test]
fn extend_grows() {
    let mut heap: MinHeap<i32> = MinHeap::new(1);
    heap.extend(vec![3, 1, 2]);
    heap.extend(&[0, 7]);
    assert_eq!(heap.len(), 5);
    assert_eq!(heap.find_min(), Ok(&0));
    assert!(heap.is_correct());
}
