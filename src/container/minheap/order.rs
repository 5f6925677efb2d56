use std::cmp::Ordering;

use super::MinHeap;

/// A total order over `T` used to arrange the heap.
pub trait Compare<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The element type's own `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl <T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl <T: ?Sized, F: Fn(&T, &T) -> Ordering> Compare<T> for F {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

impl <T, C: Compare<T>> MinHeap<T, C> {
    #[inline]
    pub(crate) fn less(&self, i: usize, j: usize) -> bool {
        self.cmp.compare(&self.data[i], &self.data[j]) == Ordering::Less
    }

    #[inline]
    pub(crate) fn greater(&self, i: usize, j: usize) -> bool {
        self.cmp.compare(&self.data[i], &self.data[j]) == Ordering::Greater
    }
}

#[test]
fn natural_matches_ord() {
    assert_eq!(Natural.compare(&1, &2), Ordering::Less);
    assert_eq!(Natural.compare("b", "a"), Ordering::Greater);
    assert_eq!(Natural.compare(&7u8, &7u8), Ordering::Equal);
}

#[test]
fn closures_are_comparators() {
    let by_len = |a: &String, b: &String| a.len().cmp(&b.len());
    let long = "long".to_string();
    let short = "s".to_string();
    assert_eq!(by_len.compare(&long, &short), Ordering::Greater);
    let reversed = |a: &i32, b: &i32| b.cmp(a);
    assert_eq!(reversed.compare(&1, &2), Ordering::Greater);
}
