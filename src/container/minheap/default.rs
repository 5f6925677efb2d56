use super::MinHeap;

impl <T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new_default()
    }
}
