use std::cell::RefCell;

use log::info;

/// Capacity used by `MinHeap::new_default` and `Default`.
pub const DEFAULT_CAPACITY: usize = 10;
/// Capacity used by `int_heap`.
pub const INT_DEFAULT_CAPACITY: usize = 100;

/// Capacity after one growth step. Growth happens only when the heap is full.
pub fn grown_capacity(capacity: usize) -> usize {
    capacity.saturating_mul(2).saturating_add(1)
}

///记录堆操作次数,按线程统计
/// 1. grow: 扩容次数
/// 2. sift_up / sift_down: 上滤/下滤中实际发生的交换次数
/// 3. build: buildHeap 调用次数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapStats {
    pub grow: usize,
    pub sift_up: usize,
    pub sift_down: usize,
    pub build: usize,
}

thread_local! {
    static STATS: RefCell<HeapStats> = RefCell::new(HeapStats::default());
}

pub fn record_grow() {
    STATS.with(|s| s.borrow_mut().grow += 1);
}

pub fn record_sift_up(moves: usize) {
    STATS.with(|s| s.borrow_mut().sift_up += moves);
}

pub fn record_sift_down(moves: usize) {
    STATS.with(|s| s.borrow_mut().sift_down += moves);
}

pub fn record_build() {
    STATS.with(|s| s.borrow_mut().build += 1);
}

/// Counters accumulated on the calling thread.
pub fn stats() -> HeapStats {
    STATS.with(|s| *s.borrow())
}

pub fn reset() {
    STATS.with(|s| *s.borrow_mut() = HeapStats::default());
}

///把统计信息打印出来
pub fn dump() {
    let stats = stats();
    let order = [
        ("grow", stats.grow),
        ("sift_up", stats.sift_up),
        ("sift_down", stats.sift_down),
        ("build", stats.build),
    ];
    for (kind, times) in order.iter() {
        info!("{}\t:{} times", kind, times);
    }
}

#[test]
fn grow_policy() {
    assert_eq!(grown_capacity(1), 3);
    assert_eq!(grown_capacity(10), 21);
    assert_eq!(grown_capacity(usize::MAX), usize::MAX);
}

#[test]
fn record_and_reset() {
    reset();
    record_grow();
    record_sift_up(2);
    record_sift_down(3);
    record_build();
    assert_eq!(
        stats(),
        HeapStats { grow: 1, sift_up: 2, sift_down: 3, build: 1 }
    );
    reset();
    assert_eq!(stats(), HeapStats::default());
}
