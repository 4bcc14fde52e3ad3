//! Heap ordering mode
//!
//! A heap is either a min-heap or a max-heap, fixed at construction. All
//! comparisons made while restoring heap order go through
//! [`HeapOrder::dominates`], so the two modes share one implementation of
//! bubble-up and bubble-down.

/// Which end of the priority range sits at the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeapOrder {
    /// The root holds the smallest priority
    #[default]
    Min,
    /// The root holds the largest priority
    Max,
}

impl HeapOrder {
    /// Maps the `min_heap` flag used by [`BinaryHeap::new`](crate::binary::BinaryHeap::new)
    pub fn from_min_heap(min_heap: bool) -> Self {
        if min_heap {
            HeapOrder::Min
        } else {
            HeapOrder::Max
        }
    }

    /// Returns true for [`HeapOrder::Min`]
    pub fn is_min(self) -> bool {
        self == HeapOrder::Min
    }

    /// Returns true if `a` must be placed above `b` in the tree
    ///
    /// The comparison is strict: equal priorities never dominate each other,
    /// so ties never cause a swap.
    ///
    /// ```rust
    /// use rust_binary_heaps::HeapOrder;
    ///
    /// assert!(HeapOrder::Min.dominates(&1, &2));
    /// assert!(HeapOrder::Max.dominates(&2, &1));
    /// assert!(!HeapOrder::Min.dominates(&7, &7));
    /// ```
    #[inline]
    pub fn dominates<P: Ord>(self, a: &P, b: &P) -> bool {
        match self {
            HeapOrder::Min => a < b,
            HeapOrder::Max => a > b,
        }
    }
}
