//! Binary Heap implementation
//!
//! An array-backed binary heap storing (priority, item) pairs. The heap is a
//! complete binary tree laid out in a `Vec`: index 0 is the root, the node at
//! index `i` has children at `2i + 1` and `2i + 2`, and its parent sits at
//! `(i - 1) / 2`.
//!
//! Whether the root holds the smallest or the largest priority is decided once,
//! at construction, by a [`HeapOrder`].
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//! | `len`     | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heaps::Heap;
//! use rust_binary_heaps::binary::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new(true); // a min-heap
//! heap.push(5, 'e');
//! heap.push(1, 'a');
//! heap.push(9, 'i');
//! heap.push(3, 'c');
//!
//! assert_eq!(heap.pop(), Ok((1, 'a')));
//! assert_eq!(heap.pop(), Ok((3, 'c')));
//! assert_eq!(heap.pop(), Ok((5, 'e')));
//! assert_eq!(heap.pop(), Ok((9, 'i')));
//! assert!(heap.pop().is_err());
//! ```

use std::fmt;

use log::{debug, log_enabled, trace, Level};

use crate::entry::Entry;
use crate::order::HeapOrder;
use crate::traits::{Heap, HeapError};

const LOG_TARGET: &str = "binary_heap";

/// A binary min-heap or max-heap
///
/// Elements with equal priorities are all kept; the order in which they come
/// back out is unspecified.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T, P: Ord> {
    /// The heap data stored as a complete binary tree in array form
    data: Vec<Entry<T, P>>,
    order: HeapOrder,
}

impl<T, P: Ord> BinaryHeap<T, P> {
    /// Creates an empty heap: a min-heap if `min_heap` is true, otherwise a max-heap
    pub fn new(min_heap: bool) -> Self {
        Self::with_order(HeapOrder::from_min_heap(min_heap))
    }

    pub fn with_order(order: HeapOrder) -> Self {
        Self {
            data: Vec::new(),
            order,
        }
    }

    /// Creates an empty heap with room for `capacity` elements
    ///
    /// This only preallocates; the heap still grows past `capacity` on demand.
    pub fn with_capacity(order: HeapOrder, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Creates an empty min-heap
    pub fn min() -> Self {
        Self::with_order(HeapOrder::Min)
    }

    /// Creates an empty max-heap
    pub fn max() -> Self {
        Self::with_order(HeapOrder::Max)
    }

    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// Inserts a prebuilt entry
    pub fn push_entry(&mut self, entry: Entry<T, P>) {
        self.data.push(entry);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes the root and returns it as an [`Entry`]
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty.
    pub fn pop_entry(&mut self) -> Result<Entry<T, P>, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Underflow);
        }

        // Moves the last entry into the root slot and shrinks by one, O(1)
        let root = self.data.swap_remove(0);

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(root)
    }

    /// Checks the heap property for every parent/child pair
    ///
    /// Always true for a heap only modified through its public API.
    pub fn check_invariant(&self) -> bool {
        (1..self.data.len()).all(|index| {
            let parent = (index - 1) / 2;
            !self
                .order
                .dominates(&self.data[index].priority, &self.data[parent].priority)
        })
    }

    fn left_child(&self, index: usize) -> Option<usize> {
        let left = 2 * index + 1;
        (left < self.data.len()).then_some(left)
    }

    fn right_child(&self, index: usize) -> Option<usize> {
        let right = 2 * index + 2;
        (right < self.data.len()).then_some(right)
    }

    fn parent(&self, index: usize) -> Option<usize> {
        (index > 0).then(|| (index - 1) / 2)
    }

    /// Returns the child that must move above `index`, if any
    ///
    /// With two children the candidate is the one that dominates its sibling
    /// (the smaller for a min-heap, the larger for a max-heap). A node with only
    /// a left child is compared against that child alone. The candidate is
    /// returned only if it strictly dominates the node.
    fn dominant_child(&self, index: usize) -> Option<usize> {
        let left = self.left_child(index)?;
        let candidate = match self.right_child(index) {
            Some(right)
                if self
                    .order
                    .dominates(&self.data[right].priority, &self.data[left].priority) =>
            {
                right
            }
            _ => left,
        };

        self.order
            .dominates(&self.data[candidate].priority, &self.data[index].priority)
            .then_some(candidate)
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while let Some(parent) = self.parent(index) {
            if !self
                .order
                .dominates(&self.data[index].priority, &self.data[parent].priority)
            {
                break;
            }
            trace!(target: LOG_TARGET, "sift_up: swap {} <-> {}", index, parent);
            self.data.swap(index, parent);
            index = parent;
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        while let Some(child) = self.dominant_child(index) {
            trace!(target: LOG_TARGET, "sift_down: swap {} <-> {}", index, child);
            self.data.swap(index, child);
            index = child;
        }
    }
}

impl<T: fmt::Debug, P: Ord + fmt::Debug> BinaryHeap<T, P> {
    /// Returns a displayable listing of the backing array, one `[index] = entry`
    /// line per slot in index order
    ///
    /// For diagnostics only; the layout is not part of the heap's contract.
    pub fn dump(&self) -> Dump<'_, T, P> {
        Dump { heap: self }
    }

    /// Writes [`dump`](Self::dump) to the `log` facade at debug level
    pub fn debug_dump(&self) {
        if !log_enabled!(target: LOG_TARGET, Level::Debug) {
            return;
        }
        debug!(
            target: LOG_TARGET,
            "{:?}-heap with {} entries",
            self.order,
            self.data.len()
        );
        for (index, entry) in self.data.iter().enumerate() {
            debug!(target: LOG_TARGET, "[{}] = {:?}", index, entry);
        }
    }
}

/// Diagnostic listing returned by [`BinaryHeap::dump`]
pub struct Dump<'a, T, P: Ord> {
    heap: &'a BinaryHeap<T, P>,
}

impl<T: fmt::Debug, P: Ord + fmt::Debug> fmt::Display for Dump<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.heap.data.iter().enumerate() {
            writeln!(f, "[{}] = {:?}", index, entry)?;
        }
        Ok(())
    }
}

impl<T, P: Ord> Heap<T, P> for BinaryHeap<T, P> {
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, priority: P, item: T) {
        self.push_entry(Entry::new(priority, item));
    }

    fn peek(&self) -> Option<(&P, &T)> {
        self.data.first().map(|entry| (&entry.priority, &entry.value))
    }

    fn pop(&mut self) -> Result<(P, T), HeapError> {
        self.pop_entry().map(Entry::into_parts)
    }
}

impl<T, P: Ord> Default for BinaryHeap<T, P> {
    fn default() -> Self {
        Self::min()
    }
}
