//! Common traits for heap data structures
//!
//! This module provides the [`Heap`] trait implemented by
//! [`BinaryHeap`](crate::binary::BinaryHeap), and the [`HeapError`] returned
//! by fallible heap operations.
//!
//! The trait is close to Rust's standard heap API, with two differences:
//! elements are stored as (priority, item) pairs so the ordering key is kept
//! apart from the data, and `pop` on an empty heap reports
//! [`HeapError::Underflow`] rather than returning `None`.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `pop` was called on a heap holding no elements
    #[error("heap underflow: pop on an empty heap")]
    Underflow,
}

/// Base trait for heap/priority queue data structures
///
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the dominant element
/// - `peek` returns the dominant element without removing it
///
/// Which element is dominant depends on how the heap was built: the minimum
/// priority for a min-heap, the maximum for a max-heap. Construction is left to
/// the implementing type, since it needs to know the ordering.
///
/// # Example
///
/// ```rust
/// use rust_binary_heaps::{BinaryHeap, Heap, HeapError};
///
/// fn drain<H: Heap<&'static str, i32>>(heap: &mut H) -> Vec<i32> {
///     let mut out = Vec::new();
///     while let Ok((priority, _)) = heap.pop() {
///         out.push(priority);
///     }
///     out
/// }
///
/// let mut heap = BinaryHeap::min();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(heap.peek(), Some((&1, &"one")));
/// assert_eq!(drain(&mut heap), vec![1, 2, 3]);
/// assert_eq!(heap.pop(), Err(HeapError::Underflow));
/// ```
pub trait Heap<T, P: Ord> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    ///
    /// Duplicate priorities are accepted. Their relative pop order is unspecified.
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, priority: P, item: T);

    /// Returns the dominant priority and associated item without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the dominant priority and associated item
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty. The heap is left
    /// unchanged in that case.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<(P, T), HeapError>;
}
