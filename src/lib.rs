//! Binary Heap for Rust
//!
//! This crate provides an array-backed binary heap over `(priority, value)`
//! pairs. The heap is configured once, at construction, as either a min-heap
//! or a max-heap, and keeps that mode for its whole lifetime.
//!
//! # Features
//!
//! - **Min or max ordering** chosen at construction via [`HeapOrder`]
//! - **Opaque payloads**: only the priority is compared, values are moved in and out untouched
//! - O(log n) `push` and `pop`, O(1) `peek` and `len`
//! - Recoverable [`HeapError::Underflow`] instead of a panic when popping an empty heap
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heaps::binary::BinaryHeap;
//! use rust_binary_heaps::{Heap, HeapError};
//!
//! let mut heap = BinaryHeap::new(false); // a max-heap
//! heap.push(100, "hundred");
//! heap.push(30, "thirty");
//! heap.push(50, "fifty");
//!
//! assert_eq!(heap.pop(), Ok((100, "hundred")));
//! assert_eq!(heap.pop(), Ok((50, "fifty")));
//! assert_eq!(heap.pop(), Ok((30, "thirty")));
//! assert_eq!(heap.pop(), Err(HeapError::Underflow));
//! ```

pub mod binary;
pub mod entry;
pub mod order;
pub mod traits;

// Re-export the main types for convenience
pub use binary::BinaryHeap;
pub use entry::Entry;
pub use order::HeapOrder;
pub use traits::{Heap, HeapError};
