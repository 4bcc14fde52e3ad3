//! Heap entries
//!
//! An [`Entry`] pairs a priority with an opaque value. The heap compares
//! priorities only; values are moved in on push and handed back on pop.

use std::fmt;

/// A (priority, value) pair stored in a heap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T, P> {
    pub priority: P,
    pub value: T,
}

impl<T, P> Entry<T, P> {
    pub fn new(priority: P, value: T) -> Self {
        Self { priority, value }
    }

    /// Splits the entry into its priority and value
    pub fn into_parts(self) -> (P, T) {
        (self.priority, self.value)
    }
}

impl<T, P> From<(P, T)> for Entry<T, P> {
    fn from((priority, value): (P, T)) -> Self {
        Self::new(priority, value)
    }
}

impl<T, P> From<Entry<T, P>> for (P, T) {
    fn from(entry: Entry<T, P>) -> Self {
        entry.into_parts()
    }
}

impl<T: fmt::Display, P: fmt::Display> fmt::Display for Entry<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.priority, self.value)
    }
}
