//! Common types shared by the heap and the sorting routine
//!
//! The crate has a single failure mode: asking an empty heap for its minimum.
//! Everything else (insertion, bulk construction, clearing, sorting) is total.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The heap holds no elements, so there is no minimum to return
    #[error("heap is empty")]
    EmptyHeap,
}
