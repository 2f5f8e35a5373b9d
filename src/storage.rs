//! Pluggable array storage for the heap
//!
//! The heap keeps its elements in a flat, index-addressed buffer. This module
//! abstracts that buffer behind [`ArrayStorage`] so a heap can live in a plain
//! `Vec<T>` or, with the `inline-storage` feature, in a
//! [`SmallVec`](smallvec::SmallVec) that keeps short heaps off the allocator.
//!
//! # Design
//!
//! The heap only ever needs:
//! - amortised O(1) append at the end
//! - O(1) indexed reads and writes, exposed as slice access
//! - removal at an arbitrary index, shifting the tail left
//! - the current length
//!
//! Growth and shrinking are left entirely to the backend.
//!
//! # Example
//!
//! ```rust
//! use array_min_heap::MinHeap;
//!
//! // Default Vec-backed storage
//! let mut heap: MinHeap<i32> = MinHeap::new();
//! heap.add(4);
//! assert_eq!(heap.get_min(), Ok(&4));
//! ```
//!
//! ```rust
//! // Inline storage, requires the `inline-storage` feature
//! # #[cfg(feature = "inline-storage")]
//! # {
//! use array_min_heap::MinHeap;
//! use smallvec::SmallVec;
//!
//! let mut heap: MinHeap<i32, SmallVec<[i32; 16]>> = MinHeap::default();
//! heap.add(7);
//! heap.add(2);
//! assert_eq!(heap.get_min(), Ok(&2));
//! # }
//! ```

#[cfg(feature = "inline-storage")]
use smallvec::{Array, SmallVec};

/// Trait for resizable array backends
///
/// Indexed get/set goes through [`as_slice`](ArrayStorage::as_slice) and
/// [`as_mut_slice`](ArrayStorage::as_mut_slice); the remaining methods cover
/// the operations that change the length.
pub trait ArrayStorage<T>: Default {
    /// Create empty storage with room for at least `capacity` elements
    fn with_capacity(capacity: usize) -> Self;

    /// Number of elements currently stored
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns true if no elements are stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read-only view of the elements in index order
    fn as_slice(&self) -> &[T];

    /// Mutable view of the elements in index order
    fn as_mut_slice(&mut self) -> &mut [T];

    /// Append a value at the end
    fn push(&mut self, value: T);

    /// Remove the element at `index`, shifting every later element left by one
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    fn remove_at(&mut self, index: usize) -> T;
}

// ============================================================================
// Vec - default backend
// ============================================================================

impl<T> ArrayStorage<T> for Vec<T> {
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    fn push(&mut self, value: T) {
        Vec::push(self, value);
    }

    fn remove_at(&mut self, index: usize) -> T {
        // Removing the tail is the common case and avoids the shift entirely
        if Vec::len(self).checked_sub(1) == Some(index) {
            if let Some(value) = self.pop() {
                return value;
            }
        }
        self.remove(index)
    }
}

// ============================================================================
// SmallVec - inline backend (feature-gated)
// ============================================================================

#[cfg(feature = "inline-storage")]
impl<A: Array> ArrayStorage<A::Item> for SmallVec<A> {
    fn with_capacity(capacity: usize) -> Self {
        SmallVec::with_capacity(capacity)
    }

    fn len(&self) -> usize {
        SmallVec::len(self)
    }

    fn as_slice(&self) -> &[A::Item] {
        SmallVec::as_slice(self)
    }

    fn as_mut_slice(&mut self) -> &mut [A::Item] {
        SmallVec::as_mut_slice(self)
    }

    fn push(&mut self, value: A::Item) {
        SmallVec::push(self, value);
    }

    fn remove_at(&mut self, index: usize) -> A::Item {
        if SmallVec::len(self).checked_sub(1) == Some(index) {
            if let Some(value) = self.pop() {
                return value;
            }
        }
        self.remove(index)
    }
}
