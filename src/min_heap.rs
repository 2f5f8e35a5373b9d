//! Array-backed binary min-heap
//!
//! The heap is stored flattened in a single resizable array: the children of
//! index `i` sit at `2i + 1` and `2i + 2`, and every element is no smaller
//! than its parent. Every public mutating method returns with that property
//! fully restored.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `add`        | O(log n)   |
//! | `remove_min` | O(log n)   |
//! | `get_min`    | O(1)       |
//! | `build_heap` | O(n)       |
//! | `size`       | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use array_min_heap::{HeapError, MinHeap};
//!
//! let mut heap = MinHeap::from_elements([1, 10, 2, 9, 3]);
//! assert_eq!(heap.get_min(), Ok(&1));
//! assert_eq!(heap.remove_min(), Ok(1));
//! assert_eq!(heap.remove_min(), Ok(2));
//! assert_eq!(heap.size(), 3);
//!
//! heap.clear();
//! assert_eq!(heap.remove_min(), Err(HeapError::EmptyHeap));
//! ```

use std::fmt;
use std::marker::PhantomData;

use log::trace;

use crate::percolate::{is_heap, percolate_down, percolate_up};
use crate::storage::ArrayStorage;
use crate::traits::HeapError;

/// A binary min-heap over a resizable array
///
/// `S` selects the backing array; it defaults to `Vec<T>`. The heap owns its
/// buffer outright: [`build_heap`](MinHeap::build_heap) copies from the
/// caller's array and never keeps a reference to it.
#[derive(Clone)]
pub struct MinHeap<T, S = Vec<T>> {
    /// Heap-ordered elements
    elements: S,
    _phantom: PhantomData<T>,
}

impl<T: Ord> MinHeap<T> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self::with_storage(Vec::new())
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_storage(Vec::with_capacity(capacity))
    }

    /// Creates a heap holding `initial`, inserting each element with [`add`](MinHeap::add)
    pub fn from_elements<I: IntoIterator<Item = T>>(initial: I) -> Self {
        let mut heap = Self::new();
        heap.extend(initial);
        heap
    }
}

impl<T: Ord, S: ArrayStorage<T>> MinHeap<T, S> {
    /// Creates a heap over `storage`, heapifying whatever it already holds
    pub fn with_storage(storage: S) -> Self {
        let mut heap = Self {
            elements: storage,
            _phantom: PhantomData,
        };
        heap.heapify();
        heap
    }

    /// Inserts an element, moving it up until its parent is no larger
    pub fn add(&mut self, value: T) {
        self.elements.push(value);
        let last = self.elements.len() - 1;
        percolate_up(self.elements.as_mut_slice(), last);
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap has no elements.
    pub fn get_min(&self) -> Result<&T, HeapError> {
        self.elements.as_slice().first().ok_or(HeapError::EmptyHeap)
    }

    /// Removes and returns the minimum element
    ///
    /// The last element takes the root's slot, the array shrinks by one, and
    /// the new root moves down to restore heap order.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap has no elements.
    pub fn remove_min(&mut self) -> Result<T, HeapError> {
        let len = self.elements.len();
        if len == 0 {
            return Err(HeapError::EmptyHeap);
        }
        if len == 1 {
            return Ok(self.elements.remove_at(0));
        }

        let last = len - 1;
        self.elements.as_mut_slice().swap(0, last);
        let min = self.elements.remove_at(last);
        percolate_down(self.elements.as_mut_slice(), 0, last);

        Ok(min)
    }

    /// Replaces the contents with a copy of `source`, then restores heap order
    ///
    /// The previous buffer is dropped. Elements are cloned in source order, so
    /// later changes to `source` are not visible through the heap.
    pub fn build_heap(&mut self, source: &[T])
    where
        T: Clone,
    {
        let mut elements = S::with_capacity(source.len());
        for value in source {
            elements.push(value.clone());
        }
        self.elements = elements;
        self.heapify();

        trace!("built heap from {} elements", source.len());
    }

    /// Removes every element
    pub fn clear(&mut self) {
        trace!("clearing heap of {} elements", self.elements.len());
        self.elements = S::default();
    }

    /// The backing array in index (heap) order
    pub fn as_slice(&self) -> &[T] {
        self.elements.as_slice()
    }

    /// Consumes the heap, returning the backing array in heap order
    pub fn into_storage(self) -> S {
        self.elements
    }

    /// Consumes the heap, returning its elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.size());
        while let Ok(value) = self.remove_min() {
            sorted.push(value);
        }
        sorted
    }

    /// Sift down every internal node, bottom-up
    fn heapify(&mut self) {
        let len = self.elements.len();
        let slice = self.elements.as_mut_slice();
        for index in (0..=len / 2).rev() {
            percolate_down(slice, index, len);
        }
        debug_assert!(is_heap(self.elements.as_slice()));
    }
}

impl<T: Ord, S: ArrayStorage<T>> Default for MinHeap<T, S> {
    fn default() -> Self {
        Self::with_storage(S::default())
    }
}

impl<T: Ord, S: ArrayStorage<T>> Extend<T> for MinHeap<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Ord, S: ArrayStorage<T>> FromIterator<T> for MinHeap<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::default();
        heap.extend(iter);
        heap
    }
}

/// Takes ownership of `elements` and heapifies them in place
impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::with_storage(elements)
    }
}

impl<T: fmt::Debug, S: ArrayStorage<T>> fmt::Debug for MinHeap<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("elements", &self.elements.as_slice())
            .finish()
    }
}

impl<T: fmt::Debug, S: ArrayStorage<T>> fmt::Display for MinHeap<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HEAP {:?}", self.elements.as_slice())
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize, S: ArrayStorage<T>> serde::Serialize for MinHeap<T, S> {
    fn serialize<Z: serde::Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        serializer.collect_seq(self.elements.as_slice())
    }
}

/// Deserialised input goes through heapify, so the invariant holds for any sequence
#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de> + Ord> serde::Deserialize<'de> for MinHeap<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Vec<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(MinHeap::from)
    }
}
