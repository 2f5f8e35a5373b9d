//! Array-backed binary min-heap and in-place heapsort
//!
//! This crate provides a binary min-heap stored in a flat resizable array,
//! together with an in-place heapsort built on the same sift-down routine.
//!
//! # Features
//!
//! - **MinHeap**: O(log n) `add` and `remove_min`; O(1) `get_min`; O(n) `build_heap`
//! - **heapsort**: in-place, O(n log n), O(1) extra space, ascending output
//! - **Pluggable storage**: `Vec<T>` by default, `SmallVec` with the `inline-storage` feature
//! - **serde** (feature): heaps serialise as their element sequence
//!
//! Arbitrary key updates, merging, and deletion by value are not supported.
//!
//! # Example
//!
//! ```rust
//! use array_min_heap::{heapsort, HeapError, MinHeap};
//!
//! let mut heap = MinHeap::new();
//! heap.add(5);
//! heap.add(3);
//! heap.add(8);
//! assert_eq!(heap.get_min(), Ok(&3));
//! assert_eq!(heap.remove_min(), Ok(3));
//!
//! let mut empty: MinHeap<i32> = MinHeap::new();
//! assert_eq!(empty.remove_min(), Err(HeapError::EmptyHeap));
//!
//! let mut words = vec!["monkey", "zebra", "elephant"];
//! heapsort(&mut words);
//! assert_eq!(words, vec!["elephant", "monkey", "zebra"]);
//! ```

pub mod heapsort;
pub mod min_heap;
pub mod percolate;
pub mod storage;
pub mod traits;

pub use heapsort::heapsort;
pub use min_heap::MinHeap;
pub use storage::ArrayStorage;
pub use traits::HeapError;
