//! In-place heapsort over the shared min-heap primitive
//!
//! The array is heapified as a min-heap, then the root is repeatedly swapped
//! to the end of the shrinking unsorted prefix and sifted back into place.
//! That leaves the minimum in the last slot and the maximum in the first, so
//! a single reversal finishes the ascending order.
//!
//! Sorting uses only `<` comparisons, O(1) extra space, and O(n log n) time.
//! It is not stable.
//!
//! # Example
//!
//! ```rust
//! use array_min_heap::heapsort;
//!
//! let mut data = vec![100, 20, 6, 200, 90, 150, 300];
//! heapsort(&mut data);
//! assert_eq!(data, vec![6, 20, 90, 100, 150, 200, 300]);
//! ```

use log::trace;

use crate::percolate::percolate_down;

/// Sorts `array` in place in non-decreasing order
pub fn heapsort<T: Ord>(array: &mut [T]) {
    let n = array.len();
    trace!("heapsort over {} elements", n);

    for index in (0..n / 2).rev() {
        percolate_down(array, index, n);
    }

    // Each pass moves the current minimum to the end of [0, end]
    for end in (1..n).rev() {
        array.swap(0, end);
        percolate_down(array, 0, end);
    }

    // Descending at this point
    array.reverse();
}
