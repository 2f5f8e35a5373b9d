//! Percolation primitives shared by [`MinHeap`](crate::MinHeap) and
//! [`heapsort`](crate::heapsort)
//!
//! Both routines work on a plain slice plus a logical size, so the same code
//! restores the heap property inside a heap's own buffer and inside the
//! shrinking prefix of an array being sorted.
//!
//! Tie-breaking is fixed: on equal keys the parent stays put, and the left
//! child is preferred over the right.

/// Move the element at `index` down until it is no larger than its children
///
/// Only positions `< logical_size` take part; anything past that is neither
/// read nor written. An `index` at or past `logical_size` is a no-op.
///
/// # Panics
/// Panics if `logical_size > array.len()`.
pub fn percolate_down<T: Ord>(array: &mut [T], mut index: usize, logical_size: usize) {
    assert!(
        logical_size <= array.len(),
        "logical size {} exceeds array length {}",
        logical_size,
        array.len()
    );
    if index >= logical_size {
        return;
    }

    loop {
        let left = 2 * index + 1;
        let right = 2 * index + 2;
        let mut smallest = index;

        if left < logical_size && array[left] < array[smallest] {
            smallest = left;
        }
        if right < logical_size && array[right] < array[smallest] {
            smallest = right;
        }

        if smallest != index {
            array.swap(index, smallest);
            index = smallest;
        } else {
            break;
        }
    }
}

/// Move the element at `index` up while it is strictly smaller than its parent
pub fn percolate_up<T: Ord>(array: &mut [T], mut index: usize) {
    while index > 0 {
        let parent = (index - 1) / 2;
        if array[index] < array[parent] {
            array.swap(index, parent);
            index = parent;
        } else {
            break;
        }
    }
}

/// Returns true if every element is no smaller than its parent
pub fn is_heap<T: Ord>(array: &[T]) -> bool {
    (1..array.len()).all(|i| array[(i - 1) / 2] <= array[i])
}
