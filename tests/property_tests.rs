//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify
//! that the heap invariants are always maintained.

use array_min_heap::percolate::{is_heap, percolate_down};
use array_min_heap::{heapsort, HeapError, MinHeap};
use proptest::prelude::*;

/// Interleave adds and remove_mins, checking the invariant and the minimum
fn test_add_remove_invariant(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap: MinHeap<i32> = MinHeap::new();
    let mut inserted: Vec<i32> = Vec::new();

    for (should_remove, value) in ops {
        if should_remove {
            let expected_min = inserted.iter().min().copied();
            match heap.remove_min() {
                Ok(min) => {
                    prop_assert_eq!(Some(min), expected_min);
                    let pos = inserted.iter().position(|&v| v == min).unwrap();
                    inserted.swap_remove(pos);
                }
                Err(HeapError::EmptyHeap) => {
                    prop_assert!(inserted.is_empty());
                }
            }
        } else {
            heap.add(value);
            inserted.push(value);
        }

        prop_assert!(is_heap(heap.as_slice()), "invariant broken: {}", heap);
        prop_assert_eq!(heap.get_min().ok().copied(), inserted.iter().min().copied());
    }

    Ok(())
}

/// size() always equals adds minus successful removes
fn test_size_invariant(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap: MinHeap<i32> = MinHeap::new();
    let mut expected_len = 0usize;

    for (should_remove, value) in ops {
        if should_remove {
            if heap.remove_min().is_ok() {
                expected_len -= 1;
            }
        } else {
            heap.add(value);
            expected_len += 1;
        }

        prop_assert_eq!(heap.size(), expected_len);
        prop_assert_eq!(heap.is_empty(), expected_len == 0);
    }

    Ok(())
}

/// Draining yields the sorted input multiset
fn test_drain_sorted(values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut heap = MinHeap::from_elements(values.iter().copied());

    let mut drained = Vec::with_capacity(values.len());
    while let Ok(value) = heap.remove_min() {
        drained.push(value);
    }

    let mut expected = values;
    expected.sort();
    prop_assert_eq!(drained, expected);

    Ok(())
}

proptest! {
    #[test]
    fn prop_add_remove_invariant(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)) {
        test_add_remove_invariant(ops)?;
    }

    #[test]
    fn prop_size_invariant(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)) {
        test_size_invariant(ops)?;
    }

    #[test]
    fn prop_drain_sorted(values in prop::collection::vec(-1000i32..1000, 0..200)) {
        test_drain_sorted(values)?;
    }

    #[test]
    fn prop_build_heap_invariant(
        before in prop::collection::vec(any::<i32>(), 0..20),
        source in prop::collection::vec(any::<i32>(), 0..200)
    ) {
        let mut heap = MinHeap::from_elements(before);
        heap.build_heap(&source);

        prop_assert_eq!(heap.size(), source.len());
        prop_assert!(is_heap(heap.as_slice()));
        prop_assert_eq!(heap.get_min().ok(), source.iter().min());
    }

    #[test]
    fn prop_build_heap_ignores_later_source_writes(
        source in prop::collection::vec(-100i32..100, 1..100),
        overwrite in -1000i32..-500
    ) {
        let mut source = source;
        let mut expected = source.clone();
        expected.sort();

        let mut heap: MinHeap<i32> = MinHeap::new();
        heap.build_heap(&source);
        for slot in source.iter_mut() {
            *slot = overwrite;
        }

        prop_assert_eq!(heap.into_sorted_vec(), expected);
    }

    #[test]
    fn prop_get_min_does_not_mutate(values in prop::collection::vec(any::<i64>(), 1..100)) {
        let heap = MinHeap::from_elements(values);
        let snapshot = heap.as_slice().to_vec();

        let first = heap.get_min().copied();
        let second = heap.get_min().copied();
        prop_assert_eq!(first, second);
        prop_assert_eq!(heap.as_slice(), snapshot.as_slice());
    }

    #[test]
    fn prop_heapsort_sorts_permutation(values in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut sorted = values.clone();
        heapsort(&mut sorted);

        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn prop_heapsort_strings(values in prop::collection::vec("[a-z]{0,8}", 0..50)) {
        let mut sorted = values.clone();
        heapsort(&mut sorted);

        let mut expected = values;
        expected.sort();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn prop_percolate_down_respects_logical_size(
        values in prop::collection::vec(any::<u16>(), 1..100),
        cut in any::<prop::sample::Index>()
    ) {
        let logical_size = cut.index(values.len() + 1);
        let mut data = values.clone();
        for index in (0..logical_size / 2).rev() {
            percolate_down(&mut data, index, logical_size);
        }

        prop_assert!(is_heap(&data[..logical_size]));
        prop_assert_eq!(&data[logical_size..], &values[logical_size..]);
    }
}
