//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify
//! that the heap invariants are always maintained.

use proptest::prelude::*;
use rust_binary_heaps::binary::BinaryHeap;
use rust_binary_heaps::{Heap, HeapError, HeapOrder};

/// Test that push and pop keep the heap property and track the dominant element
fn test_push_pop_invariant(order: HeapOrder, ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap: BinaryHeap<i32, i32> = BinaryHeap::with_order(order);
    let mut inserted: Vec<i32> = Vec::new();

    for (should_pop, value) in ops {
        if should_pop {
            match heap.pop() {
                Ok((priority, item)) => {
                    prop_assert_eq!(priority, item);
                    let expected = match order {
                        HeapOrder::Min => inserted.iter().min().copied(),
                        HeapOrder::Max => inserted.iter().max().copied(),
                    };
                    prop_assert_eq!(Some(priority), expected);
                    let pos = inserted.iter().position(|&p| p == priority).unwrap();
                    inserted.swap_remove(pos);
                }
                Err(err) => {
                    prop_assert_eq!(err, HeapError::Underflow);
                    prop_assert!(inserted.is_empty());
                }
            }
        } else {
            heap.push(value, value);
            inserted.push(value);
        }

        prop_assert!(heap.check_invariant());
        prop_assert_eq!(heap.len(), inserted.len());
    }

    Ok(())
}

/// Test that draining the heap yields a fully sorted sequence
fn test_pop_order_invariant(order: HeapOrder, values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut heap = BinaryHeap::with_order(order);

    for val in &values {
        heap.push(*val, ());
    }

    let mut popped = Vec::with_capacity(values.len());
    while let Ok((priority, ())) = heap.pop() {
        popped.push(priority);
    }

    let mut expected = values;
    match order {
        HeapOrder::Min => expected.sort_unstable(),
        HeapOrder::Max => expected.sort_unstable_by(|a, b| b.cmp(a)),
    }
    prop_assert_eq!(popped, expected);
    prop_assert!(heap.is_empty());

    Ok(())
}

fn heap_order() -> impl Strategy<Value = HeapOrder> {
    prop_oneof![Just(HeapOrder::Min), Just(HeapOrder::Max)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_push_pop_invariant_binary(
        order in heap_order(),
        ops in prop::collection::vec((any::<bool>(), -1000i32..1000), 0..200)
    ) {
        test_push_pop_invariant(order, ops)?;
    }

    #[test]
    fn test_pop_order_binary(
        order in heap_order(),
        values in prop::collection::vec(any::<i32>(), 0..300)
    ) {
        test_pop_order_invariant(order, values)?;
    }

    #[test]
    fn test_many_ties_binary(
        order in heap_order(),
        values in prop::collection::vec(0u8..4, 0..100)
    ) {
        let mut heap = BinaryHeap::with_order(order);
        for (id, priority) in values.iter().enumerate() {
            heap.push(*priority, id);
            prop_assert!(heap.check_invariant());
        }

        let mut ids = Vec::new();
        let mut last: Option<u8> = None;
        while let Ok((priority, id)) = heap.pop() {
            prop_assert!(heap.check_invariant());
            prop_assert_eq!(values[id], priority);
            if let Some(prev) = last {
                prop_assert!(!order.dominates(&priority, &prev));
            }
            last = Some(priority);
            ids.push(id);
        }

        ids.sort_unstable();
        prop_assert_eq!(ids, (0..values.len()).collect::<Vec<_>>());
    }
}
