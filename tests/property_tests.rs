//! Property-based tests for the invariants this queue's design is built on:
//! the bounded-count and FIFO properties this crate's teacher checks for its
//! lock-free ring with the same tool, applied to the blocking queue instead.

use proptest::prelude::*;
use pubsub_queue::Queue;

proptest! {
    /// The queue never reports more elements than its capacity, regardless
    /// of the interleaving of pushes and pops.
    #[test]
    fn prop_bounded_count(
        ops in prop::collection::vec(prop::bool::ANY, 1..200),
        capacity in 1usize..32,
    ) {
        let queue: Queue<u64> = Queue::new(capacity);
        let mut sent = 0u64;

        for push in ops {
            if push {
                let _ = queue.try_push(sent);
                sent += 1;
            } else {
                let _ = queue.try_pop();
            }
            prop_assert!(queue.len() <= capacity,
                "len {} exceeded capacity {}", queue.len(), capacity);
        }
    }

    /// Items popped from a single-producer queue come back in the same
    /// order they were pushed, no matter how pushes and pops are interleaved.
    #[test]
    fn prop_single_producer_fifo(
        values in prop::collection::vec(any::<u64>(), 0..200),
        capacity in 1usize..32,
    ) {
        let queue: Queue<u64> = Queue::new(capacity);
        let mut received = Vec::new();

        for &v in &values {
            while queue.try_push(v).is_err() {
                if let Ok(item) = queue.try_pop() {
                    received.push(item);
                }
            }
        }
        while let Ok(item) = queue.try_pop() {
            received.push(item);
        }

        prop_assert_eq!(received, values);
    }

    /// try_push never silently drops: it either enqueues the item or hands
    /// it straight back to the caller.
    #[test]
    fn prop_try_push_never_loses_the_item(
        value in any::<u64>(),
        capacity in 1usize..8,
        prefill in 0usize..16,
    ) {
        let queue: Queue<u64> = Queue::new(capacity);
        for i in 0..prefill.min(capacity) {
            queue.try_push(i as u64).unwrap();
        }

        match queue.try_push(value) {
            Ok(()) => prop_assert!(queue.len() <= capacity),
            Err(e) => prop_assert_eq!(e.into_inner(), value),
        }
    }
}
