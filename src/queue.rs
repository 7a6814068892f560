//! A bounded, thread-safe, multi-producer/multi-consumer queue with
//! backpressure, timeouts and orderly shutdown.
//!
//! # Synchronization
//!
//! One mutex protects the backing `VecDeque` and the `shutdown` flag; two
//! condition variables (`not_empty`, `not_full`) avoid the thundering-herd
//! wake-ups a single broadcast condvar would cause. Every wait re-checks its
//! predicate after waking (`Condvar::wait_while` / `wait_timeout_while`
//! enforce this structurally), because spurious wake-ups are permitted and
//! `shutdown` broadcasts every waiter at once.
//!
//! `tests/loom_tests.rs` model-checks this synchronization protocol under
//! loom's exhaustive thread-interleaving exploration using a simplified
//! reimplementation built from loom's own `Mutex`/`Condvar`, the same way
//! this crate's teacher's `loom_tests.rs` checks its ring protocol against a
//! standalone `LoomRing` rather than compiling the production ring against
//! loom's primitives.

use crate::error::{PopError, PopTimeoutError, PushError, PushTimeoutError, TryPopError, TryPushError};
use crate::invariants::{debug_assert_bounded_count, debug_assert_fifo_pop, debug_assert_fifo_push};
use crate::metrics::{QueueMetrics, QueueMetricsSnapshot};
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

struct State<T> {
    queue: VecDeque<T>,
    max_size: usize,
    shutdown: bool,
}

struct Shared<T> {
    state: Mutex<State<T>>,
    not_empty: Condvar,
    not_full: Condvar,
    metrics: QueueMetrics,
}

/// A bounded FIFO queue of owned `T` values, safely shared across any number
/// of producer and consumer threads.
///
/// `Queue<T>` is a cheap, `Clone`-able handle (an `Arc` around the actual
/// shared state, mirroring this crate's teacher `Channel<T>`): clone it once
/// per thread that needs to push or pop. Dropping the last handle drops every
/// envelope still enqueued.
pub struct Queue<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Queue<T> {
    /// Creates a new queue with the given fixed capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0. A zero-capacity "unbounded" queue is not
    /// supported (see the data model this crate's types implement); this is a
    /// programmer error caught at construction, the same way this crate's
    /// teacher `Config::new` asserts on an invalid `ring_bits`/`max_producers`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 1, "queue capacity must be >= 1");
        log::debug!("creating queue with capacity {capacity}");
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    queue: VecDeque::with_capacity(capacity),
                    max_size: capacity,
                    shutdown: false,
                }),
                not_empty: Condvar::new(),
                not_full: Condvar::new(),
                metrics: QueueMetrics::default(),
            }),
        }
    }

    /// The fixed capacity this queue was constructed with.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.lock().max_size
    }

    /// A point-in-time snapshot of the current element count. Not stable
    /// after the call returns in the presence of concurrent operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().queue.len()
    }

    /// A point-in-time snapshot of whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `shutdown` has been called. A point-in-time snapshot, though
    /// `shutdown` is one-way so a `true` result never becomes stale.
    #[must_use]
    pub fn is_shutdown(&self) -> bool {
        self.lock().shutdown
    }

    /// A snapshot of this queue's activity counters.
    #[must_use]
    pub fn metrics(&self) -> QueueMetricsSnapshot {
        self.shared.metrics.snapshot()
    }

    /// One-way transition: refuses further pushes and wakes every blocked
    /// waiter. Already-enqueued items remain poppable until the queue is
    /// drained. Calling this more than once is a no-op after the first call.
    pub fn shutdown(&self) {
        let mut state = self.lock();
        if state.shutdown {
            return;
        }
        state.shutdown = true;
        log::info!(
            "queue shutting down with {} item(s) still enqueued",
            state.queue.len()
        );
        drop(state);
        self.shared.metrics.record_shutdown();
        self.shared.not_empty.notify_all();
        self.shared.not_full.notify_all();
    }

    /// Pushes `item`, blocking while the queue is full.
    ///
    /// # Errors
    ///
    /// Returns [`PushError::Shutdown`] (carrying `item` back) if the queue
    /// has been shut down, whether it was already shut down on entry or the
    /// shutdown happened while this call was waiting for space.
    pub fn push(&self, item: T) -> Result<(), PushError<T>> {
        let mut state = self
            .shared
            .not_full
            .wait_while(self.lock(), |s| s.queue.len() >= s.max_size && !s.shutdown)
            .unwrap_or_else(PoisonError::into_inner);

        if state.shutdown {
            return Err(PushError::Shutdown(item));
        }

        let len_before = state.queue.len();
        state.queue.push_back(item);
        let len_after = state.queue.len();
        debug_assert_bounded_count!(len_after, state.max_size);
        debug_assert_fifo_push!(len_before, len_after);
        drop(state);
        self.shared.metrics.record_push();
        self.shared.not_empty.notify_one();
        Ok(())
    }

    /// Pushes `item` without blocking.
    ///
    /// # Errors
    ///
    /// Returns [`TryPushError::Shutdown`] if the queue has been shut down
    /// (checked before fullness, per the contract: shutdown takes priority),
    /// or [`TryPushError::Full`] if the queue is at capacity. Both variants
    /// carry `item` back to the caller.
    pub fn try_push(&self, item: T) -> Result<(), TryPushError<T>> {
        let mut state = self.lock();

        if state.shutdown {
            return Err(TryPushError::Shutdown(item));
        }
        if state.queue.len() >= state.max_size {
            return Err(TryPushError::Full(item));
        }

        let len_before = state.queue.len();
        state.queue.push_back(item);
        let len_after = state.queue.len();
        debug_assert_bounded_count!(len_after, state.max_size);
        debug_assert_fifo_push!(len_before, len_after);
        drop(state);
        self.shared.metrics.record_push();
        self.shared.not_empty.notify_one();
        Ok(())
    }

    /// Pushes `item`, blocking until space is available, the queue shuts
    /// down, or `timeout` elapses.
    ///
    /// Uses `Condvar::wait_timeout_while`, which re-waits against the
    /// remaining portion of `timeout` on every spurious wake-up rather than
    /// resetting the clock, so the total wait is bounded by `timeout`
    /// regardless of how many times the thread wakes.
    ///
    /// # Errors
    ///
    /// Returns [`PushTimeoutError::Shutdown`] if the queue is shut down
    /// (checked before the timeout, per the contract), or
    /// [`PushTimeoutError::Timeout`] if `timeout` elapses first. Both
    /// variants carry `item` back to the caller.
    pub fn push_timeout(&self, item: T, timeout: Duration) -> Result<(), PushTimeoutError<T>> {
        let (mut state, result) = self
            .shared
            .not_full
            .wait_timeout_while(self.lock(), timeout, |s| {
                s.queue.len() >= s.max_size && !s.shutdown
            })
            .unwrap_or_else(PoisonError::into_inner);

        if state.shutdown {
            return Err(PushTimeoutError::Shutdown(item));
        }
        if result.timed_out() && state.queue.len() >= state.max_size {
            drop(state);
            self.shared.metrics.record_push_timeout();
            return Err(PushTimeoutError::Timeout(item));
        }

        let len_before = state.queue.len();
        state.queue.push_back(item);
        let len_after = state.queue.len();
        debug_assert_bounded_count!(len_after, state.max_size);
        debug_assert_fifo_push!(len_before, len_after);
        drop(state);
        self.shared.metrics.record_push();
        self.shared.not_empty.notify_one();
        Ok(())
    }

    /// Pops the next item, blocking while the queue is empty.
    ///
    /// # Errors
    ///
    /// Returns [`PopError::Shutdown`] if the queue is empty and has been
    /// shut down. A non-empty shut-down queue still drains normally.
    pub fn pop(&self) -> Result<T, PopError> {
        let mut state = self
            .shared
            .not_empty
            .wait_while(self.lock(), |s| s.queue.is_empty() && !s.shutdown)
            .unwrap_or_else(PoisonError::into_inner);

        if state.shutdown && state.queue.is_empty() {
            return Err(PopError::Shutdown);
        }

        let len_before = state.queue.len();
        let item = state.queue.pop_front().expect("predicate guarantees non-empty");
        debug_assert_fifo_pop!(len_before, state.queue.len());
        drop(state);
        self.shared.metrics.record_pop();
        self.shared.not_full.notify_one();
        Ok(item)
    }

    /// Pops the next item, blocking until one is available, the queue shuts
    /// down, or `timeout` elapses.
    ///
    /// # Errors
    ///
    /// Returns [`PopTimeoutError::Shutdown`] if the queue is empty and has
    /// been shut down, or [`PopTimeoutError::Timeout`] if `timeout` elapses
    /// first with the queue still empty.
    pub fn pop_timeout(&self, timeout: Duration) -> Result<T, PopTimeoutError> {
        let (mut state, result) = self
            .shared
            .not_empty
            .wait_timeout_while(self.lock(), timeout, |s| s.queue.is_empty() && !s.shutdown)
            .unwrap_or_else(PoisonError::into_inner);

        if state.shutdown && state.queue.is_empty() {
            return Err(PopTimeoutError::Shutdown);
        }
        if result.timed_out() && state.queue.is_empty() {
            drop(state);
            self.shared.metrics.record_pop_timeout();
            return Err(PopTimeoutError::Timeout);
        }

        let len_before = state.queue.len();
        let item = state.queue.pop_front().expect("checked non-empty above");
        debug_assert_fifo_pop!(len_before, state.queue.len());
        drop(state);
        self.shared.metrics.record_pop();
        self.shared.not_full.notify_one();
        Ok(item)
    }

    /// Pops the next item without blocking.
    ///
    /// # Errors
    ///
    /// Returns [`TryPopError::Empty`] if the queue is empty and has not been
    /// shut down, or [`TryPopError::Shutdown`] if it is empty and has been
    /// shut down.
    pub fn try_pop(&self) -> Result<T, TryPopError> {
        let mut state = self.lock();

        if state.queue.is_empty() {
            return Err(if state.shutdown {
                TryPopError::Shutdown
            } else {
                TryPopError::Empty
            });
        }

        let len_before = state.queue.len();
        let item = state.queue.pop_front().expect("checked non-empty above");
        debug_assert_fifo_pop!(len_before, state.queue.len());
        drop(state);
        self.shared.metrics.record_pop();
        self.shared.not_full.notify_one();
        Ok(item)
    }

    fn lock(&self) -> MutexGuard<'_, State<T>> {
        self.shared.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Queue")
            .field("len", &state.queue.len())
            .field("capacity", &state.max_size)
            .field("shutdown", &state.shutdown)
            .finish()
    }
}
