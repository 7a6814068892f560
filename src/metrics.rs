//! Lock-free-readable counters for monitoring queue activity.
//!
//! Unlike this crate's teacher `Metrics`/`MetricsSnapshot` (which gates
//! collection behind a `Config::enable_metrics` switch because the teacher's
//! hot path is itself lock-free and a few extra atomics would show up in a
//! profile), this queue's hot path already pays for a mutex acquisition on
//! every operation, so unconditional `AtomicU64::fetch_add` counters add
//! nothing observable and there is no toggle.

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counters owned by a [`crate::Queue`]'s shared state.
#[derive(Debug, Default)]
pub struct QueueMetrics {
    pushes: AtomicU64,
    pops: AtomicU64,
    push_timeouts: AtomicU64,
    pop_timeouts: AtomicU64,
    shutdowns: AtomicU64,
}

impl QueueMetrics {
    pub(crate) fn record_push(&self) {
        self.pushes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_pop(&self) {
        self.pops.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_push_timeout(&self) {
        self.push_timeouts.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_pop_timeout(&self) {
        self.pop_timeouts.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_shutdown(&self) {
        self.shutdowns.fetch_add(1, Ordering::Relaxed);
    }

    /// Takes a point-in-time snapshot of all counters.
    #[must_use]
    pub fn snapshot(&self) -> QueueMetricsSnapshot {
        QueueMetricsSnapshot {
            pushes: self.pushes.load(Ordering::Relaxed),
            pops: self.pops.load(Ordering::Relaxed),
            push_timeouts: self.push_timeouts.load(Ordering::Relaxed),
            pop_timeouts: self.pop_timeouts.load(Ordering::Relaxed),
            shutdowns: self.shutdowns.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time copy of a queue's [`QueueMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueMetricsSnapshot {
    pub pushes: u64,
    pub pops: u64,
    pub push_timeouts: u64,
    pub pop_timeouts: u64,
    pub shutdowns: u64,
}
