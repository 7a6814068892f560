//! Debug assertion macros for queue invariants.
//!
//! These macros provide runtime checks for the invariants documented in
//! SPEC_FULL.md §8. They are only active in debug builds
//! (`#[cfg(debug_assertions)]`), so there is zero overhead in release builds.
//!
//! Used by `Queue<T>`.

// =============================================================================
// INV-SIZE-01: Bounded Count
// =============================================================================

/// Assert that the queue never holds more items than its capacity.
///
/// **Invariant**: `0 ≤ len ≤ max_size`
///
/// Used in: `push()`/`push_timeout()` after pushing, `try_push()` after pushing
macro_rules! debug_assert_bounded_count {
    ($len:expr, $max_size:expr) => {
        debug_assert!(
            $len <= $max_size,
            "INV-SIZE-01 violated: len {} exceeds capacity {}",
            $len,
            $max_size
        )
    };
}

// =============================================================================
// INV-FIFO-01: Monotonic Length On Transfer
// =============================================================================

/// Assert that a successful push grows the queue by exactly one element.
///
/// A single mutex-protected `VecDeque` already gives FIFO ordering
/// structurally (`push_back`/`pop_front` under one lock); unlike the
/// per-producer rings this is modeled on, there is no separate sequence per
/// producer to cross-check, so the push/pop-side checks below verify the
/// narrower property that actually could regress: that a push or pop changes
/// `len` by exactly one, never more, never none, never reordering the count.
///
/// **Invariant**: `len_after == len_before + 1`
///
/// Used in: `push()`/`push_timeout()`/`try_push()` after pushing
macro_rules! debug_assert_fifo_push {
    ($len_before:expr, $len_after:expr) => {
        debug_assert!(
            $len_after == $len_before + 1,
            "INV-FIFO-01 violated: push changed len from {} to {}",
            $len_before,
            $len_after
        )
    };
}

/// Assert that a successful pop shrinks the queue by exactly one element.
///
/// **Invariant**: `len_after == len_before - 1`
///
/// Used in: `pop()`/`pop_timeout()`/`try_pop()` after popping
macro_rules! debug_assert_fifo_pop {
    ($len_before:expr, $len_after:expr) => {
        debug_assert!(
            $len_after == $len_before - 1,
            "INV-FIFO-01 violated: pop changed len from {} to {}",
            $len_before,
            $len_after
        )
    };
}

pub(crate) use debug_assert_bounded_count;
pub(crate) use debug_assert_fifo_pop;
pub(crate) use debug_assert_fifo_push;
