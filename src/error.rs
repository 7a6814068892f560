//! Stable error codes and per-operation error types.
//!
//! [`ErrorCode`] mirrors the flat error enumeration of the C pub/sub contract
//! this crate's queue and envelope are modeled on. It exists for documentation
//! parity and for any future FFI or logging boundary that wants a single code
//! instead of a typed Rust error; the operational API below never hands one
//! back directly, it hands back one of the typed errors in this module, each
//! of which can be converted to an [`ErrorCode`] via `.code()`.

use std::fmt;
use thiserror::Error;

/// Stable error codes mirroring the pub/sub contract's error enumeration.
///
/// `NotFound` and `ThreadCreate` are reserved for a higher topic-routing layer
/// that composes queues like this one; this crate never constructs them.
/// `MutexInit`/`CondInit` are unreachable in this rendition because
/// `std::sync::Mutex`/`Condvar` construction is infallible; the only
/// construction-time failure left is requesting zero capacity, which panics
/// rather than returning a code (see [`crate::Queue::new`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Success,
    NullParam,
    Allocation,
    QueueFull,
    QueueEmpty,
    Shutdown,
    Timeout,
    NotFound,
    InvalidTopic,
    ThreadCreate,
    MutexInit,
    CondInit,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Success => "success",
            Self::NullParam => "null parameter",
            Self::Allocation => "memory allocation failed",
            Self::QueueFull => "queue is full",
            Self::QueueEmpty => "queue is empty",
            Self::Shutdown => "system is shutting down",
            Self::Timeout => "operation timed out",
            Self::NotFound => "item not found",
            Self::InvalidTopic => "invalid topic name",
            Self::ThreadCreate => "failed to create thread",
            Self::MutexInit => "failed to initialize mutex",
            Self::CondInit => "failed to initialize condition variable",
        };
        f.write_str(s)
    }
}

/// Errors returned by [`crate::Envelope::create`] / [`crate::Envelope::create_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    /// Topic is empty or its length is ≥ 256 bytes.
    #[error("invalid topic: must be non-empty and under {} bytes", crate::envelope::MAX_TOPIC_LEN)]
    InvalidTopic,
    /// Key was supplied and its length is ≥ 128 bytes.
    #[error("invalid key: must be under {} bytes", crate::envelope::MAX_KEY_LEN)]
    InvalidKey,
    /// Payload length exceeds 65 536 bytes.
    #[error("payload exceeds {} bytes", crate::envelope::MAX_PAYLOAD_SIZE)]
    Allocation,
}

impl EnvelopeError {
    /// Maps this error onto the stable [`ErrorCode`] enumeration.
    #[must_use]
    pub fn code(self) -> ErrorCode {
        match self {
            Self::InvalidTopic => ErrorCode::InvalidTopic,
            Self::InvalidKey => ErrorCode::InvalidTopic,
            Self::Allocation => ErrorCode::Allocation,
        }
    }
}

/// Returned by [`crate::Queue::push`]. The item is returned to the caller.
#[derive(Debug, Error)]
pub enum PushError<T> {
    /// The queue has been shut down; the item was never enqueued.
    #[error("queue is shut down")]
    Shutdown(T),
}

impl<T> PushError<T> {
    /// Consumes the error, returning the item the caller still owns.
    pub fn into_inner(self) -> T {
        match self {
            Self::Shutdown(item) => item,
        }
    }

    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Shutdown(_) => ErrorCode::Shutdown,
        }
    }
}

/// Returned by [`crate::Queue::try_push`]. The item is returned to the caller.
#[derive(Debug, Error)]
pub enum TryPushError<T> {
    /// The queue is at capacity.
    #[error("queue is full")]
    Full(T),
    /// The queue has been shut down; shutdown takes priority over full.
    #[error("queue is shut down")]
    Shutdown(T),
}

impl<T> TryPushError<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Full(item) | Self::Shutdown(item) => item,
        }
    }

    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Full(_) => ErrorCode::QueueFull,
            Self::Shutdown(_) => ErrorCode::Shutdown,
        }
    }
}

/// Returned by [`crate::Queue::push_timeout`]. The item is returned to the caller.
#[derive(Debug, Error)]
pub enum PushTimeoutError<T> {
    /// The deadline elapsed before space became available.
    #[error("push timed out")]
    Timeout(T),
    /// The queue has been shut down.
    #[error("queue is shut down")]
    Shutdown(T),
}

impl<T> PushTimeoutError<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Timeout(item) | Self::Shutdown(item) => item,
        }
    }

    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Timeout(_) => ErrorCode::Timeout,
            Self::Shutdown(_) => ErrorCode::Shutdown,
        }
    }
}

/// Returned by [`crate::Queue::pop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PopError {
    /// The queue is empty and has been shut down.
    #[error("queue is shut down")]
    Shutdown,
}

impl PopError {
    #[must_use]
    pub fn code(self) -> ErrorCode {
        match self {
            Self::Shutdown => ErrorCode::Shutdown,
        }
    }
}

/// Returned by [`crate::Queue::try_pop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TryPopError {
    /// The queue is empty but not shut down.
    #[error("queue is empty")]
    Empty,
    /// The queue is empty and has been shut down.
    #[error("queue is shut down")]
    Shutdown,
}

impl TryPopError {
    #[must_use]
    pub fn code(self) -> ErrorCode {
        match self {
            Self::Empty => ErrorCode::QueueEmpty,
            Self::Shutdown => ErrorCode::Shutdown,
        }
    }
}

/// Returned by [`crate::Queue::pop_timeout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PopTimeoutError {
    /// The deadline elapsed before an item became available.
    #[error("pop timed out")]
    Timeout,
    /// The queue is empty and has been shut down.
    #[error("queue is shut down")]
    Shutdown,
}

impl PopTimeoutError {
    #[must_use]
    pub fn code(self) -> ErrorCode {
        match self {
            Self::Timeout => ErrorCode::Timeout,
            Self::Shutdown => ErrorCode::Shutdown,
        }
    }
}
