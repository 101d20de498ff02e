//! Error types for queue operations.

use core::fmt;

use snafu::Snafu;

/// Error returned when [`Spique::enqueue`](crate::Spique::enqueue) or
/// [`Spique::enqueue_head`](crate::Spique::enqueue_head) rejects a value.
///
/// The value is returned so the caller can retry (typically after a
/// [`Event::Space`](crate::Event::Space) notification) or route it elsewhere.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum EnqueueError<T> {
    /// The queue is at its `max_items` ceiling.
    Full(T),
    /// The queue has been closed; no further insertion is permitted.
    Closed(T),
}

impl<T> EnqueueError<T> {
    /// Extract the value that failed to enqueue.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> T {
        match self {
            EnqueueError::Full(item) | EnqueueError::Closed(item) => item,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for EnqueueError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnqueueError::Full(item) => f.debug_tuple("Full").field(item).finish(),
            EnqueueError::Closed(item) => f.debug_tuple("Closed").field(item).finish(),
        }
    }
}

impl<T> fmt::Display for EnqueueError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnqueueError::Full(_) => f.write_str("queue is full"),
            EnqueueError::Closed(_) => f.write_str("queue is closed"),
        }
    }
}

impl<T: fmt::Debug> core::error::Error for EnqueueError<T> {}

/// Error returned by a feed task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum FeedError {
    /// The destination queue closed while the feed still had work pending.
    #[snafu(display("destination queue closed while a feed was pending"))]
    Closed,
}
