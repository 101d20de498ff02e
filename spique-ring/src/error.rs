//! Error types for ring operations.

use core::fmt;

/// Error returned when [`Ring::try_push_back`](crate::Ring::try_push_back) or
/// [`Ring::try_push_front`](crate::Ring::try_push_front) fails because the
/// ring is full.
///
/// The item is returned so the caller can retry or route it elsewhere.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PushError<T> {
    /// The ring is at capacity.
    Overflow(T),
}

impl<T> PushError<T> {
    /// Extract the item that failed to push.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> T {
        match self {
            PushError::Overflow(item) => item,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushError::Overflow(item) => f.debug_tuple("Overflow").field(item).finish(),
        }
    }
}

impl<T> fmt::Display for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushError::Overflow(_) => f.write_str("ring is full"),
        }
    }
}

impl<T: fmt::Debug> core::error::Error for PushError<T> {}
