//! Streaming ingestion of external sources with backpressure.
//!
//! A feed is a single asynchronous task that pulls values from a
//! [`Source`] and inserts them into the destination queue whenever space is
//! available. At most one pull is in flight: a value is fully resolved and
//! inserted before the next pull is issued, so source order is preserved.
//!
//! The task suspends in two places only: when the destination is full (it
//! parks until the next space transition) and when the source itself has
//! nothing to yield. Destination closure is terminal: a parked or
//! mid-insert feed fails with [`FeedError::Closed`] rather than dropping
//! values silently.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::stream::{LocalBoxStream, Stream, StreamExt};

use crate::error::{ClosedSnafu, EnqueueError, FeedError};
use crate::spique::{End, Spique};

/// An external producer that can be fed into a [`Spique`].
///
/// The three variants share one driving loop; only the pull step differs.
pub enum Source<T> {
    /// A synchronous iterator, pulled once per free slot.
    Iter(Box<dyn Iterator<Item = T>>),
    /// An asynchronous stream; each value is awaited before insertion.
    Stream(LocalBoxStream<'static, T>),
    /// Another queue. The feed drains it as values arrive and closes the
    /// destination once the source is fully closed and drained.
    Queue(Spique<T>),
}

impl<T> Source<T> {
    /// Wrap an iterator.
    pub fn iter<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Source::Iter(Box::new(values.into_iter()))
    }

    /// Wrap an asynchronous stream.
    pub fn stream<S>(stream: S) -> Self
    where
        S: Stream<Item = T> + 'static,
    {
        Source::Stream(stream.boxed_local())
    }

    /// Wrap another queue.
    pub fn queue(queue: Spique<T>) -> Self {
        Source::Queue(queue)
    }
}

impl<T> From<Spique<T>> for Source<T> {
    fn from(queue: Spique<T>) -> Self {
        Source::Queue(queue)
    }
}

/// Future a parked feed task waits on. Every queue transition wakes the
/// registered wakers and the task re-checks its predicate.
enum Wait<'a, T> {
    /// Destination has room for an insertion, or has been closed.
    Space(&'a Spique<T>),
    /// Source queue has a value to pull, is fully closed and drained, or the
    /// destination closed underneath the feed. Registers on both queues so
    /// destination closure reaches a task parked on an empty source.
    Ready {
        source: &'a Spique<T>,
        destination: &'a Spique<T>,
    },
}

impl<T> Future for Wait<'_, T> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        match *self {
            Wait::Space(queue) => {
                if queue.is_closed() || !queue.is_full() {
                    return Poll::Ready(());
                }
                queue.register_waker(cx.waker());
            }
            Wait::Ready {
                source,
                destination,
            } => {
                if destination.is_closed() || !source.is_empty() || source.is_fully_closed() {
                    return Poll::Ready(());
                }
                source.register_waker(cx.waker());
                destination.register_waker(cx.waker());
            }
        }
        Poll::Pending
    }
}

impl<T> Spique<T> {
    /// Feed a source into the tail of this queue.
    ///
    /// Resolves with the number of values delivered once the source is
    /// exhausted, or with [`FeedError::Closed`] if this queue closes while
    /// the feed still has work pending. For a [`Source::Queue`] the feed
    /// additionally closes this queue when the source becomes fully closed
    /// and drained.
    ///
    /// The returned future must be driven by the caller's single-threaded
    /// executor; the queue remains fully usable while the feed is parked.
    pub async fn feed(&self, source: impl Into<Source<T>>) -> Result<u64, FeedError> {
        self.drive(source.into(), End::Tail).await
    }

    /// Feed a source into the head of this queue.
    ///
    /// Same contract as [`feed`](Self::feed), inserting each pulled value at
    /// the head.
    pub async fn feed_head(&self, source: impl Into<Source<T>>) -> Result<u64, FeedError> {
        self.drive(source.into(), End::Head).await
    }

    async fn drive(&self, mut source: Source<T>, end: End) -> Result<u64, FeedError> {
        let mut delivered = 0u64;
        let mut pending: Option<T> = None;

        loop {
            Wait::Space(self).await;
            if self.is_closed() {
                return ClosedSnafu.fail();
            }

            let value = match pending.take() {
                Some(value) => value,
                None => match self.pull(&mut source).await? {
                    Some(value) => value,
                    None => {
                        // A queue source ends only by closing; propagate.
                        if matches!(source, Source::Queue(_)) {
                            self.close();
                        }
                        return Ok(delivered);
                    }
                },
            };

            let inserted = match end {
                End::Head => self.enqueue_head(value),
                End::Tail => self.enqueue(value),
            };
            match inserted {
                Ok(()) => delivered += 1,
                // Filled up while the pull was in flight; hold the value and
                // wait for space again.
                Err(EnqueueError::Full(value)) => pending = Some(value),
                Err(EnqueueError::Closed(_)) => return ClosedSnafu.fail(),
            }
        }
    }

    /// Pull the next value from the source, suspending as needed.
    ///
    /// A pull parked on an empty queue source fails with
    /// [`FeedError::Closed`] if this queue (the destination) closes first.
    async fn pull(&self, source: &mut Source<T>) -> Result<Option<T>, FeedError> {
        match source {
            Source::Iter(values) => Ok(values.next()),
            Source::Stream(stream) => Ok(stream.next().await),
            Source::Queue(queue) => loop {
                if self.is_closed() {
                    break ClosedSnafu.fail();
                }
                if let Some(value) = queue.dequeue() {
                    break Ok(Some(value));
                }
                if queue.is_fully_closed() {
                    break Ok(None);
                }
                Wait::Ready {
                    source: queue,
                    destination: self,
                }
                .await;
            },
        }
    }
}
