//! The spique: a growable double-ended queue over a chain of rings.

use std::cell::RefCell;
use std::mem;
use std::rc::Rc;
use std::task::Waker;

use crate::builder::SpiqueBuilder;
use crate::chain::RingChain;
use crate::error::EnqueueError;
use crate::events::{Event, Listeners};
use crate::transform::{Emitted, Step};

/// Which end of the queue an operation targets.
#[derive(Clone, Copy)]
pub(crate) enum End {
    Head,
    Tail,
}

/// An elastic double-ended queue built from a chain of fixed-size rings.
///
/// Handles are cheap to clone; clones share the same queue. The type is
/// intentionally `!Send`: a spique belongs to one logical thread of control,
/// cooperating with an external async scheduler for [feeding](Spique::feed).
///
/// See the [crate docs](crate) for an overview of the event, transform, and
/// feed layers.
pub struct Spique<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Spique<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

struct Inner<T> {
    chain: RingChain<T>,
    max_items: Option<usize>,
    closed: bool,
    /// Latch for the one-shot closed-and-drained notification.
    drained: bool,
    lifetime_in: u64,
    lifetime_out: u64,
    ttl: Option<u64>,
    pipeline: Vec<Step<T>>,
    listeners: Listeners<T>,
}

impl<T> Inner<T> {
    fn at_capacity(&self) -> bool {
        self.max_items.is_some_and(|max| self.chain.len() >= max)
    }

    /// Arm the closed-and-drained latch if the state has been reached.
    fn drained_event(&mut self, events: &mut Vec<Event>) {
        if self.closed && self.chain.is_empty() && !self.drained {
            self.drained = true;
            events.push(Event::Close);
        }
    }
}

impl<T> Spique<T> {
    /// Create an unbounded queue with [`DEFAULT_RING_SIZE`] rings.
    ///
    /// [`DEFAULT_RING_SIZE`]: crate::DEFAULT_RING_SIZE
    #[must_use]
    pub fn new() -> Self {
        SpiqueBuilder::new().build()
    }

    /// Start building a queue with custom ring size or capacity ceiling.
    #[must_use]
    pub fn builder() -> SpiqueBuilder<T> {
        SpiqueBuilder::new()
    }

    pub(crate) fn with_config(ring_size: usize, max_items: Option<usize>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                chain: RingChain::new(ring_size),
                max_items,
                closed: false,
                drained: false,
                lifetime_in: 0,
                lifetime_out: 0,
                ttl: None,
                pipeline: Vec::new(),
                listeners: Listeners::new(),
            })),
        }
    }

    // -----------------------------------------------------------------------
    // Insertion
    // -----------------------------------------------------------------------

    /// Append a value at the tail.
    ///
    /// Runs the transform pipeline first; every produced output is inserted
    /// individually. Fails with [`EnqueueError::Closed`] once the queue is
    /// closed and [`EnqueueError::Full`] at the `max_items` ceiling, handing
    /// the value back in both cases.
    pub fn enqueue(&self, value: T) -> Result<(), EnqueueError<T>> {
        self.insert(value, End::Tail)
    }

    /// Insert a value at the head.
    ///
    /// Same contract as [`enqueue`](Self::enqueue).
    pub fn enqueue_head(&self, value: T) -> Result<(), EnqueueError<T>> {
        self.insert(value, End::Head)
    }

    fn insert(&self, value: T, end: End) -> Result<(), EnqueueError<T>> {
        {
            let inner = self.inner.borrow();
            if inner.closed {
                return Err(EnqueueError::Closed(value));
            }
            if inner.at_capacity() {
                return Err(EnqueueError::Full(value));
            }
        }

        if self.inner.borrow().pipeline.is_empty() {
            self.insert_one(value, end);
        } else {
            // Outputs already produced are in flight: they are inserted even
            // if a TTL closes the queue partway through.
            for output in self.run_pipeline(value) {
                self.insert_one(output, end);
            }
        }

        Ok(())
    }

    fn insert_one(&self, value: T, end: End) {
        let mut events = Vec::new();
        {
            let mut inner = self.inner.borrow_mut();
            let was_empty = inner.chain.is_empty();
            let was_full = inner.at_capacity();

            match end {
                End::Head => inner.chain.push_front(value),
                End::Tail => inner.chain.push_back(value),
            }
            inner.lifetime_in += 1;

            if was_empty {
                events.push(Event::Ready);
            }
            if !was_full && inner.at_capacity() {
                events.push(Event::Full);
            }
            if let Some(ttl) = inner.ttl {
                if inner.lifetime_in == ttl && !inner.closed {
                    inner.closed = true;
                    events.push(Event::TtlIn);
                }
            }
        }
        self.finish(events);
    }

    /// Run the pipeline on one externally supplied value, oldest step first.
    ///
    /// Steps are moved out of the queue while they run so they may call back
    /// into it.
    fn run_pipeline(&self, value: T) -> Vec<T> {
        let mut steps = mem::take(&mut self.inner.borrow_mut().pipeline);

        let mut current = vec![value];
        for step in steps.iter_mut() {
            let mut next = Vec::with_capacity(current.len());
            for item in current {
                match step(item) {
                    Emitted::Skip => {}
                    Emitted::One(output) => next.push(output),
                    Emitted::Many(outputs) => next.extend(outputs),
                }
            }
            current = next;
        }

        let mut inner = self.inner.borrow_mut();
        let added = mem::replace(&mut inner.pipeline, steps);
        inner.pipeline.extend(added);

        current
    }

    /// Append a pipeline step. Steps run oldest-registered first.
    pub fn transform<F>(&self, step: F)
    where
        F: FnMut(T) -> Emitted<T> + 'static,
    {
        self.inner.borrow_mut().pipeline.push(Box::new(step));
    }

    // -----------------------------------------------------------------------
    // Removal
    // -----------------------------------------------------------------------

    /// Remove and return the head value, or `None` if the queue is empty.
    #[must_use]
    pub fn dequeue(&self) -> Option<T> {
        self.remove(End::Head)
    }

    /// Remove and return the tail value, or `None` if the queue is empty.
    #[must_use]
    pub fn dequeue_tail(&self) -> Option<T> {
        self.remove(End::Tail)
    }

    fn remove(&self, end: End) -> Option<T> {
        let mut events = Vec::new();
        let value = {
            let mut inner = self.inner.borrow_mut();
            let was_full = inner.at_capacity();

            let value = match end {
                End::Head => inner.chain.pop_front(),
                End::Tail => inner.chain.pop_back(),
            }?;
            inner.lifetime_out += 1;

            if inner.chain.is_empty() {
                events.push(Event::Empty);
                inner.drained_event(&mut events);
            }
            if was_full && !inner.at_capacity() && !inner.closed {
                events.push(Event::Space);
            }
            if let Some(ttl) = inner.ttl {
                if inner.lifetime_out == ttl {
                    events.push(Event::TtlOut);
                }
            }

            value
        };
        self.finish(events);
        Some(value)
    }

    /// Clone of the head value, or `None` if the queue is empty.
    #[must_use]
    pub fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.borrow().chain.peek_front().cloned()
    }

    /// Clone of the tail value, or `None` if the queue is empty.
    #[must_use]
    pub fn peek_tail(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.borrow().chain.peek_back().cloned()
    }

    /// Apply `read` to the head value without removing it.
    pub fn peek_with<R>(&self, read: impl FnOnce(&T) -> R) -> Option<R> {
        self.inner.borrow().chain.peek_front().map(read)
    }

    /// Apply `read` to the tail value without removing it.
    pub fn peek_tail_with<R>(&self, read: impl FnOnce(&T) -> R) -> Option<R> {
        self.inner.borrow().chain.peek_back().map(read)
    }

    /// One-shot draining iterator: dequeues from the head until empty.
    ///
    /// Draining is destructive and not restartable; items removed by the
    /// iterator are gone from the queue.
    pub fn drain(&self) -> Drain<T> {
        Drain {
            queue: self.clone(),
        }
    }

    // -----------------------------------------------------------------------
    // Closure
    // -----------------------------------------------------------------------

    /// Close the queue: further direct insertion fails with
    /// [`EnqueueError::Closed`].
    ///
    /// Closing is monotonic and idempotent. If the queue is already empty
    /// the one-shot [`Event::Close`] notification fires immediately;
    /// otherwise it fires when the last item is dequeued.
    pub fn close(&self) {
        let mut events = Vec::new();
        {
            let mut inner = self.inner.borrow_mut();
            inner.closed = true;
            inner.drained_event(&mut events);
        }
        self.finish(events);
    }

    /// Close the queue automatically once `ttl` items have been inserted
    /// over its lifetime.
    ///
    /// If the lifetime-in counter has already reached `ttl` the queue closes
    /// now and [`Event::TtlIn`] fires; if the lifetime-out counter has
    /// already reached it, [`Event::TtlOut`] fires.
    pub fn close_after(&self, ttl: u64) {
        let mut events = Vec::new();
        {
            let mut inner = self.inner.borrow_mut();
            inner.ttl = Some(ttl);
            if inner.lifetime_in >= ttl && !inner.closed {
                inner.closed = true;
                events.push(Event::TtlIn);
            }
            if inner.lifetime_out >= ttl {
                events.push(Event::TtlOut);
            }
            inner.drained_event(&mut events);
        }
        self.finish(events);
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    /// Register a persistent handler for `event`.
    ///
    /// If the queue is already in the state the event represents, the
    /// handler fires immediately; it remains registered for future
    /// transitions either way, so late subscribers never miss a
    /// currently-true condition.
    pub fn on<F>(&self, event: Event, mut handler: F)
    where
        F: FnMut(&Spique<T>) + 'static,
    {
        if self.state_matches(event) {
            handler(self);
        }
        self.inner.borrow_mut().listeners.push(event, Box::new(handler));
    }

    fn state_matches(&self, event: Event) -> bool {
        let inner = self.inner.borrow();
        match event {
            Event::Ready => !inner.chain.is_empty(),
            Event::Empty => inner.chain.is_empty(),
            Event::Full => inner.at_capacity(),
            Event::Space => !inner.closed && !inner.at_capacity(),
            Event::Close => inner.closed && inner.chain.is_empty(),
            Event::TtlIn => inner.ttl.is_some_and(|ttl| inner.lifetime_in >= ttl),
            Event::TtlOut => inner.ttl.is_some_and(|ttl| inner.lifetime_out >= ttl),
        }
    }

    /// Wake parked feed tasks, then fire handlers for each event in order.
    fn finish(&self, events: Vec<Event>) {
        let wakers = self.inner.borrow_mut().listeners.take_wakers();
        for waker in wakers {
            waker.wake();
        }
        for event in events {
            self.emit(event);
        }
    }

    /// Fire the handlers for one event. Handlers are taken out of the queue
    /// while they run so they may call back into it.
    fn emit(&self, event: Event) {
        let mut handlers = self.inner.borrow_mut().listeners.take(event);
        for handler in handlers.iter_mut() {
            handler(self);
        }
        self.inner.borrow_mut().listeners.restore(event, handlers);
    }

    pub(crate) fn register_waker(&self, waker: &Waker) {
        self.inner.borrow_mut().listeners.register_waker(waker);
    }

    // -----------------------------------------------------------------------
    // Attributes
    // -----------------------------------------------------------------------

    /// Number of items currently queued.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().chain.len()
    }

    /// True if no items are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().chain.is_empty()
    }

    /// True if the item count has reached the `max_items` ceiling.
    ///
    /// An unbounded queue is never full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.inner.borrow().at_capacity()
    }

    /// Remaining free slots under `max_items`, or `None` when unbounded.
    #[must_use]
    pub fn free(&self) -> Option<usize> {
        let inner = self.inner.borrow();
        inner.max_items.map(|max| max.saturating_sub(inner.chain.len()))
    }

    /// Currently allocated capacity: rings in the chain times ring size.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.borrow().chain.capacity()
    }

    /// Configured capacity ceiling, or `None` when unbounded.
    #[must_use]
    pub fn max_items(&self) -> Option<usize> {
        self.inner.borrow().max_items
    }

    /// Fixed capacity of every allocated ring.
    #[must_use]
    pub fn ring_size(&self) -> usize {
        self.inner.borrow().chain.ring_size()
    }

    /// Number of rings currently in the chain.
    #[must_use]
    pub fn ring_count(&self) -> usize {
        self.inner.borrow().chain.ring_count()
    }

    /// Total items inserted over the queue's lifetime.
    #[must_use]
    pub fn lifetime_in(&self) -> u64 {
        self.inner.borrow().lifetime_in
    }

    /// Total items removed over the queue's lifetime.
    #[must_use]
    pub fn lifetime_out(&self) -> u64 {
        self.inner.borrow().lifetime_out
    }

    /// Configured TTL threshold on the lifetime counters, if any.
    #[must_use]
    pub fn ttl(&self) -> Option<u64> {
        self.inner.borrow().ttl
    }

    /// True once the queue has been closed. Monotonic.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.inner.borrow().closed
    }

    /// True once the queue is closed and fully drained.
    #[must_use]
    pub fn is_fully_closed(&self) -> bool {
        let inner = self.inner.borrow();
        inner.closed && inner.chain.is_empty()
    }
}

impl<T> Default for Spique<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for Spique<T> {
    type Item = T;
    type IntoIter = Drain<T>;

    fn into_iter(self) -> Drain<T> {
        Drain { queue: self }
    }
}

/// One-shot draining iterator over a [`Spique`].
///
/// Returned by [`Spique::drain`]; dequeues from the head until the queue is
/// empty.
pub struct Drain<T> {
    queue: Spique<T>,
}

impl<T> Iterator for Drain<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.dequeue()
    }
}
