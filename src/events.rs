//! State-transition events and listener bookkeeping.
//!
//! Handlers are persistent: they fire on every matching transition until the
//! queue is dropped. Registration performs an explicit state check, so a
//! handler whose condition already holds fires immediately; no history is
//! replayed.

use std::mem;
use std::task::Waker;

use crate::spique::Spique;

/// A state transition observable on a [`Spique`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// The queue went from empty to non-empty.
    Ready,
    /// The queue drained back to empty.
    Empty,
    /// The item count reached the `max_items` ceiling.
    Full,
    /// The queue left the full state. Never signalled once closed: a closed
    /// queue admits no further insertion, so space is meaningless.
    Space,
    /// The queue is closed and fully drained. Fires exactly once.
    Close,
    /// The lifetime-in counter reached the TTL threshold.
    TtlIn,
    /// The lifetime-out counter reached the TTL threshold.
    TtlOut,
}

impl Event {
    pub(crate) const COUNT: usize = 7;

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

pub(crate) type Handler<T> = Box<dyn FnMut(&Spique<T>)>;

/// Per-event handler lists plus the wakers of parked feed tasks.
pub(crate) struct Listeners<T> {
    handlers: [Vec<Handler<T>>; Event::COUNT],
    wakers: Vec<Waker>,
}

impl<T> Listeners<T> {
    pub(crate) fn new() -> Self {
        Self {
            handlers: core::array::from_fn(|_| Vec::new()),
            wakers: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, event: Event, handler: Handler<T>) {
        self.handlers[event.index()].push(handler);
    }

    /// Take the handlers for `event` so they can be called without holding
    /// the queue borrow (handlers may call back into the queue).
    pub(crate) fn take(&mut self, event: Event) -> Vec<Handler<T>> {
        mem::take(&mut self.handlers[event.index()])
    }

    /// Put taken handlers back, ahead of any registered while they ran.
    pub(crate) fn restore(&mut self, event: Event, mut taken: Vec<Handler<T>>) {
        let slot = &mut self.handlers[event.index()];
        taken.append(slot);
        *slot = taken;
    }

    /// Park a feed task; it is woken on the next state transition and
    /// re-checks its predicate.
    pub(crate) fn register_waker(&mut self, waker: &Waker) {
        if !self.wakers.iter().any(|parked| parked.will_wake(waker)) {
            self.wakers.push(waker.clone());
        }
    }

    pub(crate) fn take_wakers(&mut self) -> Vec<Waker> {
        mem::take(&mut self.wakers)
    }
}
