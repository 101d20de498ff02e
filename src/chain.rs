//! The ring chain: storage layer of the spique.
//!
//! An ordered sequence of rings; the front ring serves head operations and
//! the back ring serves tail operations (for a single ring they coincide).
//! Rings are allocated lazily as an end fills and retired as they empty. One
//! retired ring is retained as a spare to avoid allocation churn under
//! steady-state throughput.

use std::collections::VecDeque;

use spique_ring::Ring;

pub(crate) struct RingChain<T> {
    rings: VecDeque<Ring<T>>,
    spare: Option<Ring<T>>,
    ring_size: usize,
    len: usize,
}

impl<T> RingChain<T> {
    /// Create a chain holding a single empty ring.
    pub(crate) fn new(ring_size: usize) -> Self {
        let mut rings = VecDeque::with_capacity(2);
        rings.push_back(Ring::new(ring_size));

        Self {
            rings,
            spare: None,
            ring_size,
            len: 0,
        }
    }

    fn fresh_ring(&mut self) -> Ring<T> {
        self.spare.take().unwrap_or_else(|| Ring::new(self.ring_size))
    }

    /// Insert at the tail, linking a new ring if the tail ring is full.
    pub(crate) fn push_back(&mut self, mut item: T) {
        if let Some(ring) = self.rings.back_mut() {
            match ring.try_push_back(item) {
                Ok(()) => {
                    self.len += 1;
                    return;
                }
                Err(err) => item = err.into_inner(),
            }
        }

        let mut ring = self.fresh_ring();
        let pushed = ring.try_push_back(item);
        debug_assert!(pushed.is_ok(), "fresh ring rejected a push");
        self.rings.push_back(ring);
        self.len += 1;
    }

    /// Insert at the head, linking a new ring if the head ring is full.
    pub(crate) fn push_front(&mut self, mut item: T) {
        if let Some(ring) = self.rings.front_mut() {
            match ring.try_push_front(item) {
                Ok(()) => {
                    self.len += 1;
                    return;
                }
                Err(err) => item = err.into_inner(),
            }
        }

        let mut ring = self.fresh_ring();
        let pushed = ring.try_push_front(item);
        debug_assert!(pushed.is_ok(), "fresh ring rejected a push");
        self.rings.push_front(ring);
        self.len += 1;
    }

    /// Remove from the head, retiring the head ring if it empties.
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        let item = self.rings.front_mut()?.pop_front()?;
        self.len -= 1;
        if self.rings.len() > 1 && self.rings.front().is_some_and(Ring::is_empty) {
            let retired = self.rings.pop_front();
            self.retire(retired);
        }
        Some(item)
    }

    /// Remove from the tail, retiring the tail ring if it empties.
    pub(crate) fn pop_back(&mut self) -> Option<T> {
        let item = self.rings.back_mut()?.pop_back()?;
        self.len -= 1;
        if self.rings.len() > 1 && self.rings.back().is_some_and(Ring::is_empty) {
            let retired = self.rings.pop_back();
            self.retire(retired);
        }
        Some(item)
    }

    /// Keep one retired ring as the spare; drop the rest.
    fn retire(&mut self, ring: Option<Ring<T>>) {
        if let Some(ring) = ring {
            self.spare.get_or_insert(ring);
        }
    }

    pub(crate) fn peek_front(&self) -> Option<&T> {
        self.rings.front().and_then(Ring::peek_front)
    }

    pub(crate) fn peek_back(&self) -> Option<&T> {
        self.rings.back().and_then(Ring::peek_back)
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn ring_count(&self) -> usize {
        self.rings.len()
    }

    pub(crate) fn ring_size(&self) -> usize {
        self.ring_size
    }

    /// Currently allocated capacity: rings in the chain times ring size.
    pub(crate) fn capacity(&self) -> usize {
        self.rings.len() * self.ring_size
    }
}
