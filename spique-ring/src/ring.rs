//! The fixed-capacity circular buffer.

use alloc::boxed::Box;
use core::mem::MaybeUninit;

use crate::error::PushError;

/// Fixed-capacity double-ended circular buffer.
///
/// Capacity is chosen at construction and never changes. The occupied slots
/// are the `len` positions starting at `head`, wrapping modulo the capacity.
/// Popping moves the value out of its slot, so a vacated slot retains
/// nothing.
pub struct Ring<T> {
    buffer: Box<[MaybeUninit<T>]>,
    head: usize,
    len: usize,
}

impl<T> Ring<T> {
    /// Create a ring with room for `capacity` items.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");

        Self {
            buffer: Box::new_uninit_slice(capacity),
            head: 0,
            len: 0,
        }
    }

    /// Physical slot for the `logical`-th occupied position (0 = front).
    #[inline]
    fn slot(&self, logical: usize) -> usize {
        (self.head + logical) % self.buffer.len()
    }

    /// Push an item at the back.
    ///
    /// Fails with [`PushError::Overflow`] when the ring is full, handing the
    /// item back.
    #[inline]
    pub fn try_push_back(&mut self, item: T) -> Result<(), PushError<T>> {
        if self.len == self.buffer.len() {
            return Err(PushError::Overflow(item));
        }

        let idx = self.slot(self.len);
        self.buffer[idx].write(item);
        self.len += 1;

        Ok(())
    }

    /// Push an item at the front.
    ///
    /// Fails with [`PushError::Overflow`] when the ring is full, handing the
    /// item back.
    #[inline]
    pub fn try_push_front(&mut self, item: T) -> Result<(), PushError<T>> {
        if self.len == self.buffer.len() {
            return Err(PushError::Overflow(item));
        }

        self.head = if self.head == 0 {
            self.buffer.len() - 1
        } else {
            self.head - 1
        };
        self.buffer[self.head].write(item);
        self.len += 1;

        Ok(())
    }

    /// Pop the front item, or `None` if the ring is empty.
    #[inline]
    #[must_use]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let item = unsafe { self.buffer[self.head].assume_init_read() };
        self.head = (self.head + 1) % self.buffer.len();
        self.len -= 1;

        Some(item)
    }

    /// Pop the back item, or `None` if the ring is empty.
    #[inline]
    #[must_use]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let idx = self.slot(self.len - 1);
        self.len -= 1;

        Some(unsafe { self.buffer[idx].assume_init_read() })
    }

    /// Peek at the front item.
    #[inline]
    #[must_use]
    pub fn peek_front(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }

        Some(unsafe { self.buffer[self.head].assume_init_ref() })
    }

    /// Peek at the back item.
    #[inline]
    #[must_use]
    pub fn peek_back(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }

        let idx = self.slot(self.len - 1);
        Some(unsafe { self.buffer[idx].assume_init_ref() })
    }

    /// Number of items in the ring.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Ring capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Remaining free slots.
    #[inline]
    #[must_use]
    pub fn available(&self) -> usize {
        self.buffer.len() - self.len
    }

    /// True if empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if full.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.buffer.len()
    }
}

impl<T> Drop for Ring<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}
