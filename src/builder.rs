//! Builder pattern for constructing a spique.

use core::marker::PhantomData;

use crate::spique::Spique;

/// Per-ring capacity used when none is configured.
pub const DEFAULT_RING_SIZE: usize = 1024;

/// Builder for constructing a [`Spique`].
///
/// Created via [`Spique::builder()`]. Configure options with chained
/// methods, then call [`.build()`](Self::build) to construct the queue.
///
/// # Example
///
/// ```
/// use spique::Spique;
///
/// // Default: unbounded, 1024-slot rings
/// let unbounded: Spique<u64> = Spique::builder().build();
///
/// // Bounded, small rings
/// let bounded: Spique<u64> = Spique::builder().max_items(10).ring_size(3).build();
/// assert_eq!(bounded.free(), Some(10));
/// ```
pub struct SpiqueBuilder<T> {
    ring_size: usize,
    max_items: Option<usize>,
    _marker: PhantomData<T>,
}

impl<T> SpiqueBuilder<T> {
    pub(crate) fn new() -> Self {
        Self {
            ring_size: DEFAULT_RING_SIZE,
            max_items: None,
            _marker: PhantomData,
        }
    }

    /// Set the fixed capacity of every allocated ring.
    ///
    /// # Panics
    ///
    /// Panics if `ring_size` is zero.
    #[must_use]
    pub fn ring_size(mut self, ring_size: usize) -> Self {
        assert!(ring_size > 0, "ring_size must be > 0");
        self.ring_size = ring_size;
        self
    }

    /// Set the capacity ceiling. Zero means unbounded.
    #[must_use]
    pub fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = (max_items > 0).then_some(max_items);
        self
    }

    /// Build the [`Spique`].
    pub fn build(self) -> Spique<T> {
        Spique::with_config(self.ring_size, self.max_items)
    }
}
