//! An elastic double-ended queue built from a chain of fixed-size rings.
//!
//! A [`Spique`] presents a single logical deque of unbounded (or optionally
//! bounded) size. Storage is a chain of fixed-capacity rings
//! ([`spique_ring::Ring`]): capacity grows and shrinks in ring-sized
//! increments as items flow through, so steady-state throughput allocates
//! nothing once the chain has warmed up.
//!
//! On top of the deque sit three cooperating layers:
//!
//! - **Events** ([`Event`]): handlers for state transitions (became
//!   non-empty, became empty, full, space available, closed-and-drained, TTL
//!   thresholds). A handler registered while its condition already holds
//!   fires immediately, so late subscribers never miss a currently-true
//!   state.
//! - **Transforms** ([`Emitted`]): a pipeline of steps applied once to every
//!   externally supplied value before insertion; a step maps one input to
//!   one, zero, or many outputs.
//! - **Feeding** ([`Source`]): streaming ingestion from an iterator, an
//!   asynchronous stream, or another queue, with automatic backpressure
//!   (pulls suspend while the destination is full) and closure propagation
//!   from queue sources.
//!
//! The queue is single-threaded by design: one logical thread of control
//! cooperating with an external async scheduler. Handles are cheap to clone
//! and `!Send`.
//!
//! ```
//! use spique::Spique;
//!
//! let queue = Spique::builder().max_items(10).ring_size(3).build();
//!
//! queue.enqueue(2).unwrap();
//! queue.enqueue_head(1).unwrap();
//! queue.enqueue(3).unwrap();
//!
//! assert_eq!(queue.peek(), Some(1));
//! assert_eq!(queue.dequeue(), Some(1));
//! assert_eq!(queue.dequeue_tail(), Some(3));
//! assert_eq!(queue.len(), 1);
//! ```

#![warn(missing_docs)]

mod builder;
mod chain;
mod error;
mod events;
mod feed;
mod spique;
mod transform;

#[cfg(test)]
mod tests;

pub use builder::{DEFAULT_RING_SIZE, SpiqueBuilder};
pub use error::{EnqueueError, FeedError};
pub use events::Event;
pub use feed::Source;
pub use spique::{Drain, Spique};
pub use transform::Emitted;

pub use spique_ring::{PushError, Ring};
