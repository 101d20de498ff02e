//! A fixed-capacity double-ended circular buffer.
//!
//! [`Ring`] stores up to `capacity` items in a single allocation and supports
//! O(1) push, pop, and peek at both ends. It never grows: a push into a full
//! ring is rejected and the item handed back. This is the storage unit the
//! `spique` crate chains together to build an elastic deque.
//!
//! ```
//! use spique_ring::Ring;
//!
//! let mut ring: Ring<i32> = Ring::new(4);
//!
//! ring.try_push_back(2).unwrap();
//! ring.try_push_back(3).unwrap();
//! ring.try_push_front(1).unwrap();
//!
//! assert_eq!(ring.pop_front(), Some(1));
//! assert_eq!(ring.pop_back(), Some(3));
//! assert_eq!(ring.len(), 1);
//! ```

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

mod error;
mod ring;


pub use error::PushError;
pub use ring::Ring;
