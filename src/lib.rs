//! Growable containers of fixed-width byte elements.
//!
//! Every container stores opaque elements of `elem_size` bytes, chosen at
//! creation, in one owned block that doubles when it runs out of room.
//!
//! - [`RingQueue`] is a ring buffer. Pushes and pops at either end are
//!   `O(1)` amortized, indexing is `O(1)`, and inserting or removing in the
//!   middle moves only the shorter side of the ring. Growing a ring whose
//!   live region wraps around the end of the block keeps the logical order.
//! - [`Stack`] is the linear sibling: a plain growable array.
//! - [`BoolBuffer`] packs booleans eight to a byte, most significant bit first.
//! - [`TypedQueue`] and [`TypedStack`] store any `bytemuck::Pod` type by value.
//!
//! Every fallible operation returns [`Result`]; on error the container is
//! left exactly as it was. Elements owning outside resources are released,
//! copied and compared through the callback traits in [`element`].
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ringvec = "0.1"
//! ```
//!
//! # Examples
//! ```
//! use ringvec::RingQueue;
//!
//! let mut queue = RingQueue::new(4, 2).unwrap();
//! assert_eq!(queue.capacity(), 2);
//! assert_eq!(queue.len(), 0);
//!
//! queue.push_back(&1u32.to_le_bytes()).unwrap();
//! queue.push_back(&2u32.to_le_bytes()).unwrap();
//! queue.push_back(&3u32.to_le_bytes()).unwrap();
//! assert_eq!(queue.len(), 3);
//! assert_eq!(queue.capacity(), 4);
//!
//! let mut out = [0; 4];
//! queue.pop_front(Some(&mut out)).unwrap();
//! assert_eq!(u32::from_le_bytes(out), 1);
//! ```
//!
//! # Insert & Remove
//! ```
//! use ringvec::RingQueue;
//!
//! let mut queue = RingQueue::new(1, 8).unwrap();
//!
//! queue.push_back(&[11]).unwrap();
//! queue.push_back(&[13]).unwrap();
//! queue.insert(1, &[12]).unwrap();
//! queue.remove(0, None).unwrap();
//!
//! assert_eq!(&queue[0], &[12]);
//! assert_eq!(&queue[1], &[13]);
//! ```
//!
//! # Limits & Errors
//! ```
//! use ringvec::{Config, Error, RingQueue};
//!
//! let config = Config::new(1, 2).with_max_capacity(3);
//! let mut queue = RingQueue::with_config(&config).unwrap();
//! for value in 0..3 {
//!     queue.push_back(&[value]).unwrap();
//! }
//! assert_eq!(queue.push_back(&[3]), Err(Error::CapacityExhausted { capacity: 3 }));
//! assert_eq!(queue.get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
//! assert_eq!(format!("{:?}", queue), "[[0], [1], [2]]");
//! ```
//!
//! # Logging
//!
//! Reallocations and refused growth are reported through the `log` facade
//! at `debug` level, ring re-linearization at `trace` level.

#![deny(missing_docs)]

mod bits;
mod buffer;
mod checked;
mod config;
pub mod element;
pub mod error;
mod logic;
mod queue;
mod stack;
mod typed;
mod utils;

pub use crate::bits::BoolBuffer;
pub use crate::buffer::RawBuffer;
pub use crate::checked::{try_add, try_mul};
pub use crate::config::Config;
pub use crate::element::{Bytewise, Comparator, Copier, Destructor};
pub use crate::error::{CallbackError, Error, Result};
pub use crate::queue::{Iter, RangeArgument, RingQueue};
pub use crate::stack::Stack;
pub use crate::typed::{TypedQueue, TypedStack};
