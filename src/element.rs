//! Caller supplied element callbacks.
//!
//! The containers never look inside an element. Elements that own outside
//! resources (a pointer to a heap string, a file handle, ...) are released,
//! duplicated and compared through these traits. Any failure is reported as
//! [`Error::CallbackFailed`](crate::Error::CallbackFailed).
//!
//! Each trait is implemented for matching closures, so a closure with an
//! annotated signature can be passed wherever a callback is expected:
//!
//! ```
//! use ringvec::{CallbackError, RingQueue};
//!
//! let mut queue = RingQueue::new(1, 4).unwrap();
//! queue.push_back(&[7]).unwrap();
//!
//! let mut released = Vec::new();
//! let mut release = |element: &mut [u8]| -> Result<(), CallbackError> {
//!     released.push(element[0]);
//!     Ok(())
//! };
//! queue.clear_with(&mut release).unwrap();
//! assert_eq!(released, vec![7]);
//! ```

use std::cmp::Ordering;

use crate::error::CallbackError;

/// Releases whatever a live element owns before the slot is discarded.
pub trait Destructor {
    /// Called once per element leaving the container.
    fn destroy(&mut self, element: &mut [u8]) -> Result<(), CallbackError>;
}

/// Duplicates an element into a fresh slot.
pub trait Copier {
    /// Writes a copy of `src` into `dst`. Both are `elem_size` bytes long.
    fn copy(&mut self, dst: &mut [u8], src: &[u8]) -> Result<(), CallbackError>;
}

/// Orders two elements.
pub trait Comparator {
    /// Compares `a` against `b`.
    fn compare(&mut self, a: &[u8], b: &[u8]) -> Result<Ordering, CallbackError>;
}

impl<F> Destructor for F
    where F: FnMut(&mut [u8]) -> Result<(), CallbackError>
{
    #[inline]
    fn destroy(&mut self, element: &mut [u8]) -> Result<(), CallbackError> {
        self(element)
    }
}

impl<F> Copier for F
    where F: FnMut(&mut [u8], &[u8]) -> Result<(), CallbackError>
{
    #[inline]
    fn copy(&mut self, dst: &mut [u8], src: &[u8]) -> Result<(), CallbackError> {
        self(dst, src)
    }
}

impl<F> Comparator for F
    where F: FnMut(&[u8], &[u8]) -> Result<Ordering, CallbackError>
{
    #[inline]
    fn compare(&mut self, a: &[u8], b: &[u8]) -> Result<Ordering, CallbackError> {
        self(a, b)
    }
}

/// Compares elements byte by byte.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bytewise;

impl Comparator for Bytewise {
    #[inline]
    fn compare(&mut self, a: &[u8], b: &[u8]) -> Result<Ordering, CallbackError> {
        Ok(a.cmp(b))
    }
}

impl Copier for Bytewise {
    #[inline]
    fn copy(&mut self, dst: &mut [u8], src: &[u8]) -> Result<(), CallbackError> {
        dst.copy_from_slice(src);
        Ok(())
    }
}
