//! Growable block of fixed-width byte elements.

use log::debug;

use crate::checked;
use crate::config::Config;
use crate::error::{Error, Result};

/// An owned block of `capacity * elem_size` bytes plus a logical length.
///
/// `RawBuffer` knows nothing about element order; it only grows. The ring
/// queue, the stack and the bool buffer are all built on top of it.
#[derive(Clone, Debug)]
pub struct RawBuffer {
    bytes: Vec<u8>,
    elem_size: usize,
    len: usize,
    capacity: usize,
    limit: usize,
}

impl RawBuffer {
    /// Allocates a buffer as described by `config`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a malformed config, `OutOfMemory` if the initial
    /// block cannot be allocated.
    pub fn with_config(config: &Config) -> Result<RawBuffer> {
        config.validate()?;
        let limit = config.capacity_limit();
        let bytes = allocate(checked::try_mul(config.initial_capacity, config.elem_size)?)?;
        Ok(RawBuffer {
            bytes,
            elem_size: config.elem_size,
            len: 0,
            capacity: config.initial_capacity,
            limit,
        })
    }

    /// Allocates an empty buffer sharing this buffer's element size and limit.
    pub(crate) fn empty_like(&self, capacity: usize) -> Result<RawBuffer> {
        if capacity > self.limit {
            return Err(Error::CapacityExhausted {
                capacity: self.capacity,
            });
        }
        let bytes = allocate(checked::try_mul(capacity, self.elem_size)?)?;
        Ok(RawBuffer {
            bytes,
            elem_size: self.elem_size,
            len: 0,
            capacity,
            limit: self.limit,
        })
    }

    /// Bytes per element.
    #[inline]
    pub fn elem_size(&self) -> usize {
        self.elem_size
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated element slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Largest capacity growth may reach.
    #[inline]
    pub fn max_capacity(&self) -> usize {
        self.limit
    }

    #[inline]
    pub(crate) fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.capacity);
        self.len = len;
    }

    /// Makes sure slot `needed` exists.
    ///
    /// Does nothing when `needed < capacity`. Otherwise the capacity doubles
    /// until it covers `needed`, clamped to the element limit. Existing bytes
    /// keep their offsets; new slots are appended at the physical end.
    ///
    /// # Errors
    ///
    /// `CapacityExhausted` if the limit does not leave room for `needed`,
    /// `OutOfMemory` if reallocation fails. The buffer is unchanged on error.
    pub fn ensure_capacity(&mut self, needed: usize) -> Result<()> {
        if needed < self.capacity {
            return Ok(());
        }
        let capacity = self.grown_capacity(needed)?;
        self.reallocate(capacity)
    }

    fn grown_capacity(&self, needed: usize) -> Result<usize> {
        let limit = self.limit;
        if self.capacity >= limit || needed >= limit {
            debug!(
                "refusing growth past {} elements of {} bytes (needed slot {})",
                limit, self.elem_size, needed
            );
            return Err(Error::CapacityExhausted {
                capacity: self.capacity,
            });
        }
        let mut capacity = self.capacity;
        while needed >= capacity {
            capacity = match checked::try_mul(capacity, 2) {
                Ok(doubled) if doubled <= limit => doubled,
                _ => limit,
            };
        }
        Ok(capacity)
    }

    fn reallocate(&mut self, capacity: usize) -> Result<()> {
        let total = checked::try_mul(capacity, self.elem_size)?;
        let additional = total - self.bytes.len();
        self.bytes
            .try_reserve_exact(additional)
            .map_err(|_| Error::OutOfMemory { bytes: total })?;
        self.bytes.resize(total, 0);
        debug!(
            "grew buffer from {} to {} elements of {} bytes",
            self.capacity, capacity, self.elem_size
        );
        self.capacity = capacity;
        Ok(())
    }

    /// Bytes of physical slot `slot`.
    #[inline]
    pub fn slot(&self, slot: usize) -> &[u8] {
        debug_assert!(slot < self.capacity);
        let start = slot * self.elem_size;
        &self.bytes[start..start + self.elem_size]
    }

    /// Mutable bytes of physical slot `slot`.
    #[inline]
    pub fn slot_mut(&mut self, slot: usize) -> &mut [u8] {
        debug_assert!(slot < self.capacity);
        let start = slot * self.elem_size;
        &mut self.bytes[start..start + self.elem_size]
    }

    /// Bytes of the physical slots `start..start + len`.
    #[inline]
    pub fn slots(&self, start: usize, len: usize) -> &[u8] {
        debug_assert!(start + len <= self.capacity);
        &self.bytes[start * self.elem_size..(start + len) * self.elem_size]
    }

    /// Mutable bytes of the physical slots `start..start + len`.
    #[inline]
    pub fn slots_mut(&mut self, start: usize, len: usize) -> &mut [u8] {
        debug_assert!(start + len <= self.capacity);
        &mut self.bytes[start * self.elem_size..(start + len) * self.elem_size]
    }

    /// Moves `len` slots from `src` to `dst`; the ranges may overlap.
    #[inline]
    pub fn copy(&mut self, dst: usize, src: usize, len: usize) {
        debug_assert!(
            dst + len <= self.capacity,
            "cpy dst={} src={} len={} cap={}",
            dst,
            src,
            len,
            self.capacity
        );
        debug_assert!(
            src + len <= self.capacity,
            "cpy dst={} src={} len={} cap={}",
            dst,
            src,
            len,
            self.capacity
        );
        let size = self.elem_size;
        self.bytes
            .copy_within(src * size..(src + len) * size, dst * size);
    }

    /// The whole block, live or not.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

fn allocate(total: usize) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(total)
        .map_err(|_| Error::OutOfMemory { bytes: total })?;
    bytes.resize(total, 0);
    Ok(bytes)
}
