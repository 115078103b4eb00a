//! Packed storage for booleans, eight to a byte.

use crate::buffer::RawBuffer;
use crate::checked;
use crate::config::Config;
use crate::error::{Error, Result};

const BITS: usize = 8;

/// A growable sequence of booleans packed most significant bit first.
///
/// Bit `i` lives in byte `i / 8` at bit position `7 - i % 8`, so the first
/// boolean is the high bit of the first byte. Capacity is counted in bits
/// and is always a multiple of 8.
///
/// ```
/// use ringvec::BoolBuffer;
///
/// let mut bits = BoolBuffer::new(3).unwrap();
/// assert_eq!(bits.capacity(), 8);
/// bits.push(true).unwrap();
/// bits.push(false).unwrap();
/// bits.push(true).unwrap();
/// assert_eq!(bits.as_bytes(), &[0b1010_0000]);
/// ```
#[derive(Clone)]
pub struct BoolBuffer {
    buf: RawBuffer,
    len: usize,
}

impl BoolBuffer {
    /// Creates an empty buffer with room for at least `capacity_bits`
    /// booleans.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `capacity_bits` is zero, `RangeExceeded` if
    /// rounding it up overflows, `OutOfMemory` if the block cannot be
    /// allocated.
    pub fn new(capacity_bits: usize) -> Result<BoolBuffer> {
        let bytes = checked::try_add(capacity_bits, BITS - 1)? / BITS;
        Ok(BoolBuffer {
            buf: RawBuffer::with_config(&Config::new(1, bytes))?,
            len: 0,
        })
    }

    /// Number of booleans stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer holds no booleans.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of bits allocated, a multiple of 8.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity().saturating_mul(BITS)
    }

    /// Makes sure bit `needed` exists, growing the byte block if it does not.
    ///
    /// # Errors
    ///
    /// `CapacityExhausted` or `OutOfMemory`; the buffer is untouched.
    pub fn ensure_capacity(&mut self, needed: usize) -> Result<()> {
        self.buf.ensure_capacity(needed / BITS)
    }

    /// Appends a boolean.
    ///
    /// # Errors
    ///
    /// A growth error; the buffer is untouched.
    pub fn push(&mut self, value: bool) -> Result<()> {
        let index = self.len;
        self.ensure_capacity(index)?;
        self.len += 1;
        self.buf.set_len(self.len.div_ceil(BITS));
        self.write(index, value);
        Ok(())
    }

    /// Removes and returns the last boolean.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` on an empty buffer.
    pub fn pop(&mut self) -> Result<bool> {
        let last = self.len.checked_sub(1).ok_or(Error::out_of_range(0, 0))?;
        let value = self.read(last);
        self.len = last;
        self.buf.set_len(last.div_ceil(BITS));
        Ok(value)
    }

    /// The boolean at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.read(index))
    }

    /// Overwrites the boolean at `index`, leaving its byte neighbours alone.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index >= len()`.
    pub fn set(&mut self, index: usize, value: bool) -> Result<()> {
        self.check_index(index)?;
        self.write(index, value);
        Ok(())
    }

    /// Forgets every boolean. The capacity is kept.
    pub fn clear(&mut self) {
        self.len = 0;
        self.buf.set_len(0);
    }

    /// Iterates the booleans in order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = bool> + ExactSizeIterator + '_ {
        (0..self.len).map(move |index| self.read(index))
    }

    /// The bytes holding the stored booleans. Bits past `len()` in the last
    /// byte are unspecified.
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.slots(0, self.buf.len())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(Error::out_of_range(index, self.len))
        }
    }

    #[inline]
    fn read(&self, index: usize) -> bool {
        let (byte, mask) = locate(index);
        self.buf.slot(byte)[0] & mask != 0
    }

    #[inline]
    fn write(&mut self, index: usize, value: bool) {
        let (byte, mask) = locate(index);
        let slot = &mut self.buf.slot_mut(byte)[0];
        if value {
            *slot |= mask;
        } else {
            *slot &= !mask;
        }
    }
}

/// Byte index and bit mask of boolean `index`.
#[inline]
fn locate(index: usize) -> (usize, u8) {
    (index / BITS, 0x80 >> (index % BITS))
}

impl PartialEq for BoolBuffer {
    fn eq(&self, other: &BoolBuffer) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for BoolBuffer {}

impl std::fmt::Debug for BoolBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
