use std::cmp::Ordering;

pub use odds::IndexRange as RangeArgument;

use crate::buffer::RawBuffer;
use crate::config::Config;
use crate::element::{Comparator, Copier, Destructor};
use crate::error::{Error, Result};
use crate::logic::{grow, insert, remove, CircularBuffer};
use crate::utils;

mod iterator_impls;
mod trait_impls;

pub use self::iterator_impls::Iter;

/// `RingQueue` is a growable ring buffer of fixed-width byte elements.
///
/// Elements are opaque `elem_size` byte slices. Logical index 0 is the front
/// (`head`), `len() - 1` the back (`tail`). Pushing to a full queue doubles
/// the slot array and re-linearizes the ring so logical order survives the
/// move. Inserting or removing in the middle shifts whichever side of the
/// index is shorter.
///
/// Slices handed out by `get`, `front`, `iter` and friends borrow the queue,
/// so they cannot outlive the next mutation (which may reallocate).
///
/// # Examples
///
/// ```
/// use ringvec::RingQueue;
///
/// let mut queue = RingQueue::new(2, 4).unwrap();
/// queue.push_back(&[1, 1]).unwrap();
/// queue.push_back(&[3, 3]).unwrap();
/// queue.insert(1, &[2, 2]).unwrap();
///
/// let mut out = [0; 2];
/// queue.pop_front(Some(&mut out)).unwrap();
/// assert_eq!(out, [1, 1]);
/// assert_eq!(queue.get(0).unwrap(), &[2, 2]);
/// assert_eq!(queue.len(), 2);
/// ```
pub struct RingQueue {
    buf: RawBuffer,
    head: usize,
    tail: usize,
}

impl CircularBuffer for RingQueue {
    #[inline]
    fn array_len(&self) -> usize {
        self.buf.capacity()
    }

    #[inline]
    fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    fn head(&self) -> usize {
        self.head
    }

    #[inline]
    fn tail(&self) -> usize {
        self.tail
    }

    #[inline]
    fn set_head(&mut self, head: usize) {
        debug_assert!(head < self.capacity());
        self.head = head;
    }

    #[inline]
    fn set_tail(&mut self, tail: usize) {
        debug_assert!(tail < self.capacity());
        self.tail = tail;
    }

    #[inline]
    fn copy(&mut self, dst: usize, src: usize, len: usize) {
        self.buf.copy(dst, src, len);
    }
}

impl RingQueue {
    /// Creates an empty queue of `elem_size` byte elements with room for
    /// `initial_capacity` of them.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if either argument is zero, `OutOfMemory` if the
    /// block cannot be allocated.
    pub fn new(elem_size: usize, initial_capacity: usize) -> Result<RingQueue> {
        RingQueue::with_config(&Config::new(elem_size, initial_capacity))
    }

    /// Creates an empty queue from a [`Config`].
    ///
    /// # Errors
    ///
    /// As [`Config::validate`], plus `OutOfMemory`.
    pub fn with_config(config: &Config) -> Result<RingQueue> {
        Ok(RingQueue::from_buffer(RawBuffer::with_config(config)?))
    }

    fn from_buffer(buf: RawBuffer) -> RingQueue {
        RingQueue { buf, head: 0, tail: 0 }
    }

    /// Bytes per element.
    #[inline]
    pub fn elem_size(&self) -> usize {
        self.buf.elem_size()
    }

    /// Number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of element slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Largest capacity growth may reach.
    #[inline]
    pub fn max_capacity(&self) -> usize {
        self.buf.max_capacity()
    }

    /// Physical slot of the front element.
    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Physical slot of the back element (equal to `head()` when empty).
    #[inline]
    pub fn tail(&self) -> usize {
        self.tail
    }

    /// Physical slot holding logical index `index`.
    ///
    /// Computed in constant time; equal to stepping forward `index` slots
    /// from the head with wraparound.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index >= len()`.
    pub fn locate(&self, index: usize) -> Result<usize> {
        self.check_index(index)?;
        Ok(CircularBuffer::locate(self, index))
    }

    /// Slot after `pos`, wrapping at the end of the array.
    #[inline]
    pub fn incr(&self, pos: usize) -> usize {
        utils::incr(pos, self.capacity())
    }

    /// Slot before `pos`, wrapping at the start of the array.
    #[inline]
    pub fn decr(&self, pos: usize) -> usize {
        utils::decr(pos, self.capacity())
    }

    /// Makes sure slot `needed` can be filled, growing the ring if
    /// `needed >= capacity()`.
    ///
    /// Logical order is preserved across the reallocation even if the live
    /// region wrapped around the old end of the array.
    ///
    /// # Errors
    ///
    /// `CapacityExhausted` or `OutOfMemory`; the queue is untouched.
    pub fn ensure_capacity(&mut self, needed: usize) -> Result<()> {
        let old_capacity = self.capacity();
        if needed < old_capacity {
            return Ok(());
        }
        self.buf.ensure_capacity(needed)?;
        grow::handle_capacity_increase(self, old_capacity);
        self.debug_check();
        Ok(())
    }

    /// Appends an element at the back.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a wrongly sized element, or a growth error.
    pub fn push_back(&mut self, element: &[u8]) -> Result<()> {
        let len = self.len();
        self.insert(len, element)
    }

    /// Prepends an element at the front.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a wrongly sized element, or a growth error.
    pub fn push_front(&mut self, element: &[u8]) -> Result<()> {
        self.insert(0, element)
    }

    /// Inserts an element so that it ends up at logical `index`.
    ///
    /// Moves `min(index, len - index)` elements. Index `len()` appends.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index > len()`, `InvalidArgument` for a wrongly
    /// sized element, or a growth error. The queue is untouched on error.
    pub fn insert(&mut self, index: usize, element: &[u8]) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(Error::out_of_range(index, len));
        }
        self.check_element("element", element)?;
        self.ensure_capacity(len)?;

        let slot = insert::insert(self, index);
        self.buf.slot_mut(slot).copy_from_slice(element);
        self.buf.set_len(len + 1);
        self.debug_check();
        Ok(())
    }

    /// Removes the element at logical `index`, copying it into `out` if given.
    ///
    /// Moves `min(index, len - index - 1)` elements.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index >= len()`, `InvalidArgument` if `out` has
    /// the wrong width.
    pub fn remove(&mut self, index: usize, out: Option<&mut [u8]>) -> Result<()> {
        self.check_index(index)?;
        if let Some(ref out) = out {
            self.check_element("out", out)?;
        }

        let slot = CircularBuffer::locate(self, index);
        if let Some(out) = out {
            out.copy_from_slice(self.buf.slot(slot));
        }
        remove::remove(self, index);
        let len = self.len();
        self.buf.set_len(len - 1);
        self.debug_check();
        Ok(())
    }

    /// Removes the front element.
    ///
    /// When the queue becomes empty both `head` and `tail` park on the slot
    /// after the removed one.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` on an empty queue, `InvalidArgument` if `out` has
    /// the wrong width.
    pub fn pop_front(&mut self, out: Option<&mut [u8]>) -> Result<()> {
        self.remove(0, out)?;
        if self.is_empty() {
            let next = self.incr(self.head);
            self.head = next;
            self.tail = next;
        }
        Ok(())
    }

    /// Removes the back element.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` on an empty queue, `InvalidArgument` if `out` has
    /// the wrong width.
    pub fn pop_back(&mut self, out: Option<&mut [u8]>) -> Result<()> {
        let len = self.len();
        match len.checked_sub(1) {
            Some(last) => self.remove(last, out),
            None => Err(Error::out_of_range(0, 0)),
        }
    }

    /// Removes the logical range, moving whichever outer side is shorter.
    ///
    /// ```
    /// use ringvec::RingQueue;
    ///
    /// let mut queue = RingQueue::new(1, 8).unwrap();
    /// for value in 0..6 {
    ///     queue.push_back(&[value]).unwrap();
    /// }
    /// queue.remove_range(1..4).unwrap();
    /// let values: Vec<u8> = queue.iter().map(|e| e[0]).collect();
    /// assert_eq!(values, vec![0, 4, 5]);
    /// ```
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if the range is reversed or ends past `len()`.
    pub fn remove_range<R: RangeArgument>(&mut self, range: R) -> Result<()> {
        let (start, end) = self.resolve_range(&range)?;
        self.close_range(start, end);
        Ok(())
    }

    /// Like [`remove_range`](RingQueue::remove_range), running `destructor`
    /// on each removed element first.
    ///
    /// # Errors
    ///
    /// As `remove_range`, plus `CallbackFailed`; on a callback failure no
    /// element is removed.
    pub fn remove_range_with<R, D>(&mut self, range: R, destructor: &mut D) -> Result<()>
        where R: RangeArgument,
              D: Destructor + ?Sized
    {
        let (start, end) = self.resolve_range(&range)?;
        for index in start..end {
            let slot = CircularBuffer::locate(self, index);
            destructor.destroy(self.buf.slot_mut(slot))?;
        }
        self.close_range(start, end);
        Ok(())
    }

    fn resolve_range<R: RangeArgument>(&self, range: &R) -> Result<(usize, usize)> {
        let len = self.len();
        let start = range.start().unwrap_or(0);
        let end = range.end().unwrap_or(len);
        if end > len {
            return Err(Error::out_of_range(end, len));
        }
        if start > end {
            return Err(Error::out_of_range(start, end));
        }
        Ok((start, end))
    }

    fn close_range(&mut self, start: usize, end: usize) {
        remove::remove_range(self, start, end);
        let len = self.len();
        self.buf.set_len(len - (end - start));
        self.debug_check();
    }

    /// Bytes of the element at logical `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&[u8]> {
        let slot = self.locate(index)?;
        Ok(self.buf.slot(slot))
    }

    /// Mutable bytes of the element at logical `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut [u8]> {
        let slot = self.locate(index)?;
        Ok(self.buf.slot_mut(slot))
    }

    /// Overwrites the element at logical `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index >= len()`, `InvalidArgument` for a wrongly
    /// sized element.
    pub fn set(&mut self, index: usize, element: &[u8]) -> Result<()> {
        let slot = self.locate(index)?;
        self.check_element("element", element)?;
        self.buf.slot_mut(slot).copy_from_slice(element);
        Ok(())
    }

    /// The front element, if any.
    pub fn front(&self) -> Option<&[u8]> {
        self.get(0).ok()
    }

    /// The back element, if any.
    pub fn back(&self) -> Option<&[u8]> {
        if self.is_empty() {
            None
        } else {
            Some(self.buf.slot(self.tail))
        }
    }

    /// Logical index of the first element comparing `Equal` to `key`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a wrongly sized key, `CallbackFailed` if the
    /// comparator fails.
    pub fn find<C>(&self, key: &[u8], comparator: &mut C) -> Result<Option<usize>>
        where C: Comparator + ?Sized
    {
        self.check_element("key", key)?;
        for (index, element) in self.iter().enumerate() {
            if comparator.compare(element, key)? == Ordering::Equal {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    /// Returns a front-to-back iterator over the elements.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Returns the elements as two byte runs, front part first.
    ///
    /// The second run is empty unless the live region wraps.
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        let len = self.len();
        let head_len = (self.capacity() - self.head).min(len);
        (self.buf.slots(self.head, head_len), self.buf.slots(0, len - head_len))
    }

    /// Drops every element without running any callback. The capacity is kept.
    pub fn clear(&mut self) {
        self.buf.set_len(0);
        self.head = 0;
        self.tail = 0;
    }

    /// Runs `destructor` on every element front to back, then empties the
    /// queue.
    ///
    /// # Errors
    ///
    /// `CallbackFailed` on the first failing call; the queue keeps all of its
    /// elements in that case.
    pub fn clear_with<D: Destructor + ?Sized>(&mut self, destructor: &mut D) -> Result<()> {
        let len = self.len();
        self.remove_range_with(..len, destructor)?;
        self.clear();
        Ok(())
    }

    /// Releases the queue.
    pub fn destroy(self) {}

    /// Runs `destructor` on every element, then releases the queue.
    ///
    /// # Errors
    ///
    /// `CallbackFailed` on the first failing call. The queue is released
    /// anyway; elements after the failing one are dropped without a callback.
    pub fn destroy_with<D: Destructor + ?Sized>(mut self, destructor: &mut D) -> Result<()> {
        self.clear_with(destructor)
    }

    /// Replaces the contents with a byte copy of `src`.
    ///
    /// The result is linearized with the front at slot 0.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the element sizes differ, or a growth error.
    pub fn copy_from(&mut self, src: &RingQueue) -> Result<()> {
        self.copy_from_with(src, &mut crate::element::Bytewise)
    }

    /// Replaces the contents with copies of `src`'s elements made by `copier`.
    ///
    /// The copy is assembled separately and only swapped in once every
    /// element copied, so a failing copier leaves `self` unchanged. The old
    /// elements are discarded without a destructor.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the element sizes differ, `CallbackFailed`, or a
    /// growth error.
    pub fn copy_from_with<C: Copier + ?Sized>(&mut self, src: &RingQueue, copier: &mut C) -> Result<()> {
        if src.elem_size() != self.elem_size() {
            return Err(Error::invalid_arg(
                "src",
                format!("element size {} does not match {}", src.elem_size(), self.elem_size()),
            ));
        }
        let mut buf = self.buf.empty_like(self.capacity().max(src.len()))?;
        for (slot, element) in src.iter().enumerate() {
            copier.copy(buf.slot_mut(slot), element)?;
        }
        buf.set_len(src.len());

        let tail = src.len().saturating_sub(1);
        *self = RingQueue { buf, head: 0, tail };
        self.debug_check();
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.len();
        if index < len {
            Ok(())
        } else {
            Err(Error::out_of_range(index, len))
        }
    }

    fn check_element(&self, name: &'static str, element: &[u8]) -> Result<()> {
        if element.len() == self.elem_size() {
            Ok(())
        } else {
            Err(Error::invalid_arg(
                name,
                format!("expected {} bytes, got {}", self.elem_size(), element.len()),
            ))
        }
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert!(self.len() <= self.capacity());
        debug_assert!(self.head < self.capacity());
        debug_assert_eq!(
            self.tail,
            if self.is_empty() { self.head } else { CircularBuffer::locate(self, self.len() - 1) }
        );
    }
}

#[cfg(test)]
mod tests;
