//! `Stack` is the linear sibling of [`RingQueue`](crate::RingQueue).

use std::cmp::Ordering;
use std::slice;

use crate::buffer::RawBuffer;
use crate::config::Config;
use crate::element::{Bytewise, Comparator, Copier, Destructor};
use crate::error::{Error, Result};

/// A growable array of fixed-width byte elements.
///
/// Index 0 sits at the start of the block and the live elements are always
/// contiguous. Insert and remove shift the suffix after the index.
///
/// # Examples
///
/// ```
/// use ringvec::Stack;
///
/// let mut stack = Stack::new(2, 2).unwrap();
/// stack.push_back(&[1, 0]).unwrap();
/// stack.push_back(&[3, 0]).unwrap();
/// stack.insert(1, &[2, 0]).unwrap();
/// assert_eq!(stack.as_bytes(), &[1, 0, 2, 0, 3, 0]);
/// assert_eq!(stack.capacity(), 4);
///
/// let mut top = [0; 2];
/// stack.pop_back(Some(&mut top)).unwrap();
/// assert_eq!(top, [3, 0]);
/// ```
#[derive(Clone)]
pub struct Stack {
    buf: RawBuffer,
}

impl Stack {
    /// Creates an empty stack of `elem_size` byte elements with room for
    /// `initial_capacity` of them.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if either argument is zero, `OutOfMemory` if the
    /// block cannot be allocated.
    pub fn new(elem_size: usize, initial_capacity: usize) -> Result<Stack> {
        Stack::with_config(&Config::new(elem_size, initial_capacity))
    }

    /// Creates an empty stack from a [`Config`].
    ///
    /// # Errors
    ///
    /// As [`Config::validate`], plus `OutOfMemory`.
    pub fn with_config(config: &Config) -> Result<Stack> {
        Ok(Stack {
            buf: RawBuffer::with_config(config)?,
        })
    }

    /// Bytes per element.
    #[inline]
    pub fn elem_size(&self) -> usize {
        self.buf.elem_size()
    }

    /// Number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the stack holds no elements.
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

    /// Makes sure slot `needed` exists, doubling the block if it does not.
    ///
    /// # Errors
    ///
    /// `CapacityExhausted` or `OutOfMemory`; the stack is untouched.
    pub fn ensure_capacity(&mut self, needed: usize) -> Result<()> {
        self.buf.ensure_capacity(needed)
    }

    /// Pushes an element on top.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a wrongly sized element, or a growth error.
    pub fn push_back(&mut self, element: &[u8]) -> Result<()> {
        let len = self.len();
        self.insert(len, element)
    }

    /// Pops the top element, copying it into `out` if given.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` on an empty stack, `InvalidArgument` if `out` has
    /// the wrong width.
    pub fn pop_back(&mut self, out: Option<&mut [u8]>) -> Result<()> {
        match self.len().checked_sub(1) {
            Some(last) => self.remove(last, out),
            None => Err(Error::out_of_range(0, 0)),
        }
    }

    /// Inserts an element at `index`, shifting the suffix up by one.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index > len()`, `InvalidArgument` for a wrongly
    /// sized element, or a growth error. The stack is untouched on error.
    pub fn insert(&mut self, index: usize, element: &[u8]) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(Error::out_of_range(index, len));
        }
        self.check_element("element", element)?;
        self.buf.ensure_capacity(len)?;

        self.buf.copy(index + 1, index, len - index);
        self.buf.slot_mut(index).copy_from_slice(element);
        self.buf.set_len(len + 1);
        Ok(())
    }

    /// Removes the element at `index`, copying it into `out` if given.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index >= len()`, `InvalidArgument` if `out` has
    /// the wrong width.
    pub fn remove(&mut self, index: usize, out: Option<&mut [u8]>) -> Result<()> {
        let len = self.len();
        self.check_index(index)?;
        if let Some(ref out) = out {
            self.check_element("out", out)?;
        }

        if let Some(out) = out {
            out.copy_from_slice(self.buf.slot(index));
        }
        self.buf.copy(index, index + 1, len - index - 1);
        self.buf.set_len(len - 1);
        Ok(())
    }

    /// Bytes of the element at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&[u8]> {
        self.check_index(index)?;
        Ok(self.buf.slot(index))
    }

    /// Mutable bytes of the element at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut [u8]> {
        self.check_index(index)?;
        Ok(self.buf.slot_mut(index))
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index >= len()`, `InvalidArgument` for a wrongly
    /// sized element.
    pub fn set(&mut self, index: usize, element: &[u8]) -> Result<()> {
        self.check_index(index)?;
        self.check_element("element", element)?;
        self.buf.slot_mut(index).copy_from_slice(element);
        Ok(())
    }

    /// The top element, if any.
    pub fn last(&self) -> Option<&[u8]> {
        self.len().checked_sub(1).map(|last| self.buf.slot(last))
    }

    /// Index of the first element comparing `Equal` to `key`.
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

    /// Iterates the elements bottom to top.
    pub fn iter(&self) -> slice::ChunksExact<'_, u8> {
        self.as_bytes().chunks_exact(self.elem_size())
    }

    /// The live elements as one contiguous byte run.
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.slots(0, self.len())
    }

    /// Drops every element without running any callback. The capacity is kept.
    pub fn clear(&mut self) {
        self.buf.set_len(0);
    }

    /// Runs `destructor` on every element bottom to top, then empties the
    /// stack.
    ///
    /// # Errors
    ///
    /// `CallbackFailed` on the first failing call; the stack keeps all of its
    /// elements in that case.
    pub fn clear_with<D: Destructor + ?Sized>(&mut self, destructor: &mut D) -> Result<()> {
        let (len, elem_size) = (self.len(), self.elem_size());
        for element in self.buf.slots_mut(0, len).chunks_exact_mut(elem_size) {
            destructor.destroy(element)?;
        }
        self.clear();
        Ok(())
    }

    /// Releases the stack.
    pub fn destroy(self) {}

    /// Runs `destructor` on every element, then releases the stack.
    ///
    /// # Errors
    ///
    /// `CallbackFailed` on the first failing call. The stack is released
    /// anyway.
    pub fn destroy_with<D: Destructor + ?Sized>(mut self, destructor: &mut D) -> Result<()> {
        self.clear_with(destructor)
    }

    /// Replaces the contents with a byte copy of `src`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the element sizes differ, or a growth error.
    pub fn copy_from(&mut self, src: &Stack) -> Result<()> {
        self.copy_from_with(src, &mut Bytewise)
    }

    /// Replaces the contents with copies of `src`'s elements made by `copier`.
    ///
    /// A failing copier leaves `self` unchanged. The old elements are
    /// discarded without a destructor.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the element sizes differ, `CallbackFailed`, or a
    /// growth error.
    pub fn copy_from_with<C: Copier + ?Sized>(&mut self, src: &Stack, copier: &mut C) -> Result<()> {
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
        self.buf = buf;
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
}

impl PartialEq for Stack {
    fn eq(&self, other: &Stack) -> bool {
        self.elem_size() == other.elem_size() && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Stack {}

impl std::fmt::Debug for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
