//! Typed views over the byte engines.
//!
//! Any plain-old-data type can be stored by value; the element width is
//! `size_of::<T>()` and values are converted with `bytemuck`.
//!
//! ```
//! use ringvec::TypedQueue;
//!
//! let mut queue = TypedQueue::<f64>::new(2).unwrap();
//! queue.push_back(1.5).unwrap();
//! queue.push_front(0.5).unwrap();
//! queue.insert(1, 1.0).unwrap();
//! assert_eq!(queue.iter().collect::<Vec<_>>(), vec![0.5, 1.0, 1.5]);
//! assert_eq!(queue.pop_front().unwrap(), 0.5);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::mem;

use bytemuck::Pod;

use crate::config::Config;
use crate::error::Result;
use crate::queue::RingQueue;
use crate::stack::Stack;

/// A [`RingQueue`] of `T` values.
pub struct TypedQueue<T: Pod> {
    inner: RingQueue,
    marker: PhantomData<T>,
}

impl<T: Pod> TypedQueue<T> {
    /// Creates an empty queue with room for `initial_capacity` values.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `initial_capacity` is zero or `T` is zero sized.
    pub fn new(initial_capacity: usize) -> Result<TypedQueue<T>> {
        TypedQueue::with_config(&Config::new(mem::size_of::<T>(), initial_capacity))
    }

    /// Creates an empty queue from `config`; `config.elem_size` must be
    /// `size_of::<T>()`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a mismatched element size, otherwise as
    /// [`RingQueue::with_config`].
    pub fn with_config(config: &Config) -> Result<TypedQueue<T>> {
        check_width::<T>(config)?;
        Ok(TypedQueue {
            inner: RingQueue::with_config(config)?,
            marker: PhantomData,
        })
    }

    /// Number of values in the queue.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Appends `value` at the back.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.inner.push_back(bytemuck::bytes_of(&value))
    }

    /// Prepends `value` at the front.
    pub fn push_front(&mut self, value: T) -> Result<()> {
        self.inner.push_front(bytemuck::bytes_of(&value))
    }

    /// Inserts `value` at logical `index`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        self.inner.insert(index, bytemuck::bytes_of(&value))
    }

    /// Removes and returns the value at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let mut value = T::zeroed();
        self.inner.remove(index, Some(bytemuck::bytes_of_mut(&mut value)))?;
        Ok(value)
    }

    /// Removes and returns the front value.
    pub fn pop_front(&mut self) -> Result<T> {
        let mut value = T::zeroed();
        self.inner.pop_front(Some(bytemuck::bytes_of_mut(&mut value)))?;
        Ok(value)
    }

    /// Removes and returns the back value.
    pub fn pop_back(&mut self) -> Result<T> {
        let mut value = T::zeroed();
        self.inner.pop_back(Some(bytemuck::bytes_of_mut(&mut value)))?;
        Ok(value)
    }

    /// The value at `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        self.inner.get(index).map(bytemuck::pod_read_unaligned::<T>)
    }

    /// Overwrites the value at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.inner.set(index, bytemuck::bytes_of(&value))
    }

    /// Iterates the values front to back.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = T> + ExactSizeIterator + '_ {
        self.inner.iter().map(bytemuck::pod_read_unaligned::<T>)
    }

    /// The underlying byte queue.
    pub fn as_raw(&self) -> &RingQueue {
        &self.inner
    }

    /// Unwraps the byte queue.
    pub fn into_raw(self) -> RingQueue {
        self.inner
    }
}

impl<T: Pod> Clone for TypedQueue<T> {
    fn clone(&self) -> TypedQueue<T> {
        TypedQueue {
            inner: self.inner.clone(),
            marker: PhantomData,
        }
    }
}

impl<T: Pod + fmt::Debug> fmt::Debug for TypedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// A [`Stack`] of `T` values.
pub struct TypedStack<T: Pod> {
    inner: Stack,
    marker: PhantomData<T>,
}

impl<T: Pod> TypedStack<T> {
    /// Creates an empty stack with room for `initial_capacity` values.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `initial_capacity` is zero or `T` is zero sized.
    pub fn new(initial_capacity: usize) -> Result<TypedStack<T>> {
        TypedStack::with_config(&Config::new(mem::size_of::<T>(), initial_capacity))
    }

    /// Creates an empty stack from `config`; `config.elem_size` must be
    /// `size_of::<T>()`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a mismatched element size, otherwise as
    /// [`Stack::with_config`].
    pub fn with_config(config: &Config) -> Result<TypedStack<T>> {
        check_width::<T>(config)?;
        Ok(TypedStack {
            inner: Stack::with_config(config)?,
            marker: PhantomData,
        })
    }

    /// Number of values on the stack.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Pushes `value` on top.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.inner.push_back(bytemuck::bytes_of(&value))
    }

    /// Pops the top value.
    pub fn pop_back(&mut self) -> Result<T> {
        let mut value = T::zeroed();
        self.inner.pop_back(Some(bytemuck::bytes_of_mut(&mut value)))?;
        Ok(value)
    }

    /// Inserts `value` at `index`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        self.inner.insert(index, bytemuck::bytes_of(&value))
    }

    /// Removes and returns the value at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let mut value = T::zeroed();
        self.inner.remove(index, Some(bytemuck::bytes_of_mut(&mut value)))?;
        Ok(value)
    }

    /// The value at `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        self.inner.get(index).map(bytemuck::pod_read_unaligned::<T>)
    }

    /// Overwrites the value at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.inner.set(index, bytemuck::bytes_of(&value))
    }

    /// The top value, if any.
    pub fn last(&self) -> Option<T> {
        self.inner.last().map(bytemuck::pod_read_unaligned::<T>)
    }

    /// Iterates the values bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = T> + ExactSizeIterator + '_ {
        self.inner.iter().map(bytemuck::pod_read_unaligned::<T>)
    }

    /// The underlying byte stack.
    pub fn as_raw(&self) -> &Stack {
        &self.inner
    }

    /// Unwraps the byte stack.
    pub fn into_raw(self) -> Stack {
        self.inner
    }
}

impl<T: Pod> Clone for TypedStack<T> {
    fn clone(&self) -> TypedStack<T> {
        TypedStack {
            inner: self.inner.clone(),
            marker: PhantomData,
        }
    }
}

impl<T: Pod + fmt::Debug> fmt::Debug for TypedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

fn check_width<T>(config: &Config) -> Result<()> {
    let width = mem::size_of::<T>();
    if config.elem_size == width {
        Ok(())
    } else {
        Err(crate::error::Error::invalid_arg(
            "elem_size",
            format!("{} does not match the value width {}", config.elem_size, width),
        ))
    }
}
