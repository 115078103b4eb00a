//! Slot-level ring algorithms.
//!
//! Everything here works on physical slot indices through [`CircularBuffer`]
//! and never touches element bytes directly. The routines assume the caller
//! already validated indices and made room; they only move slots and update
//! `head`/`tail`. The logical length is owned by the caller and is read, not
//! written.

pub mod copy;
pub mod grow;
pub mod insert;
pub mod remove;

use crate::utils;

pub trait CircularBuffer {
    /// Number of physical slots.
    fn array_len(&self) -> usize;
    /// Number of live elements.
    fn len(&self) -> usize;

    /// Slot of logical index 0.
    fn head(&self) -> usize;
    /// Slot of logical index `len - 1`, or `head` when empty.
    fn tail(&self) -> usize;

    fn set_head(&mut self, head: usize);
    fn set_tail(&mut self, tail: usize);

    /// Moves `len` contiguous slots from `src` to `dst`.
    fn copy(&mut self, dst: usize, src: usize, len: usize);

    #[inline]
    fn wrap_add(&self, index: usize, addend: usize) -> usize {
        utils::wrap_add(index, addend, self.array_len())
    }

    #[inline]
    fn wrap_sub(&self, index: usize, subtrahend: usize) -> usize {
        utils::wrap_sub(index, subtrahend, self.array_len())
    }

    /// Physical slot of logical index `index`.
    #[inline]
    fn locate(&self, index: usize) -> usize {
        self.wrap_add(self.head(), index)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::CircularBuffer;

    /// Bare slot array for exercising the algorithms without element bytes.
    #[derive(Debug)]
    pub struct Slots {
        pub slots: Vec<u32>,
        pub head: usize,
        pub tail: usize,
        pub len: usize,
    }

    impl Slots {
        /// `values` laid out in logical order starting at physical `head`.
        pub fn filled(capacity: usize, head: usize, values: &[u32]) -> Slots {
            let mut ring = Slots {
                slots: vec![u32::MAX; capacity],
                head,
                tail: head,
                len: values.len(),
            };
            for (index, value) in values.iter().enumerate() {
                let slot = ring.locate(index);
                ring.slots[slot] = *value;
            }
            if !values.is_empty() {
                ring.tail = ring.locate(values.len() - 1);
            }
            ring
        }

        pub fn logical(&self) -> Vec<u32> {
            (0..self.len).map(|index| self.slots[self.locate(index)]).collect()
        }
    }

    impl CircularBuffer for Slots {
        fn array_len(&self) -> usize {
            self.slots.len()
        }

        fn len(&self) -> usize {
            self.len
        }

        fn head(&self) -> usize {
            self.head
        }

        fn tail(&self) -> usize {
            self.tail
        }

        fn set_head(&mut self, head: usize) {
            self.head = head;
        }

        fn set_tail(&mut self, tail: usize) {
            self.tail = tail;
        }

        fn copy(&mut self, dst: usize, src: usize, len: usize) {
            self.slots.copy_within(src..src + len, dst);
        }
    }
}
