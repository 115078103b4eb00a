use std::iter::FusedIterator;

use super::RingQueue;
use crate::logic::CircularBuffer;

/// `RingQueue` iterator, front to back.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Iter<'a> {
    queue: &'a RingQueue,
    front: usize,
    back: usize,
}

impl<'a> Iter<'a> {
    pub(super) fn new(queue: &'a RingQueue) -> Iter<'a> {
        Iter {
            queue,
            front: 0,
            back: queue.len(),
        }
    }

    #[inline]
    fn element(&self, index: usize) -> &'a [u8] {
        let queue = self.queue;
        queue.buf.slot(CircularBuffer::locate(queue, index))
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a [u8];

    #[inline]
    fn next(&mut self) -> Option<&'a [u8]> {
        if self.front == self.back {
            return None;
        }
        let element = self.element(self.front);
        self.front += 1;
        Some(element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a [u8]> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.element(self.back))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> FusedIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a RingQueue {
    type Item = &'a [u8];
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl std::fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Iter")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}
