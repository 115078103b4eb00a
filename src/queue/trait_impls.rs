use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use super::RingQueue;

impl Clone for RingQueue {
    fn clone(&self) -> RingQueue {
        RingQueue {
            buf: self.buf.clone(),
            head: self.head,
            tail: self.tail,
        }
    }
}

impl PartialEq for RingQueue {
    fn eq(&self, other: &RingQueue) -> bool {
        self.elem_size() == other.elem_size()
            && self.len() == other.len()
            && self.iter().eq(other.iter())
    }
}

impl Eq for RingQueue {}

impl Hash for RingQueue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elem_size().hash(state);
        self.len().hash(state);
        for element in self {
            state.write(element);
        }
    }
}

impl Index<usize> for RingQueue {
    type Output = [u8];

    #[inline]
    fn index(&self, index: usize) -> &[u8] {
        self.get(index).expect("Out of bounds access")
    }
}

impl IndexMut<usize> for RingQueue {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut [u8] {
        self.get_mut(index).expect("Out of bounds access")
    }
}

impl fmt::Debug for RingQueue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
