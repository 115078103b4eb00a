#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(index < capacity);
    debug_assert!(addend <= capacity);
    // `capacity - index` never underflows and the sum never overflows.
    let room = capacity - index;
    if addend < room {
        index + addend
    } else {
        addend - room
    }
}

#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, capacity: usize) -> usize {
    debug_assert!(index < capacity);
    debug_assert!(subtrahend <= capacity);
    if subtrahend <= index {
        index - subtrahend
    } else {
        capacity - (subtrahend - index)
    }
}

/// Next slot, wrapping from the last slot to the first.
#[inline]
pub fn incr(pos: usize, capacity: usize) -> usize {
    if pos + 1 == capacity { 0 } else { pos + 1 }
}

/// Previous slot, wrapping from the first slot to the last.
#[inline]
pub fn decr(pos: usize, capacity: usize) -> usize {
    if pos == 0 { capacity - 1 } else { pos - 1 }
}
