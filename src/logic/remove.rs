use super::CircularBuffer;
use super::copy::wrap_copy;

/// Closes the slot of logical `index`; the element was already read out.
///
/// Mirror of [`insert`](super::insert::insert): the left arc (`0..index`)
/// steps forward when `index < len / 2`, otherwise the right arc
/// (`index + 1..len`) steps back. The caller decrements its length afterwards.
pub fn remove<B: CircularBuffer + ?Sized>(buffer: &mut B, index: usize) {
    let len = buffer.len();
    debug_assert!(index < len);

    if index < len / 2 {
        closer_to_head(buffer, index, 1);
    } else {
        closer_to_tail(buffer, index, index + 1);
    }

    if len == 1 {
        let head = buffer.head();
        buffer.set_tail(head);
    }
}

/// Closes the logical range `start..end` by moving whichever outer arc is
/// shorter. The left arc moves only when strictly shorter than the right.
pub fn remove_range<B: CircularBuffer + ?Sized>(buffer: &mut B, start: usize, end: usize) {
    let len = buffer.len();
    debug_assert!(start <= end && end <= len);

    let count = end - start;
    if count == 0 {
        return;
    }

    if start < len - end {
        closer_to_head(buffer, start, count);
    } else {
        closer_to_tail(buffer, start, end);
    }

    if count == len {
        let head = buffer.head();
        buffer.set_tail(head);
    }
}

fn closer_to_head<B: CircularBuffer + ?Sized>(buffer: &mut B, start: usize, count: usize) {
    // remove closer to head, the left arc steps forward:
    //
    //             H   R         T
    //      [. . . o o x o o o o . . . . . .]
    //
    //               H           T
    //      [. . . . o o o o o o . . . . . .]
    //               M M
    //
    // left arc wraps:
    //
    //           R                 T     H
    //      [o o x o o o o o . . . o . . o o]
    //
    //                             T       H
    //      [o o o o o o o o . . . o . . . o]
    //       M M M                         M

    let head = buffer.head();
    let new_head = buffer.wrap_add(head, count);
    wrap_copy(buffer, new_head, head, start);
    buffer.set_head(new_head);
}

fn closer_to_tail<B: CircularBuffer + ?Sized>(buffer: &mut B, start: usize, end: usize) {
    // remove closer to tail, the right arc steps back:
    //
    //             H       R     T
    //      [. . . o o o o x o o . . . . . .]
    //
    //             H           T
    //      [. . . o o o o o o . . . . . . .]
    //                     M M
    //
    // right arc wraps:
    //
    //             T           H         R
    //      [o o o . . . . . . o o o o o x o]
    //
    //           T             H
    //      [o o . . . . . . . o o o o o o o]
    //       M M                         M M

    let len = buffer.len();
    let dst = buffer.locate(start);
    let src = buffer.locate(end);
    wrap_copy(buffer, dst, src, len - end);
    let new_tail = buffer.wrap_sub(buffer.tail(), end - start);
    buffer.set_tail(new_tail);
}
