use super::CircularBuffer;
use super::copy::wrap_copy;

/// Opens a free slot at logical `index` and returns its physical position.
///
/// Only the shorter side of the ring moves. The left arc (`0..index`) moves
/// when `index < len / 2`, otherwise the right arc (`index..len`) moves, so
/// the middle of an even-length ring shifts the tail side. The caller must
/// have made room (`len < array_len`), writes the element into the returned
/// slot and then bumps its length.
pub fn insert<B: CircularBuffer + ?Sized>(buffer: &mut B, index: usize) -> usize {
    let len = buffer.len();
    debug_assert!(index <= len);
    debug_assert!(len < buffer.array_len());

    if len == 0 {
        let slot = buffer.head();
        buffer.set_tail(slot);
        return slot;
    }

    if index < len / 2 {
        closer_to_head(buffer, index)
    } else {
        closer_to_tail(buffer, index)
    }
}

fn closer_to_head<B: CircularBuffer + ?Sized>(buffer: &mut B, index: usize) -> usize {
    // insert closer to head, the left arc steps back one slot:
    //
    //             H   I         T
    //      [. . . o o A o o o o . . . . . .]
    //
    //           H               T
    //      [. . o o I A o o o o . . . . . .]
    //           M M
    //
    // insert closer to head and head is 0:
    //
    //       H   I         T
    //      [o o A o o o o . . . . . . . . .]
    //
    //                       T             H
    //      [o I A o o o o . . . . . . . . o]
    //       M                             M

    let head = buffer.head();
    let new_head = buffer.wrap_sub(head, 1);
    wrap_copy(buffer, new_head, head, index);
    buffer.set_head(new_head);
    buffer.wrap_add(new_head, index)
}

fn closer_to_tail<B: CircularBuffer + ?Sized>(buffer: &mut B, index: usize) -> usize {
    // insert closer to tail, the right arc steps forward one slot:
    //
    //             H       I     T
    //      [. . . o o o o A o o . . . . . .]
    //
    //             H               T
    //      [. . . o o o o I A o o . . . . .]
    //                       M M M
    //
    // insert closer to tail, right arc wraps:
    //
    //           T             H         I
    //      [o o . . . . . . . o o o o o A o]
    //
    //             T           H
    //      [o o o . . . . . . o o o o o I A]
    //       M M M                         M

    let len = buffer.len();
    let slot = buffer.locate(index);
    let shifted = buffer.wrap_add(slot, 1);
    wrap_copy(buffer, shifted, slot, len - index);
    let new_tail = buffer.wrap_add(buffer.tail(), 1);
    buffer.set_tail(new_tail);
    slot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::testing::Slots;

    fn insert_value(ring: &mut Slots, index: usize, value: u32) {
        let slot = insert(ring, index);
        ring.slots[slot] = value;
        ring.len += 1;
    }

    #[test]
    fn every_position_every_padding() {
        const CAP: usize = 16;

        // len is the length *before* insertion
        for len in 0..CAP {
            let values: Vec<u32> = (0..len as u32).collect();
            for padding in 0..CAP {
                for index in 0..=len {
                    let mut ring = Slots::filled(CAP, padding, &values);
                    insert_value(&mut ring, index, 1234);

                    let mut expected = values.clone();
                    expected.insert(index, 1234);
                    assert_eq!(ring.logical(), expected);
                    assert_eq!(ring.tail, ring.locate(len), "len={} padding={} index={}", len, padding, index);
                }
            }
        }
    }

    #[test]
    fn moves_the_shorter_arc() {
        // 6 elements starting at physical 2, index 2 < 6 / 2: head side moves.
        let mut ring = Slots::filled(10, 2, &[0, 1, 2, 3, 4, 5]);
        insert_value(&mut ring, 2, 99);
        assert_eq!(ring.head, 1);
        assert_eq!(ring.tail, 7);
        assert_eq!(&ring.slots[5..8], &[3, 4, 5]);

        // index 3 == 6 / 2 goes to the tail side.
        let mut ring = Slots::filled(10, 2, &[0, 1, 2, 3, 4, 5]);
        insert_value(&mut ring, 3, 99);
        assert_eq!(ring.head, 2);
        assert_eq!(ring.tail, 8);
        assert_eq!(&ring.slots[2..5], &[0, 1, 2]);
        assert_eq!(ring.logical(), vec![0, 1, 2, 99, 3, 4, 5]);
    }

    #[test]
    fn ends_do_not_shift() {
        let mut ring = Slots::filled(8, 0, &[0, 1, 2, 3]);
        insert_value(&mut ring, 0, 10);
        assert_eq!(ring.head, 7);
        assert_eq!(&ring.slots[0..4], &[0, 1, 2, 3]);

        insert_value(&mut ring, 5, 11);
        assert_eq!(ring.tail, 4);
        assert_eq!(&ring.slots[0..4], &[0, 1, 2, 3]);
        assert_eq!(ring.logical(), vec![10, 0, 1, 2, 3, 11]);
    }

    #[test]
    fn into_empty_uses_head() {
        let mut ring = Slots::filled(4, 3, &[]);
        insert_value(&mut ring, 0, 7);
        assert_eq!((ring.head, ring.tail), (3, 3));
        assert_eq!(ring.logical(), vec![7]);
    }
}
