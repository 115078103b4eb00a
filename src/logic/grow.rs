use log::trace;

use super::CircularBuffer;

/// Restores ring order after the slot array grew from `old_array_len`.
///
/// Growth appends the new slots at the physical end, so a live region that
/// wrapped past the old end would now have fresh, unrelated slots in the
/// middle of it. Call this after the storage grew but before anything else
/// reads the ring. `head` and the length must be the pre-growth values.
pub fn handle_capacity_increase<B: CircularBuffer + ?Sized>(buffer: &mut B, old_array_len: usize) {
    let new_array_len = buffer.array_len();
    debug_assert!(new_array_len >= old_array_len);

    let len = buffer.len();
    if len == 0 {
        return;
    }

    let head = buffer.head();
    let head_len = old_array_len - head;
    if len > head_len {
        let tail_len = len - head_len;
        if tail_len <= new_array_len - old_array_len {
            // Re-linearize: move the wrapped prefix right after the old end.
            //
            //         T H
            //   [o o o . o o o o]
            //           H             T
            //   [. . . . o o o o o o o . . . . .]
            //                    M M M
            trace!("re-linearizing ring: moving {} wrapped slots past {}", tail_len, old_array_len);
            buffer.copy(old_array_len, 0, tail_len);
        } else {
            // Only reachable when growth was clamped. Move the head run to
            // the new physical end instead.
            //
            //         T H
            //   [o o o . o o o o]
            //         T     H
            //   [o o o . . . o o o o]
            //                M M M M
            let new_head = new_array_len - head_len;
            trace!("moving ring head run of {} slots from {} to {}", head_len, head, new_head);
            buffer.copy(new_head, head, head_len);
            buffer.set_head(new_head);
        }
    }

    let head = buffer.head();
    let tail = buffer.wrap_add(head, len - 1);
    buffer.set_tail(tail);
}
