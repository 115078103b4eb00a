use super::CircularBuffer;

/// Moves a run of `len` slots from `src` to `dst` in ring space.
///
/// Either run may wrap past the physical end. The runs may overlap, but in
/// at most one contiguous region: the shorter distance between `src` and
/// `dst` plus `len` must not exceed `array_len()`.
///
/// The run is cut wherever the source or the destination reaches the
/// physical end, which leaves at most three pieces that are linear on both
/// sides:
///
/// ```text
///       . .       S . . . .
///      [C C _ _ _ A A A B B]
///      [B B C C _ A A A A A]
///       . . . .       D . .
///                     0 0 0    piece 0: 3 slots, src + 0 -> dst
///       1 1                    piece 1: 2 slots, src + 3 -> 0
///           2 2                piece 2: 2 slots, 0 -> 2
/// ```
///
/// When the destination lies ahead of the source the pieces are moved last
/// first, otherwise first to last, so no piece overwrites a source slot that
/// is still unread.
pub fn wrap_copy<B: CircularBuffer + ?Sized>(buffer: &mut B, dst: usize, src: usize, len: usize) {
    let array_len = buffer.array_len();
    debug_assert!(
        {
            let gap = buffer.wrap_sub(dst, src).min(buffer.wrap_sub(src, dst));
            gap + len <= array_len
        },
        "wrc dst={} src={} len={} cap={}",
        dst,
        src,
        len,
        array_len
    );

    if src == dst || len == 0 {
        return;
    }

    let mut cuts = [0, (array_len - src).min(len), (array_len - dst).min(len), len];
    cuts[1..3].sort_unstable();

    let mut pieces = [(0, 0); 3];
    for (piece, bounds) in pieces.iter_mut().zip(cuts.windows(2)) {
        *piece = (bounds[0], bounds[1] - bounds[0]);
    }

    let ahead = buffer.wrap_sub(dst, src) < len;
    let ordered: [usize; 3] = if ahead { [2, 1, 0] } else { [0, 1, 2] };
    for &i in &ordered {
        let (offset, count) = pieces[i];
        if count == 0 {
            continue;
        }
        let to = buffer.wrap_add(dst, offset);
        let from = buffer.wrap_add(src, offset);
        buffer.copy(to, from, count);
    }
}
