use std::cell::Cell;
use std::collections::VecDeque;

use super::*;
use crate::error::CallbackError;

fn bytes(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

fn value(element: &[u8]) -> u32 {
    let mut raw = [0; 4];
    raw.copy_from_slice(element);
    u32::from_le_bytes(raw)
}

fn values(queue: &RingQueue) -> Vec<u32> {
    queue.iter().map(value).collect()
}

/// Empty queue of `u32`s whose head starts at physical slot `padding`.
fn padded(capacity: usize, padding: usize) -> RingQueue {
    let mut queue = RingQueue::new(4, capacity).unwrap();
    queue.head = padding;
    queue.tail = padding;
    queue
}

fn extend(queue: &mut RingQueue, range: std::ops::Range<u32>) {
    for v in range {
        queue.push_back(&bytes(v)).unwrap();
    }
}

#[test]
fn simple() {
    let mut tester = RingQueue::new(4, 8).unwrap();
    assert_eq!(tester.capacity(), 8);
    assert_eq!(tester.len(), 0);

    tester.push_back(&bytes(1)).unwrap();
    tester.push_back(&bytes(2)).unwrap();
    tester.push_back(&bytes(3)).unwrap();
    tester.push_back(&bytes(4)).unwrap();
    assert_eq!(tester.len(), 4);

    let mut out = [0; 4];
    tester.pop_front(Some(&mut out)).unwrap();
    assert_eq!(value(&out), 1);
    tester.pop_front(Some(&mut out)).unwrap();
    assert_eq!(value(&out), 2);
    assert_eq!(tester.len(), 2);
    tester.pop_back(Some(&mut out)).unwrap();
    assert_eq!(value(&out), 4);
    tester.pop_front(Some(&mut out)).unwrap();
    assert_eq!(value(&out), 3);
    assert_eq!(tester.pop_front(None), Err(Error::out_of_range(0, 0)));
    assert_eq!(tester.pop_back(None), Err(Error::out_of_range(0, 0)));
}

#[test]
fn simple_reversely() {
    let mut tester = RingQueue::new(4, 2).unwrap();
    for v in 1..=4 {
        tester.push_front(&bytes(v)).unwrap();
    }
    assert_eq!(values(&tester), vec![4, 3, 2, 1]);
    assert_eq!(value(tester.front().unwrap()), 4);
    assert_eq!(value(tester.back().unwrap()), 1);
}

#[test]
fn create_rejects_zero_sizes() {
    assert!(matches!(RingQueue::new(0, 4), Err(Error::InvalidArgument { .. })));
    assert!(matches!(RingQueue::new(4, 0), Err(Error::InvalidArgument { .. })));
}

#[test]
fn wraparound_growth_scenario() {
    // Park head at physical slot 2 of a 5 slot ring.
    let mut queue = RingQueue::new(4, 5).unwrap();
    for _ in 0..2 {
        queue.push_back(&bytes(0)).unwrap();
        queue.pop_front(None).unwrap();
    }
    assert_eq!((queue.head(), queue.tail()), (2, 2));

    extend(&mut queue, 1..6);
    assert_eq!(queue.capacity(), 5);
    let physical: Vec<u32> = queue.buf.as_bytes().chunks(4).map(value).collect();
    assert_eq!(physical, vec![4, 5, 1, 2, 3]);
    assert_eq!(value(&queue[0]), 1);

    queue.push_back(&bytes(6)).unwrap();
    assert_eq!(queue.capacity(), 10);
    assert_eq!((queue.head(), queue.tail()), (2, 7));
    let physical: Vec<u32> = queue.buf.as_bytes().chunks(4).map(value).collect();
    assert_eq!(&physical[2..8], &[1, 2, 3, 4, 5, 6]);
    assert_eq!(value(&queue[0]), 1);
    assert_eq!(value(&queue[5]), 6);
    assert_eq!(values(&queue), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn growth_preserves_order_every_padding() {
    const CAP: usize = 8;

    for padding in 0..CAP {
        for len in 1..=CAP {
            let mut tester = padded(CAP, padding);
            extend(&mut tester, 0..len as u32);
            assert_eq!(tester.capacity(), CAP);

            // The push that finds the ring full triggers growth.
            extend(&mut tester, len as u32..(CAP as u32 + 3));
            assert_eq!(tester.capacity(), CAP * 2);
            let expected: Vec<u32> = (0..CAP as u32 + 3).collect();
            assert_eq!(values(&tester), expected, "padding={} len={}", padding, len);
        }
    }
}

#[test]
fn growth_from_front_pushes() {
    for padding in 0..6 {
        let mut tester = padded(6, padding);
        for v in (0..20).rev() {
            tester.push_front(&bytes(v)).unwrap();
        }
        let expected: Vec<u32> = (0..20).collect();
        assert_eq!(values(&tester), expected);
        assert_eq!(tester.capacity(), 24);
    }
}

#[test]
fn locate_matches_incr_walk() {
    const CAP: usize = 9;

    for padding in 0..CAP {
        for len in 0..=CAP {
            let mut tester = padded(CAP, padding);
            extend(&mut tester, 0..len as u32);
            let mut pos = tester.head();
            for index in 0..len {
                assert_eq!(tester.locate(index), Ok(pos));
                pos = tester.incr(pos);
            }
            assert_eq!(tester.locate(len), Err(Error::out_of_range(len, len)));
            if len > 0 {
                assert_eq!(tester.incr(tester.tail()), tester.wrap_add(tester.head(), len));
                assert_eq!(tester.decr(tester.head()), tester.wrap_sub(tester.head(), 1));
            }
        }
    }
}

#[test]
fn insert_every_position() {
    const CAP: usize = 16;

    // len is the length *after* insertion
    for len in 1..CAP {
        let expected: Vec<u32> = (0..len as u32).collect();
        for padding in 0..CAP {
            for to_insert in 0..len {
                let mut tester = padded(CAP, padding);
                for i in 0..len as u32 {
                    if i as usize != to_insert {
                        tester.push_back(&bytes(i)).unwrap();
                    }
                }
                tester.insert(to_insert, &bytes(to_insert as u32)).unwrap();
                assert!(tester.tail() < CAP);
                assert!(tester.head() < CAP);
                assert_eq!(values(&tester), expected);
                assert_eq!(value(tester.get(to_insert).unwrap()), to_insert as u32);
            }
        }
    }
}

#[test]
fn remove_every_position() {
    const CAP: usize = 16;

    // len is the length *after* removal
    for len in 0..CAP - 1 {
        let expected: Vec<u32> = (0..len as u32).collect();
        for padding in 0..CAP {
            for to_remove in 0..len + 1 {
                let mut tester = padded(CAP, padding);
                for i in 0..len as u32 {
                    if i as usize == to_remove {
                        tester.push_back(&bytes(1234)).unwrap();
                    }
                    tester.push_back(&bytes(i)).unwrap();
                }
                if to_remove == len {
                    tester.push_back(&bytes(1234)).unwrap();
                }
                let mut out = [0; 4];
                tester.remove(to_remove, Some(&mut out)).unwrap();
                assert_eq!(value(&out), 1234);
                assert!(tester.tail() < CAP);
                assert!(tester.head() < CAP);
                assert_eq!(values(&tester), expected);
            }
        }
    }
}

#[test]
fn remove_then_insert_round_trips() {
    const CAP: usize = 10;

    for padding in 0..CAP {
        for len in 1..=CAP {
            for index in 0..len {
                let mut tester = padded(CAP, padding);
                extend(&mut tester, 0..len as u32);
                let before = tester.clone();

                let mut out = [0; 4];
                tester.remove(index, Some(&mut out)).unwrap();
                tester.insert(index, &out).unwrap();
                assert_eq!(tester, before);
                assert_eq!(tester.capacity(), CAP);
            }
        }
    }
}

#[test]
fn errors_leave_queue_untouched() {
    let mut tester = padded(4, 3);
    extend(&mut tester, 0..3);
    let before = tester.clone();
    let (head, tail) = (tester.head(), tester.tail());

    assert_eq!(tester.insert(4, &bytes(9)), Err(Error::out_of_range(4, 3)));
    assert!(matches!(
        tester.insert(1, &[1, 2, 3]),
        Err(Error::InvalidArgument { name: "element", .. })
    ));
    assert_eq!(tester.remove(3, None), Err(Error::out_of_range(3, 3)));
    let mut short = [0; 2];
    assert!(matches!(
        tester.remove(0, Some(&mut short)),
        Err(Error::InvalidArgument { name: "out", .. })
    ));
    assert_eq!(tester.get(3), Err(Error::out_of_range(3, 3)));
    assert_eq!(tester.set(5, &bytes(1)), Err(Error::out_of_range(5, 3)));
    assert!(tester.set(0, &[0; 8]).is_err());

    assert_eq!(tester, before);
    assert_eq!((tester.head(), tester.tail()), (head, tail));
}

#[test]
fn capacity_exhausted_keeps_ring() {
    let config = Config::new(4, 3).with_max_capacity(5);
    let mut tester = RingQueue::with_config(&config).unwrap();
    tester.head = 2;
    tester.tail = 2;
    extend(&mut tester, 0..5);
    assert_eq!(tester.capacity(), 5);
    assert_eq!(values(&tester), vec![0, 1, 2, 3, 4]);

    let (head, tail) = (tester.head(), tester.tail());
    assert_eq!(
        tester.push_back(&bytes(5)),
        Err(Error::CapacityExhausted { capacity: 5 })
    );
    assert_eq!(tester.insert(2, &bytes(5)), Err(Error::CapacityExhausted { capacity: 5 }));
    assert_eq!((tester.head(), tester.tail()), (head, tail));
    assert_eq!(values(&tester), vec![0, 1, 2, 3, 4]);
}

#[test]
fn clamped_growth_keeps_order() {
    for padding in 0..6 {
        let config = Config::new(4, 6).with_max_capacity(8);
        let mut tester = RingQueue::with_config(&config).unwrap();
        tester.head = padding;
        tester.tail = padding;
        extend(&mut tester, 0..8);
        assert_eq!(tester.capacity(), 8);
        assert_eq!(values(&tester), (0..8).collect::<Vec<_>>());
    }
}

#[test]
fn capacity_never_shrinks() {
    let mut tester = RingQueue::new(4, 2).unwrap();
    let mut last = tester.capacity();
    for round in 0..4u32 {
        extend(&mut tester, 0..10 * (round + 1));
        assert!(tester.capacity() >= last);
        assert!(tester.len() <= tester.capacity());
        last = tester.capacity();
        while !tester.is_empty() {
            tester.pop_front(None).unwrap();
            assert_eq!(tester.capacity(), last);
        }
    }
    tester.clear();
    assert_eq!(tester.capacity(), last);
}

#[test]
fn pop_front_parks_after_removed_slot() {
    let mut tester = RingQueue::new(4, 4).unwrap();
    tester.push_back(&bytes(1)).unwrap();
    tester.pop_front(None).unwrap();
    assert_eq!((tester.head(), tester.tail()), (1, 1));
    tester.push_back(&bytes(2)).unwrap();
    tester.pop_back(None).unwrap();
    assert_eq!((tester.head(), tester.tail()), (1, 1));
}

#[test]
fn remove_range_every_padding() {
    const CAP: usize = 10;

    for padding in 0..CAP {
        for len in 0..=CAP {
            for start in 0..=len {
                for end in start..=len {
                    let mut tester = padded(CAP, padding);
                    extend(&mut tester, 0..len as u32);
                    tester.remove_range(start..end).unwrap();

                    let mut expected: Vec<u32> = (0..len as u32).collect();
                    expected.drain(start..end);
                    assert_eq!(values(&tester), expected);
                }
            }
        }
    }
}

#[test]
fn remove_range_arguments() {
    let mut tester = RingQueue::new(4, 8).unwrap();
    extend(&mut tester, 0..6);
    assert_eq!(tester.remove_range(2..7), Err(Error::out_of_range(7, 6)));
    tester.remove_range(4..).unwrap();
    assert_eq!(values(&tester), vec![0, 1, 2, 3]);
    tester.remove_range(..1).unwrap();
    assert_eq!(values(&tester), vec![1, 2, 3]);
    tester.remove_range(..).unwrap();
    assert!(tester.is_empty());
    assert_eq!(tester.head(), tester.tail());
}

struct Release<'a> {
    seen: &'a Cell<u32>,
    fail_on: Option<u32>,
}

impl<'a> Destructor for Release<'a> {
    fn destroy(&mut self, element: &mut [u8]) -> Result<(), CallbackError> {
        if Some(value(element)) == self.fail_on {
            return Err(CallbackError::new("refused"));
        }
        self.seen.set(self.seen.get() + 1);
        Ok(())
    }
}

#[test]
fn clear_with_runs_destructor() {
    let seen = &Cell::new(0);
    let mut tester = padded(4, 3);
    extend(&mut tester, 0..7);
    tester.clear_with(&mut Release { seen, fail_on: None }).unwrap();
    assert_eq!(seen.get(), 7);
    assert!(tester.is_empty());
    assert_eq!(tester.capacity(), 8);
}

#[test]
fn failing_destructor_keeps_elements() {
    let seen = &Cell::new(0);
    let mut tester = RingQueue::new(4, 4).unwrap();
    extend(&mut tester, 0..5);

    let err = tester
        .clear_with(&mut Release { seen, fail_on: Some(3) })
        .unwrap_err();
    assert_eq!(err, Error::CallbackFailed(CallbackError::new("refused")));
    assert_eq!(seen.get(), 3);
    assert_eq!(values(&tester), vec![0, 1, 2, 3, 4]);

    let err = tester.destroy_with(&mut Release { seen, fail_on: Some(0) });
    assert!(matches!(err, Err(Error::CallbackFailed(_))));
}

#[test]
fn remove_range_with_destructor() {
    let seen = &Cell::new(0);
    let mut tester = RingQueue::new(4, 4).unwrap();
    extend(&mut tester, 0..8);
    tester
        .remove_range_with(2..5, &mut Release { seen, fail_on: None })
        .unwrap();
    assert_eq!(seen.get(), 3);
    assert_eq!(values(&tester), vec![0, 1, 5, 6, 7]);

    assert!(tester
        .remove_range_with(0..2, &mut Release { seen, fail_on: Some(1) })
        .is_err());
    assert_eq!(values(&tester), vec![0, 1, 5, 6, 7]);
}

#[test]
fn copy_linearizes() {
    let mut src = padded(6, 4);
    extend(&mut src, 0..5);
    let mut dst = RingQueue::new(4, 2).unwrap();
    extend(&mut dst, 100..101);

    dst.copy_from(&src).unwrap();
    assert_eq!(values(&dst), vec![0, 1, 2, 3, 4]);
    assert_eq!(dst.head(), 0);
    assert_eq!(dst.tail(), 4);
    assert_eq!(dst.capacity(), 5);
    assert_eq!(dst, src);
}

#[test]
fn copy_with_copier() {
    let mut src = RingQueue::new(4, 4).unwrap();
    extend(&mut src, 1..4);
    let mut dst = RingQueue::new(4, 8).unwrap();

    let mut doubled = |dst: &mut [u8], src: &[u8]| -> Result<(), CallbackError> {
        dst.copy_from_slice(&bytes(value(src) * 2));
        Ok(())
    };
    dst.copy_from_with(&src, &mut doubled).unwrap();
    assert_eq!(values(&dst), vec![2, 4, 6]);
    assert_eq!(dst.capacity(), 8);

    let mut failing = |_: &mut [u8], src: &[u8]| -> Result<(), CallbackError> {
        if value(src) == 3 {
            Err(CallbackError::new("no copy"))
        } else {
            Ok(())
        }
    };
    assert!(matches!(
        dst.copy_from_with(&src, &mut failing),
        Err(Error::CallbackFailed(_))
    ));
    assert_eq!(values(&dst), vec![2, 4, 6]);

    let other = RingQueue::new(2, 4).unwrap();
    assert!(matches!(
        dst.copy_from(&other),
        Err(Error::InvalidArgument { name: "src", .. })
    ));
}

#[test]
fn find_with_comparator() {
    let mut tester = padded(5, 3);
    extend(&mut tester, 10..15);
    assert_eq!(tester.find(&bytes(13), &mut crate::element::Bytewise), Ok(Some(3)));
    assert_eq!(tester.find(&bytes(99), &mut crate::element::Bytewise), Ok(None));

    let mut broken = |_: &[u8], _: &[u8]| -> Result<Ordering, CallbackError> {
        Err(CallbackError::new("cannot compare"))
    };
    assert!(matches!(
        tester.find(&bytes(10), &mut broken),
        Err(Error::CallbackFailed(_))
    ));
}

#[test]
fn as_slices_every_padding() {
    const CAP: usize = 10;

    for len in 0..CAP {
        for padding in 0..CAP {
            let mut tester = padded(CAP, padding);
            extend(&mut tester, 0..len as u32);

            let (a, b) = tester.as_slices();
            let joined: Vec<u32> = a.chunks(4).chain(b.chunks(4)).map(value).collect();
            assert_eq!(joined, (0..len as u32).collect::<Vec<_>>());
            let split = CAP - padding;
            if split < len {
                assert_eq!(a.len(), split * 4);
            } else {
                assert!(b.is_empty());
            }
        }
    }
}

#[test]
fn iter_both_ends() {
    let mut tester = padded(4, 2);
    extend(&mut tester, 0..4);
    let mut iter = tester.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next().map(value), Some(0));
    assert_eq!(iter.next_back().map(value), Some(3));
    assert_eq!(iter.len(), 2);
    let rest: Vec<u32> = iter.map(value).collect();
    assert_eq!(rest, vec![1, 2]);
    let reversed: Vec<u32> = tester.iter().rev().map(value).collect();
    assert_eq!(reversed, vec![3, 2, 1, 0]);
}

#[test]
fn equality_ignores_layout() {
    let mut a = padded(8, 6);
    let mut b = padded(4, 0);
    extend(&mut a, 0..5);
    extend(&mut b, 0..5);
    assert_eq!(a, b);
    b.set(4, &bytes(9)).unwrap();
    assert_ne!(a, b);
    b[4].copy_from_slice(&bytes(4));
    assert_eq!(a, b);
    assert_eq!(format!("{:?}", RingQueue::new(1, 1).unwrap()), "[]");
}

#[test]
fn matches_vecdeque_model() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    for _ in 0..50 {
        let mut tester = RingQueue::new(4, rng.usize(1..5)).unwrap();
        let mut model: VecDeque<u32> = VecDeque::new();
        for step in 0..300u32 {
            match rng.u8(0..6) {
                0 => {
                    tester.push_back(&bytes(step)).unwrap();
                    model.push_back(step);
                }
                1 => {
                    tester.push_front(&bytes(step)).unwrap();
                    model.push_front(step);
                }
                2 => {
                    let index = rng.usize(0..=model.len());
                    tester.insert(index, &bytes(step)).unwrap();
                    model.insert(index, step);
                }
                3 if !model.is_empty() => {
                    let index = rng.usize(0..model.len());
                    let mut out = [0; 4];
                    tester.remove(index, Some(&mut out)).unwrap();
                    assert_eq!(Some(value(&out)), model.remove(index));
                }
                4 if !model.is_empty() => {
                    let mut out = [0; 4];
                    tester.pop_front(Some(&mut out)).unwrap();
                    assert_eq!(Some(value(&out)), model.pop_front());
                }
                5 if !model.is_empty() => {
                    let start = rng.usize(0..model.len());
                    let end = rng.usize(start..=model.len());
                    tester.remove_range(start..end).unwrap();
                    model.drain(start..end);
                }
                _ => {}
            }
            assert_eq!(tester.len(), model.len());
            assert!(tester.len() <= tester.capacity());
        }
        assert_eq!(values(&tester), model.iter().copied().collect::<Vec<_>>());
    }
}
