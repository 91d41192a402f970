//! Rotation specs
//!
//! Verify the A/B alternation and the size bound.

use crate::prelude::*;

#[test]
fn fresh_log_writes_to_a_until_half_full() {
    let log = LogDir::empty();
    let writer = log.open(20);

    assert_eq!(writer.write(LINE).unwrap(), 7);
    assert_eq!(writer.write(LINE).unwrap(), 7);

    assert_eq!(log.size(Slot::A), Some(14));
    assert_eq!(log.size(Slot::B), None);
}

#[test]
fn crossing_half_size_switches_to_b() {
    let log = LogDir::empty();
    let writer = log.open(20);
    for _ in 0..3 {
        writer.write(LINE).unwrap();
    }

    assert_eq!(log.size(Slot::B), Some(7));
    assert_eq!(log.size(Slot::A), Some(14));
}

#[test]
fn switching_back_truncates_a() {
    let log = LogDir::empty();
    let writer = log.open(20);
    for _ in 0..5 {
        writer.write(LINE).unwrap();
    }

    assert_eq!(log.size(Slot::A), Some(7));
    assert_eq!(log.size(Slot::B), Some(14));
    assert_eq!(log.contents(Slot::A), LINE);
}

#[test]
fn history_of_at_least_half_the_maximum_survives() {
    let log = LogDir::empty();
    let writer = log.open(100);

    for i in 0..200u32 {
        writer
            .write(format!("line {:04}\n", i).as_bytes())
            .unwrap();

        let a = log.size(Slot::A).unwrap_or(0);
        let b = log.size(Slot::B).unwrap_or(0);
        // 10-byte lines on a 50-byte threshold: neither file passes 50 + 9
        assert!(a <= 59 && b <= 59, "a={} b={}", a, b);
        if log.size(Slot::B).is_some() {
            assert!(a + b >= 50, "a={} b={}", a, b);
        }
    }

    // The newest line is always on disk
    let active = writer.active_slot().unwrap();
    let tail = String::from_utf8(log.contents(active)).unwrap();
    assert!(tail.ends_with("line 0199\n"), "tail: {:?}", tail);
}

#[test]
fn sequential_writes_keep_order_within_a_generation() {
    let log = LogDir::empty();
    let writer = log.open(1 << 16);

    for i in 0..50u32 {
        writer.write(format!("{}\n", i).as_bytes()).unwrap();
    }

    let content = String::from_utf8(log.contents(Slot::A)).unwrap();
    let numbers: Vec<u32> = content.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(numbers, (0..50).collect::<Vec<_>>());
}

#[test]
fn concurrent_writers_share_one_log() {
    let log = LogDir::empty();
    let writer = std::sync::Arc::new(log.open(400));

    std::thread::scope(|s| {
        for _ in 0..4 {
            let writer = &writer;
            s.spawn(move || {
                for _ in 0..50 {
                    writer.write(LINE).unwrap();
                }
            });
        }
    });

    // Every line is whole in both files
    for slot in [Slot::A, Slot::B] {
        let content = log.contents(slot);
        assert_eq!(content.len() % LINE.len(), 0);
        assert!(content.chunks(LINE.len()).all(|c| c == LINE));
    }
}
