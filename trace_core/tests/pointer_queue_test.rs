use glam::Vec2;
use std::thread;
use trace_core::input::events::{PointerPhase, PointerSample};
use trace_core::input::PointerQueue;

#[test]
fn samples_cross_threads_in_order() {
    let queue = PointerQueue::new();
    let sender = queue.sender();

    let handle = thread::spawn(move || {
        sender
            .send(PointerSample {
                timestamp: 0.1,
                position: Vec2::new(10.0, 20.0),
                phase: PointerPhase::Moved,
            })
            .unwrap();
        sender
            .send(PointerSample {
                timestamp: 0.2,
                position: Vec2::new(11.0, 21.0),
                phase: PointerPhase::Ended,
            })
            .unwrap();
    });
    handle.join().unwrap();

    let first = queue.pop().expect("first sample");
    assert_eq!(first.timestamp, 0.1);
    assert_eq!(first.position, Vec2::new(10.0, 20.0));
    assert_eq!(first.phase, PointerPhase::Moved);

    let second = queue.pop().expect("second sample");
    assert_eq!(second.phase, PointerPhase::Ended);

    assert!(queue.pop().is_none());
}

#[test]
fn drain_preserves_arrival_order() {
    let queue = PointerQueue::new();
    for i in 0..4 {
        queue.push(PointerSample {
            timestamp: i as f64,
            position: Vec2::new(i as f32, 0.0),
            phase: PointerPhase::Moved,
        });
    }

    let mut out = Vec::new();
    queue.drain_into(&mut out);
    assert_eq!(out.len(), 4);
    for (i, sample) in out.iter().enumerate() {
        assert_eq!(sample.timestamp, i as f64);
    }
    assert!(queue.pop().is_none());
}
