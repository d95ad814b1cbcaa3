use glam::Vec2;
use trace_core::error::TraceError;
use trace_core::gameplay::validator::{
    PathTraceValidator, PointClassification, TraceOutcome, DEFAULT_FAILURE_RADIUS,
    DEFAULT_TOLERANCE_RADIUS, MIN_COMPLETION_POINTS, MIN_STROKE_GUARD,
};
use trace_core::path::ReferencePath;

/// Three vertices on a horizontal line, 100 apart.
fn test_path() -> ReferencePath {
    ReferencePath::new(
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(200.0, 0.0),
        ],
        false,
    )
    .unwrap()
}

fn validator() -> PathTraceValidator {
    PathTraceValidator::with_default_thresholds(test_path())
}

#[test]
fn points_within_tolerance_classify_on_path_and_extend_the_stroke() {
    let mut v = validator();

    // 84.9 from the nearest vertex: still inside the tolerance radius.
    assert_eq!(
        v.on_pointer_move(Vec2::new(0.0, DEFAULT_TOLERANCE_RADIUS - 0.1)),
        PointClassification::OnPath
    );
    assert_eq!(
        v.on_pointer_move(Vec2::new(120.0, 10.0)),
        PointClassification::OnPath
    );
    assert_eq!(v.stroke().len(), 2);
    assert_eq!(v.outcome(), TraceOutcome::Continuing);
}

#[test]
fn near_misses_are_buffered_but_never_appended() {
    let mut v = validator();

    // Between the two radii of every vertex.
    assert_eq!(
        v.on_pointer_move(Vec2::new(0.0, 100.0)),
        PointClassification::NearMiss
    );
    assert!(v.stroke().is_empty());
    assert_eq!(v.outcome(), TraceOutcome::Continuing);
}

#[test]
fn a_failing_point_after_a_buffered_run_latches_the_mistake() {
    let mut v = validator();

    // Six near-misses fill the buffer without failing on their own.
    for _ in 0..6 {
        assert_eq!(
            v.on_pointer_move(Vec2::new(0.0, 100.0)),
            PointClassification::NearMiss
        );
        assert_eq!(v.outcome(), TraceOutcome::Continuing);
    }

    // 200 units from every vertex: failing, and the run is past the guard.
    assert!(DEFAULT_FAILURE_RADIUS < 200.0);
    assert_eq!(
        v.on_pointer_move(Vec2::new(0.0, 200.0)),
        PointClassification::Failing
    );
    assert_eq!(v.outcome(), TraceOutcome::Mistake);
}

#[test]
fn failing_points_alone_latch_once_the_guard_is_exceeded() {
    let mut v = validator();
    let far = Vec2::new(500.0, 500.0);

    for _ in 0..MIN_STROKE_GUARD {
        v.on_pointer_move(far);
        assert_eq!(v.outcome(), TraceOutcome::Continuing);
    }
    v.on_pointer_move(far);
    assert_eq!(v.outcome(), TraceOutcome::Mistake);
}

#[test]
fn an_on_path_point_resets_the_off_path_run() {
    let mut v = validator();
    let far = Vec2::new(500.0, 500.0);

    for _ in 0..MIN_STROKE_GUARD {
        v.on_pointer_move(far);
    }
    // Back on the figure: the run starts over.
    v.on_pointer_move(Vec2::new(100.0, 0.0));

    for _ in 0..MIN_STROKE_GUARD {
        v.on_pointer_move(far);
        assert_eq!(v.outcome(), TraceOutcome::Continuing);
    }
    v.on_pointer_move(far);
    assert_eq!(v.outcome(), TraceOutcome::Mistake);
}

#[test]
fn latched_mistakes_stop_mutating_state() {
    let mut v = validator();
    let far = Vec2::new(500.0, 500.0);
    for _ in 0..=MIN_STROKE_GUARD {
        v.on_pointer_move(far);
    }
    assert_eq!(v.outcome(), TraceOutcome::Mistake);

    // Still classified, but the stroke no longer grows.
    assert_eq!(
        v.on_pointer_move(Vec2::new(0.0, 0.0)),
        PointClassification::OnPath
    );
    assert!(v.stroke().is_empty());
    assert_eq!(v.on_gesture_end(), TraceOutcome::Mistake);
}

#[test]
fn short_strokes_end_as_continuing_and_are_discarded() {
    let mut v = validator();
    for _ in 0..MIN_COMPLETION_POINTS {
        v.on_pointer_move(Vec2::new(0.0, 0.0));
    }

    // Exactly the threshold is not enough.
    assert_eq!(v.on_gesture_end(), TraceOutcome::Continuing);
    assert!(v.stroke().is_empty());
}

#[test]
fn long_enough_strokes_complete_and_are_retained() {
    let mut v = validator();
    for _ in 0..=MIN_COMPLETION_POINTS {
        v.on_pointer_move(Vec2::new(0.0, 0.0));
    }

    assert_eq!(v.on_gesture_end(), TraceOutcome::Completed);
    assert_eq!(v.stroke().len(), MIN_COMPLETION_POINTS + 1);
}

#[test]
fn reset_reproduces_a_fresh_validator() {
    let samples: Vec<Vec2> = (0..=MIN_COMPLETION_POINTS)
        .map(|i| Vec2::new(i as f32 * 10.0, 5.0))
        .collect();

    let mut recycled = validator();
    let far = Vec2::new(500.0, 500.0);
    for _ in 0..=MIN_STROKE_GUARD {
        recycled.on_pointer_move(far);
    }
    assert_eq!(recycled.outcome(), TraceOutcome::Mistake);
    recycled.reset();

    let mut fresh = validator();
    for &p in &samples {
        assert_eq!(recycled.on_pointer_move(p), fresh.on_pointer_move(p));
    }
    assert_eq!(recycled.stroke(), fresh.stroke());
    assert_eq!(recycled.on_gesture_end(), fresh.on_gesture_end());
}

#[test]
fn inverted_or_zero_thresholds_are_rejected() {
    let err = PathTraceValidator::new(test_path(), 130.0, 85.0).unwrap_err();
    assert!(matches!(err, TraceError::InvalidThresholds { .. }));

    let err = PathTraceValidator::new(test_path(), 85.0, 85.0).unwrap_err();
    assert!(matches!(err, TraceError::InvalidThresholds { .. }));

    let err = PathTraceValidator::new(test_path(), 0.0, 130.0).unwrap_err();
    assert!(matches!(err, TraceError::InvalidThresholds { .. }));
}
