use glam::Vec2;

use crate::error::TraceError;
use crate::path::ReferencePath;

/// Distance within which a touch counts as accurately tracing.
pub const DEFAULT_TOLERANCE_RADIUS: f32 = 85.0;
/// Distance beyond which a touch is considered off the figure entirely.
pub const DEFAULT_FAILURE_RADIUS: f32 = 130.0;

/// Off-path points tolerated since the last on-path point before a failing
/// point latches a mistake. Absorbs entry jitter without letting a child
/// scribble elsewhere indefinitely.
pub const MIN_STROKE_GUARD: usize = 5;

/// On-path points a finished gesture must exceed to count as traced.
pub const MIN_COMPLETION_POINTS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClassification {
    /// Within tolerance of a path vertex; appended to the stroke.
    OnPath,
    /// In the soft buffer between the two radii; buffered, not appended.
    NearMiss,
    /// Beyond the failure radius of every vertex.
    Failing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceOutcome {
    Continuing,
    Mistake,
    Completed,
}

/// Classifies a continuous drag against a reference path and decides
/// whether the finished stroke counts as traced.
///
/// Two thresholds: a single hard boundary would fail constantly under a
/// child's imprecise finger, so the band between `tolerance_radius` and
/// `failure_radius` absorbs jitter while anything beyond the outer radius
/// still counts toward a mistake.
#[derive(Debug)]
pub struct PathTraceValidator {
    path: ReferencePath,
    tolerance_radius: f32,
    failure_radius: f32,
    stroke: Vec<Vec2>,
    off_path_run: usize,
    mistake: bool,
}

impl PathTraceValidator {
    pub fn new(
        path: ReferencePath,
        tolerance_radius: f32,
        failure_radius: f32,
    ) -> Result<Self, TraceError> {
        if !(tolerance_radius > 0.0) || tolerance_radius >= failure_radius {
            return Err(TraceError::InvalidThresholds {
                tolerance: tolerance_radius,
                failure: failure_radius,
            });
        }
        Ok(Self {
            path,
            tolerance_radius,
            failure_radius,
            stroke: Vec::new(),
            off_path_run: 0,
            mistake: false,
        })
    }

    pub fn with_default_thresholds(path: ReferencePath) -> Self {
        Self::new(path, DEFAULT_TOLERANCE_RADIUS, DEFAULT_FAILURE_RADIUS)
            .expect("default thresholds are ordered")
    }

    pub fn path(&self) -> &ReferencePath {
        &self.path
    }

    /// The stroke drawn so far: on-path points only.
    pub fn stroke(&self) -> &[Vec2] {
        &self.stroke
    }

    /// Classifies one pointer position.
    ///
    /// On-path points extend the stroke and reset the off-path run;
    /// near-misses only lengthen the run; a failing point that pushes the
    /// run past `MIN_STROKE_GUARD` latches the mistake. Once latched,
    /// points are still classified but nothing mutates until `reset`.
    pub fn on_pointer_move(&mut self, point: Vec2) -> PointClassification {
        let distance = self.path.nearest_distance(point);
        let class = if distance < self.tolerance_radius {
            PointClassification::OnPath
        } else if distance < self.failure_radius {
            PointClassification::NearMiss
        } else {
            PointClassification::Failing
        };

        if self.mistake {
            return class;
        }

        match class {
            PointClassification::OnPath => {
                self.off_path_run = 0;
                self.stroke.push(point);
            }
            PointClassification::NearMiss => {
                self.off_path_run += 1;
            }
            PointClassification::Failing => {
                self.off_path_run += 1;
                if self.off_path_run > MIN_STROKE_GUARD {
                    self.mistake = true;
                }
            }
        }
        class
    }

    /// Outcome of the stroke in progress.
    pub fn outcome(&self) -> TraceOutcome {
        if self.mistake {
            TraceOutcome::Mistake
        } else {
            TraceOutcome::Continuing
        }
    }

    /// Judges the finished gesture. A stroke that never accumulated enough
    /// on-path points is an incomplete attempt, not a failure: it is
    /// silently discarded and the round continues. A completed stroke is
    /// retained so the host can render it during the celebration.
    pub fn on_gesture_end(&mut self) -> TraceOutcome {
        if self.mistake {
            return TraceOutcome::Mistake;
        }
        if self.stroke.len() > MIN_COMPLETION_POINTS {
            TraceOutcome::Completed
        } else {
            self.stroke.clear();
            self.off_path_run = 0;
            TraceOutcome::Continuing
        }
    }

    /// Clears the stroke, the off-path run, and the mistake latch. The
    /// configured path and thresholds are untouched.
    pub fn reset(&mut self) {
        self.stroke.clear();
        self.off_path_run = 0;
        self.mistake = false;
    }
}
