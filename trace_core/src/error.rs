use thiserror::Error;

/// Construction-time content errors. In-game outcomes (off-path strokes,
/// short gestures) are game states, never errors.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TraceError {
    #[error("reference path needs at least 2 points, got {got}")]
    PathTooShort { got: usize },

    #[error("thresholds must satisfy 0 < tolerance < failure (tolerance={tolerance}, failure={failure})")]
    InvalidThresholds { tolerance: f32, failure: f32 },
}
