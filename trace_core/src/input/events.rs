use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Finger moved while down.
    Moved,
    /// Finger lifted; ends the gesture.
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Host timestamp in seconds, from an arbitrary epoch.
    pub timestamp: f64,
    /// Position in canvas space.
    pub position: Vec2,
    pub phase: PointerPhase,
}
