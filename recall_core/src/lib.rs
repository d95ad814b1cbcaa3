pub mod engine;
pub mod symbols;

pub use engine::{Effect, EngineError, Phase, SequenceRecallEngine, TimerKind};
