pub mod cue;
pub mod schedule;
pub mod score;

pub use cue::{AudioCue, Cue, NullCue, Prompt, SymbolId};
pub use schedule::{Generation, QueueScheduler, Scheduler, Timer};
pub use score::{JsonScoreStore, MemoryScoreStore, ScoreStore, StoreError};
