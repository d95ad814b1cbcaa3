use std::time::Duration;

use glam::Vec2;
use play_kit::cue::Cue;
use play_kit::schedule::{Generation, Timer};
use play_kit::score::ScoreStore;

use crate::gameplay::validator::{PathTraceValidator, TraceOutcome};
use crate::path::shapes::{shape_for, TraceCategory, MAX_LEVEL};

/// Input stays disabled this long after a mistake before the stroke clears.
const MISTAKE_COOLDOWN: Duration = Duration::from_millis(800);
/// Celebration length before the next level (or mode completion).
const ADVANCE_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Drawing,
    MistakeCooldown,
    Celebrating,
    ModeComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    CooldownOver,
    AdvanceLevel,
}

/// Instructions for the host; the round itself draws and plays nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Phase(RoundPhase),
    LevelStarted { level: u32, name: &'static str },
    Cue(Cue),
    Schedule {
        after: Duration,
        timer: Timer<TimerKind>,
    },
}

/// One tracing session: a category played level by level, with the current
/// level persisted per category so a child resumes where they left off.
pub struct TraceRound<S: ScoreStore> {
    category: TraceCategory,
    level: u32,
    phase: RoundPhase,
    validator: PathTraceValidator,
    shape_name: &'static str,
    center: Vec2,
    scale: f32,
    generation: Generation,
    store: S,
}

impl<S: ScoreStore> TraceRound<S> {
    /// Starts (or resumes) a session. `center`/`scale` map the catalog's
    /// model-space shapes onto the host canvas; validation happens in
    /// canvas space, where the default radii are calibrated.
    pub fn new(category: TraceCategory, center: Vec2, scale: f32, store: S) -> Self {
        let level = store.get(category.level_key()).clamp(1, MAX_LEVEL as i64) as u32;
        let shape = shape_for(category, level);
        let validator =
            PathTraceValidator::with_default_thresholds(shape.path.screen_mapped(center, scale));
        Self {
            category,
            level,
            phase: RoundPhase::Drawing,
            validator,
            shape_name: shape.name,
            center,
            scale,
            generation: 0,
            store,
        }
    }

    pub fn category(&self) -> TraceCategory {
        self.category
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn shape_name(&self) -> &'static str {
        self.shape_name
    }

    pub fn validator(&self) -> &PathTraceValidator {
        &self.validator
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// One drag sample. Ignored outside `Drawing` (in particular during the
    /// mistake cooldown, so a child still scribbling cannot re-trigger it).
    pub fn on_pointer_move(&mut self, point: Vec2) -> Vec<Effect> {
        if self.phase != RoundPhase::Drawing {
            return Vec::new();
        }
        let _ = self.validator.on_pointer_move(point);
        if self.validator.outcome() == TraceOutcome::Mistake {
            self.phase = RoundPhase::MistakeCooldown;
            let mut effects = vec![
                Effect::Phase(RoundPhase::MistakeCooldown),
                Effect::Cue(Cue::Failure),
            ];
            self.schedule(&mut effects, MISTAKE_COOLDOWN, TimerKind::CooldownOver);
            return effects;
        }
        Vec::new()
    }

    /// Finger lifted. A completed trace starts the celebration; a short
    /// stroke was already discarded by the validator and nothing happens.
    pub fn on_gesture_end(&mut self) -> Vec<Effect> {
        if self.phase != RoundPhase::Drawing {
            return Vec::new();
        }
        match self.validator.on_gesture_end() {
            TraceOutcome::Completed => {
                self.phase = RoundPhase::Celebrating;
                let mut effects = vec![
                    Effect::Phase(RoundPhase::Celebrating),
                    Effect::Cue(Cue::Success),
                ];
                self.schedule(&mut effects, ADVANCE_DELAY, TimerKind::AdvanceLevel);
                effects
            }
            _ => Vec::new(),
        }
    }

    /// Delivery of a scheduled timer; stale generations and outlived phases
    /// are no-ops.
    pub fn on_timer(&mut self, timer: Timer<TimerKind>) -> Vec<Effect> {
        if timer.generation != self.generation {
            return Vec::new();
        }
        match timer.kind {
            TimerKind::CooldownOver => {
                if self.phase != RoundPhase::MistakeCooldown {
                    return Vec::new();
                }
                self.validator.reset();
                self.phase = RoundPhase::Drawing;
                vec![Effect::Phase(RoundPhase::Drawing)]
            }
            TimerKind::AdvanceLevel => {
                if self.phase != RoundPhase::Celebrating {
                    return Vec::new();
                }
                if self.level < MAX_LEVEL {
                    self.level += 1;
                    self.store
                        .set(self.category.level_key(), i64::from(self.level));
                    self.load_level()
                } else {
                    self.phase = RoundPhase::ModeComplete;
                    vec![Effect::Phase(RoundPhase::ModeComplete)]
                }
            }
        }
    }

    /// Back to level 1 (the "play again" button on the completion screen).
    /// Also invalidates any timer still in flight.
    pub fn reset_progress(&mut self) -> Vec<Effect> {
        self.generation += 1;
        self.level = 1;
        self.store.set(self.category.level_key(), 1);
        self.load_level()
    }

    fn load_level(&mut self) -> Vec<Effect> {
        let shape = shape_for(self.category, self.level);
        self.validator = PathTraceValidator::with_default_thresholds(
            shape.path.screen_mapped(self.center, self.scale),
        );
        self.shape_name = shape.name;
        self.phase = RoundPhase::Drawing;
        vec![
            Effect::LevelStarted {
                level: self.level,
                name: self.shape_name,
            },
            Effect::Phase(RoundPhase::Drawing),
        ]
    }

    fn schedule(&self, effects: &mut Vec<Effect>, after: Duration, kind: TimerKind) {
        effects.push(Effect::Schedule {
            after,
            timer: Timer::new(self.generation, kind),
        });
    }
}
