use std::time::Duration;

use play_kit::cue::{Cue, Prompt, SymbolId};
use play_kit::schedule::{Generation, Timer};
use play_kit::score::ScoreStore;
use rand::Rng;
use thiserror::Error;

/// Store key for the persisted best score.
pub const BEST_SCORE_KEY: &str = "sequence_best_score";

/// Points awarded per completed level.
pub const LEVEL_REWARD: u32 = 10;

// Timings, in order of appearance during a round.
const PREPARE_DELAY: Duration = Duration::from_millis(2000);
const PLAYBACK_LEAD_IN: Duration = Duration::from_millis(1000);
const HIGHLIGHT_HOLD: Duration = Duration::from_millis(600);
const STEP_GAP: Duration = Duration::from_millis(300);
const TRAILING_DELAY: Duration = Duration::from_millis(500);
const TAP_FLASH: Duration = Duration::from_millis(400);
const CELEBRATION_DELAY: Duration = Duration::from_millis(2500);
const NEXT_ROUND_DELAY: Duration = Duration::from_millis(1500);
const FAILURE_RESET_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("symbol set must hold at least 2 symbols, got {0}")]
    SymbolSetTooSmall(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Presenting,
    AwaitingInput,
    Correct,
    Incorrect,
}

/// Delayed continuations of the round. Each carries the generation it was
/// scheduled under; a stale delivery is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Prepare delay elapsed; announce playback and lead in to step 0.
    BeginPlayback,
    /// Highlight symbol `i` of the sequence.
    ShowStep(usize),
    /// End of the hold for step `i`; gap to the next step or trail out.
    ClearStep(usize),
    /// Trailing delay elapsed; hand control to the player.
    BeginAwait,
    /// End of the brief highlight that mirrors a player tap.
    ClearTapFlash,
    CelebrationOver,
    FailureReset,
}

/// Instructions for the host. The engine performs no rendering, audio, or
/// clock I/O itself; it only emits these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Phase(Phase),
    Highlight(SymbolId),
    ClearHighlight,
    Cue(Cue),
    Schedule {
        after: Duration,
        timer: Timer<TimerKind>,
    },
}

/// Watch-then-repeat memory game: presents a growing symbol sequence with
/// timed highlights, collects taps, and judges them against the sequence.
pub struct SequenceRecallEngine<R: Rng, S: ScoreStore> {
    phase: Phase,
    symbols: Vec<SymbolId>,
    user_input: Vec<SymbolId>,
    level: u32,
    score: u32,
    best_score: i64,
    highlighted: Option<SymbolId>,
    generation: Generation,
    symbol_count: u8,
    rng: R,
    store: S,
}

impl<R: Rng, S: ScoreStore> SequenceRecallEngine<R, S> {
    pub fn new(symbol_count: u8, rng: R, store: S) -> Result<Self, EngineError> {
        if symbol_count < 2 {
            return Err(EngineError::SymbolSetTooSmall(symbol_count));
        }
        let best_score = store.get(BEST_SCORE_KEY);
        Ok(Self {
            phase: Phase::Idle,
            symbols: Vec::new(),
            user_input: Vec::new(),
            level: 1,
            score: 0,
            best_score,
            highlighted: None,
            generation: 0,
            symbol_count,
            rng,
            store,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> i64 {
        self.best_score
    }

    pub fn symbols(&self) -> &[SymbolId] {
        &self.symbols
    }

    pub fn user_input(&self) -> &[SymbolId] {
        &self.user_input
    }

    pub fn highlighted(&self) -> Option<SymbolId> {
        self.highlighted
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Begins a new game. Valid only from `Idle`; anywhere else this is a
    /// no-op with no effects.
    pub fn start_game(&mut self) -> Vec<Effect> {
        if self.phase != Phase::Idle {
            return Vec::new();
        }
        self.generation += 1;
        self.level = 1;
        self.score = 0;
        self.symbols.clear();
        self.user_input.clear();
        self.highlighted = None;
        self.push_symbol();

        self.phase = Phase::Presenting;
        let mut effects = vec![
            Effect::Phase(Phase::Presenting),
            Effect::Cue(Cue::Prompt(Prompt::GetReady)),
        ];
        self.schedule(&mut effects, PREPARE_DELAY, TimerKind::BeginPlayback);
        effects
    }

    /// One player tap. Ignored outside `AwaitingInput` and for ids outside
    /// the symbol set. The tap is judged immediately on append: a diverging
    /// symbol fails the round without waiting for the rest of the input.
    pub fn handle_tap(&mut self, symbol: SymbolId) -> Vec<Effect> {
        if self.phase != Phase::AwaitingInput || symbol >= self.symbol_count {
            return Vec::new();
        }

        self.user_input.push(symbol);
        self.highlighted = Some(symbol);
        let mut effects = vec![Effect::Highlight(symbol), Effect::Cue(Cue::Symbol(symbol))];
        // The flash is scheduled before any phase change below so that it
        // survives the transition and still clears the button.
        self.schedule(&mut effects, TAP_FLASH, TimerKind::ClearTapFlash);

        let pos = self.user_input.len() - 1;
        if self.user_input[pos] != self.symbols[pos] {
            self.phase = Phase::Incorrect;
            effects.push(Effect::Phase(Phase::Incorrect));
            effects.push(Effect::Cue(Cue::Failure));
            effects.push(Effect::Cue(Cue::Prompt(Prompt::TryAgain)));
            self.schedule(&mut effects, FAILURE_RESET_DELAY, TimerKind::FailureReset);
        } else if self.user_input.len() == self.symbols.len() {
            self.phase = Phase::Correct;
            self.score += LEVEL_REWARD;
            if i64::from(self.score) > self.best_score {
                self.best_score = i64::from(self.score);
                self.store.set(BEST_SCORE_KEY, self.best_score);
            }
            effects.push(Effect::Phase(Phase::Correct));
            effects.push(Effect::Cue(Cue::Success));
            effects.push(Effect::Cue(Cue::Prompt(Prompt::Excellent)));
            self.schedule(&mut effects, CELEBRATION_DELAY, TimerKind::CelebrationOver);
        }
        effects
    }

    /// Host-driven full reset (leaving the screen). Outstanding timers are
    /// invalidated by the generation bump.
    pub fn reset(&mut self) -> Vec<Effect> {
        self.generation += 1;
        let mut effects = Vec::new();
        if self.highlighted.take().is_some() {
            effects.push(Effect::ClearHighlight);
        }
        let was_idle = self.phase == Phase::Idle;
        self.clear_round();
        self.phase = Phase::Idle;
        if !was_idle {
            effects.push(Effect::Phase(Phase::Idle));
        }
        effects
    }

    /// Delivery of a previously scheduled timer. Stale deliveries (an older
    /// generation, or a phase the round has already left) do nothing.
    pub fn on_timer(&mut self, timer: Timer<TimerKind>) -> Vec<Effect> {
        if timer.generation != self.generation {
            return Vec::new();
        }

        let mut effects = Vec::new();
        match timer.kind {
            TimerKind::BeginPlayback => {
                if self.phase != Phase::Presenting {
                    return effects;
                }
                effects.push(Effect::Cue(Cue::Prompt(Prompt::Watch)));
                self.schedule(&mut effects, PLAYBACK_LEAD_IN, TimerKind::ShowStep(0));
            }
            TimerKind::ShowStep(i) => {
                if self.phase != Phase::Presenting {
                    return effects;
                }
                let Some(&symbol) = self.symbols.get(i) else {
                    return effects;
                };
                self.highlighted = Some(symbol);
                effects.push(Effect::Highlight(symbol));
                effects.push(Effect::Cue(Cue::Symbol(symbol)));
                self.schedule(&mut effects, HIGHLIGHT_HOLD, TimerKind::ClearStep(i));
            }
            TimerKind::ClearStep(i) => {
                if self.phase != Phase::Presenting {
                    return effects;
                }
                self.highlighted = None;
                effects.push(Effect::ClearHighlight);
                if i + 1 < self.symbols.len() {
                    self.schedule(&mut effects, STEP_GAP, TimerKind::ShowStep(i + 1));
                } else {
                    self.schedule(&mut effects, TRAILING_DELAY, TimerKind::BeginAwait);
                }
            }
            TimerKind::BeginAwait => {
                if self.phase != Phase::Presenting {
                    return effects;
                }
                self.phase = Phase::AwaitingInput;
                self.user_input.clear();
                effects.push(Effect::Phase(Phase::AwaitingInput));
                effects.push(Effect::Cue(Cue::Prompt(Prompt::YourTurn)));
            }
            TimerKind::ClearTapFlash => {
                if self.highlighted.take().is_some() {
                    effects.push(Effect::ClearHighlight);
                }
            }
            TimerKind::CelebrationOver => {
                if self.phase != Phase::Correct {
                    return effects;
                }
                self.level += 1;
                self.push_symbol();
                self.user_input.clear();
                self.phase = Phase::Presenting;
                effects.push(Effect::Phase(Phase::Presenting));
                self.schedule(&mut effects, NEXT_ROUND_DELAY, TimerKind::BeginPlayback);
            }
            TimerKind::FailureReset => {
                if self.phase != Phase::Incorrect {
                    return effects;
                }
                self.clear_round();
                self.phase = Phase::Idle;
                effects.push(Effect::Phase(Phase::Idle));
            }
        }
        effects
    }

    /// Uniform draw; consecutive repeats are permitted.
    fn push_symbol(&mut self) {
        let symbol = self.rng.gen_range(0..self.symbol_count);
        self.symbols.push(symbol);
    }

    fn clear_round(&mut self) {
        self.symbols.clear();
        self.user_input.clear();
        self.level = 1;
        self.score = 0;
        self.highlighted = None;
    }

    fn schedule(&self, effects: &mut Vec<Effect>, after: Duration, kind: TimerKind) {
        effects.push(Effect::Schedule {
            after,
            timer: Timer::new(self.generation, kind),
        });
    }
}
