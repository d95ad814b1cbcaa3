use std::time::Duration;

use glam::Vec2;
use play_kit::cue::{AudioCue, Cue};
use play_kit::schedule::{QueueScheduler, Scheduler};
use play_kit::score::ScoreStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use recall_core::engine::{
    Effect as RecallEffect, Phase, SequenceRecallEngine, TimerKind as RecallTimer,
};
use recall_core::symbols::symbol_name;
use serde::Serialize;
use trace_core::gameplay::round::{
    Effect as TraceEffect, RoundPhase, TimerKind as TraceTimer, TraceRound,
};
use trace_core::gameplay::validator::{MIN_COMPLETION_POINTS, MIN_STROKE_GUARD};
use trace_core::input::events::{PointerPhase, PointerSample};
use trace_core::input::PointerQueue;
use trace_core::path::shapes::TraceCategory;

pub struct TraceOptions {
    pub category: TraceCategory,
    pub rounds: Option<u32>,
    pub mistake: bool,
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct TraceSummary {
    pub category: String,
    pub rounds_completed: u32,
    pub final_level: u32,
    pub mode_complete: bool,
    pub mistakes: u32,
}

pub struct RecallOptions {
    pub seed: u64,
    pub levels: u32,
    pub fail_level: Option<u32>,
    pub symbols: u8,
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct RecallSummary {
    pub seed: u64,
    pub levels_completed: u32,
    pub failed_at_level: Option<u32>,
    pub final_score: u32,
    pub best_score: i64,
}

fn log_line(now: Duration, text: &str) {
    println!("{:>7} ms | {}", now.as_millis(), text);
}

fn describe_cue(cue: Cue) -> String {
    match cue {
        Cue::Symbol(id) => format!("cue: symbol {} ({})", id, symbol_name(id)),
        Cue::Success => "cue: success".to_string(),
        Cue::Failure => "cue: failure".to_string(),
        Cue::Prompt(prompt) => format!("say: \"{}\"", prompt.line()),
    }
}

/// Stands in for the host's audio layer: every cue becomes a timeline line.
struct ConsoleCue {
    now: Duration,
}

impl AudioCue for ConsoleCue {
    fn play(&mut self, cue: Cue) {
        log_line(self.now, &describe_cue(cue));
    }
}

// --- Tracing ---------------------------------------------------------------

/// Replays synthetic strokes through a `TraceRound`, printing the emitted
/// effects as a timeline, and hands the store back for flushing.
pub fn run_trace<S: ScoreStore>(options: TraceOptions, store: S) -> anyhow::Result<S> {
    let mut round = TraceRound::new(options.category, Vec2::ZERO, 1.0, store);
    let mut sched: QueueScheduler<TraceTimer> = QueueScheduler::new();
    let mut cues = ConsoleCue {
        now: Duration::ZERO,
    };
    let queue = PointerQueue::new();
    let mut mistakes = 0u32;

    println!(
        "trace: category={} level={} shape={}",
        options.category.label(),
        round.level(),
        round.shape_name()
    );
    println!("   time | event");
    println!("--------|--------------------------------------");

    if options.mistake {
        log_line(sched.now(), "scribbling far off the figure");
        // One more sample than the guard allows, all hopeless.
        let samples: Vec<Vec2> = (0..=MIN_STROKE_GUARD)
            .map(|_| Vec2::new(5000.0, 5000.0))
            .collect();
        feed_gesture(&queue, &samples, false);
        drain_pointer_queue(&queue, &mut round, &mut sched, &mut cues);
        mistakes += 1;
        pump_trace(&mut round, &mut sched, &mut cues);
    }

    let mut rounds_completed = 0u32;
    loop {
        let samples = vertex_hugging_stroke(&round);
        feed_gesture(&queue, &samples, true);
        drain_pointer_queue(&queue, &mut round, &mut sched, &mut cues);
        pump_trace(&mut round, &mut sched, &mut cues);
        rounds_completed += 1;

        if round.phase() == RoundPhase::ModeComplete {
            break;
        }
        if let Some(target) = options.rounds {
            if rounds_completed >= target {
                break;
            }
        }
    }

    let summary = TraceSummary {
        category: options.category.label().to_string(),
        rounds_completed,
        final_level: round.level(),
        mode_complete: round.phase() == RoundPhase::ModeComplete,
        mistakes,
    };
    if options.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "summary: rounds_completed={} final_level={} mode_complete={} mistakes={}",
            summary.rounds_completed, summary.final_level, summary.mode_complete, summary.mistakes
        );
    }
    Ok(round.into_store())
}

/// Vertex-hugging samples: distance is judged against the path's point set,
/// so the synthetic finger lingers near each vertex instead of gliding
/// along the segments between them.
fn vertex_hugging_stroke<S: ScoreStore>(round: &TraceRound<S>) -> Vec<Vec2> {
    let vertices = round.validator().path().points();
    let per_vertex = MIN_COMPLETION_POINTS / vertices.len() + 2;

    let mut samples = Vec::new();
    for vertex in vertices {
        for i in 0..per_vertex {
            let jitter = Vec2::new((i % 3) as f32 * 2.0, (i % 2) as f32 * 2.0);
            samples.push(*vertex + jitter);
        }
    }
    samples
}

/// Plays the producer side of the host's input thread: one Moved sample per
/// position, optionally finished by an Ended sample.
fn feed_gesture(queue: &PointerQueue, positions: &[Vec2], lift: bool) {
    let sender = queue.sender();
    for (i, &position) in positions.iter().enumerate() {
        let _ = sender.send(PointerSample {
            timestamp: i as f64 / 60.0,
            position,
            phase: PointerPhase::Moved,
        });
    }
    if lift {
        let _ = sender.send(PointerSample {
            timestamp: positions.len() as f64 / 60.0,
            position: *positions.last().unwrap_or(&Vec2::ZERO),
            phase: PointerPhase::Ended,
        });
    }
}

fn drain_pointer_queue<S: ScoreStore>(
    queue: &PointerQueue,
    round: &mut TraceRound<S>,
    sched: &mut QueueScheduler<TraceTimer>,
    cues: &mut ConsoleCue,
) {
    while let Some(sample) = queue.pop() {
        let effects = match sample.phase {
            PointerPhase::Moved => round.on_pointer_move(sample.position),
            PointerPhase::Ended => round.on_gesture_end(),
        };
        apply_trace_effects(effects, sched, cues);
    }
}

fn pump_trace<S: ScoreStore>(
    round: &mut TraceRound<S>,
    sched: &mut QueueScheduler<TraceTimer>,
    cues: &mut ConsoleCue,
) {
    while let Some(timer) = sched.pop_next() {
        let effects = round.on_timer(timer);
        apply_trace_effects(effects, sched, cues);
    }
}

fn apply_trace_effects(
    effects: Vec<TraceEffect>,
    sched: &mut QueueScheduler<TraceTimer>,
    cues: &mut ConsoleCue,
) {
    cues.now = sched.now();
    for effect in effects {
        match effect {
            TraceEffect::Schedule { after, timer } => sched.after(after, timer),
            TraceEffect::Phase(phase) => log_line(sched.now(), &format!("phase -> {:?}", phase)),
            TraceEffect::LevelStarted { level, name } => {
                log_line(sched.now(), &format!("level {}: tracing {}", level, name))
            }
            TraceEffect::Cue(cue) => cues.play(cue),
        }
    }
}

// --- Sequence recall -------------------------------------------------------

/// Plays the sequence game end to end: watches the presentation effects to
/// learn each sequence, answers it (correctly, or wrong at `fail_level`),
/// and prints everything the engine asks the host to do.
pub fn run_recall<S: ScoreStore>(options: RecallOptions, store: S) -> anyhow::Result<S> {
    let rng = StdRng::seed_from_u64(options.seed);
    let mut engine = SequenceRecallEngine::new(options.symbols, rng, store)?;
    let mut sched: QueueScheduler<RecallTimer> = QueueScheduler::new();
    let mut cues = ConsoleCue {
        now: Duration::ZERO,
    };

    println!(
        "recall: seed={} symbols={} target_levels={}",
        options.seed, options.symbols, options.levels
    );
    println!("   time | event");
    println!("--------|--------------------------------------");

    let effects = engine.start_game();
    apply_recall_effects(effects, &mut sched, &mut cues);

    let mut levels_completed = 0u32;
    let mut failed_at_level = None;

    'game: loop {
        // Pump timers until the engine hands control to the player.
        while engine.phase() != Phase::AwaitingInput {
            let Some(timer) = sched.pop_next() else {
                break 'game;
            };
            let effects = engine.on_timer(timer);
            apply_recall_effects(effects, &mut sched, &mut cues);
        }
        if engine.phase() != Phase::AwaitingInput {
            break;
        }

        let level = engine.level();
        let answer = engine.symbols().to_vec();
        log_line(
            sched.now(),
            &format!("level {}: answering {} symbol(s)", level, answer.len()),
        );

        if options.fail_level == Some(level) {
            for &symbol in &answer[..answer.len() - 1] {
                tap(&mut engine, &mut sched, &mut cues, symbol);
            }
            let wrong = (answer[answer.len() - 1] + 1) % options.symbols;
            tap(&mut engine, &mut sched, &mut cues, wrong);
            failed_at_level = Some(level);

            // Let the failure delay run the full reset.
            while engine.phase() != Phase::Idle {
                let Some(timer) = sched.pop_next() else {
                    break;
                };
                let effects = engine.on_timer(timer);
                apply_recall_effects(effects, &mut sched, &mut cues);
            }
            break;
        }

        for &symbol in &answer {
            tap(&mut engine, &mut sched, &mut cues, symbol);
        }
        if engine.phase() == Phase::Correct {
            levels_completed += 1;
            if levels_completed >= options.levels {
                break;
            }
        }
    }

    let summary = RecallSummary {
        seed: options.seed,
        levels_completed,
        failed_at_level,
        final_score: engine.score(),
        best_score: engine.best_score(),
    };
    if options.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "summary: levels_completed={} failed_at={} final_score={} best_score={}",
            summary.levels_completed,
            summary
                .failed_at_level
                .map(|l| l.to_string())
                .unwrap_or_else(|| "none".to_string()),
            summary.final_score,
            summary.best_score
        );
    }
    Ok(engine.into_store())
}

fn tap<R: rand::Rng, S: ScoreStore>(
    engine: &mut SequenceRecallEngine<R, S>,
    sched: &mut QueueScheduler<RecallTimer>,
    cues: &mut ConsoleCue,
    symbol: u8,
) {
    log_line(
        sched.now(),
        &format!("tap symbol {} ({})", symbol, symbol_name(symbol)),
    );
    let effects = engine.handle_tap(symbol);
    apply_recall_effects(effects, sched, cues);
}

fn apply_recall_effects(
    effects: Vec<RecallEffect>,
    sched: &mut QueueScheduler<RecallTimer>,
    cues: &mut ConsoleCue,
) {
    cues.now = sched.now();
    for effect in effects {
        match effect {
            RecallEffect::Schedule { after, timer } => sched.after(after, timer),
            RecallEffect::Phase(phase) => log_line(sched.now(), &format!("phase -> {:?}", phase)),
            RecallEffect::Highlight(symbol) => log_line(
                sched.now(),
                &format!("highlight symbol {} ({})", symbol, symbol_name(symbol)),
            ),
            RecallEffect::ClearHighlight => log_line(sched.now(), "clear highlight"),
            RecallEffect::Cue(cue) => cues.play(cue),
        }
    }
}
