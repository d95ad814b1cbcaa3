use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use play_kit::score::{JsonScoreStore, MemoryScoreStore};
use trace_core::path::shapes::TraceCategory;

mod simulate;

use simulate::{run_recall, run_trace, RecallOptions, TraceOptions};

#[derive(Debug, Parser)]
#[command(name = "playsim")]
#[command(about = "Headless simulator for the mini-game logic cores", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay a synthetic tracing session.
    Trace {
        /// shapes | numbers | letters
        #[arg(short, long, default_value = "shapes")]
        category: String,

        /// Successful rounds to play; defaults to playing until the mode
        /// completes.
        #[arg(short, long)]
        rounds: Option<u32>,

        /// Scribble off the figure first to demonstrate the cooldown.
        #[arg(long)]
        mistake: bool,

        /// Persist level progress to this JSON file.
        #[arg(long)]
        score_file: Option<PathBuf>,

        /// Print the end-of-run summary as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Play the watch-and-repeat sequence game under a seeded RNG.
    Recall {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        /// Levels to answer correctly before stopping.
        #[arg(short, long, default_value_t = 3)]
        levels: u32,

        /// Answer this level wrong instead (1-based).
        #[arg(long)]
        fail_level: Option<u32>,

        /// Symbol set size.
        #[arg(long, default_value_t = 8)]
        symbols: u8,

        /// Persist the best score to this JSON file.
        #[arg(long)]
        score_file: Option<PathBuf>,

        /// Print the end-of-run summary as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Trace {
            category,
            rounds,
            mistake,
            score_file,
            json,
        } => {
            let options = TraceOptions {
                category: parse_category(&category)?,
                rounds,
                mistake,
                json,
            };
            match score_file {
                Some(path) => {
                    let store = open_store(&path)?;
                    let store = run_trace(options, store)?;
                    store
                        .flush()
                        .with_context(|| format!("failed to write score file: {}", path.display()))?;
                }
                None => {
                    run_trace(options, MemoryScoreStore::new())?;
                }
            }
        }
        Command::Recall {
            seed,
            levels,
            fail_level,
            symbols,
            score_file,
            json,
        } => {
            let options = RecallOptions {
                seed,
                levels,
                fail_level,
                symbols,
                json,
            };
            match score_file {
                Some(path) => {
                    let store = open_store(&path)?;
                    let store = run_recall(options, store)?;
                    store
                        .flush()
                        .with_context(|| format!("failed to write score file: {}", path.display()))?;
                }
                None => {
                    run_recall(options, MemoryScoreStore::new())?;
                }
            }
        }
    }

    Ok(())
}

fn open_store(path: &Path) -> anyhow::Result<JsonScoreStore> {
    JsonScoreStore::open(path)
        .with_context(|| format!("failed to open score file: {}", path.display()))
}

fn parse_category(raw: &str) -> anyhow::Result<TraceCategory> {
    match raw {
        "shapes" => Ok(TraceCategory::Shapes),
        "numbers" => Ok(TraceCategory::Numbers),
        "letters" => Ok(TraceCategory::Letters),
        other => anyhow::bail!("unknown category: {other} (expected shapes, numbers, or letters)"),
    }
}
