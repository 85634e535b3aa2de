use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};

use crossweave::errors::CrosswordError;
use crossweave::grid::clamp_grid_size;
use crossweave::render::{ascii, PuzzleOutput};
use crossweave::solver::{self, BuildConfig, BuildStatus, Strategy};
use crossweave::supplier::{BuiltinWordSupplier, WordSupplier};
use crossweave::word_list::WordList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Greedy,
    Exhaustive,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Strategy {
        match arg {
            StrategyArg::Greedy => Strategy::Greedy,
            StrategyArg::Exhaustive => Strategy::Exhaustive,
        }
    }
}

/// Crossword layout generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Words to place (falls back to the built-in word set if empty)
    words: Vec<String>,

    /// Read words from a file instead (one `word;clue` per line, clue optional)
    #[arg(short = 'f', long)]
    word_file: Option<String>,

    /// Grid edge length (clamped to the supported range)
    #[arg(short, long, default_value_t = solver::DEFAULT_GRID_SIZE)]
    size: usize,

    /// Placement strategy
    #[arg(long, value_enum, default_value = "greedy")]
    strategy: StrategyArg,

    /// RNG seed for the random fallback path
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Commit budget for the exhaustive strategy
    #[arg(long, default_value_t = solver::DEFAULT_ATTEMPT_BUDGET)]
    attempt_budget: usize,

    /// Forbid words touching along parallel runs
    #[arg(long)]
    no_touching: bool,

    /// Emit the puzzle as JSON instead of ASCII art
    #[arg(long)]
    json: bool,
}

/// Entry point of the crossweave CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them in a
/// user-friendly way before exiting with a failure code.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("CROSSWEAVE_DEBUG").is_ok();
    crossweave::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(cw_err) = e.downcast_ref::<CrosswordError>() {
            eprintln!("Error: {}", cw_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the crossweave CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Resolve the word list: explicit words win over a word file, which wins
///    over the built-in default set.
/// 3. Build the layout with the requested strategy.
/// 4. Print the puzzle (ASCII or JSON) on stdout.
/// 5. Print diagnostics (word counts, timing, score) on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 1. Resolve the word list
    let words = if !cli.words.is_empty() {
        WordList::from_words(&cli.words)
    } else if let Some(path) = &cli.word_file {
        WordList::load_from_path(path)?
    } else {
        let supplied = BuiltinWordSupplier
            .supply("", 10)
            .map_err(CrosswordError::from)?;
        WordList::from_entries(supplied.into_iter().map(|w| (w.word, w.clue)))
    };

    // 2. Clamp the requested size into the supported range
    let size = clamp_grid_size(cli.size);
    if size != cli.size {
        log::warn!("grid size {} clamped to {size}", cli.size);
    }

    let config = BuildConfig {
        size,
        strategy: cli.strategy.into(),
        forbid_touching: cli.no_touching,
        seed: cli.seed,
        attempt_budget: cli.attempt_budget,
        ..BuildConfig::default()
    };

    // 3. Build the layout
    let t_build = Instant::now();
    let result = solver::build_puzzle(&words, &config);
    let build_secs = t_build.elapsed().as_secs_f64();

    // 4. Print the puzzle
    if cli.json {
        let output = PuzzleOutput::new(&result, &words);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", ascii(&result.grid));
        for placement in &result.placements {
            let clue = words
                .clue_for(&placement.word)
                .map(|c| format!(" • {c}"))
                .unwrap_or_default();
            println!(
                "{:>2},{:>2} {:?}: {}{}",
                placement.row, placement.col, placement.orientation, placement.word, clue
            );
        }
    }

    if let BuildStatus::BudgetExhausted { attempts } = result.status {
        eprintln!("⚠️  Attempt budget spent after {attempts} commits; best layout so far returned");
    }
    for word in &result.omitted {
        eprintln!("⚠️  Could not place {word}");
    }

    // 5. Diagnostics to stderr
    eprintln!(
        "Placed {}/{} words in {:.3}s; score {}.",
        result.placements.len(),
        words.len(),
        build_secs,
        result.score
    );

    Ok(())
}
