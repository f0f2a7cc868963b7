//! Evil Wordle - CLI
//!
//! Plays and inspects Wordle-family games against a fixed, random, or
//! adversarial hidden word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use evil_wordle::{
    commands::{Opponent, play, preview, suggest, worst},
    core::Word,
    game::GameSettings,
    output::{print_game_record, print_preview, print_suggestion, print_worst_case},
    solver::{INTERACTIVE_MAX_SOLUTIONS, SolveSettings, SolverService},
    wordlists::load_with_length,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "evil_wordle",
    about = "Wordle solver with an adversarial worst-case mode",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// File of possible hidden words, one per line
    #[arg(long)]
    hidden_words: PathBuf,

    /// File of extra allowed guesses, one per line
    #[arg(long)]
    guesses: Option<PathBuf>,

    /// File of taunt words preferred as random hidden words
    #[arg(long)]
    taunts: Option<PathBuf>,

    /// Word length
    #[arg(short = 'l', long, default_value = "5")]
    length: usize,

    /// Rounds allowed before a game counts as lost
    #[arg(long, default_value = "6")]
    max_rounds: usize,

    /// Seed for subsampling and random hidden words
    #[arg(long)]
    seed: Option<u64>,

    /// Score each guess against at most this many candidates
    #[arg(long)]
    sample: Option<usize>,

    /// Evaluate guesses on one thread
    #[arg(long)]
    sequential: bool,

    /// Ignore the opening book
    #[arg(long)]
    no_book: bool,

    /// Rank guesses by eliminated candidates without early exit
    #[arg(long)]
    slow: bool,

    /// Log every round and show candidate counts
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a hidden word (random if omitted)
    Solve {
        /// The hidden word to solve
        word: Option<String>,

        /// Prefer taunt words when picking a random hidden word
        #[arg(long)]
        taunts_first: bool,
    },

    /// Play against the adversary, which never commits to a hidden word
    Evil,

    /// Suggest the best guess for a serialized state such as SOARE-RRYYY_CRANE-RYYYY
    Suggest {
        /// Serialized game state; empty for a new game
        #[arg(default_value = "")]
        state: String,
    },

    /// Show the adversary's answer to a guess
    Worst {
        /// The guess to answer
        guess: String,

        /// Serialized game state; empty for a new game
        #[arg(default_value = "")]
        state: String,
    },

    /// Show which colors a typed word is already known to get
    Preview {
        /// The word to preview
        word: String,

        /// Serialized game state
        #[arg(default_value = "")]
        state: String,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn load_optional(path: Option<&Path>, length: usize) -> Result<Vec<Word>> {
    path.map_or_else(
        || Ok(Vec::new()),
        |p| {
            load_with_length(p, length)
                .with_context(|| format!("failed to read word list {}", p.display()))
        },
    )
}

/// Build game settings from the word list files
fn load_game(cli: &Cli) -> Result<GameSettings> {
    let hidden = load_with_length(&cli.hidden_words, cli.length).with_context(|| {
        format!(
            "failed to read hidden word list {}",
            cli.hidden_words.display()
        )
    })?;
    let guesses = load_optional(cli.guesses.as_deref(), cli.length)?;
    let taunts = load_optional(cli.taunts.as_deref(), cli.length)?;

    GameSettings::new(cli.length, cli.max_rounds, hidden, guesses, taunts)
        .context("invalid word lists")
}

/// Search settings from the command line; `default_sample` applies without `--sample`
fn solve_settings(cli: &Cli, default_sample: Option<usize>) -> SolveSettings {
    let mut settings = SolveSettings::default()
        .with_parallel(!cli.sequential)
        .with_fast_checking(!cli.slow);

    settings.random_seed = cli.seed;
    settings.max_solutions_to_search = cli.sample.or(default_sample);
    if cli.no_book {
        settings = settings.without_opening_book();
    }
    settings
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let game = load_game(&cli)?;

    match &cli.command {
        Commands::Solve { word, taunts_first } => {
            let opponent = word.clone().map_or(
                Opponent::Random {
                    prioritize_taunts: *taunts_first,
                },
                Opponent::Hidden,
            );
            let record = play(&opponent, &game, &solve_settings(&cli, None))?;
            print_game_record(&record, game.max_rounds(), cli.verbose);
        }
        Commands::Evil => {
            let record = play(&Opponent::Adversary, &game, &solve_settings(&cli, None))?;
            print_game_record(&record, game.max_rounds(), cli.verbose);
        }
        Commands::Suggest { state } => {
            let settings = solve_settings(&cli, Some(INTERACTIVE_MAX_SOLUTIONS));
            let service = SolverService::with_settings(Arc::new(game), settings);
            print_suggestion(&suggest(&service, state));
        }
        Commands::Worst { guess, state } => {
            print_worst_case(&worst(&game, guess, state)?);
        }
        Commands::Preview { word, state } => {
            print_preview(word, &preview(&game, word, state)?);
        }
    }

    Ok(())
}
