//! Evil Wordle
//!
//! A constraint-based solver for Wordle-family games, with an adversarial mode
//! that never commits to a hidden word.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_wordle::core::{GuessResult, Word};
//! use evil_wordle::game::{GameSettings, GameState};
//! use evil_wordle::solver::{SolveSettings, Solver};
//! use evil_wordle::wordlists::words_from_slice;
//!
//! let game = GameSettings::new(
//!     5,
//!     6,
//!     words_from_slice(&["ANGER", "CRANE", "SLATE", "FERAL"]),
//!     Vec::new(),
//!     Vec::new(),
//! )
//! .unwrap();
//! let settings = SolveSettings::default().with_seed(123);
//! let solver = Solver::new(&game, &settings);
//!
//! let hidden = Word::new("anger").unwrap();
//! let mut state = GameState::empty();
//! while !state.is_win() {
//!     let guess = solver.best_guess(&state).unwrap();
//!     state = state.add(GuessResult::score(&hidden, &guess).unwrap());
//! }
//! println!("{}", state.serialize());
//! ```

// Core domain types
pub mod core;

// Game history, settings and the game loop
pub mod game;

// Guess selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
