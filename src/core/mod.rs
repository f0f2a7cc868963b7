//! Core domain types for Wordle-family games
//!
//! This module contains the scoring rule and the constraint representation.
//! Everything here is a pure value type with structural equality.

mod color;
mod constraints;
mod error;
mod feedback;
mod word;

pub use color::{CharResult, Color};
pub use constraints::ConstraintSet;
pub use error::{ConflictError, ScoreError};
pub use feedback::GuessResult;
pub use word::{ALPHABET_SIZE, MAX_WORD_LENGTH, Word, WordError, letter_index};
