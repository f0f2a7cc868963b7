//! Error types shared by the scorer and the constraint set

use thiserror::Error;

/// Scoring precondition failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("guess is length {guess} but hidden word is length {hidden}")]
    LengthMismatch { hidden: usize, guess: usize },
}

/// Two constraint sets that cannot both hold
///
/// Only arises from inconsistent histories, e.g. a corrupted serialized state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConflictError {
    #[error("cannot combine constraints for lengths {0} and {1}")]
    LengthMismatch(usize, usize),
    #[error("cannot have both {first} and {second} at index {index}")]
    KnownPosition {
        index: usize,
        first: char,
        second: char,
    },
    #[error("{letter} has different max counts {first} and {second}")]
    MaxCount { letter: char, first: u8, second: u8 },
}
