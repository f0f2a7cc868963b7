//! Command implementations

pub mod inspect;
pub mod play;
pub mod suggest;

pub use inspect::{WorstCaseReport, preview, worst};
pub use play::{Opponent, choose_hidden_word, play};
pub use suggest::{Suggestion, suggest};
