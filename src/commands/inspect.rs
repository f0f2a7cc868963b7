//! Single-guess inspection: adversarial answers and color previews

use crate::core::{Color, ConstraintSet, GuessResult, Word};
use crate::game::{GameSettings, GameState};
use crate::solver::{feedback_groups, worst_case};
use anyhow::{Context, Result, bail};

/// Worst-case answer for a guess and how the candidates split
#[derive(Debug, Clone)]
pub struct WorstCaseReport {
    pub state: GameState,
    pub result: GuessResult,
    /// Every feedback pattern with its number of candidates, largest first
    pub groups: Vec<(GuessResult, usize)>,
    pub candidates: usize,
}

/// Answer `guess` adversarially in the serialized `state`
///
/// # Errors
///
/// Returns an error if `guess` is not a valid word of the game's length.
pub fn worst(game: &GameSettings, guess: &str, state: &str) -> Result<WorstCaseReport> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess {guess:?}"))?;
    let state = GameState::deserialize(state);
    let result = worst_case(&guess, &state, game)?;

    let constraints = state.constraints().unwrap_or_default();
    let possible = game.filter_hidden_words(constraints.as_ref());
    let groups = feedback_groups(&guess, &possible);

    Ok(WorstCaseReport {
        state,
        result,
        groups,
        candidates: possible.len(),
    })
}

/// Colors a typed word would be known to get in the serialized `state`
///
/// `None` marks positions that depend on the hidden word.
///
/// # Errors
///
/// Returns an error if `word` is not valid, has the wrong length, or the
/// history is contradictory.
pub fn preview(game: &GameSettings, word: &str, state: &str) -> Result<Vec<Option<Color>>> {
    let word = Word::new(word).with_context(|| format!("invalid word {word:?}"))?;
    if word.len() != game.word_length() {
        bail!(
            "{word} has {} letters, expected {}",
            word.len(),
            game.word_length()
        );
    }

    let state = GameState::deserialize(state);
    let constraints = state
        .constraints()
        .context("history is contradictory")?
        .unwrap_or_else(|| ConstraintSet::empty(game.word_length()));
    Ok(constraints.preview(&word))
}
