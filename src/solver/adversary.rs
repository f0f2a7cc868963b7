//! Adversarial feedback for evil mode
//!
//! Instead of committing to a hidden word, the adversary answers every guess
//! with the feedback that keeps the most hidden words alive.

use crate::core::{GuessResult, ScoreError, Word};
use crate::game::{GameSettings, GameState};
use log::{debug, warn};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// Feedback for `guess` that leaves the solver with the most candidates
///
/// Ties between equally large groups prefer a pattern that is not all Green,
/// then the pattern whose first hidden word comes earliest in the dictionary.
/// When no hidden word fits the history, every letter is Red. A contradictory
/// history is treated as no history.
///
/// # Errors
/// Returns `ScoreError::LengthMismatch` if `guess` is not the game's word length.
///
/// # Examples
/// ```
/// use evil_wordle::core::Word;
/// use evil_wordle::game::{GameSettings, GameState};
/// use evil_wordle::solver::worst_case;
/// use evil_wordle::wordlists::loader::words_from_slice;
///
/// let game = GameSettings::new(
///     5,
///     6,
///     words_from_slice(&["CRANE", "SLATE", "GRATE"]),
///     Vec::new(),
///     Vec::new(),
/// )
/// .unwrap();
///
/// let guess = Word::new("CRANE").unwrap();
/// let result = worst_case(&guess, &GameState::empty(), &game).unwrap();
/// assert!(!result.is_correct());
/// ```
pub fn worst_case(
    guess: &Word,
    state: &GameState,
    game: &GameSettings,
) -> Result<GuessResult, ScoreError> {
    if guess.len() != game.word_length() {
        return Err(ScoreError::LengthMismatch {
            hidden: game.word_length(),
            guess: guess.len(),
        });
    }

    let constraints = state.constraints().unwrap_or_else(|e| {
        warn!("inconsistent history {state}: {e}");
        None
    });
    let possible = game.filter_hidden_words(constraints.as_ref());

    // Pattern -> (group size, index of its first hidden word)
    let mut groups: FxHashMap<GuessResult, (usize, usize)> = FxHashMap::default();
    for (index, &hidden) in possible.iter().enumerate() {
        let result = GuessResult::score(hidden, guess)?;
        groups.entry(result).or_insert((0, index)).0 += 1;
    }

    let worst = groups
        .into_iter()
        .max_by(|(a, (a_size, a_first)), (b, (b_size, b_first))| {
            a_size
                .cmp(b_size)
                .then_with(|| b.is_correct().cmp(&a.is_correct()))
                .then_with(|| b_first.cmp(a_first))
        });

    Ok(match worst {
        Some((result, (size, _))) => {
            debug!("worst case for {guess} keeps {size} of {}", possible.len());
            result
        }
        None => GuessResult::all_red(guess),
    })
}

/// Every feedback pattern for `guess` with the number of `possible` words
/// giving it, most adversarial first
#[must_use]
pub fn feedback_groups(guess: &Word, possible: &[&Word]) -> Vec<(GuessResult, usize)> {
    let mut groups: FxHashMap<GuessResult, usize> = FxHashMap::default();
    for &hidden in possible {
        if let Ok(result) = GuessResult::score(hidden, guess) {
            *groups.entry(result).or_insert(0) += 1;
        }
    }

    let mut groups: Vec<(GuessResult, usize)> = groups.into_iter().collect();
    groups.sort_by(|(a, a_size), (b, b_size)| {
        b_size
            .cmp(a_size)
            .then_with(|| match (a.is_correct(), b.is_correct()) {
                (false, true) => Ordering::Less,
                (true, false) => Ordering::Greater,
                _ => a.color_text().cmp(&b.color_text()),
            })
    });
    groups
}
