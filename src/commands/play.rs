//! Full game commands
//!
//! Plays the solver against a chosen hidden word, a random one, or the adversary.

use crate::core::Word;
use crate::game::{GameRecord, GameSettings, run_game};
use crate::solver::SolveSettings;
use anyhow::{Context, Result, bail};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Who picks the hidden word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Opponent {
    /// A fixed hidden word
    Hidden(String),
    /// A random hidden word from the dictionary
    Random { prioritize_taunts: bool },
    /// No hidden word; every guess gets the worst-case answer
    Adversary,
}

/// Resolve the hidden word for `opponent`
///
/// # Errors
///
/// Returns an error if a fixed hidden word is invalid or has the wrong length.
pub fn choose_hidden_word(
    opponent: &Opponent,
    game: &GameSettings,
    seed: Option<u64>,
) -> Result<Option<Word>> {
    match opponent {
        Opponent::Hidden(text) => {
            let word = Word::new(text).with_context(|| format!("invalid hidden word {text:?}"))?;
            if word.len() != game.word_length() {
                bail!(
                    "hidden word {word} has {} letters, expected {}",
                    word.len(),
                    game.word_length()
                );
            }
            if !game.hidden_words().contains(&word) {
                debug!("{word} is not in the hidden word list");
            }
            Ok(Some(word))
        }
        Opponent::Random { prioritize_taunts } => {
            let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
            let word = game
                .random_hidden_word(None, &mut rng, *prioritize_taunts)
                .cloned()
                .context("no hidden words to choose from")?;
            Ok(Some(word))
        }
        Opponent::Adversary => Ok(None),
    }
}

/// Play one full game against `opponent`
///
/// # Errors
///
/// Returns an error if the hidden word is invalid or the solver gets stuck.
pub fn play(
    opponent: &Opponent,
    game: &GameSettings,
    solve: &SolveSettings,
) -> Result<GameRecord> {
    let hidden = choose_hidden_word(opponent, game, solve.random_seed)?;
    let record = run_game(hidden.as_ref(), game, solve).context("game did not finish")?;
    Ok(record)
}
