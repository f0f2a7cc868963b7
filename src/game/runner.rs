//! Full game loop
//!
//! Plays the solver against either a known hidden word or the adversary.

use super::{GameSettings, GameState};
use crate::core::{GuessResult, ScoreError, Word};
use crate::solver::{SolveSettings, Solver};
use log::info;
use std::time::Instant;
use thiserror::Error;

/// Hard cap on rounds played, independent of the game's round limit
pub const ROUND_LIMIT: usize = 32;

/// Failure to finish a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no possible guess in round {round}")]
    NoPossibleGuess { round: usize },
    #[error("no win after {0} rounds")]
    RoundLimit(usize),
    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// One round of a played game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundStep {
    pub result: GuessResult,
    /// Hidden words consistent with the history before this guess
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Every round of a finished game
#[derive(Debug, Clone)]
pub struct GameRecord {
    /// `None` for an adversarial game
    pub hidden: Option<Word>,
    pub steps: Vec<RoundStep>,
    pub final_state: GameState,
}

impl GameRecord {
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn success(&self) -> bool {
        self.final_state.is_win()
    }

    /// Won in no more than `max_rounds` rounds
    #[must_use]
    pub fn solved_within(&self, max_rounds: usize) -> bool {
        self.success() && self.rounds() <= max_rounds
    }
}

/// Play one game until a guess comes back all Green
///
/// With `hidden`, guesses are scored against it; without, every guess is
/// answered with [`worst_case`](crate::solver::worst_case). Each round is
/// logged at info level.
///
/// # Errors
/// - `GameError::NoPossibleGuess` when no hidden word fits the history, e.g.
///   because `hidden` is not in the dictionary
/// - `GameError::RoundLimit` after [`ROUND_LIMIT`] rounds without a win
/// - `GameError::Score` if `hidden` has the wrong length
pub fn run_game(
    hidden: Option<&Word>,
    game: &GameSettings,
    solve: &SolveSettings,
) -> Result<GameRecord, GameError> {
    let start = Instant::now();
    let solver = Solver::new(game, solve);
    let mut state = GameState::empty();
    let mut steps = Vec::new();

    for round in 1..=ROUND_LIMIT {
        let candidates_before = count_candidates(&solver, &state);
        let guess = solver
            .best_guess(&state)
            .ok_or(GameError::NoPossibleGuess { round })?;

        let result = match hidden {
            Some(hidden) => GuessResult::score(hidden, &guess)?,
            None => solver.worst_case(&guess, &state)?,
        };

        info!(
            "{:.2?}: Round {round} {result} Remaining Solutions: {candidates_before}",
            start.elapsed()
        );

        state = state.add(result.clone());
        let won = result.is_correct();
        steps.push(RoundStep {
            result,
            candidates_before,
            candidates_after: count_candidates(&solver, &state),
        });

        if won {
            return Ok(GameRecord {
                hidden: hidden.cloned(),
                steps,
                final_state: state,
            });
        }
    }

    Err(GameError::RoundLimit(ROUND_LIMIT))
}

fn count_candidates(solver: &Solver<'_>, state: &GameState) -> usize {
    solver.remaining_candidates(state).map_or(0, |c| c.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn game() -> GameSettings {
        GameSettings::new(
            5,
            6,
            words_from_slice(&[
                "ANGER", "SOARE", "CRANE", "CRATE", "GRATE", "IRATE", "SLATE", "FERAL", "SPORE",
                "SOLVE",
            ]),
            words_from_slice(&["JUJUS"]),
            Vec::new(),
        )
        .unwrap()
    }

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn opening_guess_wins_immediately() {
        let settings = SolveSettings::default().with_seed(123).with_max_solutions(1000);
        let record = run_game(Some(&word("SOARE")), &game(), &settings).unwrap();

        assert_eq!(record.rounds(), 1);
        assert!(record.success());
        assert_eq!(record.final_state.serialize(), "SOARE-GGGGG");
    }

    #[test]
    fn every_dictionary_word_is_solved() {
        let game = game();
        let settings = SolveSettings::default().with_seed(123);

        for hidden in game.hidden_words() {
            let record = run_game(Some(hidden), &game, &settings).unwrap();
            assert!(record.success(), "{hidden}");
            assert_eq!(record.steps.last().unwrap().result.word(), hidden.text());
        }
    }

    #[test]
    fn candidates_never_grow() {
        let settings = SolveSettings::default().with_seed(123);
        let record = run_game(Some(&word("GRATE")), &game(), &settings).unwrap();

        for step in &record.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
        assert_eq!(record.steps.last().unwrap().candidates_after, 1);
    }

    #[test]
    fn adversarial_game_finishes() {
        let settings = SolveSettings::default().with_seed(123);
        let record = run_game(None, &game(), &settings).unwrap();

        assert!(record.hidden.is_none());
        assert!(record.success());
        // Only the last round may be all Green
        let greens = record
            .steps
            .iter()
            .filter(|s| s.result.is_correct())
            .count();
        assert_eq!(greens, 1);
    }

    #[test]
    fn unknown_hidden_word_runs_out_of_guesses() {
        let settings = SolveSettings::default().with_seed(123);
        let result = run_game(Some(&word("JUMPY")), &game(), &settings);
        assert_eq!(result.unwrap_err(), GameError::NoPossibleGuess { round: 2 });
    }

    #[test]
    fn wrong_length_hidden_word_is_an_error() {
        let settings = SolveSettings::default();
        let result = run_game(Some(&word("JUMPED")), &game(), &settings);
        assert!(matches!(result, Err(GameError::Score(_))));
    }

    #[test]
    fn solved_within_round_limit() {
        let settings = SolveSettings::default().with_seed(123);
        let record = run_game(Some(&word("SOARE")), &game(), &settings).unwrap();
        assert!(record.solved_within(1));
        assert!(record.solved_within(6));
    }
}
