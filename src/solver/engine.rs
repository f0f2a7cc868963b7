//! Best-guess search

use super::adversary;
use super::cache::SearchOutcome;
use super::cancel::CancellationToken;
use super::scoring::{count_eliminated_by_guess, count_remaining_after_guess};
use super::settings::SolveSettings;
use crate::core::{ALPHABET_SIZE, ConstraintSet, GuessResult, ScoreError, Word, letter_index};
use crate::game::{GameSettings, GameState};
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::sync::atomic::{self, AtomicUsize};

/// Distinct letters across the remaining words below which guesses must
/// cover at least two of them
const USED_LETTER_CAP: usize = 23;

/// Main solver
///
/// Chooses the guess that minimizes the total number of candidates left over
/// every hidden word still consistent with the history.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    game: &'a GameSettings,
    settings: &'a SolveSettings,
}

/// One evaluated guess, ordered by score, then membership, then position
#[derive(Debug, Clone, Copy)]
struct Scored<'a> {
    guess: &'a Word,
    score: usize,
    is_candidate: bool,
    index: usize,
}

impl Scored<'_> {
    fn rank(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| other.is_candidate.cmp(&self.is_candidate))
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(game: &'a GameSettings, settings: &'a SolveSettings) -> Self {
        Self { game, settings }
    }

    #[inline]
    #[must_use]
    pub const fn game(&self) -> &'a GameSettings {
        self.game
    }

    #[inline]
    #[must_use]
    pub const fn settings(&self) -> &'a SolveSettings {
        self.settings
    }

    /// Best next guess for `state`, or `None` if no hidden word fits the history
    #[must_use]
    pub fn best_guess(&self, state: &GameState) -> Option<Word> {
        self.best_guess_with(state, &CancellationToken::new())
    }

    /// Like [`best_guess`](Self::best_guess), stopping early once `cancel` fires
    ///
    /// Goes through the result cache when one is configured.
    #[must_use]
    pub fn best_guess_with(&self, state: &GameState, cancel: &CancellationToken) -> Option<Word> {
        match &self.settings.result_cache {
            Some(cache) => cache.get_or_compute(state, || self.search(state, cancel)),
            None => self.search(state, cancel).guess,
        }
    }

    /// Hidden words consistent with the history, or `None` if it is contradictory
    #[must_use]
    pub fn remaining_candidates(&self, state: &GameState) -> Option<Vec<&'a Word>> {
        match state.constraints() {
            Ok(constraints) => Some(self.game.filter_hidden_words(constraints.as_ref())),
            Err(e) => {
                warn!("inconsistent history {state}: {e}");
                None
            }
        }
    }

    /// Worst-case feedback for `guess`; see [`worst_case`](super::worst_case)
    ///
    /// # Errors
    /// Returns `ScoreError` if `guess` has the wrong length.
    pub fn worst_case(&self, guess: &Word, state: &GameState) -> Result<GuessResult, ScoreError> {
        adversary::worst_case(guess, state, self.game)
    }

    /// Run the search without consulting the cache
    #[must_use]
    pub fn search(&self, state: &GameState, cancel: &CancellationToken) -> SearchOutcome {
        let constraints = match state.constraints() {
            Ok(c) => c,
            Err(e) => {
                warn!("inconsistent history {state}: {e}");
                return SearchOutcome::complete(None);
            }
        };

        let remaining = self.game.filter_hidden_words(constraints.as_ref());
        match remaining.as_slice() {
            [] => return SearchOutcome::complete(None),
            [only] => return SearchOutcome::complete(Some((*only).clone())),
            _ => {}
        }

        let sample = self.sample(remaining);
        let members: FxHashSet<&Word> = sample.iter().copied().collect();
        let guesses = self.candidate_guesses(state, constraints.as_ref(), &sample, &members);

        debug!(
            "searching {} guesses against {} candidates",
            guesses.len(),
            sample.len()
        );

        let best = self.evaluate(&guesses, constraints.as_ref(), &sample, &members, cancel);
        let guess = best.map(|scored| {
            debug!("best guess {} scores {}", scored.guess, scored.score);
            scored.guess.clone()
        });

        if cancel.is_cancelled() {
            SearchOutcome::partial(guess)
        } else {
            SearchOutcome::complete(guess)
        }
    }

    /// Random subsample of `remaining` when it exceeds the configured cap
    fn sample(&self, remaining: Vec<&'a Word>) -> Vec<&'a Word> {
        let Some(max) = self.settings.max_solutions_to_search else {
            return remaining;
        };
        if remaining.len() <= max {
            return remaining;
        }

        let seed = self.settings.random_seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        debug!(
            "sampling {max} of {} candidates with seed {seed}",
            remaining.len()
        );
        remaining
            .choose_multiple(&mut rng, max.max(1))
            .copied()
            .collect()
    }

    /// Guesses worth scoring: the opening book entry or the full guess list,
    /// with useless guesses removed
    fn candidate_guesses(
        &self,
        state: &GameState,
        constraints: Option<&ConstraintSet>,
        sample: &[&'a Word],
        members: &FxHashSet<&Word>,
    ) -> Vec<&'a Word> {
        let word_length = self.game.word_length();
        let book: Vec<&'a Word> = self
            .settings
            .opening_book
            .get(&state.guess_key())
            .unwrap_or_default()
            .iter()
            .filter(|w| w.len() == word_length)
            .collect();

        let from_book = !book.is_empty();
        let guesses: Vec<&'a Word> = if from_book {
            debug!("opening book has {} guesses for this history", book.len());
            book
        } else {
            self.game.guesses().iter().collect()
        };

        if !self.settings.eliminate_useless_guesses {
            return guesses;
        }

        let useful: Vec<&'a Word> = match constraints {
            Some(c) => guesses.into_iter().filter(|g| c.is_useful(g)).collect(),
            None => guesses,
        };
        // Book entries are already curated
        let filtered = if from_book {
            useful
        } else {
            filter_by_used_letters(useful, sample, members)
        };

        if filtered.is_empty() {
            sample.to_vec()
        } else {
            filtered
        }
    }

    /// Score every guess and pick the best
    ///
    /// Only a guess whose total strictly exceeds the best completed total is
    /// abandoned, so every guess with the optimal score finishes and the
    /// final ranking does not depend on evaluation order.
    fn evaluate(
        &self,
        guesses: &[&'a Word],
        constraints: Option<&ConstraintSet>,
        sample: &[&Word],
        members: &FxHashSet<&Word>,
        cancel: &CancellationToken,
    ) -> Option<Scored<'a>> {
        let fast = self.settings.use_fast_checking;
        let full_total = sample.len() * sample.len();
        let bound = AtomicUsize::new(usize::MAX);

        let score_guess = |(index, &guess): (usize, &&'a Word)| -> Option<Scored<'a>> {
            if cancel.is_cancelled() {
                return None;
            }

            let score = if fast {
                let give_up_after = bound.load(atomic::Ordering::Relaxed);
                let total = count_remaining_after_guess(constraints, guess, sample, give_up_after)?;
                bound.fetch_min(total, atomic::Ordering::Relaxed);
                total
            } else {
                full_total - count_eliminated_by_guess(constraints, guess, sample)?
            };

            Some(Scored {
                guess,
                score,
                is_candidate: members.contains(guess),
                index,
            })
        };

        if self.settings.use_parallel {
            guesses
                .par_iter()
                .enumerate()
                .filter_map(score_guess)
                .min_by(Scored::rank)
        } else {
            guesses
                .iter()
                .enumerate()
                .filter_map(score_guess)
                .min_by(Scored::rank)
        }
    }
}

/// Drop guesses that share fewer than two letters with the remaining words
///
/// Only applies when the remaining words use fewer than [`USED_LETTER_CAP`]
/// distinct letters. Remaining words themselves are always kept.
fn filter_by_used_letters<'w>(
    guesses: Vec<&'w Word>,
    sample: &[&Word],
    members: &FxHashSet<&Word>,
) -> Vec<&'w Word> {
    let mut used = [false; ALPHABET_SIZE];
    for word in sample {
        for &c in word.bytes() {
            used[letter_index(c)] = true;
        }
    }

    if used.iter().filter(|&&u| u).count() >= USED_LETTER_CAP {
        return guesses;
    }

    guesses
        .into_iter()
        .filter(|guess| {
            if members.contains(guess) {
                return true;
            }
            let mut seen = [false; ALPHABET_SIZE];
            let mut covered = 0;
            for &c in guess.bytes() {
                let i = letter_index(c);
                if used[i] && !seen[i] {
                    seen[i] = true;
                    covered += 1;
                }
            }
            covered >= 2
        })
        .collect()
}
