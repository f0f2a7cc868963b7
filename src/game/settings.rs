//! Game configuration: word length, round limit and dictionaries

use crate::core::{ConstraintSet, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Error building a [`GameSettings`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("word length must be at least 1")]
    ZeroLength,
    #[error("{word} has length {actual}, expected {expected}")]
    WrongLength {
        word: Word,
        actual: usize,
        expected: usize,
    },
    #[error("no possible hidden words")]
    NoHiddenWords,
}

/// Read-only dictionaries and limits for one game variant
#[derive(Debug, Clone)]
pub struct GameSettings {
    word_length: usize,
    max_rounds: usize,
    hidden_words: Vec<Word>,
    guesses: Vec<Word>,
    taunts: FxHashSet<Word>,
}

impl GameSettings {
    /// Build settings from already-parsed word lists
    ///
    /// The guess list always contains every hidden word: hidden words come
    /// first, followed by the extra guesses in their given order. Duplicates
    /// are dropped.
    ///
    /// # Errors
    /// Returns `SettingsError` if any word has the wrong length or there are no
    /// hidden words.
    pub fn new(
        word_length: usize,
        max_rounds: usize,
        hidden_words: Vec<Word>,
        extra_guesses: Vec<Word>,
        taunts: impl IntoIterator<Item = Word>,
    ) -> Result<Self, SettingsError> {
        if word_length == 0 {
            return Err(SettingsError::ZeroLength);
        }

        let taunts: FxHashSet<Word> = taunts.into_iter().collect();
        for word in hidden_words.iter().chain(&extra_guesses).chain(&taunts) {
            if word.len() != word_length {
                return Err(SettingsError::WrongLength {
                    word: word.clone(),
                    actual: word.len(),
                    expected: word_length,
                });
            }
        }

        let mut seen = FxHashSet::default();
        let hidden_words: Vec<Word> = hidden_words
            .into_iter()
            .filter(|w| seen.insert(w.clone()))
            .collect();

        if hidden_words.is_empty() {
            return Err(SettingsError::NoHiddenWords);
        }

        let guesses: Vec<Word> = hidden_words
            .iter()
            .cloned()
            .chain(extra_guesses.into_iter().filter(|w| seen.insert(w.clone())))
            .collect();

        Ok(Self {
            word_length,
            max_rounds,
            hidden_words,
            guesses,
            taunts,
        })
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// Every word that may be the hidden word
    #[inline]
    #[must_use]
    pub fn hidden_words(&self) -> &[Word] {
        &self.hidden_words
    }

    /// Every word that may be guessed; a superset of the hidden words
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub fn taunts(&self) -> &FxHashSet<Word> {
        &self.taunts
    }

    /// Hidden words still consistent with `constraints` (all of them for `None`)
    #[must_use]
    pub fn filter_hidden_words(&self, constraints: Option<&ConstraintSet>) -> Vec<&Word> {
        match constraints {
            Some(c) => self.hidden_words.iter().filter(|w| c.allow(w)).collect(),
            None => self.hidden_words.iter().collect(),
        }
    }

    /// Pick a random hidden word consistent with `constraints`
    ///
    /// With `prioritize_taunts`, a consistent taunt word is preferred when one exists.
    pub fn random_hidden_word<R: Rng + ?Sized>(
        &self,
        constraints: Option<&ConstraintSet>,
        rng: &mut R,
        prioritize_taunts: bool,
    ) -> Option<&Word> {
        let mut choices = self.filter_hidden_words(constraints);

        if prioritize_taunts {
            let taunting: Vec<&Word> = choices
                .iter()
                .copied()
                .filter(|w| self.taunts.contains(*w))
                .collect();
            if !taunting.is_empty() {
                choices = taunting;
            }
        }

        choices.choose(rng).copied()
    }
}
