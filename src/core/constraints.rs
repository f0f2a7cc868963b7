//! Constraint sets derived from guess feedback
//!
//! A [`ConstraintSet`] is a compact summary of everything a set of scored
//! guesses implies about the hidden word:
//! - letters pinned to positions (Green)
//! - positions a letter is known not to occupy (Yellow)
//! - minimum occurrence counts (Green + Yellow hits within one guess)
//! - exact upper bounds, known once a letter has been marked Red
//!
//! Sets are immutable values. [`ConstraintSet::combine`] merges two of them and
//! fails rather than silently dropping information when they contradict.

use super::word::{ALPHABET_SIZE, letter_index};
use super::{Color, ConflictError, GuessResult, Word};

/// Everything known about the hidden word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstraintSet {
    expected_length: usize,
    /// Required letter per position
    known: Box<[Option<u8>]>,
    /// Per letter, bitmask of positions the letter cannot occupy
    excluded: [u32; ALPHABET_SIZE],
    min_counts: [u8; ALPHABET_SIZE],
    max_counts: [Option<u8>; ALPHABET_SIZE],
}

impl ConstraintSet {
    /// Constraints for a game with no guesses yet: every word of the right length is allowed
    #[must_use]
    pub fn empty(expected_length: usize) -> Self {
        Self {
            expected_length,
            known: vec![None; expected_length].into_boxed_slice(),
            excluded: [0; ALPHABET_SIZE],
            min_counts: [0; ALPHABET_SIZE],
            max_counts: [None; ALPHABET_SIZE],
        }
    }

    /// Derive the constraints implied by a single scored guess
    ///
    /// # Examples
    /// ```
    /// use evil_wordle::core::{ConstraintSet, GuessResult, Word};
    ///
    /// let hidden = Word::new("slate").unwrap();
    /// let result = GuessResult::score(&hidden, &Word::new("crane").unwrap()).unwrap();
    /// let constraints = ConstraintSet::from_result(&result);
    ///
    /// assert!(constraints.allow(&hidden));
    /// assert!(!constraints.allow(&Word::new("crate").unwrap()));
    /// ```
    #[must_use]
    pub fn from_result(result: &GuessResult) -> Self {
        let mut constraints = Self::empty(result.len());
        let mut has_red = [false; ALPHABET_SIZE];
        let mut hits = [0u8; ALPHABET_SIZE];

        for (position, r) in result.results().iter().enumerate() {
            let idx = letter_index(r.character);
            match r.color {
                Color::Green => constraints.known[position] = Some(r.character),
                Color::Yellow => constraints.excluded[idx] |= 1 << position,
                Color::Red => has_red[idx] = true,
            }
            if r.color.is_hit() {
                hits[idx] += 1;
            }
        }

        constraints.min_counts = hits;
        for idx in 0..ALPHABET_SIZE {
            if has_red[idx] {
                constraints.max_counts[idx] = Some(hits[idx]);
            }
        }

        constraints
    }

    /// Merge two constraint sets
    ///
    /// # Errors
    /// Returns `ConflictError` if the sets disagree on word length, require
    /// different letters at the same position, or carry different upper bounds
    /// for the same letter.
    pub fn combine(&self, other: &Self) -> Result<Self, ConflictError> {
        if self.expected_length != other.expected_length {
            return Err(ConflictError::LengthMismatch(
                self.expected_length,
                other.expected_length,
            ));
        }

        let known = self
            .known
            .iter()
            .zip(other.known.iter())
            .enumerate()
            .map(|(index, pair)| match pair {
                (Some(first), Some(second)) if first != second => {
                    Err(ConflictError::KnownPosition {
                        index,
                        first: char::from(*first),
                        second: char::from(*second),
                    })
                }
                (a, b) => Ok(a.or(*b)),
            })
            .collect::<Result<Box<[_]>, _>>()?;

        let mut excluded = [0; ALPHABET_SIZE];
        let mut min_counts = [0; ALPHABET_SIZE];
        let mut max_counts = [None; ALPHABET_SIZE];

        for idx in 0..ALPHABET_SIZE {
            excluded[idx] = self.excluded[idx] | other.excluded[idx];
            min_counts[idx] = self.min_counts[idx].max(other.min_counts[idx]);
            max_counts[idx] = match (self.max_counts[idx], other.max_counts[idx]) {
                (Some(first), Some(second)) if first != second => {
                    return Err(ConflictError::MaxCount {
                        letter: char::from(b'A' + idx as u8),
                        first,
                        second,
                    });
                }
                (a, b) => a.or(b),
            };
        }

        Ok(Self {
            expected_length: self.expected_length,
            known,
            excluded,
            min_counts,
            max_counts,
        })
    }

    /// Check whether `word` could still be the hidden word
    #[must_use]
    pub fn allow(&self, word: &Word) -> bool {
        let bytes = word.bytes();
        if bytes.len() != self.expected_length {
            return false;
        }

        for (position, known) in self.known.iter().enumerate() {
            if let Some(required) = *known
                && bytes[position] != required
            {
                return false;
            }
        }

        let mut counts = [0u8; ALPHABET_SIZE];
        for (position, &letter) in bytes.iter().enumerate() {
            let idx = letter_index(letter);
            if self.excluded[idx] & (1 << position) != 0 {
                return false;
            }
            counts[idx] += 1;
        }

        counts.iter().enumerate().all(|(idx, &count)| {
            count >= self.min_counts[idx] && self.max_counts[idx].is_none_or(|max| count <= max)
        })
    }

    /// Pruning heuristic for candidate guesses
    ///
    /// Ignoring letters already pinned in place, a guess is useless when at
    /// least one of its letters is over a known upper bound and all but at most
    /// one of its letters are. Such a guess cannot reveal new position
    /// information.
    #[must_use]
    pub fn is_useful(&self, guess: &Word) -> bool {
        let bytes = guess.bytes();
        if bytes.len() != self.expected_length {
            return false;
        }

        let mut sizes = [0u8; ALPHABET_SIZE];
        let mut unpinned = 0usize;

        for (position, &letter) in bytes.iter().enumerate() {
            if self.known[position] == Some(letter) {
                continue;
            }
            sizes[letter_index(letter)] += 1;
            unpinned += 1;
        }

        let excess: usize = sizes
            .iter()
            .zip(&self.max_counts)
            .filter_map(|(&size, max)| max.filter(|&m| size > m).map(|m| usize::from(size - m)))
            .sum();

        !(excess > 0 && excess + 1 >= unpinned)
    }

    /// Best-effort color for `character` at `position` without knowing the hidden word
    ///
    /// Returns `None` when the constraints do not determine the color.
    #[must_use]
    pub fn color_for(&self, position: usize, character: char) -> Option<Color> {
        if !character.is_ascii_alphabetic() {
            return None;
        }
        let letter = character.to_ascii_uppercase() as u8;
        let idx = letter_index(letter);

        if self.max_counts[idx] == Some(0) {
            return Some(Color::Red);
        }
        if self.known.get(position) == Some(&Some(letter)) {
            return Some(Color::Green);
        }
        if position < u32::BITS as usize && self.excluded[idx] & (1 << position) != 0 {
            return Some(Color::Red);
        }

        let pinned = self.known.iter().filter(|&&k| k == Some(letter)).count();
        if usize::from(self.min_counts[idx]) > pinned {
            return Some(Color::Yellow);
        }

        None
    }

    /// [`Self::color_for`] at every position of `word`
    #[must_use]
    pub fn preview(&self, word: &Word) -> Vec<Option<Color>> {
        word.bytes()
            .iter()
            .enumerate()
            .map(|(position, &letter)| self.color_for(position, char::from(letter)))
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn expected_length(&self) -> usize {
        self.expected_length
    }

    /// Positions whose letter is known, with that letter
    pub fn known_positions(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.known
            .iter()
            .enumerate()
            .filter_map(|(position, known)| known.map(|letter| (position, letter)))
    }

    /// Minimum number of occurrences of `letter` (uppercase ASCII)
    #[must_use]
    pub fn min_count(&self, letter: u8) -> u8 {
        self.min_counts[letter_index(letter)]
    }

    /// Upper bound on occurrences of `letter`, if one is known
    #[must_use]
    pub fn max_count(&self, letter: u8) -> Option<u8> {
        self.max_counts[letter_index(letter)]
    }
}
