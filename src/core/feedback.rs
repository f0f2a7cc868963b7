//! Guess feedback and the scoring rule
//!
//! A [`GuessResult`] is the ordered per-letter feedback for one guess. Equality
//! and hashing are element-wise and order-sensitive, so results can be used to
//! group hidden words by the feedback they would produce.

use super::{CharResult, Color, ScoreError, Word};
use std::fmt;

/// Ordered feedback for a single guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult {
    results: Box<[CharResult]>,
}

impl GuessResult {
    #[must_use]
    pub(crate) fn new(results: impl Into<Box<[CharResult]>>) -> Self {
        Self {
            results: results.into(),
        }
    }

    /// Pair each letter of `word` with the color at the same position
    ///
    /// # Errors
    /// Returns `ScoreError::LengthMismatch` if the lengths differ.
    pub fn from_colors(word: &Word, colors: &[Color]) -> Result<Self, ScoreError> {
        if word.len() != colors.len() {
            return Err(ScoreError::LengthMismatch {
                hidden: colors.len(),
                guess: word.len(),
            });
        }

        Ok(Self::new(
            word.bytes()
                .iter()
                .zip(colors)
                .map(|(&c, &color)| CharResult::new(c, color))
                .collect::<Vec<_>>(),
        ))
    }

    /// Every letter Red; used when no hidden word is consistent with the history
    #[must_use]
    pub fn all_red(guess: &Word) -> Self {
        Self::new(
            guess
                .bytes()
                .iter()
                .map(|&c| CharResult::new(c, Color::Red))
                .collect::<Vec<_>>(),
        )
    }

    /// Score `guess` against `hidden`
    ///
    /// Green wins outright. Otherwise a letter is Yellow only while the hidden
    /// word still has unclaimed occurrences of it: occurrences already matched
    /// Green elsewhere do not count, and earlier Yellow guesses of the same
    /// letter claim occurrences first.
    ///
    /// # Errors
    /// Returns `ScoreError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use evil_wordle::core::{GuessResult, Word};
    ///
    /// let hidden = Word::new("onion").unwrap();
    /// let guess = Word::new("nanny").unwrap();
    /// let result = GuessResult::score(&hidden, &guess).unwrap();
    /// assert_eq!(result.color_text(), "YRYRR");
    /// ```
    pub fn score(hidden: &Word, guess: &Word) -> Result<Self, ScoreError> {
        let h = hidden.bytes();
        let g = guess.bytes();

        if h.len() != g.len() {
            return Err(ScoreError::LengthMismatch {
                hidden: h.len(),
                guess: g.len(),
            });
        }

        let results: Vec<CharResult> = g
            .iter()
            .enumerate()
            .map(|(index, &letter)| {
                let color = if h[index] == letter {
                    Color::Green
                } else {
                    // Occurrences elsewhere that are not already matched exactly
                    let unclaimed = (0..h.len())
                        .filter(|&j| j != index && h[j] == letter && g[j] != letter)
                        .count();

                    if unclaimed == 0 {
                        Color::Red
                    } else {
                        let earlier_yellows = (0..index)
                            .filter(|&j| g[j] == letter && h[j] != letter)
                            .count();

                        if unclaimed > earlier_yellows {
                            Color::Yellow
                        } else {
                            Color::Red
                        }
                    }
                };

                CharResult::new(letter, color)
            })
            .collect();

        Ok(Self::new(results))
    }

    #[inline]
    #[must_use]
    pub fn results(&self) -> &[CharResult] {
        &self.results
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// True when every letter is Green
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.results.iter().all(|r| r.color == Color::Green)
    }

    /// The guessed word
    #[must_use]
    pub fn word(&self) -> String {
        self.results.iter().map(|r| char::from(r.character)).collect()
    }

    /// Compact color string, one of `G`/`Y`/`R` per letter
    #[must_use]
    pub fn color_text(&self) -> String {
        self.results.iter().map(|r| r.color.to_char()).collect()
    }

    /// Iterate over the colors in order
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.results.iter().map(|r| r.color)
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word(), self.color_text())
    }
}
