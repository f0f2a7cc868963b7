//! Word representation
//!
//! A Word is an uppercase ASCII string of any length up to [`MAX_WORD_LENGTH`].
//! Cloning is cheap: the text is shared behind an `Arc`.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Number of letters in the alphabet the solver understands (`A`-`Z`)
pub const ALPHABET_SIZE: usize = 26;

/// Longest word supported; excluded positions are tracked as a `u32` bitmask
pub const MAX_WORD_LENGTH: usize = 32;

/// A validated, uppercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: Arc<str>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word is {0} letters long, at most {MAX_WORD_LENGTH} are supported")]
    TooLong(usize),
    #[error("word contains invalid character {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is ignored and letters are normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty, too long, or contains anything
    /// other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use evil_wordle::core::Word;
    ///
    /// let word = Word::new("soare").unwrap();
    /// assert_eq!(word.text(), "SOARE");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        if text.len() > MAX_WORD_LENGTH {
            return Err(WordError::TooLong(text.len()));
        }

        Ok(Self {
            text: Arc::from(text.to_ascii_uppercase()),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a validated word, provided for API completeness
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.bytes()[position]
    }

    /// Count of each letter, indexed by [`letter_index`]
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &ch in self.bytes() {
            counts[letter_index(ch)] += 1;
        }
        counts
    }
}

/// Index of an uppercase ASCII letter in `0..ALPHABET_SIZE`
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'A') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_normalizes_case() {
        let word = Word::new("SoArE").unwrap();
        assert_eq!(word.text(), "SOARE");
        assert_eq!(word.bytes(), b"SOARE");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_trims_whitespace() {
        let word = Word::new("  anger\r").unwrap();
        assert_eq!(word.text(), "ANGER");
    }

    #[test]
    fn word_creation_other_lengths() {
        assert_eq!(Word::new("cat").unwrap().len(), 3);
        assert_eq!(Word::new("elephants").unwrap().len(), 9);
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacter('3')));
        assert_eq!(Word::new("cr ne"), Err(WordError::InvalidCharacter(' ')));
        assert_eq!(Word::new("crané"), Err(WordError::InvalidCharacter('é')));
        assert_eq!(Word::new("a".repeat(33)), Err(WordError::TooLong(33)));
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("onion").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts[letter_index(b'O')], 2);
        assert_eq!(counts[letter_index(b'N')], 2);
        assert_eq!(counts[letter_index(b'I')], 1);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 5);
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), b'C');
        assert_eq!(word.char_at(4), b'E');
    }

    #[test]
    fn word_equality_is_case_insensitive() {
        assert_eq!(Word::new("crane").unwrap(), Word::new("CRANE").unwrap());
        assert_ne!(Word::new("crane").unwrap(), Word::new("slate").unwrap());
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "slate".parse().unwrap();
        assert_eq!(format!("{word}"), "SLATE");
    }
}
