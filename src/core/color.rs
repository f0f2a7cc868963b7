//! Feedback colors

use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    /// Correct letter in the correct position
    Green,
    /// Letter appears elsewhere in the hidden word
    Yellow,
    /// Letter does not appear, or every occurrence is already accounted for
    Red,
}

impl Color {
    /// Compact one-letter form used in color strings: `G`, `Y` or `R`
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Red => 'R',
        }
    }

    /// Parse the compact one-letter form (case-insensitive)
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'G' | 'g' => Some(Self::Green),
            'Y' | 'y' => Some(Self::Yellow),
            'R' | 'r' => Some(Self::Red),
            _ => None,
        }
    }

    /// Whether this color confirms an occurrence of the letter
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Green | Self::Yellow)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// One scored letter: the guessed character and its feedback color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharResult {
    pub character: u8,
    pub color: Color,
}

impl CharResult {
    #[must_use]
    pub const fn new(character: u8, color: Color) -> Self {
        Self { character, color }
    }
}
