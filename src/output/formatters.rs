//! Formatting utilities for terminal output

use crate::core::{Color, GuessResult};
use colored::{ColoredString, Colorize};

/// Emoji square for a color
#[must_use]
pub const fn color_to_emoji(color: Color) -> char {
    match color {
        Color::Green => '🟩',
        Color::Yellow => '🟨',
        Color::Red => '⬛',
    }
}

/// Format a guess result as an emoji string
#[must_use]
pub fn result_to_emoji(result: &GuessResult) -> String {
    result.colors().map(color_to_emoji).collect()
}

/// One letter tile; unknown colors render on a neutral background
#[must_use]
pub fn letter_tile(letter: char, color: Option<Color>) -> ColoredString {
    let tile = format!(" {letter} ");
    match color {
        Some(Color::Green) => tile.black().on_green().bold(),
        Some(Color::Yellow) => tile.black().on_yellow().bold(),
        Some(Color::Red) => tile.white().on_bright_black().bold(),
        None => tile.black().on_white(),
    }
}

/// Colored letter tiles for a guess result
#[must_use]
pub fn colored_result(result: &GuessResult) -> String {
    result
        .results()
        .iter()
        .map(|r| letter_tile(char::from(r.character), Some(r.color)).to_string())
        .collect()
}

/// Colored letter tiles for a preview
#[must_use]
pub fn colored_preview(word: &str, colors: &[Option<Color>]) -> String {
    word.chars()
        .zip(colors)
        .map(|(c, &color)| letter_tile(c, color).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
