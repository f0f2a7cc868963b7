//! Word list loading utilities
//!
//! Word lists are plain text, one word per line. Words are normalized to
//! uppercase; blank lines and entries that are not valid words are skipped.

use crate::core::Word;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use evil_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/hidden.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_lines(&content);
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load words from a file, keeping only those of `length` letters
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_with_length<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let mut words = load_from_file(path)?;
    words.retain(|w| w.len() == length);
    Ok(words)
}

/// Parse newline-delimited text into words
#[must_use]
pub fn parse_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                debug!("skipping {line:?}: {e}");
                None
            }
        })
        .collect()
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use evil_wordle::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "slate", "not a word"]);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "CRANE");
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
