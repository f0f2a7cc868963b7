//! Word lists for building game settings

pub mod loader;

pub use loader::{load_from_file, load_with_length, parse_lines, words_from_slice};
