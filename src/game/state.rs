//! Game history and its string form
//!
//! A [`GameState`] is the ordered list of scored guesses made so far. It is an
//! immutable value: [`GameState::add`] returns a new state. Equality and hashing
//! cover the full ordered history, so states can key the result cache.
//!
//! The string form is `WORD1-COLORS1_WORD2-COLORS2_...`, e.g.
//! `SOARE-RRYYY_CRANE-RYYYY`. The empty history is the empty string.

use crate::core::{Color, ConflictError, ConstraintSet, GuessResult, Word};
use log::debug;
use std::fmt;
use std::sync::Arc;

/// Separator between rounds in the string form
const ROUND_SEPARATOR: &str = "_";

/// Separator between a round's word and its colors
const COLOR_SEPARATOR: char = '-';

/// Separator between words in an opening book key
const BOOK_KEY_SEPARATOR: &str = ";";

/// Ordered, append-only history of one game
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    previous_guesses: Arc<[GuessResult]>,
}

impl GameState {
    /// State with no guesses yet
    #[must_use]
    pub fn empty() -> Self {
        Self {
            previous_guesses: Arc::from(Vec::new()),
        }
    }

    #[must_use]
    pub fn new(previous_guesses: Vec<GuessResult>) -> Self {
        Self {
            previous_guesses: previous_guesses.into(),
        }
    }

    /// Return a new state with `result` appended
    #[must_use]
    pub fn add(&self, result: GuessResult) -> Self {
        let mut guesses = self.previous_guesses.to_vec();
        guesses.push(result);
        Self::new(guesses)
    }

    #[inline]
    #[must_use]
    pub fn previous_guesses(&self) -> &[GuessResult] {
        &self.previous_guesses
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.previous_guesses.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.previous_guesses.is_empty()
    }

    /// True when some guess in the history was entirely Green
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.previous_guesses.iter().any(GuessResult::is_correct)
    }

    /// Fold the whole history into one constraint set
    ///
    /// Returns `Ok(None)` for an empty history.
    ///
    /// # Errors
    /// Returns `ConflictError` if two rounds contradict each other, which can
    /// only happen for a history no real hidden word could have produced.
    pub fn constraints(&self) -> Result<Option<ConstraintSet>, ConflictError> {
        self.previous_guesses
            .iter()
            .map(ConstraintSet::from_result)
            .try_fold(None, |acc: Option<ConstraintSet>, next| match acc {
                None => Ok(Some(next)),
                Some(acc) => acc.combine(&next).map(Some),
            })
    }

    /// Key of the previously guessed words, used for opening book lookups
    #[must_use]
    pub fn guess_key(&self) -> String {
        self.previous_guesses
            .iter()
            .map(GuessResult::word)
            .collect::<Vec<_>>()
            .join(BOOK_KEY_SEPARATOR)
    }

    /// String form: `WORD-COLORS` rounds joined with `_`
    #[must_use]
    pub fn serialize(&self) -> String {
        self.previous_guesses
            .iter()
            .map(|r| format!("{}{COLOR_SEPARATOR}{}", r.word(), r.color_text()))
            .collect::<Vec<_>>()
            .join(ROUND_SEPARATOR)
    }

    /// Parse the string form
    ///
    /// Parsing is forgiving: it is case-insensitive, ignores surrounding quotes
    /// and whitespace, and any malformed round yields the empty state instead
    /// of an error.
    ///
    /// # Examples
    /// ```
    /// use evil_wordle::game::GameState;
    ///
    /// let state = GameState::deserialize("'soare-rryyy_crane-ryyyy'");
    /// assert_eq!(state.len(), 2);
    /// assert_eq!(state.serialize(), "SOARE-RRYYY_CRANE-RYYYY");
    ///
    /// assert!(GameState::deserialize("soare-rry").is_empty());
    /// ```
    #[must_use]
    pub fn deserialize(s: &str) -> Self {
        let trimmed = s.trim().trim_matches(|c: char| c == '\'' || c == '"');
        if trimmed.trim().is_empty() {
            return Self::empty();
        }

        let rounds: Option<Vec<GuessResult>> = trimmed
            .split(ROUND_SEPARATOR)
            .map(str::trim)
            .filter(|round| !round.is_empty())
            .map(parse_round)
            .collect();

        rounds.map_or_else(
            || {
                debug!("malformed game state {s:?}, starting from an empty state");
                Self::empty()
            },
            Self::new,
        )
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::empty()
    }
}

fn parse_round(round: &str) -> Option<GuessResult> {
    let (word, colors) = round.split_once(COLOR_SEPARATOR)?;
    let word = Word::new(word).ok()?;
    let colors: Vec<Color> = colors
        .trim()
        .chars()
        .map(Color::from_char)
        .collect::<Option<_>>()?;

    GuessResult::from_colors(&word, &colors).ok()
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Initial Game State");
        }

        let rounds: Vec<String> = self.previous_guesses.iter().map(ToString::to_string).collect();
        f.write_str(&rounds.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(hidden: &str, guess: &str) -> GuessResult {
        GuessResult::score(&Word::new(hidden).unwrap(), &Word::new(guess).unwrap()).unwrap()
    }

    #[test]
    fn add_is_append_only() {
        let empty = GameState::empty();
        let one = empty.add(scored("ANGER", "SOARE"));
        let two = one.add(scored("ANGER", "CRANE"));

        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
        assert_eq!(two.len(), 2);
        assert_eq!(two.previous_guesses()[0], one.previous_guesses()[0]);
    }

    #[test]
    fn equality_is_ordered() {
        let a = GameState::empty()
            .add(scored("ANGER", "SOARE"))
            .add(scored("ANGER", "CRANE"));
        let b = GameState::empty()
            .add(scored("ANGER", "CRANE"))
            .add(scored("ANGER", "SOARE"));
        let c = GameState::empty()
            .add(scored("ANGER", "SOARE"))
            .add(scored("ANGER", "CRANE"));

        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn is_win() {
        let state = GameState::empty().add(scored("ANGER", "SOARE"));
        assert!(!state.is_win());
        assert!(state.add(scored("ANGER", "ANGER")).is_win());
    }

    #[test]
    fn constraints_of_empty_history() {
        assert_eq!(GameState::empty().constraints(), Ok(None));
    }

    #[test]
    fn constraints_fold_history() {
        let state = GameState::empty()
            .add(scored("ANGER", "SOARE"))
            .add(scored("ANGER", "CRANE"));
        let constraints = state.constraints().unwrap().unwrap();

        assert!(constraints.allow(&Word::new("ANGER").unwrap()));
        assert!(!constraints.allow(&Word::new("SOARE").unwrap()));
        assert!(!constraints.allow(&Word::new("CRANE").unwrap()));
    }

    #[test]
    fn constraints_conflict_is_reported() {
        let state = GameState::deserialize("CRANE-GGGGG_SLATE-GGGGG");
        assert_eq!(state.len(), 2);
        assert!(state.constraints().is_err());
    }

    #[test]
    fn guess_key_joins_words() {
        assert_eq!(GameState::empty().guess_key(), "");
        let state = GameState::empty()
            .add(scored("ANGER", "SOARE"))
            .add(scored("ANGER", "CRANE"));
        assert_eq!(state.guess_key(), "SOARE;CRANE");
    }

    #[test]
    fn serialize_round_trip() {
        let state = GameState::empty()
            .add(scored("ANGER", "SOARE"))
            .add(scored("ANGER", "CRANE"));

        let text = state.serialize();
        assert_eq!(text, "SOARE-RRYYY_CRANE-RYYYY");
        assert_eq!(GameState::deserialize(&text), state);
    }

    #[test]
    fn serialize_empty() {
        assert_eq!(GameState::empty().serialize(), "");
        assert_eq!(GameState::deserialize(""), GameState::empty());
    }

    #[test]
    fn deserialize_is_forgiving() {
        let expected = GameState::empty().add(scored("ANGER", "SOARE"));

        assert_eq!(GameState::deserialize("soare-rryyy"), expected);
        assert_eq!(GameState::deserialize("'SOARE-RRYYY'"), expected);
        assert_eq!(GameState::deserialize("\"SOARE-RRYYY\""), expected);
        assert_eq!(GameState::deserialize(" SOARE-RRYYY_ "), expected);
    }

    #[test]
    fn deserialize_malformed_is_empty() {
        for input in [
            "   ",
            "SOARE",
            "SOARE-RRYY",
            "SOARE-RRYYB",
            "S0ARE-RRYYY",
            "SOARE-RRYYY_CRANE",
            "-RRYYY",
        ] {
            assert_eq!(GameState::deserialize(input), GameState::empty(), "{input:?}");
        }
    }

    #[test]
    fn display() {
        assert_eq!(GameState::empty().to_string(), "Initial Game State");
        let state = GameState::empty()
            .add(scored("ANGER", "SOARE"))
            .add(scored("ANGER", "CRANE"));
        assert_eq!(state.to_string(), "SOARE RRYYY, CRANE RYYYY");
    }
}
