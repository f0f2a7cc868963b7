//! Per-guess scores used to rank candidate guesses
//!
//! Both scores group the remaining hidden words by the feedback they would
//! produce for a guess. Every word in a group yields the same combined
//! constraint set, so each group is evaluated once and weighted by its size.

use crate::core::{ConstraintSet, GuessResult, Word};
use rustc_hash::FxHashMap;

/// Group `remaining` by the feedback each word would give for `guess`
///
/// Returns `None` if `guess` is not the same length as the remaining words.
fn group_by_feedback(guess: &Word, remaining: &[&Word]) -> Option<FxHashMap<GuessResult, usize>> {
    let mut groups = FxHashMap::default();
    for &hidden in remaining {
        let result = GuessResult::score(hidden, guess).ok()?;
        *groups.entry(result).or_insert(0) += 1;
    }
    Some(groups)
}

/// Number of `remaining` words still allowed after learning `result`
fn allowed_after(
    constraints: Option<&ConstraintSet>,
    result: &GuessResult,
    remaining: &[&Word],
) -> usize {
    let learned = ConstraintSet::from_result(result);
    let combined = match constraints {
        Some(existing) => match existing.combine(&learned) {
            Ok(combined) => combined,
            // No remaining word can produce a contradictory result
            Err(_) => return 0,
        },
        None => learned,
    };

    remaining.iter().filter(|w| combined.allow(w)).count()
}

/// Total candidates left over all possible hidden words after guessing `guess`
///
/// The sum over every hidden word in `remaining` of how many words in
/// `remaining` would still be allowed had it been the answer. Lower is better.
/// Gives up and returns `None` as soon as the running total exceeds
/// `give_up_after`, or if `guess` has the wrong length.
///
/// # Examples
/// ```
/// use evil_wordle::core::Word;
/// use evil_wordle::solver::count_remaining_after_guess;
///
/// let words: Vec<Word> = ["CRANE", "SLATE", "ANGER"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let remaining: Vec<&Word> = words.iter().collect();
///
/// let total = count_remaining_after_guess(None, &words[0], &remaining, usize::MAX);
/// assert_eq!(total, Some(3));
/// assert_eq!(count_remaining_after_guess(None, &words[0], &remaining, 2), None);
/// ```
#[must_use]
pub fn count_remaining_after_guess(
    constraints: Option<&ConstraintSet>,
    guess: &Word,
    remaining: &[&Word],
    give_up_after: usize,
) -> Option<usize> {
    let mut total = 0usize;
    for (result, weight) in group_by_feedback(guess, remaining)? {
        total += allowed_after(constraints, &result, remaining) * weight;
        if total > give_up_after {
            return None;
        }
    }
    Some(total)
}

/// Total candidates eliminated over all possible hidden words after guessing `guess`
///
/// The complement of [`count_remaining_after_guess`]: for `n` remaining words
/// the two always sum to `n * n`. Higher is better. Always evaluates fully.
#[must_use]
pub fn count_eliminated_by_guess(
    constraints: Option<&ConstraintSet>,
    guess: &Word,
    remaining: &[&Word],
) -> Option<usize> {
    let groups = group_by_feedback(guess, remaining)?;
    Some(
        groups
            .iter()
            .map(|(result, &weight)| {
                (remaining.len() - allowed_after(constraints, result, remaining)) * weight
            })
            .sum(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn words() -> Vec<Word> {
        words_from_slice(&["CRANE", "CRATE", "GRATE", "IRATE", "SLATE", "ANGER"])
    }

    #[test]
    fn perfect_split_leaves_one_each() {
        let words = words_from_slice(&["SLATE", "JUMPY"]);
        let remaining: Vec<&Word> = words.iter().collect();

        let total = count_remaining_after_guess(None, &words[0], &remaining, usize::MAX);
        assert_eq!(total, Some(2));
        assert_eq!(count_eliminated_by_guess(None, &words[0], &remaining), Some(2));
    }

    #[test]
    fn uninformative_guess_leaves_everything() {
        let words = words_from_slice(&["CRANE", "CRATE", "GRATE"]);
        let remaining: Vec<&Word> = words.iter().collect();
        let guess = Word::new("MUMMY").unwrap();

        let total = count_remaining_after_guess(None, &guess, &remaining, usize::MAX);
        assert_eq!(total, Some(9));
        assert_eq!(count_eliminated_by_guess(None, &guess, &remaining), Some(0));
    }

    #[test]
    fn remaining_and_eliminated_are_complements() {
        let words = words();
        let remaining: Vec<&Word> = words.iter().collect();
        let n = remaining.len();

        for guess in &words {
            let kept = count_remaining_after_guess(None, guess, &remaining, usize::MAX).unwrap();
            let gone = count_eliminated_by_guess(None, guess, &remaining).unwrap();
            assert_eq!(kept + gone, n * n, "{guess}");
        }
    }

    #[test]
    fn gives_up_only_when_strictly_exceeded() {
        let words = words();
        let remaining: Vec<&Word> = words.iter().collect();
        let guess = &words[0];

        let total = count_remaining_after_guess(None, guess, &remaining, usize::MAX).unwrap();
        assert_eq!(
            count_remaining_after_guess(None, guess, &remaining, total),
            Some(total)
        );
        assert_eq!(count_remaining_after_guess(None, guess, &remaining, total - 1), None);
    }

    #[test]
    fn existing_constraints_are_respected() {
        let words = words();
        let hidden = Word::new("GRATE").unwrap();
        let first = GuessResult::score(&hidden, &Word::new("SLATE").unwrap()).unwrap();
        let constraints = ConstraintSet::from_result(&first);

        let remaining: Vec<&Word> = words.iter().filter(|w| constraints.allow(w)).collect();
        assert_eq!(remaining.len(), 3);

        // CRATE and IRATE both answer GRATE with RGGGG
        let total =
            count_remaining_after_guess(Some(&constraints), &hidden, &remaining, usize::MAX);
        assert_eq!(total, Some(2 * 2 + 1));
    }

    #[test]
    fn wrong_length_guess_is_not_scored() {
        let words = words();
        let remaining: Vec<&Word> = words.iter().collect();
        let guess = Word::new("CRANES").unwrap();

        assert_eq!(count_remaining_after_guess(None, &guess, &remaining, usize::MAX), None);
        assert_eq!(count_eliminated_by_guess(None, &guess, &remaining), None);
    }
}
