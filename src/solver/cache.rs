//! Memoized best guesses keyed by game state
//!
//! The cache guarantees at most one computation in flight per state: the first
//! caller computes while later callers for the same state block on the slot and
//! then read the stored answer. Results of cancelled searches are never
//! stored, so the next caller for that state computes again.
//!
//! Entries are never evicted.

use crate::core::Word;
use crate::game::GameState;
use dashmap::DashMap;
use log::debug;
use rustc_hash::FxBuildHasher;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Result of one search, possibly cut short by cancellation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub guess: Option<Word>,
    /// False when the search was cancelled before every guess was evaluated
    pub complete: bool,
}

impl SearchOutcome {
    #[must_use]
    pub const fn complete(guess: Option<Word>) -> Self {
        Self {
            guess,
            complete: true,
        }
    }

    #[must_use]
    pub const fn partial(guess: Option<Word>) -> Self {
        Self {
            guess,
            complete: false,
        }
    }
}

type Slot = Arc<Mutex<Option<Option<Word>>>>;

/// Concurrent single-flight memo of `GameState -> best guess`
#[derive(Default)]
pub struct ResultCache {
    slots: DashMap<GameState, Slot, FxBuildHasher>,
}

impl ResultCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the stored guess for `state`, computing it if absent
    ///
    /// Concurrent callers for the same state wait for the computing caller
    /// instead of racing it.
    pub fn get_or_compute<F>(&self, state: &GameState, compute: F) -> Option<Word>
    where
        F: FnOnce() -> SearchOutcome,
    {
        // Clone the slot out so the shard lock is released before computing
        let slot: Slot = Arc::clone(self.slots.entry(state.clone()).or_default().value());
        let mut stored = slot.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(guess) = stored.as_ref() {
            debug!("cache hit for {state}");
            return guess.clone();
        }

        let outcome = compute();
        if outcome.complete {
            *stored = Some(outcome.guess.clone());
        } else {
            debug!("search for {state} was cancelled, result not cached");
        }
        outcome.guess
    }

    /// Stored guess for `state`, if a completed search exists
    #[must_use]
    pub fn get(&self, state: &GameState) -> Option<Option<Word>> {
        let slot = Arc::clone(self.slots.get(state)?.value());
        let stored = slot.lock().unwrap_or_else(PoisonError::into_inner);
        stored.clone()
    }

    /// Number of states with a slot, including ones still being computed
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Debug for ResultCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultCache")
            .field("len", &self.slots.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuessResult;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn state_after(guess: &str) -> GameState {
        GameState::empty().add(GuessResult::score(&word("ANGER"), &word(guess)).unwrap())
    }

    #[test]
    fn computes_once_and_reuses() {
        let cache = ResultCache::new();
        let calls = AtomicUsize::new(0);
        let state = GameState::empty();

        for _ in 0..3 {
            let guess = cache.get_or_compute(&state, || {
                calls.fetch_add(1, Ordering::SeqCst);
                SearchOutcome::complete(Some(word("SOARE")))
            });
            assert_eq!(guess, Some(word("SOARE")));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.get(&state), Some(Some(word("SOARE"))));
    }

    #[test]
    fn caches_no_guess_answers() {
        let cache = ResultCache::new();
        let state = state_after("SOARE");

        assert_eq!(cache.get_or_compute(&state, || SearchOutcome::complete(None)), None);
        let again = cache.get_or_compute(&state, || SearchOutcome::complete(Some(word("CRANE"))));
        assert_eq!(again, None);
    }

    #[test]
    fn distinct_states_are_distinct_keys() {
        let cache = ResultCache::new();
        cache.get_or_compute(&state_after("SOARE"), || {
            SearchOutcome::complete(Some(word("CRANE")))
        });
        let other = cache.get_or_compute(&state_after("CRANE"), || {
            SearchOutcome::complete(Some(word("SLATE")))
        });

        assert_eq!(other, Some(word("SLATE")));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn cancelled_results_are_not_stored() {
        let cache = ResultCache::new();
        let state = GameState::empty();

        let partial = cache.get_or_compute(&state, || SearchOutcome::partial(Some(word("CRANK"))));
        assert_eq!(partial, Some(word("CRANK")));
        assert_eq!(cache.get(&state), None);

        let full = cache.get_or_compute(&state, || SearchOutcome::complete(Some(word("SOARE"))));
        assert_eq!(full, Some(word("SOARE")));
    }

    #[test]
    fn concurrent_callers_share_one_computation() {
        let cache = ResultCache::new();
        let calls = AtomicUsize::new(0);
        let state = state_after("SOARE");

        let results: Vec<Option<Word>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        cache.get_or_compute(&state, || {
                            calls.fetch_add(1, Ordering::SeqCst);
                            thread::sleep(Duration::from_millis(20));
                            SearchOutcome::complete(Some(word("ANGER")))
                        })
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(results.iter().all(|r| r.as_ref() == Some(&word("ANGER"))));
    }
}
