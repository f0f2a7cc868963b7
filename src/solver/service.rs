//! Long-lived solver entry point for interactive callers
//!
//! Callers pass the serialized game state and may call again before an
//! earlier call finishes. A request for a different state supersedes the one
//! in flight: the older search is cancelled and its caller gets `None`.
//! Requests for the same state share one computation through the cache.

use super::cache::ResultCache;
use super::cancel::CancellationToken;
use super::engine::Solver;
use super::settings::SolveSettings;
use crate::core::Word;
use crate::game::{GameSettings, GameState};
use log::debug;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// The most recent request
#[derive(Debug, Default)]
struct ActiveRequest {
    generation: u64,
    state: Option<GameState>,
    token: CancellationToken,
}

/// Thread-safe, last-request-wins best-guess service
#[derive(Debug)]
pub struct SolverService {
    game: Arc<GameSettings>,
    settings: SolveSettings,
    active: Mutex<ActiveRequest>,
}

impl SolverService {
    /// Service with the interactive defaults: bounded sample, opening book,
    /// parallel search and a result cache
    #[must_use]
    pub fn new(game: Arc<GameSettings>) -> Self {
        Self::with_settings(game, SolveSettings::interactive())
    }

    /// Service with custom settings; a result cache is added if missing
    #[must_use]
    pub fn with_settings(game: Arc<GameSettings>, settings: SolveSettings) -> Self {
        let settings = if settings.result_cache.is_some() {
            settings
        } else {
            settings.with_cache(Arc::new(ResultCache::new()))
        };

        Self {
            game,
            settings,
            active: Mutex::new(ActiveRequest::default()),
        }
    }

    #[must_use]
    pub fn game(&self) -> &GameSettings {
        &self.game
    }

    #[must_use]
    pub const fn settings(&self) -> &SolveSettings {
        &self.settings
    }

    /// Best guess for a serialized game state
    ///
    /// Malformed input is treated as a new game. Returns `None` when no guess
    /// exists or when a request for another state arrived meanwhile.
    #[must_use]
    pub fn best_guess(&self, serialized: &str) -> Option<Word> {
        self.best_guess_for(&GameState::deserialize(serialized))
    }

    /// Best guess for an already parsed state; see [`best_guess`](Self::best_guess)
    #[must_use]
    pub fn best_guess_for(&self, state: &GameState) -> Option<Word> {
        let (generation, token) = self.begin(state);
        let guess = Solver::new(&self.game, &self.settings).best_guess_with(state, &token);

        if self.is_current(generation) {
            guess
        } else {
            debug!("request for {state} was superseded");
            None
        }
    }

    /// Register `state` as the latest request
    ///
    /// A different state cancels the request in flight and starts a new
    /// generation; the same state joins the current one.
    fn begin(&self, state: &GameState) -> (u64, CancellationToken) {
        let mut active = self.lock();
        if active.state.as_ref() != Some(state) {
            active.token.cancel();
            active.generation += 1;
            active.state = Some(state.clone());
            active.token = CancellationToken::new();
        }
        (active.generation, active.token.clone())
    }

    fn is_current(&self, generation: u64) -> bool {
        self.lock().generation == generation
    }

    fn lock(&self) -> MutexGuard<'_, ActiveRequest> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn service() -> SolverService {
        let game = GameSettings::new(
            5,
            6,
            words_from_slice(&["ANGER", "SOARE", "CRANE", "SLATE", "FERAL"]),
            Vec::new(),
            Vec::new(),
        )
        .unwrap();
        SolverService::new(Arc::new(game))
    }

    #[test]
    fn new_state_cancels_previous_request() {
        let service = service();
        let (first, first_token) = service.begin(&GameState::empty());
        let (second, second_token) = service.begin(&GameState::deserialize("SOARE-RRYYY"));

        assert!(first_token.is_cancelled());
        assert!(!second_token.is_cancelled());
        assert!(!service.is_current(first));
        assert!(service.is_current(second));
    }

    #[test]
    fn same_state_joins_current_request() {
        let service = service();
        let (first, first_token) = service.begin(&GameState::empty());
        let (second, _) = service.begin(&GameState::empty());

        assert_eq!(first, second);
        assert!(!first_token.is_cancelled());
    }

    #[test]
    fn returning_to_a_state_starts_a_new_generation() {
        let service = service();
        let (first, _) = service.begin(&GameState::empty());
        service.begin(&GameState::deserialize("SOARE-RRYYY"));
        let (third, _) = service.begin(&GameState::empty());

        assert_ne!(first, third);
        assert!(!service.is_current(first));
    }

    #[test]
    fn serialized_requests_use_the_cache() {
        let service = service();
        assert_eq!(service.best_guess("").unwrap().text(), "SOARE");

        let cache = service.settings().result_cache.as_ref().unwrap();
        assert_eq!(cache.get(&GameState::empty()), Some(Some(Word::new("SOARE").unwrap())));
    }

    #[test]
    fn malformed_state_is_a_new_game() {
        let service = service();
        assert_eq!(service.best_guess("not a state").unwrap().text(), "SOARE");
    }
}
