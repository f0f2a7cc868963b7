//! Concurrent use of the cache and the solver service

use evil_wordle::core::{GuessResult, Word};
use evil_wordle::game::{GameSettings, GameState};
use evil_wordle::solver::{CancellationToken, ResultCache, SolveSettings, Solver, SolverService};
use evil_wordle::wordlists::words_from_slice;
use std::sync::Arc;
use std::thread;

const HIDDEN: &[&str] = &[
    "ANGER", "SOARE", "SOLVE", "SORRY", "SOAPY", "SPORE", "FERAL", "CRANE", "CRATE", "GRATE",
    "IRATE", "SLATE", "BRASS", "TRASH", "ONION", "CIGAR", "SPEED", "FLOOR", "ROBOT", "JAUNT",
];

fn game() -> Arc<GameSettings> {
    Arc::new(GameSettings::new(5, 6, words_from_slice(HIDDEN), Vec::new(), Vec::new()).unwrap())
}

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

#[test]
fn concurrent_requests_for_one_state_agree() {
    let service = SolverService::new(game());
    let state = GameState::empty()
        .add(GuessResult::score(&word("CRATE"), &word("SOARE")).unwrap())
        .serialize();

    let answers: Vec<Option<Word>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..6)
            .map(|_| scope.spawn(|| service.best_guess(&state)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(answers[0].is_some());
    assert!(answers.iter().all(|a| *a == answers[0]));

    let cache = service.settings().result_cache.as_ref().unwrap();
    assert_eq!(cache.get(&GameState::deserialize(&state)), Some(answers[0].clone()));
}

#[test]
fn service_matches_direct_search() {
    let game = game();
    let service = SolverService::new(Arc::clone(&game));
    let settings = SolveSettings::default();
    let solver = Solver::new(&game, &settings);

    for serialized in ["", "SOARE-RRYYY", "SOARE-RRGYY", "CRANE-GGGGG_SLATE-GGGGG"] {
        let state = GameState::deserialize(serialized);
        assert_eq!(
            service.best_guess(serialized),
            solver.best_guess(&state),
            "{serialized:?}"
        );
    }
}

#[test]
fn cancelled_search_is_recomputed() {
    let game = game();
    let cache = Arc::new(ResultCache::new());
    let settings = SolveSettings::default()
        .without_opening_book()
        .with_cache(Arc::clone(&cache));
    let solver = Solver::new(&game, &settings);
    let state = GameState::empty();

    let cancel = CancellationToken::new();
    cancel.cancel();
    assert_eq!(solver.best_guess_with(&state, &cancel), None);
    assert_eq!(cache.get(&state), None);

    let guess = solver.best_guess(&state);
    assert!(guess.is_some());
    assert_eq!(cache.get(&state), Some(guess));
}

#[test]
fn shared_cache_serves_many_solvers() {
    let game = game();
    let cache = Arc::new(ResultCache::new());
    let settings = SolveSettings::default().with_cache(Arc::clone(&cache));

    let states: Vec<GameState> = ["ANGER", "ONION", "FLOOR"]
        .iter()
        .map(|hidden| {
            GameState::empty().add(GuessResult::score(&word(hidden), &word("SOARE")).unwrap())
        })
        .collect();

    let first: Vec<Option<Word>> = thread::scope(|scope| {
        let handles: Vec<_> = states
            .iter()
            .map(|state| {
                let game = &game;
                let settings = &settings;
                scope.spawn(move || Solver::new(game, settings).best_guess(state))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let solver = Solver::new(&game, &settings);
    for (state, guess) in states.iter().zip(&first) {
        assert_eq!(&solver.best_guess(state), guess);
        assert_eq!(cache.get(state).as_ref(), Some(guess));
    }
}
