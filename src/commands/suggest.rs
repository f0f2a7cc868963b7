//! One-shot suggestion from a serialized game state

use crate::core::Word;
use crate::game::GameState;
use crate::solver::SolverService;

/// Largest number of remaining words listed by name
const LIST_LIMIT: usize = 4;

/// Best guess for a state together with what is still possible
#[derive(Debug, Clone)]
pub struct Suggestion {
    pub state: GameState,
    pub best: Option<Word>,
    pub remaining: Vec<Word>,
}

impl Suggestion {
    /// Short human-readable summary of the remaining possibilities
    #[must_use]
    pub fn possibility_text(&self) -> String {
        match self.remaining.as_slice() {
            [] => "No Possible Solutions".to_string(),
            [only] => format!("Must be '{only}'"),
            words if words.len() <= LIST_LIMIT => {
                let names: Vec<&str> = words.iter().map(Word::text).collect();
                format!("'{}'", names.join(", "))
            }
            words => match &self.best {
                Some(best) => format!("{} Possible Solutions. Try '{best}'", words.len()),
                None => format!("{} Possible Solutions. No Best Guess", words.len()),
            },
        }
    }
}

/// Parse `serialized` and ask `service` for the best guess
#[must_use]
pub fn suggest(service: &SolverService, serialized: &str) -> Suggestion {
    let state = GameState::deserialize(serialized);
    let remaining = state
        .constraints()
        .map(|c| {
            service
                .game()
                .filter_hidden_words(c.as_ref())
                .into_iter()
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    let best = service.best_guess_for(&state);

    Suggestion {
        state,
        best,
        remaining,
    }
}
