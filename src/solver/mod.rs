//! Guess selection
//!
//! [`Solver`] searches for the guess that leaves the fewest candidates,
//! [`worst_case`] answers guesses adversarially, and [`SolverService`] wraps
//! the search for interactive callers that may supersede their own requests.

mod adversary;
mod cache;
mod cancel;
mod engine;
mod scoring;
mod service;
mod settings;

pub use adversary::{feedback_groups, worst_case};
pub use cache::{ResultCache, SearchOutcome};
pub use cancel::CancellationToken;
pub use engine::Solver;
pub use scoring::{count_eliminated_by_guess, count_remaining_after_guess};
pub use service::SolverService;
pub use settings::{INTERACTIVE_MAX_SOLUTIONS, OpeningBook, SolveSettings};
