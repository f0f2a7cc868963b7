//! Game configuration, history and the game loop

mod runner;
mod settings;
mod state;

pub use runner::{GameError, GameRecord, ROUND_LIMIT, RoundStep, run_game};
pub use settings::{GameSettings, SettingsError};
pub use state::GameState;
