//! Wordle game engine
//!
//! A finite-state machine over one secret word, the feedback it accumulates, and the
//! response snapshots it emits.

mod config;
mod engine;
mod knowledge;
mod response;

pub use config::{ENDLESS_MAX_GUESSES, GameConfig};
pub use engine::Game;
pub use knowledge::Knowledge;
pub use response::{CallbackState, GameState, Response};
