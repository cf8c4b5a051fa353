//! Automated Wordle players
//!
//! A strategy reads each game response and picks the next guess from a shared
//! first-letter [`Dictionary`].

mod dictionary;
pub mod strategy;

pub use dictionary::Dictionary;
pub use strategy::{RandomElimination, Strategy, StrategyError, candidates};
