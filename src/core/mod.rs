//! Core domain types for Wordle
//!
//! Words and per-letter feedback. Everything here is pure and independent of game state.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackSymbols, LetterState};
pub use word::{Word, WordError};
