//! Game lifecycle states and the response snapshot emitted after every interaction

use super::Knowledge;
use crate::core::{Feedback, Word};

/// Lifecycle of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Ready,
    Playing,
    Win,
    Lose,
}

impl GameState {
    /// Win and Lose are terminal
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }
}

/// Why a response was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackState {
    GameStart,
    ValidGuess,
    InvalidGuess,
    GameWon,
    GameLost,
    /// Interaction attempted after the game finished
    GameEnded,
}

impl CallbackState {
    /// The response finished the game
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::GameWon | Self::GameLost)
    }
}

/// Snapshot of a game after one interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub callback: CallbackState,
    /// Per-letter result of the guess just scored; empty otherwise
    pub feedback: Feedback,
    pub knowledge: Knowledge,
    pub guessed_words: Vec<Word>,
    pub guesses: usize,
}

impl Response {
    /// The first word guessed in this game, if any
    #[must_use]
    pub fn opening(&self) -> Option<&Word> {
        self.guessed_words.first()
    }
}
