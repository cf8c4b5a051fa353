//! Game configuration

use crate::core::FeedbackSymbols;

/// Guess limit used by the endless variant
pub const ENDLESS_MAX_GUESSES: usize = 1_000_000_000;

/// Immutable settings for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Guesses allowed before the game is lost
    pub max_guesses: usize,
    /// Whether the secret may be revealed before the game ends
    pub reveals_word: bool,
    /// Characters used when printing feedback
    pub symbols: FeedbackSymbols,
}

impl GameConfig {
    /// Six guesses, secret hidden until the game ends
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            max_guesses: 6,
            reveals_word: false,
            symbols: FeedbackSymbols::PLAIN,
        }
    }

    /// Effectively unlimited guesses, secret always revealed
    ///
    /// Used by simulations so every game runs until it is won.
    #[must_use]
    pub const fn endless() -> Self {
        Self {
            max_guesses: ENDLESS_MAX_GUESSES,
            reveals_word: true,
            symbols: FeedbackSymbols::PLAIN,
        }
    }

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    #[must_use]
    pub const fn is_endless(&self) -> bool {
        self.max_guesses >= ENDLESS_MAX_GUESSES
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}
