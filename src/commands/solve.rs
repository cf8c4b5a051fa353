//! Word solving command
//!
//! Plays one game against a chosen target and records every step the strategy took.

use crate::core::{Feedback, Word, WordError};
use crate::game::{CallbackState, Game, GameConfig};
use crate::solver::{Dictionary, RandomElimination, Strategy, StrategyError, candidates};
use crate::wordlists::{Vocabulary, WordSource};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub target: String,
    pub source: WordSource,
    pub game: GameConfig,
    /// Picks the opening word from the source list
    pub run_index: usize,
    pub seed: Option<u64>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            source: WordSource::Answers,
            game: GameConfig::standard(),
            run_index: 0,
            seed: None,
        }
    }
}

/// Result of solving a word
#[derive(Debug)]
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub target: String,
    pub max_guesses: usize,
}

/// A single guess step in the solution
#[derive(Debug)]
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    /// Source words still consistent after this guess
    pub candidates_after: usize,
}

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid target word: {0}")]
    InvalidTarget(#[from] WordError),
    #[error("'{0}' is not an allowed word")]
    UnknownTarget(String),
    #[error("'{guess}' was rejected by the game")]
    RejectedGuess { guess: String },
    #[error(transparent)]
    Strategy(#[from] StrategyError),
}

/// Solve a specific word with randomized elimination
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid or not in the vocabulary
/// - The strategy runs out of candidates
pub fn solve_word(
    config: &SolveConfig,
    vocabulary: &Vocabulary,
) -> Result<SolveResult, SolveError> {
    let target = Word::new(config.target.as_str())?;
    if !vocabulary.is_allowed(target.text()) {
        return Err(SolveError::UnknownTarget(target.text().to_string()));
    }

    let dictionary = Dictionary::new(vocabulary.source(config.source));
    let rng = config
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
    let mut strategy = RandomElimination::new(config.run_index, &dictionary, rng);
    let mut game = Game::new(vocabulary, config.game, target);

    let mut response = game.interact(None);
    let mut steps = Vec::new();

    while !game.state().is_over() {
        let guess = strategy.select_guess(&response)?;
        response = game.interact(Some(guess.text()));
        if response.callback == CallbackState::InvalidGuess {
            return Err(SolveError::RejectedGuess {
                guess: guess.text().to_string(),
            });
        }

        steps.push(GuessStep {
            word: guess.text().to_string(),
            feedback: response.feedback.clone(),
            candidates_after: candidates(strategy.dictionary(), &response.knowledge).len(),
        });
    }

    Ok(SolveResult {
        success: response.callback == CallbackState::GameWon,
        steps,
        target: config.target.to_lowercase(),
        max_guesses: config.game.max_guesses,
    })
}
