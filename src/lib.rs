//! Wordle Simulator
//!
//! A Wordle game engine, a randomized elimination player and a parallel batch simulator
//! that ranks target words and opening guesses by how many guesses they take.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_sim::core::Word;
//! use wordle_sim::game::{CallbackState, Game, GameConfig};
//! use wordle_sim::wordlists::Vocabulary;
//!
//! let vocabulary = Vocabulary::embedded();
//! let mut game = Game::new(&vocabulary, GameConfig::standard(), Word::new("apple").unwrap());
//!
//! game.interact(None);
//! let response = game.interact(Some("grape"));
//! assert_eq!(response.feedback.to_string(), "xx??C");
//!
//! let response = game.interact(Some("apple"));
//! assert_eq!(response.callback, CallbackState::GameWon);
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Guess selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
