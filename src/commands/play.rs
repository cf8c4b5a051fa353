//! Interactive console game
//!
//! Reads one guess per line and prints the feedback history after every guess.

use crate::core::{Word, WordError};
use crate::game::{CallbackState, Game, GameConfig};
use crate::wordlists::Vocabulary;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayError {
    #[error("invalid secret word: {0}")]
    InvalidSecret(#[from] WordError),
    #[error("'{0}' is not an allowed word")]
    UnknownSecret(String),
}

/// Start a game with a chosen secret
///
/// # Errors
///
/// Returns an error if the secret is not a valid word or not in the vocabulary, since such
/// a game could never be won.
pub fn start_game<'v>(
    vocabulary: &'v Vocabulary,
    config: GameConfig,
    secret: &str,
) -> Result<Game<'v>, PlayError> {
    let secret = Word::new(secret.trim())?;
    if !vocabulary.is_allowed(secret.text()) {
        return Err(PlayError::UnknownSecret(secret.text().to_string()));
    }
    Ok(Game::new(vocabulary, config, secret))
}

/// Play a game on the console until it ends or the input runs out
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    game: &mut Game<'_>,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    let symbols = game.config().symbols;
    let start = game.interact(None);

    writeln!(output, "Come on, let's play Wordle!")?;
    writeln!(output, "{}", guess_counter(game, start.guesses))?;
    writeln!(output)?;

    let mut history = String::new();

    loop {
        write!(output, "Your guess: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }
        let guess = line.trim();

        let response = game.interact(Some(guess));

        if response.callback == CallbackState::InvalidGuess {
            writeln!(output, "Invalid guess.")?;
        } else if let Some(word) = response.guessed_words.last() {
            history.push_str(word.text());
            history.push('\n');
            history.push_str(&response.feedback.render(&symbols));
            history.push('\n');
        }

        writeln!(output, "{}", guess_counter(game, response.guesses))?;
        write!(output, "{history}")?;
        writeln!(output)?;

        match response.callback {
            CallbackState::GameWon => {
                writeln!(output, "You won!")?;
                return Ok(());
            }
            CallbackState::GameLost => {
                let secret = game.secret().map_or("", |w| w.text());
                writeln!(output, "You lost! Boo-hoo.")?;
                writeln!(output, "Correct word: {secret}")?;
                return Ok(());
            }
            _ => {}
        }
    }
}

fn guess_counter(game: &Game<'_>, guesses: usize) -> String {
    if game.config().is_endless() {
        format!("GUESSES: {guesses}")
    } else {
        format!("GUESSES: {guesses}/{}", game.config().max_guesses)
    }
}
