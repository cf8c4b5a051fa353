//! Per-letter feedback for a scored guess
//!
//! Each position of a guess is classified on its own, left to right:
//! - `Correct`: same letter at the same position of the secret
//! - `Misplaced`: letter occurs somewhere else in the secret
//! - `Wrong`: letter does not occur in the secret at all
//!
//! Letters are not counted, so a guess with a repeated letter can mark every copy
//! `Misplaced` even when the secret holds only one.

use super::Word;
use std::fmt;

/// Result of comparing one guessed letter against the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    Correct,
    Misplaced,
    Wrong,
}

impl LetterState {
    /// Classify the letter of `guess` at `position`
    ///
    /// # Panics
    /// Panics if `position` is out of range for either word.
    #[must_use]
    pub fn classify(guess: &Word, secret: &Word, position: usize) -> Self {
        let letter = guess.char_at(position);
        if letter == secret.char_at(position) {
            Self::Correct
        } else if secret.has_letter(letter) {
            Self::Misplaced
        } else {
            Self::Wrong
        }
    }
}

/// Characters used to print feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackSymbols {
    pub correct: char,
    pub misplaced: char,
    pub wrong: char,
}

impl FeedbackSymbols {
    /// `C` / `?` / `x`
    pub const PLAIN: Self = Self {
        correct: 'C',
        misplaced: '?',
        wrong: 'x',
    };

    #[must_use]
    pub const fn symbol(&self, state: LetterState) -> char {
        match state {
            LetterState::Correct => self.correct,
            LetterState::Misplaced => self.misplaced,
            LetterState::Wrong => self.wrong,
        }
    }
}

impl Default for FeedbackSymbols {
    fn default() -> Self {
        Self::PLAIN
    }
}

/// Ordered per-position feedback for a single guess
///
/// Empty when an interaction did not score a guess.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback(Vec<LetterState>);

impl Feedback {
    /// Score `guess` against `secret`
    ///
    /// Both words must have the same length.
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::{Feedback, LetterState, Word};
    ///
    /// let guess = Word::new("grape").unwrap();
    /// let secret = Word::new("apple").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// assert_eq!(feedback.states()[2], LetterState::Misplaced);
    /// assert_eq!(feedback.to_string(), "xx??C");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        debug_assert_eq!(guess.len(), secret.len(), "words must share a length");
        Self(
            (0..guess.len())
                .map(|i| LetterState::classify(guess, secret, i))
                .collect(),
        )
    }

    #[must_use]
    pub fn states(&self) -> &[LetterState] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is `Correct` (and there is at least one)
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterState::Correct)
    }

    /// Render with the given symbols, one character per position
    #[must_use]
    pub fn render(&self, symbols: &FeedbackSymbols) -> String {
        self.0.iter().map(|&s| symbols.symbol(s)).collect()
    }
}

impl From<Vec<LetterState>> for Feedback {
    fn from(states: Vec<LetterState>) -> Self {
        Self(states)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&FeedbackSymbols::PLAIN))
    }
}
