//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterState};
use colored::Colorize;

/// Color each letter of a guess by its feedback
///
/// Correct letters are green, misplaced letters yellow, wrong letters dimmed.
#[must_use]
pub fn colored_guess(word: &str, feedback: &Feedback) -> String {
    word.chars()
        .zip(feedback.states())
        .map(|(letter, state)| {
            let letter = letter.to_ascii_uppercase().to_string();
            match state {
                LetterState::Correct => letter.black().on_green().bold().to_string(),
                LetterState::Misplaced => letter.black().on_yellow().bold().to_string(),
                LetterState::Wrong => letter.bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let feedback = Feedback::from(vec![
            LetterState::Correct,
            LetterState::Misplaced,
            LetterState::Wrong,
        ]);
        assert_eq!(colored_guess("abc", &feedback), "ABC");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
