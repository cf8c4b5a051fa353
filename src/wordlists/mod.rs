//! Word lists for Wordle games
//!
//! Embedded default lists plus the [`Vocabulary`] that pairs the answer list with the
//! allowed-guess list.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Which list a strategy draws its candidates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordSource {
    /// Only words that can be the secret
    #[default]
    Answers,
    /// Every allowed guess
    Guesses,
}

impl WordSource {
    /// Parse a source name
    ///
    /// Supported names: "answers", "guesses" (also "allowed", "all").
    /// Defaults to answers if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "guesses" | "allowed" | "all" => Self::Guesses,
            _ => Self::Answers,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Answers => "answers",
            Self::Guesses => "guesses",
        }
    }
}

/// The two immutable word lists a game is played over
///
/// Lists keep their file order. Guess validation uses the union of both lists, so every
/// answer is always a legal guess.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    answers: Vec<Word>,
    guesses: Vec<Word>,
    allowed: FxHashSet<String>,
}

impl Vocabulary {
    #[must_use]
    pub fn new(answers: Vec<Word>, guesses: Vec<Word>) -> Self {
        let allowed = answers
            .iter()
            .chain(&guesses)
            .map(|w| w.text().to_string())
            .collect();
        Self {
            answers,
            guesses,
            allowed,
        }
    }

    /// Vocabulary built from the lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            loader::words_from_slice(ANSWERS),
            loader::words_from_slice(ALLOWED),
        )
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// The list a strategy with this source filters over
    #[must_use]
    pub fn source(&self, source: WordSource) -> &[Word] {
        match source {
            WordSource::Answers => &self.answers,
            WordSource::Guesses => &self.guesses,
        }
    }

    /// Whether `text` (already lowercase) is a legal guess
    #[must_use]
    pub fn is_allowed(&self, text: &str) -> bool {
        self.allowed.contains(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_words_are_five_lowercase_letters() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        let allowed_set: std::collections::HashSet<_> = ALLOWED.iter().collect();
        for answer in ANSWERS {
            assert!(
                allowed_set.contains(answer),
                "Answer '{answer}' not in allowed list"
            );
        }
    }

    #[test]
    fn guess_list_is_broader_than_answers() {
        assert!(ALLOWED_COUNT >= 2 * ANSWERS_COUNT);

        let answers: std::collections::HashSet<_> = ANSWERS.iter().collect();
        let mut extra_initials: Vec<u8> = ALLOWED
            .iter()
            .filter(|word| !answers.contains(word))
            .map(|word| word.as_bytes()[0])
            .collect();
        extra_initials.sort_unstable();
        extra_initials.dedup();
        assert_eq!(extra_initials, (b'a'..=b'z').collect::<Vec<u8>>());
    }

    #[test]
    fn vocabulary_allows_answers_missing_from_guess_list() {
        let vocabulary = Vocabulary::new(
            loader::words_from_slice(&["apple"]),
            loader::words_from_slice(&["grape"]),
        );
        assert!(vocabulary.is_allowed("apple"));
        assert!(vocabulary.is_allowed("grape"));
        assert!(!vocabulary.is_allowed("crane"));
    }

    #[test]
    fn source_selects_list() {
        let vocabulary = Vocabulary::new(
            loader::words_from_slice(&["apple"]),
            loader::words_from_slice(&["apple", "grape"]),
        );
        assert_eq!(vocabulary.source(WordSource::Answers).len(), 1);
        assert_eq!(vocabulary.source(WordSource::Guesses).len(), 2);
    }

    #[test]
    fn word_source_from_name() {
        assert_eq!(WordSource::from_name("guesses"), WordSource::Guesses);
        assert_eq!(WordSource::from_name("all"), WordSource::Guesses);
        assert_eq!(WordSource::from_name("answers"), WordSource::Answers);
        assert_eq!(WordSource::from_name("nonsense"), WordSource::Answers);
    }
}
