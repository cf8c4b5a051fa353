//! The game state machine
//!
//! A [`Game`] holds one secret word and everything learned about it. Each call to
//! [`Game::interact`] is dispatched on the current [`GameState`] and answered with a
//! fresh [`Response`].

use super::{CallbackState, GameConfig, GameState, Knowledge, Response};
use crate::core::{Feedback, Word};
use crate::wordlists::Vocabulary;
use log::{debug, trace};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// One game of Wordle
pub struct Game<'v> {
    vocabulary: &'v Vocabulary,
    config: GameConfig,
    secret: Word,
    state: GameState,
    guesses: usize,
    guessed_words: Vec<Word>,
    knowledge: Knowledge,
}

impl<'v> Game<'v> {
    /// Start a game with a known secret
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::game::{CallbackState, Game, GameConfig};
    /// use wordle_sim::wordlists::Vocabulary;
    /// use wordle_sim::core::Word;
    ///
    /// let vocabulary = Vocabulary::embedded();
    /// let mut game = Game::new(&vocabulary, GameConfig::standard(), Word::new("apple").unwrap());
    ///
    /// assert_eq!(game.interact(None).callback, CallbackState::GameStart);
    /// assert_eq!(game.interact(Some("grape")).callback, CallbackState::ValidGuess);
    /// assert_eq!(game.interact(Some("apple")).callback, CallbackState::GameWon);
    /// ```
    #[must_use]
    pub fn new(vocabulary: &'v Vocabulary, config: GameConfig, secret: Word) -> Self {
        Self {
            vocabulary,
            config,
            secret,
            state: GameState::Ready,
            guesses: 0,
            guessed_words: Vec::new(),
            knowledge: Knowledge::default(),
        }
    }

    /// Start a game with a secret drawn uniformly from the answer list
    ///
    /// Returns `None` if the answer list is empty.
    pub fn random<R: Rng + ?Sized>(
        vocabulary: &'v Vocabulary,
        config: GameConfig,
        rng: &mut R,
    ) -> Option<Self> {
        let secret = vocabulary.answers().choose(rng)?.clone();
        debug!("drew a secret of {} letters", secret.len());
        Some(Self::new(vocabulary, config, secret))
    }

    /// Advance the game by one interaction
    ///
    /// The guess is ignored while the game is `Ready` and after it has ended.
    pub fn interact(&mut self, guess: Option<&str>) -> Response {
        match self.state {
            GameState::Ready => self.respond_ready(),
            GameState::Playing => self.respond_playing(guess),
            GameState::Win | GameState::Lose => self.response(CallbackState::GameEnded, None),
        }
    }

    fn respond_ready(&mut self) -> Response {
        self.state = GameState::Playing;
        self.response(CallbackState::GameStart, None)
    }

    fn respond_playing(&mut self, guess: Option<&str>) -> Response {
        let Some(guess) = guess.and_then(|text| self.validate(text)) else {
            return self.response(CallbackState::InvalidGuess, None);
        };

        let feedback = Feedback::calculate(&guess, &self.secret);
        self.knowledge.record(&guess, &feedback);
        trace!("{guess} scored {feedback}");

        self.guessed_words.push(guess);
        self.guesses += 1;

        let callback = if feedback.is_solved() {
            self.state = GameState::Win;
            CallbackState::GameWon
        } else if self.guesses >= self.config.max_guesses {
            self.state = GameState::Lose;
            CallbackState::GameLost
        } else {
            CallbackState::ValidGuess
        };

        if callback.is_final() {
            debug!(
                "game over after {} guesses: {callback:?} ({})",
                self.guesses, self.secret
            );
        }

        self.response(callback, Some(feedback))
    }

    /// A guess is valid when it is a word of the secret's length in the allowed list
    fn validate(&self, text: &str) -> Option<Word> {
        let word = Word::new(text.trim()).ok()?;
        (word.len() == self.word_length() && self.vocabulary.is_allowed(word.text()))
            .then_some(word)
    }

    fn response(&self, callback: CallbackState, feedback: Option<Feedback>) -> Response {
        Response {
            callback,
            feedback: feedback.unwrap_or_default(),
            knowledge: self.knowledge.clone(),
            guessed_words: self.guessed_words.clone(),
            guesses: self.guesses,
        }
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn guesses(&self) -> usize {
        self.guesses
    }

    /// Guesses left before the game is lost
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.config.max_guesses.saturating_sub(self.guesses)
    }

    #[must_use]
    pub fn guessed_words(&self) -> &[Word] {
        &self.guessed_words
    }

    #[must_use]
    pub const fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    /// Letters in the secret; guesses of any other length are invalid
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.len()
    }

    /// The secret, once the game is over (or always, if the config reveals it)
    #[must_use]
    pub fn secret(&self) -> Option<&Word> {
        (self.state.is_over() || self.config.reveals_word)
            .then_some(&self.secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState::{Correct, Misplaced, Wrong};
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: &[&str] = &[
        "apple", "grape", "apply", "crane", "slate", "irate", "crate", "ample", "maple", "blame",
    ];

    fn vocabulary() -> Vocabulary {
        Vocabulary::new(words_from_slice(&WORDS[..4]), words_from_slice(WORDS))
    }

    fn started<'v>(vocabulary: &'v Vocabulary, secret: &str, config: GameConfig) -> Game<'v> {
        let mut game = Game::new(vocabulary, config, Word::new(secret).unwrap());
        game.interact(None);
        game
    }

    #[test]
    fn first_interaction_starts_game() {
        let vocabulary = vocabulary();
        let secret = Word::new("apple").unwrap();
        let mut game = Game::new(&vocabulary, GameConfig::standard(), secret);
        assert_eq!(game.state(), GameState::Ready);

        let response = game.interact(Some("apple"));

        assert_eq!(response.callback, CallbackState::GameStart);
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(response.guesses, 0);
        assert!(response.feedback.is_empty());
        assert!(response.knowledge.is_empty());
        assert!(response.guessed_words.is_empty());
    }

    #[test]
    fn correct_guess_wins() {
        let vocabulary = vocabulary();
        for secret in WORDS {
            let mut game = started(&vocabulary, secret, GameConfig::standard());
            let response = game.interact(Some(*secret));

            assert_eq!(response.callback, CallbackState::GameWon);
            assert_eq!(response.feedback.states(), vec![Correct; 5].as_slice());
            assert_eq!(game.state(), GameState::Win);
        }
    }

    #[test]
    fn slate_against_crane() {
        let vocabulary = vocabulary();
        let mut game = started(&vocabulary, "crane", GameConfig::standard());
        let response = game.interact(Some("slate"));

        assert_eq!(response.callback, CallbackState::ValidGuess);
        assert_eq!(
            response.feedback.states(),
            &[Wrong, Wrong, Correct, Wrong, Correct]
        );
    }

    #[test]
    fn invalid_guesses_do_not_count() {
        let vocabulary = vocabulary();
        let mut game = started(&vocabulary, "apple", GameConfig::standard());
        game.interact(Some("grape"));

        let inputs = [Some("zzzzz"), Some("app"), Some("appl3"), Some("applesauce")];
        for guess in inputs.into_iter().chain([None]) {
            let response = game.interact(guess);
            assert_eq!(response.callback, CallbackState::InvalidGuess);
            assert_eq!(response.guesses, 1);
            assert!(response.feedback.is_empty());
        }
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.guessed_words().len(), 1);
    }

    #[test]
    fn allowed_words_of_other_lengths_are_invalid() {
        let vocabulary = Vocabulary::new(
            words_from_slice(&["apple"]),
            words_from_slice(&["apple", "ape", "apples"]),
        );
        let mut game = started(&vocabulary, "apple", GameConfig::standard());
        assert_eq!(game.word_length(), 5);

        for guess in ["ape", "apples"] {
            assert!(vocabulary.is_allowed(guess));
            let response = game.interact(Some(guess));
            assert_eq!(response.callback, CallbackState::InvalidGuess);
            assert_eq!(response.guesses, 0);
        }
        assert_eq!(game.interact(Some("apple")).callback, CallbackState::GameWon);
    }

    #[test]
    fn guesses_are_normalized() {
        let vocabulary = vocabulary();
        let mut game = started(&vocabulary, "apple", GameConfig::standard());
        let response = game.interact(Some(" APPLE\n"));
        assert_eq!(response.callback, CallbackState::GameWon);
    }

    #[test]
    fn apple_in_three() {
        let vocabulary = vocabulary();
        let mut game = started(&vocabulary, "apple", GameConfig::standard());

        let first = game.interact(Some("grape"));
        assert_eq!(first.callback, CallbackState::ValidGuess);
        assert_eq!(
            first.feedback.states(),
            &[Wrong, Wrong, Misplaced, Misplaced, Correct]
        );

        let second = game.interact(Some("apply"));
        assert_eq!(second.callback, CallbackState::ValidGuess);
        assert_eq!(second.guesses, 2);

        let third = game.interact(Some("apple"));
        assert_eq!(third.callback, CallbackState::GameWon);
        assert_eq!(third.guesses, 3);
        let words: Vec<&str> = third.guessed_words.iter().map(Word::text).collect();
        assert_eq!(words, ["grape", "apply", "apple"]);
    }

    #[test]
    fn six_misses_lose_and_reveal() {
        let vocabulary = vocabulary();
        let mut game = started(&vocabulary, "apple", GameConfig::standard());
        let misses = ["grape", "crane", "slate", "irate", "crate", "maple"];

        for (i, guess) in misses.iter().enumerate() {
            assert!(game.secret().is_none(), "secret revealed early");
            let response = game.interact(Some(*guess));
            assert_eq!(response.guesses, i + 1);
            if i + 1 < misses.len() {
                assert_eq!(response.callback, CallbackState::ValidGuess);
            } else {
                assert_eq!(response.callback, CallbackState::GameLost);
            }
        }

        assert_eq!(game.state(), GameState::Lose);
        assert_eq!(game.guesses(), 6);
        assert_eq!(game.remaining(), 0);
        assert_eq!(game.secret().map(Word::text), Some("apple"));
    }

    #[test]
    fn terminal_state_is_idempotent() {
        let vocabulary = vocabulary();
        let mut game = started(&vocabulary, "apple", GameConfig::standard());
        game.interact(Some("grape"));
        let won = game.interact(Some("apple"));

        for guess in [Some("apple"), Some("crane"), Some("zzzzz"), None] {
            let response = game.interact(guess);
            assert_eq!(response.callback, CallbackState::GameEnded);
            assert_eq!(response.guesses, won.guesses);
            assert_eq!(response.guessed_words, won.guessed_words);
            assert_eq!(response.knowledge, won.knowledge);
            assert!(response.feedback.is_empty());
            assert_eq!(game.state(), GameState::Win);
        }
    }

    #[test]
    fn lost_game_stays_lost() {
        let vocabulary = vocabulary();
        let config = GameConfig::standard().with_max_guesses(2);
        let mut game = started(&vocabulary, "apple", config);
        game.interact(Some("crane"));
        let lost = game.interact(Some("slate"));
        assert_eq!(lost.callback, CallbackState::GameLost);

        for guess in [Some("apple"), Some("grape"), Some("zzzzz"), None] {
            let response = game.interact(guess);
            assert_eq!(response.callback, CallbackState::GameEnded);
            assert_eq!(response.guesses, lost.guesses);
            assert_eq!(response.guessed_words, lost.guessed_words);
            assert_eq!(response.knowledge, lost.knowledge);
            assert!(response.feedback.is_empty());
            assert_eq!(game.state(), GameState::Lose);
        }
    }

    #[test]
    fn guess_count_is_monotonic() {
        let vocabulary = vocabulary();
        let mut game = started(&vocabulary, "apple", GameConfig::endless());
        let inputs = ["grape", "nope!", "crane", "zzzzz", "slate", "apply", "apple"];

        let mut last = 0;
        for input in inputs {
            let response = game.interact(Some(input));
            match response.callback {
                CallbackState::InvalidGuess => assert_eq!(response.guesses, last),
                _ => assert_eq!(response.guesses, last + 1),
            }
            last = response.guesses;
        }
        assert_eq!(game.state(), GameState::Win);
        assert_eq!(last, 5);
    }

    #[test]
    fn wrong_letters_never_overlap_correct_positions() {
        let vocabulary = vocabulary();
        for secret in WORDS {
            let mut game = started(&vocabulary, secret, GameConfig::endless());
            for guess in WORDS {
                let response = game.interact(Some(*guess));
                let knowledge = &response.knowledge;
                for letter in knowledge.wrong_letters() {
                    assert!(!knowledge.correct_positions().contains_key(letter));
                    assert!(!knowledge.misplaced_positions().contains_key(letter));
                }
            }
        }
    }

    #[test]
    fn endless_config_reveals_secret() {
        let vocabulary = vocabulary();
        let game = started(&vocabulary, "apple", GameConfig::endless());
        assert_eq!(game.secret().map(Word::text), Some("apple"));
    }

    #[test]
    fn random_secret_comes_from_answers() {
        let vocabulary = vocabulary();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let game = Game::random(&vocabulary, GameConfig::endless(), &mut rng).unwrap();
            let secret = game.secret().unwrap();
            assert!(vocabulary.answers().contains(secret));
        }
    }

    #[test]
    fn random_secret_needs_answers() {
        let vocabulary = Vocabulary::new(Vec::new(), words_from_slice(WORDS));
        let mut rng = StdRng::seed_from_u64(7);
        let game = Game::random(&vocabulary, GameConfig::standard(), &mut rng);
        assert!(game.is_none());
    }
}
