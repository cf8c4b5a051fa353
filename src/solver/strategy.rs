//! Guess selection strategies
//!
//! Defines the Strategy trait and the randomized elimination player.

use super::Dictionary;
use crate::core::Word;
use crate::game::{Knowledge, Response};
use log::{debug, warn};
use rand::Rng;
use rand::prelude::IndexedRandom;
use thiserror::Error;

/// Failure to produce a guess
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// No word in the source list is consistent with the feedback so far
    #[error("no candidates remain after {guesses} guesses")]
    ExhaustedCandidates { guesses: usize },
}

/// An automated player for a single game
pub trait Strategy<'v> {
    /// Index of this game within its batch; varies the opening guess
    fn run_index(&self) -> usize;

    /// The shared word index this strategy picks from
    fn dictionary(&self) -> &Dictionary<'v>;

    /// Pick the next guess given the latest response
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::ExhaustedCandidates` if nothing can be guessed.
    fn select_guess(&mut self, response: &Response) -> Result<&'v Word, StrategyError>;
}

/// Words from the dictionary consistent with `knowledge`
///
/// First-letter groups are pruned before word-level filtering: a group is skipped when its
/// letter is wrong or known misplaced at position 0, and a group whose letter is confirmed
/// at position 0 replaces everything collected so far and ends the scan.
///
/// # Examples
/// ```
/// use wordle_sim::core::{Feedback, Word};
/// use wordle_sim::game::Knowledge;
/// use wordle_sim::solver::{Dictionary, candidates};
/// use wordle_sim::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["apple", "ample", "maple", "crane", "apply"]);
/// let dictionary = Dictionary::new(&words);
///
/// let guess = Word::new("maple").unwrap();
/// let secret = Word::new("apple").unwrap();
/// let mut knowledge = Knowledge::default();
/// knowledge.record(&guess, &Feedback::calculate(&guess, &secret));
///
/// let found: Vec<&str> = candidates(&dictionary, &knowledge).iter().map(|w| w.text()).collect();
/// // m is wrong, a is not at 1, and positions 2-4 are confirmed p, l, e
/// assert_eq!(found, ["apple"]);
/// ```
#[must_use]
pub fn candidates<'v>(dictionary: &Dictionary<'v>, knowledge: &Knowledge) -> Vec<&'v Word> {
    let mut pool: Vec<&'v Word> = Vec::new();

    for (letter, words) in dictionary.groups() {
        let letter = *letter;
        if knowledge.is_wrong(letter) || knowledge.is_misplaced_at(letter, 0) {
            continue;
        }
        if knowledge.is_correct_at(letter, 0) {
            pool.clone_from(words);
            break;
        }
        pool.extend_from_slice(words);
    }

    pool.retain(|word| knowledge.admits(word));
    pool
}

/// Randomized elimination
///
/// Opens with `source[run_index % len]` so repeated games sweep the source list in order.
/// Every later guess is drawn uniformly from the words still consistent with the feedback.
/// Whether it plays from the answer list or the full guess list depends only on the
/// dictionary it is given.
pub struct RandomElimination<'d, 'v, R> {
    run_index: usize,
    dictionary: &'d Dictionary<'v>,
    rng: R,
}

impl<'d, 'v, R: Rng> RandomElimination<'d, 'v, R> {
    #[must_use]
    pub const fn new(run_index: usize, dictionary: &'d Dictionary<'v>, rng: R) -> Self {
        Self {
            run_index,
            dictionary,
            rng,
        }
    }

    fn opening(&self) -> Option<&'v Word> {
        let source = self.dictionary.source();
        if source.is_empty() {
            return None;
        }
        source.get(self.run_index % source.len())
    }
}

impl<'v, R: Rng> Strategy<'v> for RandomElimination<'_, 'v, R> {
    fn run_index(&self) -> usize {
        self.run_index
    }

    fn dictionary(&self) -> &Dictionary<'v> {
        self.dictionary
    }

    fn select_guess(&mut self, response: &Response) -> Result<&'v Word, StrategyError> {
        let exhausted = StrategyError::ExhaustedCandidates {
            guesses: response.guesses,
        };

        if response.knowledge.is_empty() {
            return self.opening().ok_or(exhausted);
        }

        let pool = candidates(self.dictionary, &response.knowledge);
        debug!(
            "{} candidates after {} guesses",
            pool.len(),
            response.guesses
        );

        match pool.choose(&mut self.rng) {
            Some(word) => Ok(*word),
            None => {
                warn!(
                    "candidates exhausted after {:?}: {}",
                    response
                        .guessed_words
                        .iter()
                        .map(Word::text)
                        .collect::<Vec<_>>(),
                    response.knowledge
                );
                Err(exhausted)
            }
        }
    }
}
