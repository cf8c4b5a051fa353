//! Accumulated feedback constraints
//!
//! Aggregates every scored guess of one game into three sets: letters known to be absent,
//! positions where a present letter is known not to sit, and positions confirmed correct.

use crate::core::{Feedback, LetterState, Word};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Feedback accumulated over a game's guess history
///
/// Owned by a single game and only mutated by it. Letters are lowercase ASCII bytes.
/// A letter marked wrong is never removed again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Knowledge {
    wrong_letters: BTreeSet<u8>,
    misplaced_positions: BTreeMap<u8, BTreeSet<usize>>,
    correct_positions: BTreeMap<u8, BTreeSet<usize>>,
}

impl Knowledge {
    /// True before any guess has been scored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wrong_letters.is_empty()
            && self.misplaced_positions.is_empty()
            && self.correct_positions.is_empty()
    }

    /// Fold one scored guess into the constraint sets
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        let scored = guess.chars().iter().zip(feedback.states());
        for (position, (&letter, &state)) in scored.enumerate() {
            match state {
                LetterState::Correct => {
                    self.correct_positions
                        .entry(letter)
                        .or_default()
                        .insert(position);
                }
                LetterState::Misplaced => {
                    self.misplaced_positions
                        .entry(letter)
                        .or_default()
                        .insert(position);
                }
                LetterState::Wrong => {
                    self.wrong_letters.insert(letter);
                }
            }
        }
    }

    #[must_use]
    pub fn wrong_letters(&self) -> &BTreeSet<u8> {
        &self.wrong_letters
    }

    #[must_use]
    pub fn misplaced_positions(&self) -> &BTreeMap<u8, BTreeSet<usize>> {
        &self.misplaced_positions
    }

    #[must_use]
    pub fn correct_positions(&self) -> &BTreeMap<u8, BTreeSet<usize>> {
        &self.correct_positions
    }

    #[must_use]
    pub fn is_wrong(&self, letter: u8) -> bool {
        self.wrong_letters.contains(&letter)
    }

    /// `letter` is in the secret but known not to be at `position`
    #[must_use]
    pub fn is_misplaced_at(&self, letter: u8, position: usize) -> bool {
        self.misplaced_positions
            .get(&letter)
            .is_some_and(|positions| positions.contains(&position))
    }

    #[must_use]
    pub fn is_correct_at(&self, letter: u8, position: usize) -> bool {
        self.correct_positions
            .get(&letter)
            .is_some_and(|positions| positions.contains(&position))
    }

    /// Whether `position` is confirmed correct for some letter other than `letter`
    #[must_use]
    pub fn conflicts_at(&self, letter: u8, position: usize) -> bool {
        self.correct_positions
            .iter()
            .any(|(&correct, positions)| {
                correct != letter && positions.contains(&position)
            })
    }

    /// Whether `word` is consistent with every recorded constraint
    ///
    /// A word is rejected when any position holds a wrong letter, a letter already seen
    /// misplaced at that position, or a letter other than the one confirmed there.
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        word.chars().iter().enumerate().all(|(position, &letter)| {
            !self.is_wrong(letter)
                && !self.is_misplaced_at(letter, position)
                && !self.conflicts_at(letter, position)
        })
    }
}

fn letters(set: &BTreeSet<u8>) -> String {
    set.iter().map(|&b| char::from(b)).collect()
}

fn positions(map: &BTreeMap<u8, BTreeSet<usize>>) -> String {
    map.iter()
        .map(|(&letter, positions)| {
            let list: Vec<String> = positions.iter().map(ToString::to_string).collect();
            format!("{}@{}", char::from(letter), list.join(","))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Knowledge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "correct [{}] misplaced [{}] wrong [{}]",
            positions(&self.correct_positions),
            positions(&self.misplaced_positions),
            letters(&self.wrong_letters)
        )
    }
}
