//! Batch simulation - strategy evaluation across the answer list
//!
//! Plays every answer word many times with a fresh game and a fresh strategy per trial,
//! then ranks target words and opening guesses by their mean guess count.

use crate::core::Word;
use crate::game::{CallbackState, Game, GameConfig, GameState, Knowledge, Response};
use crate::solver::{Dictionary, RandomElimination, Strategy, StrategyError};
use crate::wordlists::{Vocabulary, WordSource};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Settings for one batch of simulated games
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Times the answer list is repeated to form the review list
    pub rounds: usize,
    /// Games per review entry; `None` plays one game per review entry
    pub trials: Option<usize>,
    /// List the strategy draws guesses from
    pub source: WordSource,
    pub game: GameConfig,
    /// Batch seed; a random one is drawn when absent
    pub seed: Option<u64>,
    /// Cap on the number of review entries
    pub limit: Option<usize>,
    /// Abort the batch on the first strategy failure instead of recording it
    pub halt_on_error: bool,
    pub show_progress: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rounds: 1,
            trials: None,
            source: WordSource::Answers,
            game: GameConfig::endless(),
            seed: None,
            limit: None,
            halt_on_error: false,
            show_progress: true,
        }
    }
}

/// Mean guess count for one word
#[derive(Debug, Clone, PartialEq)]
pub struct RankedWord {
    pub word: String,
    pub mean_guesses: f64,
    pub games: usize,
}

/// A game the strategy could not finish
#[derive(Debug, Clone)]
pub struct GameFailure {
    pub target: String,
    pub trial: usize,
    pub guessed_words: Vec<String>,
    pub knowledge: Knowledge,
    pub error: StrategyError,
}

/// Aggregated results of a batch
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Target words, easiest first
    pub targets: Vec<RankedWord>,
    /// Opening guesses, best first
    pub openings: Vec<RankedWord>,
    pub failures: Vec<GameFailure>,
    pub seed: u64,
    pub duration: Duration,
}

impl SimulationReport {
    #[must_use]
    pub fn easiest(&self, count: usize) -> &[RankedWord] {
        &self.targets[..count.min(self.targets.len())]
    }

    pub fn hardest(&self, count: usize) -> impl Iterator<Item = &RankedWord> {
        self.targets.iter().rev().take(count)
    }

    #[must_use]
    pub fn best_openings(&self, count: usize) -> &[RankedWord] {
        &self.openings[..count.min(self.openings.len())]
    }

    pub fn worst_openings(&self, count: usize) -> impl Iterator<Item = &RankedWord> {
        self.openings.iter().rev().take(count)
    }

    /// Mean guesses over every finished game
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        let (total, games) = self.targets.iter().fold((0.0, 0), |(total, games), ranked| {
            (
                total + ranked.mean_guesses * ranked.games as f64,
                games + ranked.games,
            )
        });
        if games == 0 {
            0.0
        } else {
            total / games as f64
        }
    }
}

/// Errors that abort a batch
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("strategy failed on '{target}' (trial {trial}) after guessing {guessed_words:?}")]
    Strategy {
        target: String,
        trial: usize,
        guessed_words: Vec<String>,
        #[source]
        source: StrategyError,
    },
    #[error("guess '{guess}' was rejected while playing '{target}'")]
    RejectedGuess { target: String, guess: String },
}

impl From<GameFailure> for SimulationError {
    fn from(failure: GameFailure) -> Self {
        Self::Strategy {
            target: failure.target,
            trial: failure.trial,
            guessed_words: failure.guessed_words,
            source: failure.error,
        }
    }
}

/// How a single simulated game ended
#[derive(Debug)]
pub enum TrialOutcome {
    Finished(Response),
    Exhausted(GameFailure),
}

#[derive(Debug, Default, Clone, Copy)]
struct Mean {
    total: usize,
    games: usize,
}

impl Mean {
    fn add(&mut self, guesses: usize) {
        self.total += guesses;
        self.games += 1;
    }

    fn merge(&mut self, other: Self) {
        self.total += other.total;
        self.games += other.games;
    }
}

/// Per-worker accumulator; merged once all workers finish
#[derive(Debug, Default)]
struct Tally {
    games: usize,
    wins: usize,
    losses: usize,
    targets: FxHashMap<String, Mean>,
    openings: FxHashMap<String, Mean>,
    failures: Vec<GameFailure>,
}

impl Tally {
    fn record(&mut self, target: &Word, response: &Response) {
        self.games += 1;
        if response.callback == CallbackState::GameWon {
            self.wins += 1;
        } else {
            self.losses += 1;
        }

        self.targets
            .entry(target.text().to_string())
            .or_default()
            .add(response.guesses);
        if let Some(opening) = response.opening() {
            self.openings
                .entry(opening.text().to_string())
                .or_default()
                .add(response.guesses);
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.games += other.games;
        self.wins += other.wins;
        self.losses += other.losses;
        for (word, mean) in other.targets {
            self.targets.entry(word).or_default().merge(mean);
        }
        for (word, mean) in other.openings {
            self.openings.entry(word).or_default().merge(mean);
        }
        self.failures.extend(other.failures);
        self
    }
}

/// Rank words by mean guesses, ascending, ties broken by the word itself
fn rank(means: FxHashMap<String, Mean>) -> Vec<RankedWord> {
    let mut ranked: Vec<RankedWord> = means
        .into_iter()
        .filter(|(_, mean)| mean.games > 0)
        .map(|(word, mean)| RankedWord {
            word,
            mean_guesses: mean.total as f64 / mean.games as f64,
            games: mean.games,
        })
        .collect();
    ranked.sort_by(|a, b| {
        a.mean_guesses
            .total_cmp(&b.mean_guesses)
            .then_with(|| a.word.cmp(&b.word))
    });
    ranked
}

/// Seed for one trial, independent of which worker plays it
fn trial_seed(batch_seed: u64, entry: usize, trial: usize) -> u64 {
    batch_seed
        ^ (entry as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (trial as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F)
}

/// Play one game of `target` to completion
///
/// # Errors
///
/// Returns `SimulationError::RejectedGuess` if the strategy proposes a word the game does
/// not accept, since such a game could never end.
pub fn play_trial<R: Rng>(
    vocabulary: &Vocabulary,
    dictionary: &Dictionary<'_>,
    config: GameConfig,
    target: &Word,
    trial: usize,
    rng: R,
) -> Result<TrialOutcome, SimulationError> {
    let mut game = Game::new(vocabulary, config, target.clone());
    let mut strategy = RandomElimination::new(trial, dictionary, rng);
    let mut response = game.interact(None);

    while !game.state().is_over() {
        let guess = match strategy.select_guess(&response) {
            Ok(guess) => guess,
            Err(error) => {
                return Ok(TrialOutcome::Exhausted(GameFailure {
                    target: target.text().to_string(),
                    trial,
                    guessed_words: response
                        .guessed_words
                        .iter()
                        .map(|w| w.text().to_string())
                        .collect(),
                    knowledge: response.knowledge,
                    error,
                }));
            }
        };

        response = game.interact(Some(guess.text()));
        if response.callback == CallbackState::InvalidGuess {
            return Err(SimulationError::RejectedGuess {
                target: target.text().to_string(),
                guess: guess.text().to_string(),
            });
        }
    }

    debug_assert!(matches!(game.state(), GameState::Win | GameState::Lose));
    Ok(TrialOutcome::Finished(response))
}

/// Run a batch of simulated games
///
/// Review entries are played in parallel. Each worker keeps its own tally, and tallies are
/// merged at the end, so a seeded run gives the same report on any number of threads.
///
/// # Errors
///
/// Returns `SimulationError` when a guess is rejected by the engine, or on the first
/// strategy failure if `halt_on_error` is set.
pub fn run_simulation(
    vocabulary: &Vocabulary,
    config: &SimulationConfig,
) -> Result<SimulationReport, SimulationError> {
    let review: Vec<&Word> = std::iter::repeat_n(vocabulary.answers(), config.rounds)
        .flatten()
        .take(config.limit.unwrap_or(usize::MAX))
        .collect();
    let trials = config.trials.unwrap_or(review.len());
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let dictionary = Dictionary::new(vocabulary.source(config.source));

    info!(
        "simulating {} entries x {trials} trials from the {} list (seed {seed})",
        review.len(),
        config.source.name()
    );

    let pb = if config.show_progress {
        ProgressBar::new(review.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let tally = review
        .par_iter()
        .enumerate()
        .try_fold(Tally::default, |mut tally, (entry, &target)| {
            for trial in 0..trials {
                let rng = StdRng::seed_from_u64(trial_seed(seed, entry, trial));
                match play_trial(vocabulary, &dictionary, config.game, target, trial, rng)? {
                    TrialOutcome::Finished(response) => tally.record(target, &response),
                    TrialOutcome::Exhausted(failure) if config.halt_on_error => {
                        return Err(SimulationError::from(failure));
                    }
                    TrialOutcome::Exhausted(failure) => {
                        warn!(
                            "no candidates left for '{}' (trial {}) after {:?}: {}",
                            failure.target, failure.trial, failure.guessed_words, failure.knowledge
                        );
                        tally.failures.push(failure);
                    }
                }
            }
            pb.set_message(target.text().to_string());
            pb.inc(1);
            Ok(tally)
        })
        .try_reduce(Tally::default, |a, b| Ok(a.merge(b)))?;

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut failures = tally.failures;
    failures.sort_by(|a, b| a.target.cmp(&b.target).then(a.trial.cmp(&b.trial)));

    info!(
        "played {} games ({} failed) in {:.2}s",
        tally.games,
        failures.len(),
        duration.as_secs_f64()
    );

    Ok(SimulationReport {
        games: tally.games,
        wins: tally.wins,
        losses: tally.losses,
        targets: rank(tally.targets),
        openings: rank(tally.openings),
        failures,
        seed,
        duration,
    })
}
