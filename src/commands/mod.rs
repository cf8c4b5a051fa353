//! Command implementations

pub mod play;
pub mod simulate;
pub mod solve;

pub use play::{PlayError, run_play, start_game};
pub use simulate::{
    GameFailure, RankedWord, SimulationConfig, SimulationError, SimulationReport, TrialOutcome,
    play_trial, run_simulation,
};
pub use solve::{GuessStep, SolveConfig, SolveError, SolveResult, solve_word};
