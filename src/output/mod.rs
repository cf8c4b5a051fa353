//! Terminal output formatting
//!
//! Display utilities for CLI results and the ranking file.

pub mod display;
pub mod formatters;
pub mod ranking;

pub use display::{print_simulation_report, print_solve_result};
pub use ranking::write_ranking;
