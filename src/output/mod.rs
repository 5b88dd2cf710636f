//! Terminal output formatting
//!
//! Display utilities for CLI results and JSON responses for script mode.

pub mod display;
pub mod formatters;
mod response;

pub use display::{
    print_analysis_result, print_benchmark_result, print_game_state, print_outcome,
    print_scoreboard, print_solution, print_solve_result,
};
pub use response::GuessResponse;
