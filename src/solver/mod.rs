//! Solution path search
//!
//! Finds a chain of names from a start name to a target for hints and for
//! revealing a solution when the player gives up.

pub mod fallback;
mod frontier;
mod path_finder;
mod solution;

pub use frontier::Frontier;
pub use path_finder::{PathFinder, SearchLimits};
pub use solution::{PathOrigin, SolutionPath};
