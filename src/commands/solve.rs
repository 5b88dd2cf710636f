//! Path solving command
//!
//! Finds one chain of names from a start name to a target name.

use crate::core::Dictionary;
use crate::solver::{PathFinder, SearchLimits, SolutionPath};
use rand::Rng;
use std::time::{Duration, Instant};

/// Names to connect
pub struct SolveConfig {
    pub start: String,
    pub target: String,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(start: String, target: String) -> Self {
        Self { start, target }
    }
}

/// Result of a path search
pub struct SolveResult {
    pub start: String,
    pub target: String,
    pub path: SolutionPath,
    pub duration: Duration,
}

/// Search for a path between two dictionary names
///
/// # Errors
///
/// Returns an error if either name is not in the dictionary.
pub fn solve_path<R: Rng + ?Sized>(
    config: &SolveConfig,
    dictionary: &Dictionary,
    limits: SearchLimits,
    rng: &mut R,
) -> Result<SolveResult, String> {
    let start = dictionary
        .canonical(&config.start)
        .ok_or_else(|| format!("Name '{}' not in name list", config.start))?;
    let target = dictionary
        .canonical(&config.target)
        .ok_or_else(|| format!("Name '{}' not in name list", config.target))?;

    let timer = Instant::now();
    let path = PathFinder::new(dictionary, limits).find(start, target, &[], rng);

    Ok(SolveResult {
        start: start.to_string(),
        target: target.to_string(),
        path,
        duration: timer.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::is_valid_continuation;
    use crate::names::loader::embedded_dictionary;
    use crate::solver::PathOrigin;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn solve(start: &str, target: &str, dict: &Dictionary) -> Result<SolveResult, String> {
        let config = SolveConfig::new(start.to_string(), target.to_string());
        solve_path(&config, dict, SearchLimits::default(), &mut StdRng::seed_from_u64(5))
    }

    #[test]
    fn solve_small_chain() {
        let dict = Dictionary::new(["Alice", "Liam", "Ivy", "Vera"]);
        let result = solve("alice", "VERA", &dict).unwrap();

        assert_eq!(result.start, "Alice");
        assert_eq!(result.target, "Vera");
        assert_eq!(result.path.origin, PathOrigin::Found);
        assert_eq!(result.path.names, vec!["Alice", "Liam", "Ivy", "Vera"]);
    }

    #[test]
    fn solve_same_name_is_trivial() {
        let dict = Dictionary::new(["Alice", "Liam"]);
        let result = solve("Alice", "alice", &dict).unwrap();
        assert_eq!(result.path.origin, PathOrigin::Trivial);
        assert_eq!(result.path.names, vec!["Alice"]);
    }

    #[test]
    fn solve_unknown_name_returns_error() {
        let dict = Dictionary::new(["Alice", "Liam"]);
        assert!(solve("Zed", "Liam", &dict).is_err());
        assert!(solve("Alice", "Zed", &dict).is_err());
    }

    #[test]
    fn solved_paths_follow_the_chain_rule() {
        let dict = embedded_dictionary();
        let result = solve("Alice", "Oscar", &dict).unwrap();

        assert_eq!(result.path.names.first().map(String::as_str), Some("Alice"));
        for pair in result.path.names.windows(2) {
            assert!(is_valid_continuation(&pair[0], &pair[1]));
        }
    }
}
