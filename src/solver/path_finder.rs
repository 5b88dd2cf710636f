//! Solution path search
//!
//! Breadth-first search from a start name towards a target over the
//! dictionary. The search is deliberately incomplete: each expansion looks at
//! a limited number of continuations in random order, and the whole search is
//! cut off once the frontier gets large. When the target is not reached the
//! fallback ladder in [`super::fallback`] supplies something to show instead.

use super::fallback;
use super::frontier::Frontier;
use super::solution::{PathOrigin, SolutionPath};
use crate::core::{Dictionary, name_key, next_required_letter};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;

/// Bounds that keep a single search cheap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchLimits {
    /// Branches longer than this are not expanded
    pub max_depth: usize,
    /// Search stops once this many branches are queued
    pub max_frontier: usize,
    /// Continuations considered per expansion
    pub fan_out: usize,
}

impl SearchLimits {
    pub const DEFAULT: Self = Self {
        max_depth: 8,
        max_frontier: 3000,
        fan_out: 50,
    };
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Bounded path search over a dictionary
///
/// Holds no mutable state, so one finder can serve any number of concurrent
/// searches as long as each brings its own random source.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'a> {
    dictionary: &'a Dictionary,
    limits: SearchLimits,
}

impl<'a> PathFinder<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, limits: SearchLimits) -> Self {
        Self { dictionary, limits }
    }

    #[must_use]
    pub const fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Find some chain from `start` to `target`
    ///
    /// `used` is the chain played so far; it only decides whether the short
    /// illustrative fallback applies and which names that fallback may use.
    /// An empty result means "no hint available".
    ///
    /// # Examples
    /// ```
    /// use namechain::core::Dictionary;
    /// use namechain::solver::{PathFinder, SearchLimits};
    /// use rand::SeedableRng;
    ///
    /// let dict = Dictionary::new(["Alice", "Liam", "Ivy", "Vera"]);
    /// let finder = PathFinder::new(&dict, SearchLimits::default());
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    ///
    /// let path = finder.find("Alice", "Vera", &[], &mut rng);
    /// assert_eq!(path.names, ["Alice", "Liam", "Ivy", "Vera"]);
    /// ```
    pub fn find<R: Rng + ?Sized>(
        &self,
        start: &str,
        target: &str,
        used: &[String],
        rng: &mut R,
    ) -> SolutionPath {
        let target_key = name_key(target);
        if start.trim().is_empty() || target_key.is_empty() {
            return SolutionPath::unavailable();
        }

        if name_key(start) == target_key {
            return SolutionPath::from_refs(&[start], PathOrigin::Trivial);
        }

        let mut frontier = Frontier::new(start, self.limits.max_frontier);
        let mut expanded = 0usize;

        while let Some((name, path)) = frontier.next_branch() {
            if path.len() > self.limits.max_depth {
                continue;
            }

            let Some(letter) = next_required_letter(name) else {
                continue;
            };
            expanded += 1;

            let mut candidates: Vec<&str> = self
                .dictionary
                .starting_with(letter)
                .filter(|candidate| !frontier.is_visited(candidate))
                .take(self.limits.fan_out)
                .collect();
            candidates.shuffle(rng);

            for candidate in candidates {
                let mut next_path = path.clone();
                next_path.push(candidate);

                if name_key(candidate) == target_key {
                    tracing::debug!(
                        start,
                        target,
                        expanded,
                        length = next_path.len(),
                        "solution path found"
                    );
                    return SolutionPath::from_refs(&next_path, PathOrigin::Found);
                }

                frontier.push(candidate, next_path);
            }
        }

        let fallback = fallback::best_effort(self.dictionary, start, used, &frontier, rng);
        tracing::debug!(
            start,
            target,
            expanded,
            queued = frontier.len(),
            visited = frontier.visited_count(),
            origin = %fallback.origin,
            "target not reached, using fallback path"
        );
        fallback
    }
}
