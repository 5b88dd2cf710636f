//! Best-effort answers when the search misses the target
//!
//! Tried in order:
//! 1. Early in a game (at most one used name) sample a short chain of up to
//!    three names straight from the dictionary.
//! 2. A random queued branch of at least three names.
//! 3. The longest queued branch.
//! 4. Nothing.

use super::frontier::Frontier;
use super::solution::{PathOrigin, SolutionPath};
use crate::core::{Dictionary, name_key, next_required_letter};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Shortest queued branch worth showing at random
const MIN_EXPLORED_LEN: usize = 3;

/// Run the fallback ladder after an unsuccessful search
pub fn best_effort<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    start: &str,
    used: &[String],
    frontier: &Frontier<'_>,
    rng: &mut R,
) -> SolutionPath {
    if used.len() <= 1
        && let Some(path) = illustrative_path(dictionary, start, used, rng)
    {
        return path;
    }

    random_explored(frontier, rng)
        .or_else(|| longest_explored(frontier))
        .unwrap_or_else(SolutionPath::unavailable)
}

/// Sample `start → next → third`, or `start → next` if no third name fits
///
/// Names in `used` are never sampled.
pub fn illustrative_path<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    start: &str,
    used: &[String],
    rng: &mut R,
) -> Option<SolutionPath> {
    let mut excluded: FxHashSet<String> = used.iter().map(|name| name_key(name)).collect();
    excluded.insert(name_key(start));

    let next = sample_continuation(dictionary, start, &excluded, rng)?;
    excluded.insert(name_key(next));

    let path = match sample_continuation(dictionary, next, &excluded, rng) {
        Some(third) => SolutionPath::from_refs(&[start, next, third], PathOrigin::Illustrative),
        None => SolutionPath::from_refs(&[start, next], PathOrigin::Illustrative),
    };
    Some(path)
}

fn sample_continuation<'d, R: Rng + ?Sized>(
    dictionary: &'d Dictionary,
    from: &str,
    excluded: &FxHashSet<String>,
    rng: &mut R,
) -> Option<&'d str> {
    let letter = next_required_letter(from)?;
    let options: Vec<&str> = dictionary
        .starting_with(letter)
        .filter(|name| !excluded.contains(&name_key(name)))
        .collect();
    options.choose(rng).copied()
}

/// A random queued branch with at least three names
pub fn random_explored<R: Rng + ?Sized>(
    frontier: &Frontier<'_>,
    rng: &mut R,
) -> Option<SolutionPath> {
    let long: Vec<&[&str]> = frontier
        .paths()
        .filter(|path| path.len() >= MIN_EXPLORED_LEN)
        .collect();
    long.choose(rng)
        .map(|path| SolutionPath::from_refs(path, PathOrigin::Explored))
}

/// The longest queued branch; the earliest one wins ties
pub fn longest_explored(frontier: &Frontier<'_>) -> Option<SolutionPath> {
    let mut longest: &[&str] = &[];
    for path in frontier.paths() {
        if path.len() > longest.len() {
            longest = path;
        }
    }

    (!longest.is_empty()).then(|| SolutionPath::from_refs(longest, PathOrigin::Longest))
}
