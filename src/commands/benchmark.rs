//! Benchmark command
//!
//! Runs many random start/target searches and reports how often the path
//! finder produces a complete chain.

use crate::core::Dictionary;
use crate::game::start_game;
use crate::solver::{PathFinder, PathOrigin, SearchLimits, SolutionPath};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_runs: usize,
    /// Runs whose path ends at the target
    pub complete: usize,
    pub origins: FxHashMap<PathOrigin, usize>,
    /// Mean length over complete paths
    pub average_length: f64,
    pub min_length: usize,
    pub max_length: usize,
    pub duration: Duration,
    pub searches_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn complete_rate(&self) -> f64 {
        if self.total_runs == 0 {
            return 0.0;
        }
        self.complete as f64 / self.total_runs as f64
    }
}

/// Run `count` searches between random name pairs
///
/// Run `i` draws its pair and shuffles with a generator seeded from
/// `seed + i`, so results do not depend on thread scheduling.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_benchmark(
    dictionary: &Dictionary,
    limits: SearchLimits,
    count: usize,
    seed: u64,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let finder = PathFinder::new(dictionary, limits);
    let start = Instant::now();

    let paths: Vec<SolutionPath> = (0..count)
        .into_par_iter()
        .filter_map(|run| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(run as u64));
            let state = start_game(dictionary, 1, &mut rng).ok()?;
            let path = finder.find(state.start_name(), state.target_name(), &[], &mut rng);
            pb.inc(1);
            Some(path)
        })
        .collect();

    pb.finish_with_message("done");
    let duration = start.elapsed();

    let mut origins: FxHashMap<PathOrigin, usize> = FxHashMap::default();
    let mut complete_lengths = Vec::new();
    for path in &paths {
        *origins.entry(path.origin).or_insert(0) += 1;
        if path.reaches_target() {
            complete_lengths.push(path.len());
        }
    }

    let total_runs = paths.len();
    let average_length = if complete_lengths.is_empty() {
        0.0
    } else {
        complete_lengths.iter().sum::<usize>() as f64 / complete_lengths.len() as f64
    };

    BenchmarkResult {
        total_runs,
        complete: complete_lengths.len(),
        origins,
        average_length,
        min_length: complete_lengths.iter().copied().min().unwrap_or(0),
        max_length: complete_lengths.iter().copied().max().unwrap_or(0),
        duration,
        searches_per_second: total_runs as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
