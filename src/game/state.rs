//! Per-player game state

use crate::core::{name_key, next_required_letter};

/// Everything known about one game
///
/// Only the evaluator in [`super::evaluator`] produces changed states; callers
/// read it through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) current_name: String,
    pub(crate) target_name: String,
    pub(crate) chain: Vec<String>,
    pub(crate) score: u32,
    pub(crate) active: bool,
    pub(crate) attempts: u32,
    pub(crate) max_attempts: u32,
}

impl GameState {
    /// Fresh active game whose chain holds only `start`
    #[must_use]
    pub fn new(start: impl Into<String>, target: impl Into<String>, max_attempts: u32) -> Self {
        let start = start.into();
        Self {
            current_name: start.clone(),
            target_name: target.into(),
            chain: vec![start],
            score: 0,
            active: true,
            attempts: 0,
            max_attempts,
        }
    }

    #[inline]
    #[must_use]
    pub fn current_name(&self) -> &str {
        &self.current_name
    }

    #[inline]
    #[must_use]
    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    /// Name the game started from
    #[inline]
    #[must_use]
    pub fn start_name(&self) -> &str {
        self.chain.first().map_or("", String::as_str)
    }

    /// Accepted names in play order, starting with the start name
    #[inline]
    #[must_use]
    pub fn chain(&self) -> &[String] {
        &self.chain
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Rejected guesses so far
    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts)
    }

    /// Letter the next guess must start with
    #[must_use]
    pub fn next_letter(&self) -> Option<char> {
        next_required_letter(&self.current_name)
    }

    /// Moves made after the start name
    #[must_use]
    pub fn steps(&self) -> usize {
        self.chain.len().saturating_sub(1)
    }

    /// Whether `name` is already in the chain (case-insensitive)
    #[must_use]
    pub fn has_used(&self, name: &str) -> bool {
        let key = name_key(name);
        self.chain.iter().any(|used| name_key(used) == key)
    }

    /// Whether the current name is the target
    #[must_use]
    pub fn target_reached(&self) -> bool {
        name_key(&self.current_name) == name_key(&self.target_name)
    }
}
