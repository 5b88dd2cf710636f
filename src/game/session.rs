//! One player's session
//!
//! Ties the engine together for front ends: owns the current game, the
//! random source and the scoreboard. Every operation takes `&mut self`, so a
//! session handles one guess at a time; front ends serving concurrent
//! requests must keep each session behind its own lock.

use super::evaluator::{evaluate_guess, give_up};
use super::history::{Finish, Scoreboard};
use super::outcome::{GuessOutcome, Rejection};
use super::start::start_game;
use super::state::GameState;
use crate::config::GameConfig;
use crate::core::Dictionary;
use crate::error::GameError;
use crate::solver::{PathFinder, SolutionPath};
use rand::Rng;

/// Result of giving up: the final state and one way the game could have gone
#[derive(Debug, Clone)]
pub struct Concession {
    pub state: GameState,
    pub outcome: GuessOutcome,
    pub solution: SolutionPath,
}

/// Game session for a single player
pub struct Session<'a, R: Rng> {
    dictionary: &'a Dictionary,
    config: GameConfig,
    rng: R,
    game: Option<GameState>,
    scoreboard: Scoreboard,
}

impl<'a, R: Rng> Session<'a, R> {
    pub fn new(dictionary: &'a Dictionary, config: GameConfig, rng: R) -> Self {
        Self {
            dictionary,
            config,
            rng,
            game: None,
            scoreboard: Scoreboard::new(),
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current or last game, if any
    #[must_use]
    pub const fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    #[must_use]
    pub const fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Start a new game, abandoning any game still in progress
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotReady`] if the dictionary is too small.
    pub fn start(&mut self) -> Result<&GameState, GameError> {
        let state = start_game(self.dictionary, self.config.max_attempts, &mut self.rng)?;
        self.abandon_active();
        Ok(self.game.insert(state))
    }

    /// Evaluate a guess against the current game
    ///
    /// Without a game this is a "no active game" rejection.
    pub fn guess(&mut self, raw_guess: &str) -> GuessOutcome {
        let Some(state) = self.game.as_ref() else {
            return GuessOutcome::Rejected {
                reason: Rejection::NoActiveGame,
                remaining_attempts: 0,
            };
        };

        let (next, outcome) = evaluate_guess(state, raw_guess, self.dictionary);
        tracing::debug!(guess = raw_guess, ?outcome, "guess evaluated");

        if state.is_active() && !next.is_active() {
            self.scoreboard.record(&next, Finish::Completed);
        }
        self.game = Some(next);
        outcome
    }

    /// End the current game and reveal a path from the current name to the target
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoGame`] if no game has been started.
    pub fn give_up(&mut self) -> Result<Concession, GameError> {
        let state = self.game.as_ref().ok_or(GameError::NoGame)?;
        let (next, outcome) = give_up(state);

        if state.is_active() {
            self.scoreboard.record(&next, Finish::GaveUp);
        }

        let solution = self.solve(&next);
        self.game = Some(next.clone());
        Ok(Concession {
            state: next,
            outcome,
            solution,
        })
    }

    /// A possible path from the current name to the target, game unchanged
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoGame`] if no game has been started.
    pub fn hint(&mut self) -> Result<SolutionPath, GameError> {
        let state = self.game.clone().ok_or(GameError::NoGame)?;
        Ok(self.solve(&state))
    }

    /// Discard the current game entirely
    pub fn reset(&mut self) {
        self.abandon_active();
        self.game = None;
    }

    fn solve(&mut self, state: &GameState) -> SolutionPath {
        PathFinder::new(self.dictionary, self.config.search).find(
            state.current_name(),
            state.target_name(),
            state.chain(),
            &mut self.rng,
        )
    }

    fn abandon_active(&mut self) {
        if let Some(state) = self.game.as_ref().filter(|s| s.is_active()) {
            self.scoreboard.record(state, Finish::Abandoned);
        }
    }
}
