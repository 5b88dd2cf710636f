//! Guess outcomes

use serde::Serialize;
use std::fmt;

/// Result of evaluating one guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GuessOutcome {
    /// The guess was added to the chain
    Accepted { name: String, result: Acceptance },
    /// The guess was refused; the chain is unchanged
    Rejected {
        reason: Rejection,
        remaining_attempts: u32,
    },
    /// The game ended without a win
    GameOver { reason: GameOverReason },
}

/// What happened after an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Acceptance {
    /// Game goes on; the next guess must start with `next_letter`
    Continue { next_letter: char },
    /// The target was reached
    TargetReached,
    /// Every name starting with `letter` is already in the chain
    NoContinuations { letter: char },
}

impl Acceptance {
    #[must_use]
    pub const fn is_victory(self) -> bool {
        !matches!(self, Self::Continue { .. })
    }
}

/// Why a guess was refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    NoActiveGame,
    EmptyGuess,
    WrongLetter { required: char },
    AlreadyUsed { guess: String },
    NotInDictionary { guess: String },
}

impl Rejection {
    /// Whether this rejection used up one of the player's attempts
    #[must_use]
    pub const fn costs_attempt(&self) -> bool {
        matches!(
            self,
            Self::WrongLetter { .. } | Self::AlreadyUsed { .. } | Self::NotInDictionary { .. }
        )
    }

    /// Player-facing message, with the attempts left when this rejection cost one
    #[must_use]
    pub fn message(&self, remaining_attempts: u32) -> String {
        if self.costs_attempt() {
            format!("{self} {remaining_attempts} attempts remaining.")
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoActiveGame => write!(f, "No active game. Please start a new game."),
            Self::EmptyGuess => write!(f, "Please enter a name."),
            Self::WrongLetter { required } => {
                write!(f, "Name must start with {}.", required.to_uppercase())
            }
            Self::AlreadyUsed { guess } => {
                write!(f, "{} has already been used in this chain.", capitalize(guess))
            }
            Self::NotInDictionary { guess } => {
                write!(f, "{} is not in our list of names.", capitalize(guess))
            }
        }
    }
}

/// Why a game ended without a win
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameOverReason {
    /// The current name has no letter after its first character
    CurrentNameTooShort,
    /// The accepted name has no letter after its first character
    ChainTerminated { name: String },
    /// Too many rejected guesses
    AttemptsExhausted { target: String },
    /// The player gave up
    GaveUp { target: String },
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentNameTooShort => {
                write!(f, "Current name is too short to continue the chain.")
            }
            Self::ChainTerminated { name } => {
                write!(f, "{name} is too short to continue the chain.")
            }
            Self::AttemptsExhausted { target } => {
                write!(f, "Game over! You've used all your attempts. The target was {target}.")
            }
            Self::GaveUp { target } => write!(f, "You gave up! The target was {target}."),
        }
    }
}

impl GuessOutcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    #[must_use]
    pub const fn is_victory(&self) -> bool {
        matches!(self, Self::Accepted { result, .. } if result.is_victory())
    }

    /// Whether this outcome finished the game
    #[must_use]
    pub const fn ends_game(&self) -> bool {
        match self {
            Self::Accepted { result, .. } => result.is_victory(),
            Self::Rejected { .. } => false,
            Self::GameOver { .. } => true,
        }
    }
}

/// `nora` → `Nora`, for echoing raw guesses back
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
