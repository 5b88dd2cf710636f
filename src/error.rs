//! Error types
//!
//! Only configuration and setup problems are errors. Rejected guesses and
//! finished games are ordinary [`GuessOutcome`](crate::game::GuessOutcome) values.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load a name list
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read name list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse name list {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("name list {0} contains no names")]
    Empty(PathBuf),
}

/// Failure to load or validate a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Session-level failures surfaced to the player
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Fewer than two names are loaded, so no start/target pair exists
    #[error("game is not ready: {available} name(s) loaded, at least 2 required")]
    NotReady { available: usize },

    #[error("no game in progress")]
    NoGame,
}
