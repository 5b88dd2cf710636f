//! Game configuration
//!
//! Every field has a default, so a config file only needs the keys it wants
//! to change:
//!
//! ```toml
//! max_attempts = 5
//!
//! [search]
//! max_depth = 6
//! ```

use crate::error::ConfigError;
use crate::solver::SearchLimits;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Incorrect guesses allowed before the game ends
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Tunable game and search parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Rejected guesses allowed per game
    pub max_attempts: u32,
    /// Bounds for the solution path search
    pub search: SearchLimits,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            search: SearchLimits::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] on malformed input and
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Toml {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read, parsed or validated.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content, path)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Check that every limit is usable
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first zero-valued field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("max_attempts", self.max_attempts as usize),
            ("search.max_depth", self.search.max_depth),
            ("search.max_frontier", self.search.max_frontier),
            ("search.fan_out", self.search.fan_out),
        ];

        match checks.iter().find(|(_, value)| *value == 0) {
            Some((field, _)) => Err(ConfigError::Invalid(format!("{field} must be at least 1"))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<GameConfig, ConfigError> {
        GameConfig::from_toml(content, Path::new("test.toml"))
    }

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_attempts, 10);
        assert_eq!(config.search.max_depth, 8);
        assert_eq!(config.search.max_frontier, 3000);
        assert_eq!(config.search.fan_out, 50);
    }

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn partial_document_overrides_given_keys() {
        let config = parse("max_attempts = 3\n[search]\nfan_out = 10\n").unwrap();
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.search.fan_out, 10);
        assert_eq!(config.search.max_depth, 8);
    }

    #[test]
    fn zero_values_are_invalid() {
        assert!(matches!(
            parse("max_attempts = 0"),
            Err(ConfigError::Invalid(msg)) if msg.contains("max_attempts")
        ));
        assert!(matches!(
            parse("[search]\nmax_frontier = 0"),
            Err(ConfigError::Invalid(msg)) if msg.contains("max_frontier")
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(parse("max_attempt = 4"), Err(ConfigError::Toml { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            GameConfig::load("/no/such/namechain.toml"),
            Err(ConfigError::Io { .. })
        ));
    }
}
