//! Name list loading utilities
//!
//! Names come either from the embedded list or from a file. A file ending in
//! `.json` must hold a JSON array of strings; anything else is read as one
//! name per line, skipping blank lines and `#` comments.

use super::NAMES;
use crate::core::Dictionary;
use crate::error::DictionaryError;
use std::fs;
use std::path::Path;

/// Load raw names from a file
///
/// # Errors
///
/// Returns a [`DictionaryError`] if the file cannot be read, is not a valid
/// JSON array (for `.json` files), or holds no names at all.
///
/// # Examples
/// ```no_run
/// use namechain::names::loader::load_from_file;
///
/// let names = load_from_file("data/names.txt").unwrap();
/// println!("Loaded {} names", names.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let names = if is_json {
        parse_json(&content).map_err(|source| DictionaryError::Json {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        parse_lines(&content)
    };

    if names.is_empty() {
        return Err(DictionaryError::Empty(path.to_path_buf()));
    }

    Ok(names)
}

/// Parse a JSON array of names, dropping blank entries
///
/// # Errors
///
/// Returns the `serde_json` error if `content` is not an array of strings.
pub fn parse_json(content: &str) -> Result<Vec<String>, serde_json::Error> {
    let raw: Vec<String> = serde_json::from_str(content)?;
    Ok(raw
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect())
}

/// Parse one name per line
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Dictionary built from the embedded list
#[must_use]
pub fn embedded_dictionary() -> Dictionary {
    Dictionary::new(NAMES)
}

/// Load a dictionary from a file, degrading to an empty one on failure
///
/// A broken name list must not take the process down: the failure is logged
/// and the game reports "not ready" until a usable list is supplied.
pub fn load_dictionary_or_empty<P: AsRef<Path>>(path: P) -> Dictionary {
    let path = path.as_ref();
    match load_from_file(path) {
        Ok(names) => {
            let dict = Dictionary::new(names);
            tracing::info!(path = %path.display(), count = dict.len(), "loaded name list");
            dict
        }
        Err(err) => {
            tracing::warn!(
                error = %err,
                "name list unavailable, continuing with an empty dictionary"
            );
            Dictionary::empty()
        }
    }
}
