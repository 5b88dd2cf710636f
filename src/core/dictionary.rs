//! Name dictionary
//!
//! An immutable set of names with case-insensitive lookup. Each name keeps the
//! spelling it was loaded with (its canonical form) and names are indexed by
//! their lowercased first letter so chain continuations can be listed without
//! scanning the whole list.

use super::chain::{first_letter, name_key};
use rustc_hash::{FxHashMap, FxHashSet};

/// Loaded-once collection of valid names
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    names: Vec<String>,
    index: FxHashMap<String, usize>,
    by_letter: FxHashMap<char, Vec<usize>>,
}

impl Dictionary {
    /// Build a dictionary from names in load order
    ///
    /// Names are trimmed; blank entries are dropped. When two entries differ
    /// only by case the first one wins.
    ///
    /// # Examples
    /// ```
    /// use namechain::core::Dictionary;
    ///
    /// let dict = Dictionary::new(["Alice", "ALICE", " Nora ", ""]);
    /// assert_eq!(dict.len(), 2);
    /// assert_eq!(dict.canonical("alice"), Some("Alice"));
    /// assert_eq!(dict.canonical("NORA"), Some("Nora"));
    /// ```
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::default();

        for raw in names {
            let name = raw.as_ref().trim();
            if name.is_empty() {
                continue;
            }

            let key = name.to_lowercase();
            if dict.index.contains_key(&key) {
                continue;
            }

            let position = dict.names.len();
            if let Some(letter) = first_letter(name) {
                dict.by_letter.entry(letter).or_default().push(position);
            }
            dict.index.insert(key, position);
            dict.names.push(name.to_string());
        }

        dict
    }

    /// An empty dictionary, used when loading fails
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All names in load order, canonical spelling
    #[inline]
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name at a load-order position
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&str> {
        self.names.get(position).map(String::as_str)
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name_key(name))
    }

    /// Canonical spelling of `name`, if it is in the dictionary
    #[must_use]
    pub fn canonical(&self, name: &str) -> Option<&str> {
        self.index
            .get(&name_key(name))
            .map(|&position| self.names[position].as_str())
    }

    /// Names whose lowercased first letter is `letter`, in load order
    pub fn starting_with(&self, letter: char) -> impl Iterator<Item = &str> + '_ {
        self.by_letter
            .get(&letter)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .map(|&position| self.names[position].as_str())
    }

    /// Number of names starting with `letter`
    #[must_use]
    pub fn count_starting_with(&self, letter: char) -> usize {
        self.by_letter.get(&letter).map_or(0, Vec::len)
    }

    /// Whether any name starting with `letter` is missing from `used`
    ///
    /// `used` holds lowercased keys (see [`name_key`]).
    #[must_use]
    pub fn has_unused_starting_with(&self, letter: char, used: &FxHashSet<String>) -> bool {
        self.starting_with(letter)
            .any(|name| !used.contains(&name.to_lowercase()))
    }
}
