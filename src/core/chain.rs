//! Chain rule
//!
//! The next name in a chain must begin with the first letter found *after*
//! the first character of the current name. Punctuation, digits and spaces
//! are skipped:
//!
//! - `Alice` → `l`
//! - `O'Brien` → `b`
//! - `Jo` → `o`
//! - `X` → no letter, the chain cannot continue

/// Lowercase a single character, keeping the first char of multi-char mappings
#[inline]
fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Letter the next name in the chain must start with
///
/// Returns `None` when nothing alphabetic follows the first character.
///
/// # Examples
/// ```
/// use namechain::core::next_required_letter;
///
/// assert_eq!(next_required_letter("Alice"), Some('l'));
/// assert_eq!(next_required_letter("D'Arcy"), Some('a'));
/// assert_eq!(next_required_letter("Q"), None);
/// ```
#[must_use]
pub fn next_required_letter(name: &str) -> Option<char> {
    name.chars().skip(1).find(|c| c.is_alphabetic()).map(lower)
}

/// Lowercased first character of a name, if any
#[inline]
#[must_use]
pub fn first_letter(name: &str) -> Option<char> {
    name.chars().next().map(lower)
}

/// Whether `next_name` may follow `current_name` in a chain
///
/// Only the letter rule is checked here; dictionary membership and
/// duplicates are the evaluator's job.
///
/// # Examples
/// ```
/// use namechain::core::is_valid_continuation;
///
/// assert!(is_valid_continuation("Alice", "Liam"));
/// assert!(is_valid_continuation("Alice", "lola"));
/// assert!(!is_valid_continuation("Alice", "Ellen"));
/// ```
#[must_use]
pub fn is_valid_continuation(current_name: &str, next_name: &str) -> bool {
    match (next_required_letter(current_name), first_letter(next_name)) {
        (Some(required), Some(first)) => required == first,
        _ => false,
    }
}

/// Normalized comparison key for a name: trimmed and lowercased
#[inline]
#[must_use]
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}
