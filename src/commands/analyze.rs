//! Name analysis command
//!
//! Shows how a name fits into the chain: which letter it demands next and how
//! many names can follow or precede it.

use crate::core::{Dictionary, first_letter, next_required_letter};

/// Names shown as a sample of possible continuations
const SAMPLE_SIZE: usize = 8;

/// Result of analyzing a name
pub struct AnalysisResult {
    pub name: String,
    pub required_letter: Option<char>,
    /// Names that may follow this one
    pub continuations: usize,
    pub sample: Vec<String>,
    /// Names this one may follow
    pub predecessors: usize,
    pub total_names: usize,
}

impl AnalysisResult {
    /// Whether the chain ends after this name
    #[must_use]
    pub const fn is_dead_end(&self) -> bool {
        self.continuations == 0
    }
}

/// Analyze a name against the dictionary
///
/// # Errors
///
/// Returns an error if the name is not in the dictionary.
pub fn analyze_name(name: &str, dictionary: &Dictionary) -> Result<AnalysisResult, String> {
    let canonical = dictionary
        .canonical(name)
        .ok_or_else(|| format!("Name '{}' not in name list", name.trim()))?;

    let required_letter = next_required_letter(canonical);
    let (continuations, sample) = required_letter.map_or((0, Vec::new()), |letter| {
        let sample = dictionary
            .starting_with(letter)
            .filter(|candidate| *candidate != canonical)
            .take(SAMPLE_SIZE)
            .map(str::to_string)
            .collect();
        let count = dictionary
            .starting_with(letter)
            .filter(|candidate| *candidate != canonical)
            .count();
        (count, sample)
    });

    let own_letter = first_letter(canonical);
    let predecessors = dictionary
        .names()
        .iter()
        .filter(|other| other.as_str() != canonical)
        .filter(|other| own_letter.is_some() && next_required_letter(other) == own_letter)
        .count();

    Ok(AnalysisResult {
        name: canonical.to_string(),
        required_letter,
        continuations,
        sample,
        predecessors,
        total_names: dictionary.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> Dictionary {
        Dictionary::new(["Alice", "Liam", "Lola", "Ivy", "Ella", "Bo", "Lx"])
    }

    #[test]
    fn analyze_valid_name() {
        let result = analyze_name("alice", &dict()).unwrap();

        assert_eq!(result.name, "Alice");
        assert_eq!(result.required_letter, Some('l'));
        assert_eq!(result.continuations, 3);
        assert_eq!(result.sample, vec!["Liam", "Lola", "Lx"]);
        assert_eq!(result.total_names, 7);
    }

    #[test]
    fn analyze_counts_predecessors() {
        // Alice and Ella both demand an L next
        let result = analyze_name("Liam", &dict()).unwrap();
        assert_eq!(result.predecessors, 2);
    }

    #[test]
    fn analyze_excludes_the_name_itself() {
        let dict = Dictionary::new(["Llewyn", "Lola", "Otto"]);
        let result = analyze_name("Llewyn", &dict).unwrap();
        assert_eq!(result.continuations, 1);
        assert_eq!(result.sample, vec!["Lola"]);
    }

    #[test]
    fn analyze_dead_end() {
        let result = analyze_name("Lx", &dict()).unwrap();
        assert_eq!(result.required_letter, Some('x'));
        assert!(result.is_dead_end());
    }

    #[test]
    fn analyze_unknown_name() {
        assert!(analyze_name("Zed", &dict()).is_err());
    }
}
