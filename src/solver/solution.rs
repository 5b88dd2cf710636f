//! Solution paths returned by the path finder

use std::fmt;

/// How a solution path was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathOrigin {
    /// Start and target are the same name
    Trivial,
    /// The search reached the target
    Found,
    /// Short sampled chain from the start, used early in a game
    Illustrative,
    /// Random queued search branch of at least three names
    Explored,
    /// Longest queued search branch
    Longest,
    /// Nothing could be produced
    Unavailable,
}

impl PathOrigin {
    /// Whether the path actually ends at the target
    #[must_use]
    pub const fn reaches_target(self) -> bool {
        matches!(self, Self::Trivial | Self::Found)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Trivial => "trivial",
            Self::Found => "found",
            Self::Illustrative => "illustrative",
            Self::Explored => "explored",
            Self::Longest => "longest",
            Self::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for PathOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered chain of names starting at the search's start name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionPath {
    pub names: Vec<String>,
    pub origin: PathOrigin,
}

impl SolutionPath {
    pub(crate) fn from_refs(names: &[&str], origin: PathOrigin) -> Self {
        Self {
            names: names.iter().map(|&name| name.to_string()).collect(),
            origin,
        }
    }

    /// The "no hint available" result
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            names: Vec::new(),
            origin: PathOrigin::Unavailable,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether the path ends at the target
    #[must_use]
    pub const fn reaches_target(&self) -> bool {
        self.origin.reaches_target()
    }
}

impl fmt::Display for SolutionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join(" → "))
    }
}
