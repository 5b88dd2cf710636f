//! Bounded BFS frontier
//!
//! A FIFO queue of `(name, path)` branches plus the set of names already
//! reached. Once the queue holds `capacity` branches no further branch is
//! handed out, which caps the work of a single search.

use crate::core::name_key;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Work queue for the path search
pub struct Frontier<'a> {
    queue: VecDeque<(&'a str, Vec<&'a str>)>,
    visited: FxHashSet<String>,
    capacity: usize,
}

impl<'a> Frontier<'a> {
    /// Seed the frontier with the single-name path `[start]`
    #[must_use]
    pub fn new(start: &'a str, capacity: usize) -> Self {
        let mut visited = FxHashSet::default();
        visited.insert(name_key(start));

        let mut queue = VecDeque::new();
        queue.push_back((start, vec![start]));

        Self {
            queue,
            visited,
            capacity,
        }
    }

    /// Next branch to expand, or `None` when the queue is empty or full
    pub fn next_branch(&mut self) -> Option<(&'a str, Vec<&'a str>)> {
        if self.queue.len() >= self.capacity {
            return None;
        }
        self.queue.pop_front()
    }

    /// Whether `name` has already been reached (case-insensitive)
    #[must_use]
    pub fn is_visited(&self, name: &str) -> bool {
        self.visited.contains(&name_key(name))
    }

    /// Enqueue a branch and mark its head as visited
    pub fn push(&mut self, name: &'a str, path: Vec<&'a str>) {
        self.visited.insert(name_key(name));
        self.queue.push_back((name, path));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of distinct names reached so far, including the start
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Paths of the branches still queued, oldest first
    pub fn paths(&self) -> impl Iterator<Item = &[&'a str]> + '_ {
        self.queue.iter().map(|(_, path)| path.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_with_start_path() {
        let mut frontier = Frontier::new("Alice", 10);
        assert_eq!(frontier.len(), 1);
        assert!(frontier.is_visited("ALICE"));

        let (name, path) = frontier.next_branch().unwrap();
        assert_eq!(name, "Alice");
        assert_eq!(path, vec!["Alice"]);
        assert!(frontier.is_empty());
        assert!(frontier.next_branch().is_none());
    }

    #[test]
    fn fifo_order() {
        let mut frontier = Frontier::new("Alice", 10);
        frontier.next_branch();
        frontier.push("Liam", vec!["Alice", "Liam"]);
        frontier.push("Lola", vec!["Alice", "Lola"]);

        assert_eq!(frontier.next_branch().unwrap().0, "Liam");
        assert_eq!(frontier.next_branch().unwrap().0, "Lola");
    }

    #[test]
    fn push_marks_visited_case_insensitively() {
        let mut frontier = Frontier::new("Alice", 10);
        assert!(!frontier.is_visited("liam"));
        frontier.push("Liam", vec!["Alice", "Liam"]);
        assert!(frontier.is_visited("liam"));
        assert_eq!(frontier.visited_count(), 2);
    }

    #[test]
    fn full_frontier_stops_handing_out_branches() {
        let mut frontier = Frontier::new("Alice", 2);
        frontier.push("Liam", vec!["Alice", "Liam"]);
        assert_eq!(frontier.len(), 2);
        assert!(frontier.next_branch().is_none());
        // Queued paths stay available to the fallbacks
        assert_eq!(frontier.paths().count(), 2);
    }
}
