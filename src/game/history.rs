//! Finished games and high scores for the running process
//!
//! Records live in memory only and are dropped when the process exits.

use super::state::GameState;

/// How a recorded game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    /// Ended by the rules: a win, a dead end or running out of attempts
    Completed,
    GaveUp,
    /// Replaced by a new game or reset while still active
    Abandoned,
}

/// One finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub start_name: String,
    pub target_name: String,
    pub chain: Vec<String>,
    pub chain_length: usize,
    pub score: u32,
    pub finish: Finish,
    pub target_reached: bool,
}

impl GameRecord {
    #[must_use]
    pub fn from_state(state: &GameState, finish: Finish) -> Self {
        Self {
            start_name: state.start_name().to_string(),
            target_name: state.target_name().to_string(),
            chain: state.chain().to_vec(),
            chain_length: state.chain().len(),
            score: state.score(),
            finish,
            target_reached: state.target_reached(),
        }
    }

    #[must_use]
    pub fn completed(&self) -> bool {
        self.finish == Finish::Completed
    }
}

/// Session statistics
#[derive(Debug, Default, Clone)]
pub struct Scoreboard {
    records: Vec<GameRecord>,
}

impl Scoreboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, state: &GameState, finish: Finish) {
        let record = GameRecord::from_state(state, finish);
        tracing::debug!(
            start = %record.start_name,
            target = %record.target_name,
            score = record.score,
            ?finish,
            "game recorded"
        );
        self.records.push(record);
    }

    /// All records, oldest first
    #[must_use]
    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    #[must_use]
    pub fn games_played(&self) -> usize {
        self.records.len()
    }

    /// Games in which the target was reached
    #[must_use]
    pub fn targets_reached(&self) -> usize {
        self.records.iter().filter(|r| r.target_reached).count()
    }

    #[must_use]
    pub fn best_score(&self) -> Option<u32> {
        self.records.iter().map(|r| r.score).max()
    }

    /// Longest chain across all games
    #[must_use]
    pub fn longest_chain(&self) -> Option<&GameRecord> {
        // max_by_key keeps the last maximum, so walk newest first
        self.records.iter().rev().max_by_key(|r| r.chain_length)
    }

    /// Top `limit` records by score, then by earliest game
    #[must_use]
    pub fn high_scores(&self, limit: usize) -> Vec<&GameRecord> {
        let mut ranked: Vec<&GameRecord> = self.records.iter().collect();
        // Stable sort keeps earlier games first among equal scores
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(limit);
        ranked
    }

    #[must_use]
    pub fn average_chain_length(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let total: usize = self.records.iter().map(|r| r.chain_length).sum();
        total as f64 / self.records.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(start: &str, target: &str, extra: &[&str], reached: bool) -> GameState {
        let mut state = GameState::new(start, target, 10);
        for name in extra {
            state.chain.push((*name).to_string());
            state.current_name = (*name).to_string();
            state.score += 1;
        }
        if reached {
            state.current_name = target.to_string();
        }
        state.active = false;
        state
    }

    #[test]
    fn empty_scoreboard() {
        let board = Scoreboard::new();
        assert_eq!(board.games_played(), 0);
        assert_eq!(board.best_score(), None);
        assert!(board.longest_chain().is_none());
        assert!(board.high_scores(3).is_empty());
        assert!((board.average_chain_length() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn records_capture_state() {
        let mut board = Scoreboard::new();
        let state = finished("Alice", "Ivy", &["Liam", "Ivy"], true);
        board.record(&state, Finish::Completed);

        let record = &board.records()[0];
        assert_eq!(record.start_name, "Alice");
        assert_eq!(record.chain, vec!["Alice", "Liam", "Ivy"]);
        assert_eq!(record.chain_length, 3);
        assert_eq!(record.score, 2);
        assert!(record.target_reached);
        assert!(record.completed());
    }

    #[test]
    fn statistics() {
        let mut board = Scoreboard::new();
        board.record(&finished("Alice", "Ivy", &["Liam", "Ivy"], true), Finish::Completed);
        board.record(&finished("Nora", "Zed", &["Oscar"], false), Finish::GaveUp);
        board.record(&finished("Amy", "Zed", &[], false), Finish::Abandoned);

        assert_eq!(board.games_played(), 3);
        assert_eq!(board.targets_reached(), 1);
        assert_eq!(board.best_score(), Some(2));
        assert_eq!(board.longest_chain().map(|r| r.chain_length), Some(3));
        assert!((board.average_chain_length() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn longest_chain_tie_goes_to_earliest_game() {
        let mut board = Scoreboard::new();
        board.record(&finished("Amy", "Zed", &["Myra"], false), Finish::Completed);
        board.record(&finished("Nora", "Zed", &["Ada"], false), Finish::GaveUp);

        let longest = board.longest_chain().unwrap();
        assert_eq!(longest.start_name, "Amy");
    }

    #[test]
    fn high_scores_rank_by_score_then_age() {
        let mut board = Scoreboard::new();
        board.record(&finished("Amy", "Zed", &["Myra"], false), Finish::Completed);
        board.record(&finished("Alice", "Zed", &["Liam", "Ivy"], false), Finish::Completed);
        board.record(&finished("Nora", "Zed", &["Oscar"], false), Finish::Completed);

        let top: Vec<&str> = board
            .high_scores(2)
            .iter()
            .map(|r| r.start_name.as_str())
            .collect();
        assert_eq!(top, vec!["Alice", "Amy"]);
    }
}
