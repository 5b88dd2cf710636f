//! JSON responses for the script front end
//!
//! Every request is answered with a [`GuessResponse`]. Fields that do not
//! apply to a response are left out of the JSON.

use crate::game::{Acceptance, Concession, GameState, GuessOutcome};
use crate::solver::SolutionPath;
use serde::Serialize;

/// Response to one player request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GuessResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub victory: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    /// Uppercase letter for the next guess, `?` when there is none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_letter: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_over: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<Vec<String>>,
}

impl GuessResponse {
    /// Plain failure carrying only a message
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn started(state: &GameState) -> Self {
        let letter = letter_label(state.next_letter());
        Self {
            message: format!(
                "Game started with {}! Your target is {}. Next name must start with {letter}",
                state.start_name(),
                state.target_name()
            ),
            next_letter: Some(letter),
            ..Self::with_state(state)
        }
    }

    /// Response for the outcome of a guess; `state` is the state after it
    #[must_use]
    pub fn from_guess(state: &GameState, outcome: &GuessOutcome) -> Self {
        match outcome {
            GuessOutcome::Rejected {
                reason,
                remaining_attempts,
            } => Self::failure(reason.message(*remaining_attempts)),
            GuessOutcome::GameOver { reason } => Self {
                game_over: Some(true),
                ..Self::failure(reason.to_string())
            },
            GuessOutcome::Accepted { result, .. } => Self::accepted(state, *result),
        }
    }

    #[must_use]
    pub fn gave_up(concession: &Concession) -> Self {
        let state = &concession.state;
        Self {
            message: format!(
                "You gave up! The target was {}. Your chain length: {}",
                state.target_name(),
                state.chain().len()
            ),
            game_over: Some(true),
            solution: Some(concession.solution.names.clone()),
            ..Self::with_state(state)
        }
    }

    #[must_use]
    pub fn hint(state: &GameState, path: &SolutionPath) -> Self {
        let message = if path.is_empty() {
            "No path to the target could be found.".to_string()
        } else if path.reaches_target() {
            format!("One way to reach {}: {path}", state.target_name())
        } else {
            format!("No complete path found. Try heading this way: {path}")
        };
        Self {
            message,
            solution: Some(path.names.clone()),
            ..Self::with_state(state)
        }
    }

    #[must_use]
    pub fn reset() -> Self {
        Self {
            success: true,
            message: "Game has been reset. You can start a new game now!".to_string(),
            ..Self::default()
        }
    }

    fn accepted(state: &GameState, result: Acceptance) -> Self {
        let base = Self::with_state(state);
        match result {
            Acceptance::Continue { next_letter } => {
                let letter = letter_label(Some(next_letter));
                Self {
                    message: format!("Good! Next name must start with {letter}"),
                    next_letter: Some(letter),
                    ..base
                }
            }
            Acceptance::TargetReached => Self {
                victory: Some(true),
                game_over: Some(true),
                message: format!(
                    "VICTORY! You reached {} in {} steps!",
                    state.target_name(),
                    state.steps()
                ),
                ..base
            },
            Acceptance::NoContinuations { letter } => Self {
                victory: Some(true),
                game_over: Some(true),
                message: format!(
                    "VICTORY! No more valid names starting with {}. Your chain length: {}",
                    letter_label(Some(letter)),
                    state.chain().len()
                ),
                ..base
            },
        }
    }

    fn with_state(state: &GameState) -> Self {
        Self {
            success: true,
            current_name: Some(state.current_name().to_string()),
            target_name: Some(state.target_name().to_string()),
            chain: Some(state.chain().to_vec()),
            score: Some(state.score()),
            ..Self::default()
        }
    }
}

fn letter_label(letter: Option<char>) -> String {
    letter.map_or_else(|| "?".to_string(), |c| c.to_uppercase().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use crate::game::{GameOverReason, evaluate_guess};
    use serde_json::json;

    fn dict() -> Dictionary {
        Dictionary::new(["Alice", "Liam", "Ivy", "Nora", "Ann"])
    }

    #[test]
    fn start_response() {
        let state = GameState::new("Alice", "Nora", 10);
        let response = GuessResponse::started(&state);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "success": true,
                "current_name": "Alice",
                "target_name": "Nora",
                "chain": ["Alice"],
                "score": 0,
                "next_letter": "L",
                "message": "Game started with Alice! Your target is Nora. Next name must start with L"
            })
        );
    }

    #[test]
    fn start_without_next_letter_uses_question_mark() {
        let state = GameState::new("A", "Nora", 10);
        let response = GuessResponse::started(&state);
        assert_eq!(response.next_letter.as_deref(), Some("?"));
    }

    #[test]
    fn accepted_guess_response() {
        let state = GameState::new("Alice", "Nora", 10);
        let (state, outcome) = evaluate_guess(&state, "liam", &dict());
        let response = GuessResponse::from_guess(&state, &outcome);

        assert!(response.success);
        assert_eq!(response.current_name.as_deref(), Some("Liam"));
        assert_eq!(response.next_letter.as_deref(), Some("I"));
        assert_eq!(response.message, "Good! Next name must start with I");
        assert_eq!(response.game_over, None);
    }

    #[test]
    fn victory_response() {
        let state = GameState::new("Alice", "Liam", 10);
        let (state, outcome) = evaluate_guess(&state, "Liam", &dict());
        let response = GuessResponse::from_guess(&state, &outcome);

        assert_eq!(response.victory, Some(true));
        assert_eq!(response.game_over, Some(true));
        assert_eq!(response.message, "VICTORY! You reached Liam in 1 steps!");
    }

    #[test]
    fn rejection_reports_remaining_attempts() {
        let state = GameState::new("Alice", "Nora", 10);
        let (state, outcome) = evaluate_guess(&state, "Nora", &dict());
        let response = GuessResponse::from_guess(&state, &outcome);

        assert!(!response.success);
        assert_eq!(response.message, "Name must start with L. 9 attempts remaining.");
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("chain").is_none());
    }

    #[test]
    fn empty_guess_has_no_attempt_count() {
        let state = GameState::new("Alice", "Nora", 10);
        let (state, outcome) = evaluate_guess(&state, "  ", &dict());
        let response = GuessResponse::from_guess(&state, &outcome);
        assert_eq!(response.message, "Please enter a name.");
    }

    #[test]
    fn game_over_response() {
        let outcome = GuessOutcome::GameOver {
            reason: GameOverReason::AttemptsExhausted {
                target: "Nora".into(),
            },
        };
        let state = GameState::new("Alice", "Nora", 10);
        let response = GuessResponse::from_guess(&state, &outcome);
        assert!(!response.success);
        assert_eq!(response.game_over, Some(true));
        assert_eq!(
            response.message,
            "Game over! You've used all your attempts. The target was Nora."
        );
    }

    #[test]
    fn reset_response() {
        assert_eq!(
            serde_json::to_value(GuessResponse::reset()).unwrap(),
            json!({
                "success": true,
                "message": "Game has been reset. You can start a new game now!"
            })
        );
    }
}
