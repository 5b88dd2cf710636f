//! Guess evaluation
//!
//! A guess is checked in a fixed order: active game, non-empty input, a
//! usable current name, the chain letter, duplicates, then dictionary
//! membership. The first failing check decides the outcome. Letter, duplicate
//! and dictionary failures each cost one attempt; running out of attempts ends
//! the game.

use super::outcome::{Acceptance, GameOverReason, GuessOutcome, Rejection};
use super::state::GameState;
use crate::core::{Dictionary, first_letter, name_key, next_required_letter};
use rustc_hash::FxHashSet;

/// Evaluate `raw_guess` against `state`
///
/// `state` is left untouched; the returned state carries every change.
///
/// # Examples
/// ```
/// use namechain::core::Dictionary;
/// use namechain::game::{GameState, evaluate_guess};
///
/// let dict = Dictionary::new(["Alice", "Liam", "Ivy", "Nora"]);
/// let state = GameState::new("Alice", "Ivy", 10);
///
/// let (state, outcome) = evaluate_guess(&state, "liam", &dict);
/// assert!(outcome.is_accepted());
/// assert_eq!(state.current_name(), "Liam");
///
/// let (state, outcome) = evaluate_guess(&state, "IVY", &dict);
/// assert!(outcome.is_victory());
/// assert!(!state.is_active());
/// ```
#[must_use]
pub fn evaluate_guess(
    state: &GameState,
    raw_guess: &str,
    dictionary: &Dictionary,
) -> (GameState, GuessOutcome) {
    let mut next = state.clone();

    if !state.active {
        let remaining_attempts = next.remaining_attempts();
        return (
            next,
            GuessOutcome::Rejected {
                reason: Rejection::NoActiveGame,
                remaining_attempts,
            },
        );
    }

    let guess = name_key(raw_guess);
    if guess.is_empty() {
        let remaining_attempts = next.remaining_attempts();
        return (
            next,
            GuessOutcome::Rejected {
                reason: Rejection::EmptyGuess,
                remaining_attempts,
            },
        );
    }

    let Some(required) = next_required_letter(&state.current_name) else {
        next.active = false;
        return (
            next,
            GuessOutcome::GameOver {
                reason: GameOverReason::CurrentNameTooShort,
            },
        );
    };

    if first_letter(&guess) != Some(required) {
        return charge_attempt(next, Rejection::WrongLetter { required });
    }

    if state.has_used(&guess) {
        return charge_attempt(next, Rejection::AlreadyUsed { guess });
    }

    let Some(canonical) = dictionary.canonical(&guess) else {
        return charge_attempt(next, Rejection::NotInDictionary { guess });
    };

    let name = canonical.to_string();
    next.chain.push(name.clone());
    next.current_name.clone_from(&name);
    next.score += 1;

    if next.target_reached() {
        next.active = false;
        return (
            next,
            GuessOutcome::Accepted {
                name,
                result: Acceptance::TargetReached,
            },
        );
    }

    let Some(letter) = next_required_letter(&name) else {
        next.active = false;
        return (
            next,
            GuessOutcome::GameOver {
                reason: GameOverReason::ChainTerminated { name },
            },
        );
    };

    let used: FxHashSet<String> = next.chain.iter().map(|n| name_key(n)).collect();
    let result = if dictionary.has_unused_starting_with(letter, &used) {
        Acceptance::Continue {
            next_letter: letter,
        }
    } else {
        next.active = false;
        Acceptance::NoContinuations { letter }
    };

    (next, GuessOutcome::Accepted { name, result })
}

/// End the game at the player's request
#[must_use]
pub fn give_up(state: &GameState) -> (GameState, GuessOutcome) {
    let mut next = state.clone();
    next.active = false;
    let reason = GameOverReason::GaveUp {
        target: state.target_name.clone(),
    };
    (next, GuessOutcome::GameOver { reason })
}

/// Count a failed guess, ending the game when attempts run out
fn charge_attempt(mut next: GameState, reason: Rejection) -> (GameState, GuessOutcome) {
    next.attempts += 1;

    if next.attempts >= next.max_attempts {
        next.active = false;
        let target = next.target_name.clone();
        return (
            next,
            GuessOutcome::GameOver {
                reason: GameOverReason::AttemptsExhausted { target },
            },
        );
    }

    let remaining_attempts = next.remaining_attempts();
    (
        next,
        GuessOutcome::Rejected {
            reason,
            remaining_attempts,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> Dictionary {
        Dictionary::new(["Alice", "Ellen", "Nora", "Amy", "Liam", "Ivy", "Myra", "Ray", "Lx"])
    }

    fn rejection(outcome: &GuessOutcome) -> Option<&Rejection> {
        match outcome {
            GuessOutcome::Rejected { reason, .. } => Some(reason),
            _ => None,
        }
    }

    #[test]
    fn scenario_not_in_dictionary_then_wrong_letter() {
        let dict = Dictionary::new(["Alice", "Ellen", "Nora", "Amy"]);
        let state = GameState::new("Alice", "Nora", 10);

        let (state, outcome) = evaluate_guess(&state, "Liam", &dict);
        assert_eq!(
            outcome,
            GuessOutcome::Rejected {
                reason: Rejection::NotInDictionary {
                    guess: "liam".into()
                },
                remaining_attempts: 9,
            }
        );
        assert_eq!(state.attempts(), 1);

        let (state, outcome) = evaluate_guess(&state, "Ellen", &dict);
        assert_eq!(
            rejection(&outcome),
            Some(&Rejection::WrongLetter { required: 'l' })
        );
        assert_eq!(state.attempts(), 2);
        assert_eq!(state.chain(), &["Alice".to_string()]);
    }

    #[test]
    fn duplicate_in_different_case_is_rejected() {
        // Anna requires an n-name, so "nora" passes the letter check
        let dict = Dictionary::new(["Nora", "Anna", "Nan"]);
        let mut state = GameState::new("Anna", "Nan", 10);
        state.chain = vec!["Nora".into(), "Anna".into()];

        let (next, outcome) = evaluate_guess(&state, "nora", &dict);
        assert_eq!(
            rejection(&outcome),
            Some(&Rejection::AlreadyUsed {
                guess: "nora".into()
            })
        );
        assert_eq!(next.attempts(), 1);
        assert_eq!(next.chain().len(), 2);
    }

    #[test]
    fn duplicate_rejected_even_if_not_in_dictionary() {
        let dict = Dictionary::new(["Alice"]);
        let mut state = GameState::new("Alice", "Lx", 10);
        state.chain.push("Lola".into());

        let (_, outcome) = evaluate_guess(&state, "LOLA", &dict);
        assert!(matches!(
            rejection(&outcome),
            Some(Rejection::AlreadyUsed { .. })
        ));
    }

    #[test]
    fn input_state_is_not_mutated() {
        let dict = dict();
        let state = GameState::new("Alice", "Ivy", 10);
        let before = state.clone();

        let _ = evaluate_guess(&state, "Liam", &dict);
        let _ = evaluate_guess(&state, "Ellen", &dict);
        let _ = evaluate_guess(&state, "", &dict);

        assert_eq!(state, before);
    }

    #[test]
    fn chain_grows_by_exactly_one_on_accept() {
        let dict = dict();
        let state = GameState::new("Alice", "Ivy", 10);

        let (next, outcome) = evaluate_guess(&state, "  lIAm  ", &dict);
        assert_eq!(
            outcome,
            GuessOutcome::Accepted {
                name: "Liam".into(),
                result: Acceptance::Continue { next_letter: 'i' },
            }
        );
        assert_eq!(next.chain().len(), state.chain().len() + 1);
        assert_eq!(next.current_name(), "Liam");
        assert_eq!(next.score(), 1);
        assert!(next.is_active());
    }

    #[test]
    fn rejections_leave_chain_unchanged() {
        let dict = dict();
        let state = GameState::new("Alice", "Ivy", 10);

        for guess in ["", "   ", "Ellen", "Lara", "alice"] {
            let (next, outcome) = evaluate_guess(&state, guess, &dict);
            assert!(!outcome.is_accepted(), "{guess}");
            assert_eq!(next.chain(), state.chain(), "{guess}");
            assert_eq!(next.score(), 0);
        }
    }

    #[test]
    fn empty_guess_costs_nothing() {
        let dict = dict();
        let state = GameState::new("Alice", "Ivy", 10);

        let (next, outcome) = evaluate_guess(&state, "   ", &dict);
        assert_eq!(rejection(&outcome), Some(&Rejection::EmptyGuess));
        assert_eq!(next.attempts(), 0);
    }

    #[test]
    fn reaching_target_wins() {
        let dict = dict();
        let state = GameState::new("Liam", "Ivy", 10);

        let (next, outcome) = evaluate_guess(&state, "ivy", &dict);
        assert_eq!(
            outcome,
            GuessOutcome::Accepted {
                name: "Ivy".into(),
                result: Acceptance::TargetReached,
            }
        );
        assert!(!next.is_active());
        assert!(next.target_reached());
    }

    #[test]
    fn exhausting_attempts_ends_game() {
        let dict = dict();
        let mut state = GameState::new("Alice", "Ivy", 3);

        for expected_remaining in [2, 1] {
            let (next, outcome) = evaluate_guess(&state, "Ellen", &dict);
            assert_eq!(
                outcome,
                GuessOutcome::Rejected {
                    reason: Rejection::WrongLetter { required: 'l' },
                    remaining_attempts: expected_remaining,
                }
            );
            state = next;
        }

        let (next, outcome) = evaluate_guess(&state, "Ellen", &dict);
        assert_eq!(
            outcome,
            GuessOutcome::GameOver {
                reason: GameOverReason::AttemptsExhausted {
                    target: "Ivy".into()
                },
            }
        );
        assert!(!next.is_active());

        let (after, outcome) = evaluate_guess(&next, "Liam", &dict);
        assert_eq!(rejection(&outcome), Some(&Rejection::NoActiveGame));
        assert_eq!(after, next);
    }

    #[test]
    fn mixed_rejections_share_attempt_budget() {
        let dict = dict();
        let state = GameState::new("Alice", "Ivy", 3);

        let (state, _) = evaluate_guess(&state, "Ellen", &dict); // wrong letter
        let (state, _) = evaluate_guess(&state, "Lara", &dict); // not in dictionary
        let (state, outcome) = evaluate_guess(&state, "alice", &dict); // wrong letter
        assert!(matches!(
            outcome,
            GuessOutcome::GameOver {
                reason: GameOverReason::AttemptsExhausted { .. }
            }
        ));
        assert_eq!(state.attempts(), 3);
    }

    #[test]
    fn current_name_without_letter_ends_game() {
        let dict = dict();
        let state = GameState::new("A", "Ivy", 10);

        let (next, outcome) = evaluate_guess(&state, "Amy", &dict);
        assert_eq!(
            outcome,
            GuessOutcome::GameOver {
                reason: GameOverReason::CurrentNameTooShort
            }
        );
        assert!(!next.is_active());
        assert_eq!(next.chain(), state.chain());
    }

    #[test]
    fn accepted_name_without_letter_terminates_chain() {
        let dict = Dictionary::new(["Alice", "L", "Ivy"]);
        let state = GameState::new("Alice", "Ivy", 10);

        let (next, outcome) = evaluate_guess(&state, "l", &dict);
        assert_eq!(
            outcome,
            GuessOutcome::GameOver {
                reason: GameOverReason::ChainTerminated { name: "L".into() }
            }
        );
        assert!(!next.is_active());
        assert_eq!(next.chain().len(), 2);
        assert_eq!(next.score(), 1);
    }

    #[test]
    fn no_unused_continuation_is_a_win() {
        // Lx needs an x-name and there is none
        let dict = dict();
        let state = GameState::new("Alice", "Ivy", 10);

        let (next, outcome) = evaluate_guess(&state, "lx", &dict);
        assert_eq!(
            outcome,
            GuessOutcome::Accepted {
                name: "Lx".into(),
                result: Acceptance::NoContinuations { letter: 'x' },
            }
        );
        assert!(outcome.is_victory());
        assert!(!next.is_active());
    }

    #[test]
    fn used_names_block_the_last_continuation() {
        let dict = Dictionary::new(["Nan", "Anna", "Ann"]);
        let mut state = GameState::new("Anna", "Zed", 10);
        state.chain = vec!["Nan".into(), "Anna".into()];

        // Anna → n; the only n-name, Nan, is already used
        let (next, outcome) = evaluate_guess(&state, "nan", &dict);
        assert!(matches!(
            rejection(&outcome),
            Some(Rejection::AlreadyUsed { .. })
        ));
        assert!(next.is_active());

        // Nan → a; Anna is accepted, then needs an n-name and Nan is taken
        let mut state = GameState::new("Nan", "Zed", 10);
        state.chain = vec!["Ann".into(), "Nan".into()];
        let (next, outcome) = evaluate_guess(&state, "anna", &dict);
        assert_eq!(
            outcome,
            GuessOutcome::Accepted {
                name: "Anna".into(),
                result: Acceptance::NoContinuations { letter: 'n' },
            }
        );
        assert!(!next.is_active());
    }

    #[test]
    fn give_up_reveals_target() {
        let state = GameState::new("Alice", "Ivy", 10);
        let (next, outcome) = give_up(&state);
        assert!(!next.is_active());
        assert_eq!(
            outcome,
            GuessOutcome::GameOver {
                reason: GameOverReason::GaveUp {
                    target: "Ivy".into()
                }
            }
        );
        assert!(state.is_active());
    }
}
