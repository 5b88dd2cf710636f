//! Game rules and sessions

mod evaluator;
mod history;
mod outcome;
mod session;
mod start;
mod state;

pub use evaluator::{evaluate_guess, give_up};
pub use history::{Finish, GameRecord, Scoreboard};
pub use outcome::{Acceptance, GameOverReason, GuessOutcome, Rejection, capitalize};
pub use session::{Concession, Session};
pub use start::start_game;
pub use state::GameState;
