//! Script mode
//!
//! Reads one JSON request per line and writes one JSON response per line, so
//! other programs can drive a game:
//!
//! ```text
//! {"action": "start"}
//! {"action": "guess", "name": "Liam"}
//! {"action": "hint"}
//! {"action": "give_up"}
//! {"action": "reset"}
//! ```

use crate::game::Session;
use crate::output::GuessResponse;
use rand::Rng;
use serde::Deserialize;
use std::io::{self, BufRead, Write};

const NO_GAME: &str = "No active game. Please start a new game.";

/// One request line
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptRequest {
    Start,
    Guess {
        #[serde(default)]
        name: String,
    },
    GiveUp,
    Reset,
    Hint,
}

/// Apply one request to the session
pub fn handle_request<R: Rng>(
    session: &mut Session<'_, R>,
    request: &ScriptRequest,
) -> GuessResponse {
    match request {
        ScriptRequest::Start => match session.start() {
            Ok(state) => GuessResponse::started(state),
            Err(err) => GuessResponse::failure(err.to_string()),
        },
        ScriptRequest::Guess { name } => {
            let outcome = session.guess(name);
            match session.game() {
                Some(state) => GuessResponse::from_guess(state, &outcome),
                None => GuessResponse::failure(NO_GAME),
            }
        }
        ScriptRequest::GiveUp => match session.give_up() {
            Ok(concession) => GuessResponse::gave_up(&concession),
            Err(err) => GuessResponse::failure(err.to_string()),
        },
        ScriptRequest::Reset => {
            session.reset();
            GuessResponse::reset()
        }
        ScriptRequest::Hint => match session.hint() {
            Ok(path) => match session.game() {
                Some(state) => GuessResponse::hint(state, &path),
                None => GuessResponse::failure(NO_GAME),
            },
            Err(err) => GuessResponse::failure(err.to_string()),
        },
    }
}

/// Serve requests from `input` until it ends
///
/// Blank lines are skipped. A line that is not a valid request gets a
/// failure response and the loop carries on.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_script<R, In, Out>(
    session: &mut Session<'_, R>,
    input: In,
    mut output: Out,
) -> io::Result<()>
where
    R: Rng,
    In: BufRead,
    Out: Write,
{
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<ScriptRequest>(&line) {
            Ok(request) => handle_request(session, &request),
            Err(err) => {
                tracing::warn!(%err, "invalid script request");
                GuessResponse::failure(format!("Invalid request: {err}"))
            }
        };

        serde_json::to_writer(&mut output, &response)?;
        writeln!(output)?;
        output.flush()?;
    }
    Ok(())
}
