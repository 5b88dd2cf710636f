//! Starting a game

use super::state::GameState;
use crate::core::Dictionary;
use crate::error::GameError;
use rand::Rng;

/// Pick a random start and a different random target
///
/// # Errors
///
/// Returns [`GameError::NotReady`] when the dictionary has fewer than two
/// names, which is what an empty fallback dictionary looks like.
///
/// # Examples
/// ```
/// use namechain::core::Dictionary;
/// use namechain::game::start_game;
///
/// let dict = Dictionary::new(["Alice", "Nora"]);
/// let state = start_game(&dict, 10, &mut rand::rng()).unwrap();
/// assert_ne!(state.start_name(), state.target_name());
/// ```
pub fn start_game<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    max_attempts: u32,
    rng: &mut R,
) -> Result<GameState, GameError> {
    let available = dictionary.len();
    if available < 2 {
        return Err(GameError::NotReady { available });
    }

    let start = rng.random_range(0..available);
    // Draw from the remaining names and shift past the start
    let mut target = rng.random_range(0..available - 1);
    if target >= start {
        target += 1;
    }

    let (Some(start_name), Some(target_name)) = (dictionary.get(start), dictionary.get(target))
    else {
        return Err(GameError::NotReady { available });
    };

    tracing::debug!(start = start_name, target = target_name, "game started");
    Ok(GameState::new(start_name, target_name, max_attempts))
}
