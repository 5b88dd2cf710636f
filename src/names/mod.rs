//! Name lists
//!
//! Provides the embedded default list compiled into the binary and loaders
//! for user-supplied lists.

mod embedded;
pub mod loader;

pub use embedded::{NAMES, NAMES_COUNT};
