//! Core domain types for the name chain game
//!
//! The chain rule and the dictionary are pure and immutable; everything else
//! in the crate is built on top of them.

mod chain;
mod dictionary;

pub use chain::{first_letter, is_valid_continuation, name_key, next_required_letter};
pub use dictionary::Dictionary;
