//! NameChain
//!
//! A word-chain game over a list of given names: each name must begin with the
//! second letter of the name before it, and the player tries to reach a target
//! name within a limited number of wrong guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use namechain::core::Dictionary;
//! use namechain::game::{GameState, evaluate_guess};
//!
//! let names = Dictionary::new(["Alice", "Liam", "Ivy"]);
//! let state = GameState::new("Alice", "Ivy", 10);
//!
//! // "Alice" demands an L next
//! let (state, outcome) = evaluate_guess(&state, "Liam", &names);
//! assert!(outcome.is_accepted());
//! assert_eq!(state.next_letter(), Some('i'));
//! ```

// Core domain types
pub mod core;

// Game rules and sessions
pub mod game;

// Solution path search
pub mod solver;

// Name lists
pub mod names;

// Configuration and errors
pub mod config;
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
