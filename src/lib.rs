//! WordLeZ
//!
//! A Wordle-style game with target words of 3 to 7 letters, six guesses, and
//! duplicate-aware per-letter feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordlez::core::{Letter, Word};
//! use wordlez::engine::{Action, GameState};
//!
//! let mut game = GameState::new(Word::new("llama").unwrap());
//! for ch in "alarm".chars() {
//!     game.apply(Action::Letter(Letter::from_char(ch).unwrap()));
//! }
//! game.apply(Action::Submit);
//!
//! assert!(!game.is_over());
//! assert_eq!(game.current_row(), 1);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod engine;

// Word corpus and sources
pub mod wordlists;

// Command-line configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
