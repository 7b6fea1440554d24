//! Terminal output formatting
//!
//! Display utilities for the line-mode game and CLI results.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_outcome, print_score_result};
