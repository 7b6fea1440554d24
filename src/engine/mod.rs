//! Game engine
//!
//! Owns all game state, applies player actions and reports the outcome.
//! Rendering and word sourcing live elsewhere; the engine only exposes state.

mod action;
mod cell;
mod keyboard;
mod session;
mod state;

pub use action::Action;
pub use cell::{Cell, CellStatus};
pub use keyboard::{HintStatus, KeyboardHints};
pub use session::Session;
pub use state::{Controls, DEFAULT_ROWS, GameState, Outcome, Phase};
