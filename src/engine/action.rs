//! Discrete player actions
//!
//! The presentation layer translates key presses or button taps into
//! `Action`s and forwards them with `GameState::apply`.

use super::GameState;
use crate::core::Letter;

/// One player input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Letter(Letter),
    Delete,
    Submit,
}

impl GameState {
    /// Apply `action`, ignoring it if currently disallowed
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Letter(letter) => self.receive_letter(letter),
            Action::Delete => self.delete_letter(),
            Action::Submit => self.submit_row(),
        }
    }

    /// Check whether `action` would currently have any effect
    #[must_use]
    pub fn allows(&self, action: Action) -> bool {
        let controls = self.controls();
        match action {
            Action::Letter(_) => controls.letter_input,
            Action::Delete => controls.delete,
            Action::Submit => controls.submit,
        }
    }
}
