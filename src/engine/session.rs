//! A running game tied to its word source
//!
//! `Session` picks the target word, owns the current `GameState` and
//! replaces it wholesale on restart.

use super::{Action, GameState};
use crate::wordlists::{WordSource, WordSourceError};
use log::info;

/// Current game plus the source of future target words
pub struct Session<S> {
    source: S,
    state: GameState,
}

impl<S: WordSource> Session<S> {
    /// Pick a word from `source` and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the word source cannot supply a word.
    pub fn start(mut source: S) -> Result<Self, WordSourceError> {
        let state = GameState::new(source.pick_word()?);
        info!("new game started ({} letters)", state.cols());
        Ok(Self { source, state })
    }

    /// Discard the current game and start a new one
    ///
    /// The current game is kept if no new word can be picked.
    ///
    /// # Errors
    ///
    /// Returns an error if the word source cannot supply a word.
    pub fn restart(&mut self) -> Result<(), WordSourceError> {
        self.state = GameState::new(self.source.pick_word()?);
        info!("game restarted ({} letters)", self.state.cols());
        Ok(())
    }
}

impl<S> Session<S> {
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for presentation layers that drive actions directly
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Forward a player action to the current game
    pub fn apply(&mut self, action: Action) {
        self.state.apply(action);
    }
}
