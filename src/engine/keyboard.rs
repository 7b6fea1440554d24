//! On-screen keyboard hints
//!
//! Tracks the best feedback seen so far for every letter. Hints only move up
//! the ladder Unused < Absent < Present < Correct.

use crate::core::{Feedback, Letter};

/// Best-known status of a letter across all submitted rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum HintStatus {
    #[default]
    Unused,
    Absent,
    Present,
    Correct,
}

impl From<Feedback> for HintStatus {
    fn from(feedback: Feedback) -> Self {
        match feedback {
            Feedback::Correct => Self::Correct,
            Feedback::Present => Self::Present,
            Feedback::Absent => Self::Absent,
        }
    }
}

/// Hint status for each of the 26 letters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct KeyboardHints([HintStatus; Letter::COUNT]);

impl KeyboardHints {
    /// All letters Unused
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current hint for `letter`
    #[inline]
    #[must_use]
    pub fn get(&self, letter: Letter) -> HintStatus {
        self.0[letter.index()]
    }

    /// Record feedback for `letter`, keeping whichever hint is stronger
    ///
    /// Correct always sticks, Present never overrides Correct, and Absent only
    /// replaces Unused.
    pub fn record(&mut self, letter: Letter, feedback: Feedback) {
        let slot = &mut self.0[letter.index()];
        *slot = (*slot).max(HintStatus::from(feedback));
    }

    /// Letters with their hints, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (Letter, HintStatus)> + '_ {
        Letter::all().map(|letter| (letter, self.get(letter)))
    }
}
