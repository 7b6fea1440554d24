//! Core domain types for WordLeZ
//!
//! Pure, dependency-light types: letters, target words, letter tallies and
//! per-letter guess feedback. Nothing here knows about game state or I/O.

mod feedback;
mod letter;
mod tally;
mod word;

pub use feedback::{Feedback, RowFeedback};
pub use letter::Letter;
pub use tally::LetterTally;
pub use word::{Word, WordError};
