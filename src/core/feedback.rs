//! Per-letter guess feedback
//!
//! Each guessed letter is scored as one of:
//! - Correct (right letter, right position)
//! - Present (letter still available in the target, wrong position)
//! - Absent (letter not in the target, or every copy already consumed)

use super::{Letter, Word};

/// Feedback for a single guessed letter
///
/// Ordered from least to most informative, so `max` picks the stronger hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

impl Feedback {
    /// Emoji square for this feedback
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guessed row, one entry per column
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowFeedback(Vec<Feedback>);

impl RowFeedback {
    /// Score `guess` against `target`
    ///
    /// Columns are processed left to right against a scratch copy of the
    /// target's letter tally. A letter earns credit only while copies remain
    /// in the tally, and the copy is consumed before the position check, so a
    /// letter is never credited more times than it occurs in the target.
    ///
    /// `guess` must be exactly as long as `target`.
    ///
    /// # Examples
    /// ```
    /// use wordlez::core::{Feedback, Letter, RowFeedback, Word};
    ///
    /// let target = Word::new("llama").unwrap();
    /// let guess: Vec<Letter> = "alarm".chars().filter_map(Letter::from_char).collect();
    /// let feedback = RowFeedback::calculate(&guess, &target);
    ///
    /// assert_eq!(
    ///     feedback.as_slice(),
    ///     &[
    ///         Feedback::Present,
    ///         Feedback::Correct,
    ///         Feedback::Correct,
    ///         Feedback::Absent,
    ///         Feedback::Present,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &[Letter], target: &Word) -> Self {
        debug_assert_eq!(guess.len(), target.len(), "guess/target length mismatch");

        let mut remaining = target.tally();
        let feedback = guess
            .iter()
            .zip(target.letters())
            .map(|(&letter, &expected)| {
                if !remaining.take(letter) {
                    Feedback::Absent
                } else if letter == expected {
                    Feedback::Correct
                } else {
                    Feedback::Present
                }
            })
            .collect();

        Self(feedback)
    }

    /// Feedback per column
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Feedback] {
        &self.0
    }

    /// Number of columns
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-width row
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every column is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&f| f == Feedback::Correct)
    }

    /// Count the number of correct columns
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(Feedback::Correct)
    }

    /// Count the number of present columns
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(Feedback::Present)
    }

    fn count(&self, kind: Feedback) -> usize {
        self.0.iter().filter(|&&f| f == kind).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}
