//! Target word representation
//!
//! A Word stores a 3-7 letter uppercase word along with its letter tally for
//! duplicate-aware scoring.

use super::{Letter, LetterTally};
use std::fmt;

/// A target word of 3 to 7 uppercase letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: Vec<Letter>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(
                    f,
                    "Word must be {} to {} letters, got {len}",
                    Word::MIN_LEN,
                    Word::MAX_LEN
                )
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Shortest playable word
    pub const MIN_LEN: usize = 3;

    /// Longest playable word
    pub const MAX_LEN: usize = 7;

    /// Create a new Word from a string
    ///
    /// Input is trimmed and uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is outside 3..=7
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordlez::core::Word;
    ///
    /// let word = Word::new("llama").unwrap();
    /// assert_eq!(word.text(), "LLAMA");
    ///
    /// assert!(Word::new("no").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_uppercase();

        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&text.len()) {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let letters = text
            .bytes()
            .map(Letter::from_ascii)
            .collect::<Option<Vec<_>>>()
            .ok_or(WordError::InvalidCharacters)?;

        Ok(Self { text, letters })
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letters (3-7)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: a valid word has at least three letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Letter {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Multiset of the word's letters
    #[must_use]
    pub fn tally(&self) -> LetterTally {
        LetterTally::from_letters(&self.letters)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
