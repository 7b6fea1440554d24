//! A single A-Z letter
//!
//! Letters are stored uppercase. Lowercase input is accepted and normalized.

use std::fmt;

/// One letter of the A-Z alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Number of letters in the alphabet
    pub const COUNT: usize = 26;

    /// Create a letter from an ASCII byte, accepting either case
    ///
    /// # Examples
    /// ```
    /// use wordlez::core::Letter;
    ///
    /// assert_eq!(Letter::from_ascii(b'q'), Letter::from_ascii(b'Q'));
    /// assert!(Letter::from_ascii(b'3').is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        if byte.is_ascii_alphabetic() {
            Some(Self(byte.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Create a letter from a char, accepting either case
    #[inline]
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        u8::try_from(ch).ok().and_then(Self::from_ascii)
    }

    /// Create the letter at alphabet position `index` (0 = A)
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self(b'A' + index as u8))
        } else {
            None
        }
    }

    /// Alphabet position (0 = A, 25 = Z)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    /// Uppercase ASCII byte
    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    /// Uppercase char
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// All 26 letters in alphabetical order
    pub fn all() -> impl Iterator<Item = Self> {
        (b'A'..=b'Z').map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
