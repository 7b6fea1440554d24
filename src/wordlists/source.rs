//! Target word sources
//!
//! The engine asks a `WordSource` for one word per game and never cares
//! where it came from.

use crate::core::Word;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::io;

/// Error type for word sources that cannot supply a word
#[derive(Debug)]
pub enum WordSourceError {
    EmptyCorpus,
    Io(io::Error),
}

impl fmt::Display for WordSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCorpus => write!(f, "Word list contains no playable words"),
            Self::Io(err) => write!(f, "Failed to read word list: {err}"),
        }
    }
}

impl std::error::Error for WordSourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyCorpus => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for WordSourceError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Supplies target words
pub trait WordSource {
    /// Pick the target word for the next game
    ///
    /// # Errors
    ///
    /// Returns an error if no word is available.
    fn pick_word(&mut self) -> Result<Word, WordSourceError>;
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    fn pick_word(&mut self) -> Result<Word, WordSourceError> {
        (**self).pick_word()
    }
}

/// Picks uniformly at random from a word list
pub struct RandomWordSource {
    words: Vec<Word>,
    rng: StdRng,
}

impl RandomWordSource {
    /// Random source seeded from the operating system
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            words,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible random source
    #[must_use]
    pub fn with_seed(words: Vec<Word>, seed: u64) -> Self {
        Self {
            words,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for RandomWordSource {
    fn pick_word(&mut self) -> Result<Word, WordSourceError> {
        self.words
            .choose(&mut self.rng)
            .cloned()
            .ok_or(WordSourceError::EmptyCorpus)
    }
}

/// Always supplies the same word
#[derive(Debug, Clone)]
pub struct FixedWordSource(Word);

impl FixedWordSource {
    #[must_use]
    pub const fn new(word: Word) -> Self {
        Self(word)
    }
}

impl WordSource for FixedWordSource {
    fn pick_word(&mut self) -> Result<Word, WordSourceError> {
        Ok(self.0.clone())
    }
}
