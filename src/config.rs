//! Game configuration
//!
//! Gathers the command-line options that decide where target words come
//! from, and builds the matching `WordSource`.

use crate::core::Word;
use crate::wordlists::loader::{filter_by_length, load_from_file, words_from_slice};
use crate::wordlists::{FixedWordSource, RandomWordSource, WORDS, WordSource, WordSourceError};
use anyhow::{Result, bail};
use log::info;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Where the word corpus is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wordlist {
    /// Corpus compiled into the binary
    Embedded,
    /// One word per line
    File(PathBuf),
}

impl Wordlist {
    /// `"embedded"` selects the built-in corpus, anything else is a path
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

/// Options controlling target word selection
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub wordlist: Wordlist,
    /// Fixed target word, overriding the corpus
    pub word: Option<String>,
    /// Seed for reproducible random picks
    pub seed: Option<u64>,
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wordlist: Wordlist::Embedded,
            word: None,
            seed: None,
            min_len: Word::MIN_LEN,
            max_len: Word::MAX_LEN,
        }
    }
}

impl GameConfig {
    /// Accepted target word lengths
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are reversed or outside 3-7.
    pub fn lengths(&self) -> Result<RangeInclusive<usize>> {
        let playable = Word::MIN_LEN..=Word::MAX_LEN;
        if !playable.contains(&self.min_len) || !playable.contains(&self.max_len) {
            bail!(
                "Word lengths must be between {} and {}",
                Word::MIN_LEN,
                Word::MAX_LEN
            );
        }
        if self.min_len > self.max_len {
            bail!(
                "Minimum length {} exceeds maximum length {}",
                self.min_len,
                self.max_len
            );
        }
        Ok(self.min_len..=self.max_len)
    }

    /// Build the word source described by this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the fixed word is invalid, the word list cannot be
    /// read, the length bounds are invalid, or no word survives filtering.
    pub fn word_source(&self) -> Result<Box<dyn WordSource>> {
        if let Some(text) = &self.word {
            let word = Word::new(text)?;
            return Ok(Box::new(FixedWordSource::new(word)));
        }

        let lengths = self.lengths()?;
        let words = match &self.wordlist {
            Wordlist::Embedded => words_from_slice(WORDS),
            Wordlist::File(path) => load_from_file(path).map_err(WordSourceError::from)?,
        };
        let words = filter_by_length(words, &lengths);
        if words.is_empty() {
            return Err(WordSourceError::EmptyCorpus.into());
        }
        info!(
            "{} candidate words with lengths {}-{}",
            words.len(),
            lengths.start(),
            lengths.end()
        );

        let source = match self.seed {
            Some(seed) => RandomWordSource::with_seed(words, seed),
            None => RandomWordSource::new(words),
        };
        Ok(Box::new(source))
    }
}
