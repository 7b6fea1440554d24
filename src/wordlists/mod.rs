//! Word corpus and target word sources
//!
//! Provides the embedded corpus compiled into the binary, a file loader, and
//! the `WordSource` implementations that hand target words to the engine.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{FixedWordSource, RandomWordSource, WordSource, WordSourceError};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn corpus_is_not_empty() {
        assert!(WORDS_COUNT > 100, "embedded corpus looks truncated");
    }

    #[test]
    fn corpus_words_are_playable() {
        for &word in WORDS {
            assert!(
                (Word::MIN_LEN..=Word::MAX_LEN).contains(&word.len()),
                "Word '{word}' has unplayable length"
            );
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn corpus_covers_every_length() {
        for len in Word::MIN_LEN..=Word::MAX_LEN {
            assert!(
                WORDS.iter().any(|word| word.len() == len),
                "no {len}-letter words"
            );
        }
    }
}
