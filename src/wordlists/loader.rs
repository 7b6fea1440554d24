//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use log::{info, warn};
use std::fs;
use std::io;
use std::ops::RangeInclusive;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines are ignored. Entries that are not 3-7 ASCII letters are
/// skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordlez::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_lines(content.lines());

    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut skipped = 0usize;
    let words = lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(_) => {
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        warn!("skipped {skipped} unplayable word list entries");
    }
    words
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordlez::wordlists::loader::words_from_slice;
/// use wordlez::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

/// Keep only words whose length falls in `lengths`
#[must_use]
pub fn filter_by_length(words: Vec<Word>, lengths: &RangeInclusive<usize>) -> Vec<Word> {
    words
        .into_iter()
        .filter(|word| lengths.contains(&word.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "owl", "abandon"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "OWL");
        assert_eq!(words[2].text(), "ABANDON");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "absolute", "ox", "sl4te", "", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn filter_by_length_keeps_range() {
        let words = words_from_slice(&["owl", "bolt", "llama", "bakery"]);
        let kept = filter_by_length(words, &(4..=5));

        let texts: Vec<&str> = kept.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["BOLT", "LLAMA"]);
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!("wordlez-loader-{}.txt", std::process::id()));
        fs::write(&path, "owl\n\n  Llama \nx\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["OWL", "LLAMA"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/nonexistent/wordlez/words.txt").is_err());
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
