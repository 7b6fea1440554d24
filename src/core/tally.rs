//! Letter multiset used to avoid over-crediting duplicate letters

use super::Letter;
use rustc_hash::FxHashMap;

/// Count of each letter in a word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterTally {
    counts: FxHashMap<Letter, u8>,
}

impl LetterTally {
    /// Build the multiset of `letters`
    #[must_use]
    pub fn from_letters(letters: &[Letter]) -> Self {
        let mut counts = FxHashMap::default();
        for &letter in letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// How many copies of `letter` remain
    #[inline]
    #[must_use]
    pub fn count(&self, letter: Letter) -> u8 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Consume one copy of `letter`
    ///
    /// Returns false, leaving the tally untouched, when none remain.
    pub fn take(&mut self, letter: Letter) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Total letters remaining
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().map(|&count| usize::from(count)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(text: &str) -> Vec<Letter> {
        text.chars().filter_map(Letter::from_char).collect()
    }

    #[test]
    fn tally_counts_letters() {
        let tally = LetterTally::from_letters(&letters("SPEED"));
        assert_eq!(tally.count(Letter::from_char('E').unwrap()), 2);
        assert_eq!(tally.count(Letter::from_char('S').unwrap()), 1);
        assert_eq!(tally.total(), 5);
    }

    #[test]
    fn take_consumes_until_exhausted() {
        let e = Letter::from_char('E').unwrap();
        let mut tally = LetterTally::from_letters(&letters("SPEED"));

        assert!(tally.take(e));
        assert!(tally.take(e));
        assert!(!tally.take(e));
        assert_eq!(tally.count(e), 0);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn take_missing_letter_is_noop() {
        let mut tally = LetterTally::from_letters(&letters("OWL"));
        let before = tally.clone();

        assert!(!tally.take(Letter::from_char('Z').unwrap()));
        assert_eq!(tally, before);
    }
}
