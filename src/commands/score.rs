//! Guess scoring command
//!
//! Scores a single guess against a target word without playing a game.

use crate::core::{RowFeedback, Word};

/// Result of scoring one guess
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: RowFeedback,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
///
/// # Examples
/// ```
/// use wordlez::commands::score_guess;
///
/// let result = score_guess("erase", "speed").unwrap();
/// assert_eq!(result.feedback.to_emoji(), "🟨⬜⬜🟨🟨");
/// ```
pub fn score_guess(guess: &str, target: &str) -> Result<ScoreResult, String> {
    let target = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    if guess.len() != target.len() {
        return Err(format!(
            "Guess has {} letters but target has {}",
            guess.len(),
            target.len()
        ));
    }

    let feedback = RowFeedback::calculate(guess.letters(), &target);
    Ok(ScoreResult {
        guess,
        target,
        feedback,
    })
}
