//! Game state and the three player actions
//!
//! `GameState` owns the target word, the guess grid and the keyboard hints.
//! Actions that are not currently allowed are silently ignored, so a caller
//! can forward raw input without checking the phase first.

use super::cell::{Cell, CellStatus};
use super::keyboard::KeyboardHints;
use crate::core::{Letter, LetterTally, RowFeedback, Word};
use log::{debug, info};

/// Number of guesses per game
pub const DEFAULT_ROWS: usize = 6;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Lose,
}

/// Where the game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Typing into the current row
    Input,
    /// Current row is full, waiting for submit or delete
    RowFull,
    /// Terminal
    Over(Outcome),
}

/// Which controls the presentation layer should enable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Controls {
    pub letter_input: bool,
    pub delete: bool,
    pub submit: bool,
}

/// Complete state of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    target: Word,
    tally: LetterTally,
    rows: usize,
    cursor: usize,
    cells: Vec<Cell>,
    hints: KeyboardHints,
    row_complete: bool,
    over: bool,
    win: bool,
}

impl GameState {
    /// Start a fresh game with the default six rows
    ///
    /// # Examples
    /// ```
    /// use wordlez::core::Word;
    /// use wordlez::engine::{GameState, Phase};
    ///
    /// let state = GameState::new(Word::new("llama").unwrap());
    /// assert_eq!(state.cols(), 5);
    /// assert_eq!(state.cursor(), 0);
    /// assert_eq!(state.phase(), Phase::Input);
    /// ```
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self::with_rows(target, DEFAULT_ROWS)
    }

    /// Start a fresh game with a custom number of rows (at least one)
    #[must_use]
    pub fn with_rows(target: Word, rows: usize) -> Self {
        let rows = rows.max(1);
        let tally = target.tally();
        let cells = vec![Cell::BLANK; rows * target.len()];

        Self {
            target,
            tally,
            rows,
            cursor: 0,
            cells,
            hints: KeyboardHints::new(),
            row_complete: false,
            over: false,
            win: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    /// Multiset of the target's letters
    #[inline]
    #[must_use]
    pub fn tally(&self) -> &LetterTally {
        &self.tally
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Row width, equal to the target length
    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.target.len()
    }

    /// Index of the active cell, `rows * cols` once every row is used
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.cursor / self.cols()
    }

    #[inline]
    #[must_use]
    pub fn current_col(&self) -> usize {
        self.cursor % self.cols()
    }

    /// All cells in row-major order
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of one row
    ///
    /// # Panics
    /// Panics if `row >= rows()`
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        let cols = self.cols();
        &self.cells[row * cols..(row + 1) * cols]
    }

    #[inline]
    #[must_use]
    pub fn hints(&self) -> &KeyboardHints {
        &self.hints
    }

    /// True when the current row is full and not yet submitted
    #[inline]
    #[must_use]
    pub fn is_row_complete(&self) -> bool {
        self.row_complete
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.win
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.over, self.win, self.row_complete) {
            (true, true, _) => Phase::Over(Outcome::Win),
            (true, false, _) => Phase::Over(Outcome::Lose),
            (false, _, true) => Phase::RowFull,
            (false, _, false) => Phase::Input,
        }
    }

    #[must_use]
    pub fn controls(&self) -> Controls {
        Controls {
            letter_input: !self.row_complete && !self.over,
            delete: !self.over && (self.row_complete || self.current_col() != 0),
            submit: self.row_complete && !self.over,
        }
    }

    /// Banner text once the game is over
    #[must_use]
    pub fn outcome_message(&self) -> Option<String> {
        match self.phase() {
            Phase::Over(Outcome::Win) => Some("WIN".to_string()),
            Phase::Over(Outcome::Lose) => Some(format!("FAIL - Ans: {}", self.target)),
            Phase::Input | Phase::RowFull => None,
        }
    }

    /// Type `letter` into the active cell
    ///
    /// Ignored when the game is over, the grid is exhausted, or the current
    /// row is already full.
    pub fn receive_letter(&mut self, letter: Letter) {
        if self.over || self.row_complete || self.cursor >= self.cells.len() {
            return;
        }

        self.cells[self.cursor] = Cell::filled(letter);

        if self.current_col() == self.cols() - 1 {
            self.row_complete = true;
        } else {
            self.cursor += 1;
        }
    }

    /// Erase the most recently typed letter of the current row
    ///
    /// On a full row this clears the last cell without moving the cursor. At
    /// column zero of an empty row nothing visible changes.
    pub fn delete_letter(&mut self) {
        if self.over {
            return;
        }

        if self.row_complete {
            self.row_complete = false;
        } else if self.current_col() != 0 {
            self.cursor -= 1;
        }

        if let Some(cell) = self.cells.get_mut(self.cursor) {
            *cell = Cell::BLANK;
        }
    }

    /// Score the full current row
    ///
    /// Ignored unless the row is complete and the game is still running.
    pub fn submit_row(&mut self) {
        if !self.row_complete || self.over {
            return;
        }

        let row = self.current_row();
        let cols = self.cols();
        let start = row * cols;

        let guess: Vec<Letter> = self.cells[start..start + cols]
            .iter()
            .filter_map(|cell| cell.letter)
            .collect();
        debug_assert_eq!(guess.len(), cols, "complete row has a blank cell");

        let feedback = RowFeedback::calculate(&guess, &self.target);
        for ((cell, &letter), &result) in self.cells[start..start + cols]
            .iter_mut()
            .zip(&guess)
            .zip(feedback.as_slice())
        {
            cell.status = CellStatus::from(result);
            self.hints.record(letter, result);
        }

        debug!(
            "row {} scored {} for target length {cols}",
            row + 1,
            feedback.to_emoji()
        );

        if feedback.count_correct() == cols {
            self.finish(true);
            return;
        }

        self.cursor += 1;
        self.row_complete = false;
        if self.current_row() == self.rows {
            self.finish(false);
        }
    }

    fn finish(&mut self, win: bool) {
        self.over = true;
        self.win = win;
        info!(
            "game over after {} row(s): {}",
            self.current_row().min(self.rows - 1) + 1,
            if win { "win" } else { "loss" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::HintStatus;

    fn game(target: &str) -> GameState {
        GameState::new(Word::new(target).unwrap())
    }

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    fn type_word(state: &mut GameState, text: &str) {
        for ch in text.chars() {
            state.receive_letter(letter(ch));
        }
    }

    fn guess(state: &mut GameState, text: &str) {
        type_word(state, text);
        state.submit_row();
    }

    fn statuses(state: &GameState, row: usize) -> Vec<CellStatus> {
        state.row(row).iter().map(|cell| cell.status).collect()
    }

    #[test]
    fn new_game_is_fresh_for_every_length() {
        for target in ["owl", "bolt", "llama", "bakery", "abandon"] {
            let state = game(target);

            assert_eq!(state.cols(), target.len());
            assert_eq!(state.rows(), DEFAULT_ROWS);
            assert_eq!(state.cursor(), 0);
            assert_eq!(state.cells().len(), DEFAULT_ROWS * target.len());
            assert!(state.cells().iter().all(|cell| *cell == Cell::BLANK));
            assert!(
                state
                    .hints()
                    .iter()
                    .all(|(_, hint)| hint == HintStatus::Unused)
            );
            assert!(!state.is_row_complete());
            assert!(!state.is_over());
            assert!(!state.is_win());
        }
    }

    #[test]
    fn new_game_builds_tally() {
        let state = game("speed");
        assert_eq!(state.tally().count(letter('E')), 2);
        assert_eq!(state.tally().total(), 5);
    }

    #[test]
    fn receive_letter_fills_and_advances() {
        let mut state = game("llama");
        state.receive_letter(letter('a'));

        assert_eq!(state.cells()[0], Cell::filled(letter('A')));
        assert_eq!(state.cursor(), 1);
        assert_eq!(state.phase(), Phase::Input);
    }

    #[test]
    fn filling_last_column_completes_row_without_advancing() {
        let mut state = game("llama");
        type_word(&mut state, "alarm");

        assert!(state.is_row_complete());
        assert_eq!(state.cursor(), 4);
        assert_eq!(state.phase(), Phase::RowFull);
        assert!(
            state
                .row(0)
                .iter()
                .all(|cell| cell.status == CellStatus::Filled)
        );
    }

    #[test]
    fn receive_letter_ignored_on_full_row() {
        let mut state = game("owl");
        type_word(&mut state, "cat");
        let before = state.clone();

        state.receive_letter(letter('X'));
        assert_eq!(state, before);
    }

    #[test]
    fn delete_on_full_row_reopens_last_cell() {
        let mut state = game("owl");
        type_word(&mut state, "cat");
        state.delete_letter();

        assert!(!state.is_row_complete());
        assert_eq!(state.cursor(), 2);
        assert!(state.cells()[2].is_blank());
        assert_eq!(state.cells()[1], Cell::filled(letter('A')));
        assert_eq!(state.phase(), Phase::Input);
    }

    #[test]
    fn delete_mid_row_steps_back() {
        let mut state = game("llama");
        type_word(&mut state, "al");
        state.delete_letter();

        assert_eq!(state.cursor(), 1);
        assert!(state.cells()[1].is_blank());
        assert_eq!(state.cells()[0], Cell::filled(letter('A')));
    }

    #[test]
    fn delete_at_row_start_changes_nothing() {
        let mut state = game("llama");
        let before = state.clone();
        state.delete_letter();
        assert_eq!(state, before);

        // Same at the start of a later row
        guess(&mut state, "alarm");
        let before = state.clone();
        state.delete_letter();
        assert_eq!(state, before);
        assert_eq!(state.current_col(), 0);
        assert_eq!(state.current_row(), 1);
    }

    #[test]
    fn delete_cannot_reach_previous_row() {
        let mut state = game("owl");
        guess(&mut state, "cat");
        state.delete_letter();
        state.delete_letter();

        assert_eq!(statuses(&state, 0), vec![CellStatus::Absent; 3]);
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn delete_then_receive_restores_state() {
        // Full row
        let mut state = game("llama");
        type_word(&mut state, "alarm");
        let before = state.clone();
        state.delete_letter();
        state.receive_letter(letter('M'));
        assert_eq!(state, before);

        // Partial row
        let mut state = game("llama");
        type_word(&mut state, "ala");
        let before = state.clone();
        state.delete_letter();
        state.receive_letter(letter('A'));
        assert_eq!(state, before);
    }

    #[test]
    fn submit_incomplete_row_is_noop() {
        let mut state = game("llama");
        type_word(&mut state, "alar");
        let before = state.clone();

        state.submit_row();
        assert_eq!(state, before);
    }

    #[test]
    fn submit_correct_row_wins() {
        let mut state = game("abcde");
        guess(&mut state, "abcde");

        assert_eq!(statuses(&state, 0), vec![CellStatus::Correct; 5]);
        assert!(state.is_over());
        assert!(state.is_win());
        assert_eq!(state.phase(), Phase::Over(Outcome::Win));
        assert_eq!(state.outcome_message().as_deref(), Some("WIN"));
    }

    #[test]
    fn submit_correct_row_wins_on_later_row() {
        let mut state = game("bolt");
        guess(&mut state, "boot");
        guess(&mut state, "colt");
        assert!(!state.is_over());

        guess(&mut state, "bolt");
        assert!(state.is_win());
        assert_eq!(statuses(&state, 2), vec![CellStatus::Correct; 4]);
        // Cursor stays on the winning row
        assert_eq!(state.current_row(), 2);
    }

    #[test]
    fn wrong_guess_moves_to_next_row() {
        let mut state = game("llama");
        guess(&mut state, "alarm");

        assert_eq!(state.cursor(), 5);
        assert_eq!(state.current_row(), 1);
        assert_eq!(state.current_col(), 0);
        assert!(!state.is_row_complete());
        assert_eq!(state.phase(), Phase::Input);
    }

    #[test]
    fn duplicate_letters_speed_erase() {
        let mut state = game("speed");
        guess(&mut state, "erase");

        assert_eq!(
            statuses(&state, 0),
            vec![
                CellStatus::Present,
                CellStatus::Absent,
                CellStatus::Absent,
                CellStatus::Present,
                CellStatus::Present,
            ]
        );
    }

    #[test]
    fn duplicate_letters_llama_alarm() {
        let mut state = game("llama");
        guess(&mut state, "alarm");

        assert_eq!(
            statuses(&state, 0),
            vec![
                CellStatus::Present,
                CellStatus::Correct,
                CellStatus::Correct,
                CellStatus::Absent,
                CellStatus::Present,
            ]
        );

        let hints = state.hints();
        assert_eq!(hints.get(letter('A')), HintStatus::Correct);
        assert_eq!(hints.get(letter('L')), HintStatus::Correct);
        assert_eq!(hints.get(letter('M')), HintStatus::Present);
        assert_eq!(hints.get(letter('R')), HintStatus::Absent);
        assert_eq!(hints.get(letter('Z')), HintStatus::Unused);
    }

    #[test]
    fn correct_hint_survives_later_rows() {
        let mut state = game("llama");
        guess(&mut state, "alarm");
        assert_eq!(state.hints().get(letter('L')), HintStatus::Correct);

        // L lands in a non-matching column: Present for the cell only
        guess(&mut state, "xxxxl");
        assert_eq!(state.row(1)[4].status, CellStatus::Present);
        assert_eq!(state.hints().get(letter('L')), HintStatus::Correct);

        // Three L's against two: the third is Absent
        guess(&mut state, "lllxx");
        assert_eq!(state.row(2)[2].status, CellStatus::Absent);
        assert_eq!(state.hints().get(letter('L')), HintStatus::Correct);
    }

    #[test]
    fn present_hint_not_downgraded_to_absent() {
        let mut state = game("llama");
        guess(&mut state, "mxxxx");
        assert_eq!(state.hints().get(letter('M')), HintStatus::Present);

        guess(&mut state, "mmxxx");
        assert_eq!(state.row(1)[1].status, CellStatus::Absent);
        assert_eq!(state.hints().get(letter('M')), HintStatus::Present);
    }

    #[test]
    fn loses_only_after_last_row() {
        let mut state = game("owl");
        for row in 0..DEFAULT_ROWS - 1 {
            guess(&mut state, "cat");
            assert!(!state.is_over(), "game ended early on row {row}");
        }

        guess(&mut state, "cat");
        assert!(state.is_over());
        assert!(!state.is_win());
        assert_eq!(state.phase(), Phase::Over(Outcome::Lose));
        assert_eq!(state.cursor(), DEFAULT_ROWS * 3);
        assert_eq!(statuses(&state, DEFAULT_ROWS - 1), vec![CellStatus::Absent; 3]);
        assert_eq!(state.outcome_message().as_deref(), Some("FAIL - Ans: OWL"));
    }

    #[test]
    fn custom_row_count() {
        let mut state = GameState::with_rows(Word::new("owl").unwrap(), 1);
        guess(&mut state, "cat");
        assert!(state.is_over());
        assert!(!state.is_win());

        let state = GameState::with_rows(Word::new("owl").unwrap(), 0);
        assert_eq!(state.rows(), 1);
    }

    #[test]
    fn actions_after_win_are_ignored() {
        let mut state = game("owl");
        guess(&mut state, "owl");
        let before = state.clone();

        state.receive_letter(letter('A'));
        state.delete_letter();
        state.submit_row();
        assert_eq!(state, before);
    }

    #[test]
    fn actions_after_loss_are_ignored() {
        let mut state = GameState::with_rows(Word::new("owl").unwrap(), 2);
        guess(&mut state, "cat");
        guess(&mut state, "dog");
        assert!(state.is_over());
        let before = state.clone();

        state.receive_letter(letter('A'));
        state.delete_letter();
        state.submit_row();
        assert_eq!(state, before);
    }

    #[test]
    fn controls_follow_phase() {
        let mut state = game("owl");
        assert_eq!(
            state.controls(),
            Controls {
                letter_input: true,
                delete: false,
                submit: false,
            }
        );

        state.receive_letter(letter('C'));
        assert_eq!(
            state.controls(),
            Controls {
                letter_input: true,
                delete: true,
                submit: false,
            }
        );

        type_word(&mut state, "at");
        assert_eq!(
            state.controls(),
            Controls {
                letter_input: false,
                delete: true,
                submit: true,
            }
        );

        state.submit_row();
        type_word(&mut state, "owl");
        state.submit_row();
        assert_eq!(
            state.controls(),
            Controls {
                letter_input: false,
                delete: false,
                submit: false,
            }
        );
    }

    #[test]
    fn outcome_message_absent_while_playing() {
        let mut state = game("owl");
        assert!(state.outcome_message().is_none());
        type_word(&mut state, "cat");
        assert!(state.outcome_message().is_none());
    }
}
