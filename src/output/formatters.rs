//! Formatting utilities for terminal output

use crate::core::Feedback;
use crate::engine::{Cell, CellStatus, HintStatus, KeyboardHints};
use colored::{ColoredString, Colorize};

/// Letter shown in a cell, blank as a space
#[must_use]
pub fn cell_char(cell: &Cell) -> char {
    cell.letter.map_or(' ', |letter| letter.as_char())
}

/// Format evaluated cells as an emoji string, '·' for unevaluated ones
#[must_use]
pub fn row_to_emoji(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(|cell| match cell.status {
            CellStatus::Correct => Feedback::Correct.emoji(),
            CellStatus::Present => Feedback::Present.emoji(),
            CellStatus::Absent => Feedback::Absent.emoji(),
            CellStatus::Empty | CellStatus::Filled => '·',
        })
        .collect()
}

/// A single cell as a colored tile
#[must_use]
pub fn colored_cell(cell: &Cell) -> ColoredString {
    let tile = format!(" {} ", cell_char(cell));
    match cell.status {
        CellStatus::Correct => tile.white().bold().on_green(),
        CellStatus::Present => tile.white().bold().on_yellow(),
        CellStatus::Absent => tile.white().on_bright_black(),
        CellStatus::Filled => tile.black().bold().on_white(),
        CellStatus::Empty => tile.on_white(),
    }
}

/// A whole row of colored tiles
#[must_use]
pub fn colored_row(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(|cell| colored_cell(cell).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The 26-letter hint keyboard as colored tiles, `per_line` keys per line
#[must_use]
pub fn colored_keyboard(hints: &KeyboardHints, per_line: usize) -> Vec<String> {
    let keys: Vec<String> = hints
        .iter()
        .map(|(letter, hint)| {
            let key = format!(" {letter} ");
            let tile = match hint {
                HintStatus::Correct => key.white().bold().on_green(),
                HintStatus::Present => key.white().bold().on_yellow(),
                HintStatus::Absent => key.black().on_bright_black(),
                HintStatus::Unused => key.black().on_cyan(),
            };
            tile.to_string()
        })
        .collect();

    keys.chunks(per_line.max(1))
        .map(|chunk| chunk.join(" "))
        .collect()
}
