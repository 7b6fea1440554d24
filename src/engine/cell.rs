//! Grid cells

use crate::core::{Feedback, Letter};

/// Display status of a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellStatus {
    #[default]
    Empty,
    Filled,
    Correct,
    Present,
    Absent,
}

impl From<Feedback> for CellStatus {
    fn from(feedback: Feedback) -> Self {
        match feedback {
            Feedback::Correct => Self::Correct,
            Feedback::Present => Self::Present,
            Feedback::Absent => Self::Absent,
        }
    }
}

impl CellStatus {
    /// True once the cell's row has been submitted and scored
    #[must_use]
    pub const fn is_evaluated(self) -> bool {
        matches!(self, Self::Correct | Self::Present | Self::Absent)
    }
}

/// One square of the guess grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub letter: Option<Letter>,
    pub status: CellStatus,
}

impl Cell {
    /// A blank cell
    pub const BLANK: Self = Self {
        letter: None,
        status: CellStatus::Empty,
    };

    /// A typed but not yet evaluated cell
    #[must_use]
    pub const fn filled(letter: Letter) -> Self {
        Self {
            letter: Some(letter),
            status: CellStatus::Filled,
        }
    }

    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.letter.is_none()
    }
}
