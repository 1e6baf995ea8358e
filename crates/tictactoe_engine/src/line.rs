//! The eight fixed lines that win a round.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Three positions that win the round when held by one player.
///
/// Only the eight constants in [`WinningLine::ALL`] exist; the order of that
/// array is the order in which lines are scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// Top row.
    pub const TOP_ROW: Self = Self([Position::TopLeft, Position::TopCenter, Position::TopRight]);
    /// Middle row.
    pub const MIDDLE_ROW: Self =
        Self([Position::MiddleLeft, Position::Center, Position::MiddleRight]);
    /// Bottom row.
    pub const BOTTOM_ROW: Self = Self([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]);
    /// Left column.
    pub const LEFT_COLUMN: Self =
        Self([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]);
    /// Center column.
    pub const CENTER_COLUMN: Self =
        Self([Position::TopCenter, Position::Center, Position::BottomCenter]);
    /// Right column.
    pub const RIGHT_COLUMN: Self = Self([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]);
    /// Top-left to bottom-right.
    pub const DIAGONAL: Self = Self([Position::TopLeft, Position::Center, Position::BottomRight]);
    /// Top-right to bottom-left.
    pub const ANTI_DIAGONAL: Self =
        Self([Position::TopRight, Position::Center, Position::BottomLeft]);

    /// All lines in scan order: rows, then columns, then diagonals.
    pub const ALL: [Self; 8] = [
        Self::TOP_ROW,
        Self::MIDDLE_ROW,
        Self::BOTTOM_ROW,
        Self::LEFT_COLUMN,
        Self::CENTER_COLUMN,
        Self::RIGHT_COLUMN,
        Self::DIAGONAL,
        Self::ANTI_DIAGONAL,
    ];

    /// The three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// True if the position lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "{}-{}-{}", a, b, c)
    }
}
