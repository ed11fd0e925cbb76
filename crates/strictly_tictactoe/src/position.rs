//! Board positions and the move value handed back to callers.

use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Search order: center, then corners, then edges.
    ///
    /// The center sits on four lines, corners on three, edges on two, so
    /// trying them in this order tightens alpha-beta bounds early.
    pub const MOVE_ORDER: [Position; 9] = [
        Position::Center,
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from row and column (each 0-2).
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Single-bit mask for this position.
    pub fn bit(self) -> u16 {
        1 << self.to_index()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A move returned by the engine: a row/column pair, or the `(-1, -1)`
/// sentinel when the board has no empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row (0-2), or -1 for the sentinel.
    pub row: i8,
    /// Column (0-2), or -1 for the sentinel.
    pub col: i8,
}

impl Move {
    /// The "no legal move" sentinel.
    pub const NONE: Move = Move { row: -1, col: -1 };

    /// True if this is the sentinel.
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// The targeted position, or `None` for the sentinel.
    pub fn position(&self) -> Option<Position> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        Position::from_row_col(row, col)
    }
}

impl From<Position> for Move {
    fn from(pos: Position) -> Self {
        // row and col are both below 3
        Self {
            row: pos.row() as i8,
            col: pos.col() as i8,
        }
    }
}

impl From<Option<Position>> for Move {
    fn from(pos: Option<Position>) -> Self {
        pos.map_or(Self::NONE, Self::from)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_position_index_round_trip() {
        for pos in Position::iter() {
            assert_eq!(Position::from_index(pos.to_index()), Some(pos));
            assert_eq!(Position::from_row_col(pos.row(), pos.col()), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
        assert_eq!(Position::from_row_col(3, 0), None);
    }

    #[test]
    fn test_move_order_is_permutation() {
        let mut sorted = Position::MOVE_ORDER;
        sorted.sort();
        assert_eq!(sorted, Position::ALL);
        assert_eq!(Position::MOVE_ORDER[0], Position::Center);
    }

    #[test]
    fn test_move_sentinel() {
        assert!(Move::NONE.is_none());
        assert_eq!(Move::NONE.position(), None);
        assert_eq!(Move::from(None), Move::NONE);

        let mv = Move::from(Position::TopRight);
        assert_eq!(mv, Move { row: 0, col: 2 });
        assert_eq!(mv.position(), Some(Position::TopRight));
        assert!(!mv.is_none());
    }
}
