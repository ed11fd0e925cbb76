//! Bitboard encoding of a board snapshot.
//!
//! Bit `i` of a mask is cell `i` in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//!  3 | 4 | 5
//!  6 | 7 | 8
//! ```

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};

/// Nine-bit occupancy mask for one symbol.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{:#05x}", _0)]
pub struct Mask(u16);

impl Mask {
    /// No cells.
    pub const EMPTY: Mask = Mask(0);
    /// All nine cells.
    pub const FULL: Mask = Mask(0x1FF);

    /// Wraps raw bits, dropping anything above bit 8.
    pub const fn new(bits: u16) -> Self {
        Self(bits & Self::FULL.0)
    }

    /// Raw bits.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// True if the cell at `pos` is set.
    pub fn contains(self, pos: Position) -> bool {
        self.0 & pos.bit() != 0
    }

    /// Mask with the cell at `pos` set.
    pub fn with(self, pos: Position) -> Self {
        Self(self.0 | pos.bit())
    }

    /// True if every bit of `other` is also set here.
    pub const fn covers(self, other: Mask) -> bool {
        self.0 & other.0 == other.0
    }

    /// Number of occupied cells.
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// True if no cell is set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Cells set in either mask.
    pub fn union(self, other: Mask) -> Self {
        Self(self.0 | other.0)
    }

    /// Cells set in both masks.
    pub fn intersection(self, other: Mask) -> Self {
        Self(self.0 & other.0)
    }
}

/// The two per-symbol masks of a board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Masks {
    /// Cells holding X.
    pub x: Mask,
    /// Cells holding O.
    pub o: Mask,
}

impl Masks {
    /// Mask belonging to `player`.
    pub fn of(&self, player: Player) -> Mask {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// All occupied cells.
    pub fn occupied(&self) -> Mask {
        self.x.union(self.o)
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        let occupied = self.occupied();
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| !occupied.contains(*pos))
            .collect()
    }
}

/// Encodes a board into one mask per symbol.
pub fn encode(board: &Board) -> Masks {
    let mut masks = Masks::default();
    for (pos, square) in Position::ALL.iter().zip(board.squares()) {
        match square {
            Square::Occupied(Player::X) => masks.x = masks.x.with(*pos),
            Square::Occupied(Player::O) => masks.o = masks.o.with(*pos),
            Square::Empty => {}
        }
    }
    masks
}

/// Rebuilds a board from its masks. A cell set in both masks decodes as X.
pub fn decode(masks: Masks) -> Board {
    let mut board = Board::new();
    for pos in Position::ALL {
        if masks.x.contains(pos) {
            board.set(pos, Square::Occupied(Player::X));
        } else if masks.o.contains(pos) {
            board.set(pos, Square::Occupied(Player::O));
        }
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        // X O X
        // O X _
        // _ _ X
        let board: Board = "XOX/OX_/__X".parse().unwrap();
        let masks = encode(&board);
        assert_eq!(masks.x.bits(), 0b1_0001_0101);
        assert_eq!(masks.o.bits(), 0b0_0000_1010);
        assert_eq!(masks.x.intersection(masks.o), Mask::EMPTY);
    }

    #[test]
    fn test_encode_empty_board() {
        let masks = encode(&Board::new());
        assert!(masks.x.is_empty());
        assert!(masks.o.is_empty());
        assert_eq!(masks.empty_positions().len(), 9);
    }

    #[test]
    fn test_decode_round_trip() {
        let board: Board = "XO_/_XO/O_X".parse().unwrap();
        assert_eq!(decode(encode(&board)), board);
    }

    #[test]
    fn test_mask_new_truncates() {
        assert_eq!(Mask::new(0xFFFF), Mask::FULL);
        assert_eq!(Mask::FULL.count(), 9);
        assert_eq!(Mask::FULL.to_string(), "0x1ff");
    }
}
