//! Win detection logic for tic-tac-toe.

use crate::codec::{self, Mask};
use crate::types::{Board, Player};
use tracing::instrument;

/// The eight three-in-a-row lines.
pub const WIN_MASKS: [Mask; 8] = [
    // Rows
    Mask::new(0b000_000_111),
    Mask::new(0b000_111_000),
    Mask::new(0b111_000_000),
    // Columns
    Mask::new(0b001_001_001),
    Mask::new(0b010_010_010),
    Mask::new(0b100_100_100),
    // Diagonals
    Mask::new(0b100_010_001),
    Mask::new(0b001_010_100),
];

/// True if `mask` holds every cell of at least one line.
pub fn is_winner(mask: Mask) -> bool {
    WIN_MASKS.iter().any(|line| mask.covers(*line))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row, `None`
/// otherwise. If both players hold a line (not reachable in play), X is
/// reported.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    let masks = codec::encode(board);
    if is_winner(masks.x) {
        Some(Player::X)
    } else if is_winner(masks.o) {
        Some(Player::O)
    } else {
        None
    }
}
