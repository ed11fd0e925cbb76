//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::codec::{self, Mask};
use crate::types::Board;
use tracing::instrument;

/// True if the two masks together cover every cell.
pub fn is_full(a: Mask, b: Mask) -> bool {
    a.union(b) == Mask::FULL
}

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full_board(board: &Board) -> bool {
    let masks = codec::encode(board);
    is_full(masks.x, masks.o)
}

/// A full board with no winner.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full_board(board) && check_winner(board).is_none()
}
