//! Terminal-state rules for tic-tac-toe.
//!
//! The mask functions are what the search runs on; the board-level helpers
//! wrap them for callers that hold a [`Board`](crate::Board).

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full, is_full_board};
pub use win::{WIN_MASKS, check_winner, is_winner};
