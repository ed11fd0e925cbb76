//! Errors returned by the validating decision path.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Why a board snapshot cannot come from a legal game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum InvalidBoard {
    /// Piece counts differ by more than one.
    #[display("X has {} marks and O has {}", x, o)]
    CountMismatch {
        /// Marks held by X.
        x: usize,
        /// Marks held by O.
        o: usize,
    },

    /// Both players hold a completed line.
    #[display("both players have three in a row")]
    BothWin,

    /// The requested symbol already has more marks than its opponent.
    #[display("it is not {}'s turn", _0)]
    NotYourTurn(Player),
}

/// Error that can occur when asking the engine for a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Every square is occupied.
    #[display("No empty square left to play")]
    NoMoveAvailable,

    /// The snapshot is not a position from a legal game.
    #[display("Invalid board: {}", reason)]
    InvalidBoard {
        /// What is wrong with it.
        reason: InvalidBoard,
    },
}

impl std::error::Error for EngineError {}

impl From<InvalidBoard> for EngineError {
    fn from(reason: InvalidBoard) -> Self {
        Self::InvalidBoard { reason }
    }
}
