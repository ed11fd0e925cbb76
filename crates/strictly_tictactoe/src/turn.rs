//! Working out which mask moves next.
//!
//! Boards carry no turn flag, so on the compatibility path the mover is
//! reconstructed from piece counts. [`Sides::explicit`] skips the guess when
//! the caller knows whose turn it is.

use crate::codec::{Mask, Masks};
use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Mover and opponent masks for one decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sides {
    /// Cells held by the side to move.
    pub mover: Mask,
    /// Cells held by the other side.
    pub opponent: Mask,
    /// Symbol the mover plays.
    pub mover_symbol: Player,
}

impl Sides {
    /// Sides with `player` as the mover.
    pub fn explicit(masks: Masks, player: Player) -> Self {
        Self {
            mover: masks.of(player),
            opponent: masks.of(player.opponent()),
            mover_symbol: player,
        }
    }

    /// Guesses the mover from piece counts.
    ///
    /// On an empty board the requested symbol moves. Otherwise the side with
    /// fewer or equal marks moves, ties going to X. Boards whose counts
    /// differ by more than one get an arbitrary answer.
    pub fn resolve(masks: Masks, requested: Player) -> Self {
        if masks.occupied().is_empty() {
            return Self::explicit(masks, requested);
        }
        let mover = if masks.x.count() <= masks.o.count() {
            Player::X
        } else {
            Player::O
        };
        Self::explicit(masks, mover)
    }

    /// Cells held by either side.
    pub fn occupied(&self) -> Mask {
        self.mover.union(self.opponent)
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
