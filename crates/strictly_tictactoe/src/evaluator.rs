//! One-ply linear board evaluation for the easy tier.
//!
//! A logistic-regression model trained offline on finished games: each cell
//! contributes its weight with sign +1 for the evaluating symbol, -1 for the
//! other and 0 when empty. The sigmoid is skipped; only the ordering of
//! scores matters for move selection.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};

/// Which symbol the easy tier evaluates for.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LinearPerspective {
    /// Always place and score X, whatever symbol the engine plays.
    #[default]
    FixedX,
    /// Place and score the symbol the engine was asked to play.
    EngineSymbol,
}

impl LinearPerspective {
    /// Symbol to evaluate for, given the engine's symbol.
    pub fn symbol(self, engine_symbol: Player) -> Player {
        match self {
            LinearPerspective::FixedX => Player::X,
            LinearPerspective::EngineSymbol => engine_symbol,
        }
    }
}

/// Per-cell weights plus bias.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// Row-major cell weights.
    pub weights: [f64; 9],
    /// Intercept.
    pub bias: f64,
}

impl LinearModel {
    /// The trained model. The center carries the largest weight, corners
    /// come next, edges last.
    pub const TRAINED: LinearModel = LinearModel {
        weights: [
            3.928391392624212,
            3.6032407817955696,
            4.011058129716569,
            3.6831967066011444,
            4.313335296889612,
            3.6169667100902494,
            3.9842838685550195,
            3.669842436819702,
            3.984526284468059,
        ],
        bias: -1.6450287057758302,
    };

    /// Weighted feature sum without the bias.
    pub fn raw(&self, board: &Board, perspective: Player) -> f64 {
        board
            .squares()
            .iter()
            .zip(self.weights.iter())
            .map(|(square, weight)| feature(*square, perspective) * weight)
            .sum()
    }

    /// Full linear score, bias included.
    pub fn score(&self, board: &Board, perspective: Player) -> f64 {
        self.raw(board, perspective) + self.bias
    }

    /// Greedy one-ply choice: the empty cell whose resulting board scores
    /// highest for `perspective`, scanning row-major and keeping the first
    /// maximum.
    pub fn best_move(&self, board: &Board, perspective: Player) -> Option<Position> {
        let mut best: Option<(Position, f64)> = None;
        for pos in board.empty_positions() {
            let value = self.score(&board.with(pos, perspective), perspective);
            if best.is_none_or(|(_, top)| value > top) {
                best = Some((pos, value));
            }
        }
        best.map(|(pos, _)| pos)
    }
}

impl Default for LinearModel {
    fn default() -> Self {
        Self::TRAINED
    }
}

fn feature(square: Square, perspective: Player) -> f64 {
    match square {
        Square::Empty => 0.0,
        Square::Occupied(player) if player == perspective => 1.0,
        Square::Occupied(_) => -1.0,
    }
}
