//! One-shot move suggestion for a board given as text.

use crate::error::ArenaError;
use derive_new::new;
use serde::Serialize;
use strictly_tictactoe::{Board, Decision, Difficulty, Engine, EngineConfig, Move, Player};
use tracing::{info, instrument};

/// A suggested move together with the board it applies to.
#[derive(Debug, Clone, Serialize, new)]
pub struct Suggestion {
    /// Board as given.
    pub board: Board,
    /// Tier that decided.
    pub difficulty: Difficulty,
    /// Row/column the engine hands back.
    pub chosen: Move,
    /// Full decision record.
    pub decision: Decision,
}

impl Suggestion {
    /// Board after the suggested mark goes down.
    pub fn resulting_board(&self) -> Board {
        self.board.with(self.decision.position, self.decision.mover)
    }

    /// Pretty JSON rendering.
    pub fn to_json(&self) -> Result<String, ArenaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let decision = &self.decision;
        writeln!(
            f,
            "{} plays {} ({}) at {}",
            decision.mover, decision.position, self.chosen, self.difficulty
        )?;
        writeln!(f, "Reason: {:?}", decision.reason)?;
        if let Some(score) = decision.score {
            writeln!(f, "Search score: {}", score)?;
        }
        if let Some(evaluation) = decision.evaluation {
            writeln!(f, "Linear score: {:.4}", evaluation)?;
        }
        writeln!(
            f,
            "Nodes: {} | Max depth: {} | Cutoffs: {}",
            decision.stats.nodes, decision.stats.max_depth, decision.stats.cutoffs
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resulting_board())
    }
}

/// Parses `board_text` and asks a fresh engine for `symbol`'s move.
///
/// # Errors
///
/// Fails if the text is not a board, or if the engine rejects the position.
#[instrument(skip(board_text, config))]
pub fn suggest(
    board_text: &str,
    symbol: Player,
    difficulty: Difficulty,
    config: EngineConfig,
    seed: Option<u64>,
) -> Result<Suggestion, ArenaError> {
    let board: Board = board_text.parse()?;
    let decision = match seed {
        Some(seed) => Engine::seeded(seed),
        None => Engine::from_os_rng(),
    }
    .with_config(config)
    .decide(&board, symbol, difficulty)?;

    info!(position = %decision.position, reason = ?decision.reason, "Suggested move");
    Ok(Suggestion::new(board, difficulty, decision.as_move(), decision))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::{EngineError, Position};

    #[test]
    fn test_suggest_blocks() {
        let suggestion = suggest(
            "XX_/_O_/___",
            Player::O,
            Difficulty::Hard,
            EngineConfig::default(),
            Some(3),
        )
        .unwrap();
        assert_eq!(suggestion.chosen, Move { row: 0, col: 2 });
        assert_eq!(
            suggestion.resulting_board().get(Position::TopRight),
            strictly_tictactoe::Square::Occupied(Player::O)
        );
    }

    #[test]
    fn test_suggest_rejects_bad_text() {
        let err = suggest("XX", Player::O, Difficulty::Hard, EngineConfig::default(), Some(1))
            .unwrap_err();
        assert!(matches!(err, ArenaError::Board(_)));
    }

    #[test]
    fn test_suggest_full_board() {
        let err = suggest(
            "XOX/XOO/OXX",
            Player::X,
            Difficulty::Easy,
            EngineConfig::default(),
            Some(1),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ArenaError::Engine(EngineError::NoMoveAvailable)
        ));
    }

    #[test]
    fn test_text_and_json_render() {
        let suggestion = suggest(
            "___/___/___",
            Player::X,
            Difficulty::Easy,
            EngineConfig::default(),
            Some(1),
        )
        .unwrap();
        assert!(suggestion.to_string().contains("Reason: Evaluated"));
        let json: serde_json::Value = serde_json::from_str(&suggestion.to_json().unwrap()).unwrap();
        assert_eq!(json["decision"]["position"], "Center");
        assert_eq!(json["chosen"]["row"], 1);
    }
}
