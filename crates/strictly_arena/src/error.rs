//! Errors surfaced by the arena commands.

use crate::config::ConfigError;
use crate::referee::PlaceError;
use derive_more::{Display, From};
use strictly_tictactoe::{BoardError, EngineError};

/// Anything an arena command can fail with.
#[derive(Debug, Display, From)]
pub enum ArenaError {
    /// Board text could not be parsed.
    #[display("{}", _0)]
    Board(BoardError),
    /// The engine refused the position.
    #[display("{}", _0)]
    Engine(EngineError),
    /// The referee refused a placement.
    #[display("Referee: {}", _0)]
    Place(PlaceError),
    /// Configuration could not be loaded.
    #[display("{}", _0)]
    Config(ConfigError),
    /// Output could not be serialized.
    #[display("Serialization failed: {}", _0)]
    Json(serde_json::Error),
}

impl std::error::Error for ArenaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArenaError::Board(e) => Some(e),
            ArenaError::Engine(e) => Some(e),
            ArenaError::Place(e) => Some(e),
            ArenaError::Config(e) => Some(e),
            ArenaError::Json(e) => Some(e),
        }
    }
}
