//! Tic-tac-toe move-decision engine.
//!
//! The game layer owns the board and the turn; it hands the engine a
//! [`Board`] snapshot, the symbol to play and a [`Difficulty`], and applies
//! the [`Move`] it gets back.
//!
//! # Architecture
//!
//! - **codec**: board to per-symbol 9-bit masks and back
//! - **rules**: win and full-board detection on masks
//! - **turn**: which mask moves next
//! - **search**: alpha-beta minimax, tuned by a [`SearchPolicy`]
//! - **evaluator**: one-ply linear model for the easy tier
//! - **engine**: the tiers and the entry points
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, Difficulty, Engine, Move, Player};
//!
//! let board: Board = "XX_/_O_/___".parse().unwrap();
//! let mut engine = Engine::seeded(7);
//! let mv = engine.choose_move(&board, Player::O, Difficulty::Hard);
//! assert_eq!(mv, Move { row: 0, col: 2 });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod codec;
mod difficulty;
mod engine;
mod error;
mod evaluator;
mod position;
pub mod rules;
mod search;
mod turn;
mod types;

pub use codec::{Mask, Masks, decode, encode};
pub use difficulty::{Difficulty, EngineConfig, MediumVariant, Strategy};
pub use engine::{Decision, Engine, Reason};
pub use error::{EngineError, InvalidBoard};
pub use evaluator::{LinearModel, LinearPerspective};
pub use position::{Move, Position};
pub use rules::{WIN_MASKS, check_winner, is_draw, is_full, is_full_board, is_winner};
pub use search::{INFINITY, SearchPolicy, SearchStats, Searcher, WIN_SCORE, search};
pub use turn::Sides;
pub use types::{Board, BoardError, Player, Square};
