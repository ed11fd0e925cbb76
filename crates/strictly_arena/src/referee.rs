//! Typestate referee for engine-vs-engine games.
//!
//! The phase lives in the type parameter: only `Game<InProgress>` accepts
//! marks, and only `Game<Won>` can name a winner.

use serde::{Deserialize, Serialize};
use strictly_tictactoe::{Board, Player, Position, Square, check_winner, is_full_board};
use tracing::instrument;

/// Phase marker: moves can still be made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InProgress;

/// Phase: the last mark completed a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Won {
    winner: Player,
}

/// Phase marker: the board filled up without a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw;

/// A refereed game in phase `S`.
#[derive(Debug, Clone)]
pub struct Game<S> {
    board: Board,
    to_move: Player,
    history: Vec<Position>,
    phase: S,
}

/// What placing a mark led to.
#[derive(Debug)]
pub enum GameTransition {
    /// Next player to move.
    InProgress(Game<InProgress>),
    /// The mover completed a line.
    Won(Game<Won>),
    /// Board full, no line.
    Draw(Game<Draw>),
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// This player completed a line.
    Winner(Player),
    /// Nobody did.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Rejected placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
    /// No empty cell is left to fall back on.
    #[display("No empty square left")]
    NoEmptySquare,
}

impl std::error::Error for PlaceError {}

impl Game<InProgress> {
    /// Empty board with `first` to move.
    #[instrument]
    pub fn start(first: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            history: Vec::new(),
            phase: InProgress,
        }
    }

    /// Player whose mark goes down next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Places the mover's mark at `pos`, consuming the game.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::SquareOccupied`] if `pos` is taken.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(mut self, pos: Position) -> Result<GameTransition, PlaceError> {
        if !self.board.is_empty(pos) {
            return Err(PlaceError::SquareOccupied(pos));
        }
        self.board.set(pos, Square::Occupied(self.to_move));
        self.history.push(pos);

        if let Some(winner) = check_winner(&self.board) {
            return Ok(GameTransition::Won(self.into_phase(Won { winner })));
        }
        if is_full_board(&self.board) {
            return Ok(GameTransition::Draw(self.into_phase(Draw)));
        }

        self.to_move = self.to_move.opponent();
        Ok(GameTransition::InProgress(self))
    }

    /// Places at `pos` if it is empty, otherwise at the first empty cell
    /// in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::NoEmptySquare`] if there is nowhere to play.
    pub fn place_or_first_empty(self, pos: Option<Position>) -> Result<GameTransition, PlaceError> {
        let target = pos
            .filter(|p| self.board.is_empty(*p))
            .or_else(|| self.board.empty_positions().first().copied())
            .ok_or(PlaceError::NoEmptySquare)?;
        self.place(target)
    }

    fn into_phase<T>(self, phase: T) -> Game<T> {
        Game {
            board: self.board,
            to_move: self.to_move,
            history: self.history,
            phase,
        }
    }
}

impl<S> Game<S> {
    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cells played, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }
}

impl Game<Won> {
    /// The player who completed a line.
    pub fn winner(&self) -> Player {
        self.phase.winner
    }
}

impl GameTransition {
    /// Outcome, if the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameTransition::InProgress(_) => None,
            GameTransition::Won(game) => Some(Outcome::Winner(game.winner())),
            GameTransition::Draw(_) => Some(Outcome::Draw),
        }
    }
}
