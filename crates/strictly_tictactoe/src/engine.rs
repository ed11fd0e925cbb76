//! Move selection: the entry points the game layer calls.

use crate::codec::{self, Masks};
use crate::difficulty::{Difficulty, EngineConfig, Strategy};
use crate::error::{EngineError, InvalidBoard};
use crate::evaluator::LinearModel;
use crate::position::{Move, Position};
use crate::rules::is_winner;
use crate::search::{SearchPolicy, SearchStats, Searcher};
use crate::turn::Sides;
use crate::types::{Board, Player};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How a decision was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reason {
    /// Best search score; ties broken at random.
    Searched,
    /// Forced random move from the mistake roll.
    ForcedMistake,
    /// Highest linear-model score.
    Evaluated,
}

/// A chosen move with what it took to find it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Cell to play.
    pub position: Position,
    /// Symbol the engine treated as the mover.
    pub mover: Player,
    /// Search score of the move, if it was searched.
    pub score: Option<i32>,
    /// Linear-model score of the move, if it was evaluated.
    pub evaluation: Option<f64>,
    /// Why this cell.
    pub reason: Reason,
    /// Search counters, including the deepest recursion reached.
    pub stats: SearchStats,
}

impl Decision {
    /// The decision as a row/column move.
    pub fn as_move(&self) -> Move {
        Move::from(self.position)
    }
}

/// Tic-tac-toe move-decision engine.
///
/// Holds no game state: every call works on the snapshot it is given. The
/// generator is the only thing that changes between calls, so a seeded
/// engine replays the same choices.
#[derive(Debug, Clone)]
pub struct Engine<R = StdRng> {
    rng: R,
    config: EngineConfig,
    model: LinearModel,
}

impl Engine<StdRng> {
    /// Engine with a reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Engine seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> Engine<R> {
    /// Engine drawing randomness from `rng`, with default tier settings.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            config: EngineConfig::default(),
            model: LinearModel::TRAINED,
        }
    }

    /// Replaces the tier settings.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the easy-tier model.
    pub fn with_model(mut self, model: LinearModel) -> Self {
        self.model = model;
        self
    }

    /// Tier settings in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Picks a move for `symbol` at `difficulty`, or [`Move::NONE`] when the
    /// board is full.
    ///
    /// The mover is inferred from piece counts and the board is not
    /// validated. Use [`Engine::decide`] for a checked call.
    pub fn choose_move(&mut self, board: &Board, symbol: Player, difficulty: Difficulty) -> Move {
        self.choose(board, symbol, difficulty)
            .map_or(Move::NONE, |decision| decision.as_move())
    }

    /// Like [`Engine::choose_move`], returning the whole decision.
    #[instrument(level = "debug", skip(self, board))]
    pub fn choose(
        &mut self,
        board: &Board,
        symbol: Player,
        difficulty: Difficulty,
    ) -> Option<Decision> {
        let masks = codec::encode(board);
        let sides = Sides::resolve(masks, symbol);
        let strategy = self.config.strategy(difficulty);
        self.select(board, sides, symbol, strategy)
    }

    /// Validating decision with the turn given explicitly.
    ///
    /// `symbol` is the mover; nothing is inferred. Boards that cannot come
    /// from a legal game are rejected with [`EngineError::InvalidBoard`]
    /// instead of producing an arbitrary move.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidBoard`] if piece counts differ by more than
    ///   one, both sides hold a line, or `symbol` has more marks than its
    ///   opponent.
    /// - [`EngineError::NoMoveAvailable`] if the board is full.
    #[instrument(level = "debug", skip(self, board))]
    pub fn decide(
        &mut self,
        board: &Board,
        symbol: Player,
        difficulty: Difficulty,
    ) -> Result<Decision, EngineError> {
        let masks = codec::encode(board);
        validate(masks)?;
        if masks.occupied() == codec::Mask::FULL {
            return Err(EngineError::NoMoveAvailable);
        }
        if masks.of(symbol).count() > masks.of(symbol.opponent()).count() {
            return Err(InvalidBoard::NotYourTurn(symbol).into());
        }
        let sides = Sides::explicit(masks, symbol);
        let strategy = self.config.strategy(difficulty);
        self.select(board, sides, symbol, strategy)
            .ok_or(EngineError::NoMoveAvailable)
    }

    fn select(
        &mut self,
        board: &Board,
        sides: Sides,
        symbol: Player,
        strategy: Strategy,
    ) -> Option<Decision> {
        let empty = sides.empty_positions();
        if empty.is_empty() {
            debug!("Board full, no move");
            return None;
        }

        let decision = match strategy {
            Strategy::Perfect { error_rate } => {
                if error_rate > 0 && self.rng.random_range(0..100u8) < error_rate {
                    self.forced_mistake(&empty, sides)
                } else {
                    self.perfect(sides)
                }
            }
            Strategy::Shallow { policy } => self.shallow(&empty, sides, policy),
            Strategy::Linear { perspective } => {
                let perspective = perspective.symbol(symbol);
                let position = self.model.best_move(board, perspective)?;
                Some(Decision {
                    position,
                    mover: perspective,
                    score: None,
                    evaluation: Some(
                        self.model
                            .score(&board.with(position, perspective), perspective),
                    ),
                    reason: Reason::Evaluated,
                    stats: SearchStats::default(),
                })
            }
        }?;

        debug!(
            position = %decision.position,
            score = ?decision.score,
            reason = ?decision.reason,
            nodes = decision.stats.nodes,
            max_depth = decision.stats.max_depth,
            "Engine chose move"
        );
        Some(decision)
    }

    fn forced_mistake(&mut self, empty: &[Position], sides: Sides) -> Option<Decision> {
        let position = *empty.choose(&mut self.rng)?;
        Some(Decision {
            position,
            mover: sides.mover_symbol,
            score: None,
            evaluation: None,
            reason: Reason::ForcedMistake,
            stats: SearchStats::default(),
        })
    }

    fn perfect(&mut self, sides: Sides) -> Option<Decision> {
        let mut searcher = Searcher::new(SearchPolicy::PERFECT);
        let mut best_score = i32::MIN;
        let mut best = Vec::with_capacity(9);

        for pos in Position::MOVE_ORDER {
            if sides.occupied().contains(pos) {
                continue;
            }
            let score = searcher.evaluate_move(sides, pos);
            if score > best_score {
                best_score = score;
                best.clear();
                best.push(pos);
            } else if score == best_score {
                best.push(pos);
            }
        }

        let position = *best.choose(&mut self.rng)?;
        Some(Decision {
            position,
            mover: sides.mover_symbol,
            score: Some(best_score),
            evaluation: None,
            reason: Reason::Searched,
            stats: searcher.stats(),
        })
    }

    fn shallow(&mut self, empty: &[Position], sides: Sides, policy: SearchPolicy) -> Option<Decision> {
        let mut order = empty.to_vec();
        order.shuffle(&mut self.rng);

        let mut searcher = Searcher::with_rng(policy, &mut self.rng);
        let mut best: Option<(Position, i32)> = None;
        for pos in order {
            let score = searcher.evaluate_move(sides, pos);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((pos, score));
            }
        }

        let (position, score) = best?;
        Some(Decision {
            position,
            mover: sides.mover_symbol,
            score: Some(score),
            evaluation: None,
            reason: Reason::Searched,
            stats: searcher.stats(),
        })
    }
}

/// Rejects snapshots that no legal game produces.
fn validate(masks: Masks) -> Result<(), InvalidBoard> {
    let x = masks.x.count() as usize;
    let o = masks.o.count() as usize;
    if x.abs_diff(o) > 1 {
        return Err(InvalidBoard::CountMismatch { x, o });
    }
    if is_winner(masks.x) && is_winner(masks.o) {
        return Err(InvalidBoard::BothWin);
    }
    Ok(())
}
