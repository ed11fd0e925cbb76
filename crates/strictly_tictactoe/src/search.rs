//! Alpha-beta minimax over bitboards.
//!
//! One [`Searcher`] serves every tier. A [`SearchPolicy`] switches on the
//! knobs that weaken it: a depth cap, pruning, and shuffled move order.

use crate::codec::Mask;
use crate::position::Position;
use crate::rules::{is_full, is_winner};
use crate::turn::Sides;
use rand::RngCore;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Score of a win found at depth 0. Wins at depth `d` score `WIN_SCORE - d`.
pub const WIN_SCORE: i32 = 10;

/// Bound used for the initial alpha-beta window.
pub const INFINITY: i32 = 1000;

/// Knobs for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchPolicy {
    /// Non-terminal nodes at or below this depth score 0.
    pub depth_cap: Option<u8>,
    /// Stop exploring siblings once `alpha >= beta`.
    pub pruning: bool,
    /// Shuffle candidate cells at every node.
    pub shuffle: bool,
}

impl SearchPolicy {
    /// Unlimited depth, pruning, fixed center-corners-edges order.
    pub const PERFECT: SearchPolicy = SearchPolicy {
        depth_cap: None,
        pruning: true,
        shuffle: false,
    };

    /// Plain minimax with no pruning. Same values as [`Self::PERFECT`].
    pub const EXHAUSTIVE: SearchPolicy = SearchPolicy {
        depth_cap: None,
        pruning: false,
        shuffle: false,
    };

    /// Depth-capped search with shuffled move order.
    pub const fn shallow(depth_cap: u8) -> Self {
        Self {
            depth_cap: Some(depth_cap),
            pruning: true,
            shuffle: true,
        }
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self::PERFECT
    }
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered, terminal or not.
    pub nodes: u64,
    /// Deepest recursion depth entered.
    pub max_depth: u8,
    /// Times the remaining siblings of a node were pruned.
    pub cutoffs: u64,
}

impl SearchStats {
    fn visit(&mut self, depth: u8) {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Folds another set of counters into this one.
    pub fn merge(&mut self, other: SearchStats) {
        self.nodes += other.nodes;
        self.max_depth = self.max_depth.max(other.max_depth);
        self.cutoffs += other.cutoffs;
    }
}

/// Minimax searcher with its policy, optional generator and counters.
pub struct Searcher<'a> {
    policy: SearchPolicy,
    rng: Option<&'a mut dyn RngCore>,
    stats: SearchStats,
}

impl std::fmt::Debug for Searcher<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Searcher")
            .field("policy", &self.policy)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl<'a> Searcher<'a> {
    /// Searcher without a generator. A shuffling policy keeps the fixed order.
    pub fn new(policy: SearchPolicy) -> Self {
        Self {
            policy,
            rng: None,
            stats: SearchStats::default(),
        }
    }

    /// Searcher that shuffles with `rng` when the policy asks for it.
    pub fn with_rng(policy: SearchPolicy, rng: &'a mut dyn RngCore) -> Self {
        Self {
            policy,
            rng: Some(rng),
            stats: SearchStats::default(),
        }
    }

    /// Policy in use.
    pub fn policy(&self) -> SearchPolicy {
        self.policy
    }

    /// Counters so far.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Scores the position after the mover plays `pos`, with the opponent
    /// to reply.
    pub fn evaluate_move(&mut self, sides: Sides, pos: Position) -> i32 {
        self.score(
            sides.mover.with(pos),
            sides.opponent,
            1,
            -INFINITY,
            INFINITY,
            false,
        )
    }

    /// Minimax value of a position from the mover's point of view.
    ///
    /// `mover` is always the maximizing side's mask; `maximizing` says whose
    /// turn it is at this node.
    pub fn score(
        &mut self,
        mover: Mask,
        opponent: Mask,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.visit(depth);

        if is_winner(mover) {
            return WIN_SCORE - i32::from(depth);
        }
        if is_winner(opponent) {
            return -WIN_SCORE + i32::from(depth);
        }
        if is_full(mover, opponent) {
            return 0;
        }
        if self.policy.depth_cap.is_some_and(|cap| depth >= cap) {
            return 0;
        }

        let mut buf = [Position::Center; 9];
        let moves = self.candidates(mover.union(opponent), &mut buf);

        let mut best = if maximizing { -INFINITY } else { INFINITY };
        for &pos in moves.iter() {
            if maximizing {
                let val = self.score(mover.with(pos), opponent, depth + 1, alpha, beta, false);
                best = best.max(val);
                alpha = alpha.max(val);
            } else {
                let val = self.score(mover, opponent.with(pos), depth + 1, alpha, beta, true);
                best = best.min(val);
                beta = beta.min(val);
            }
            if self.policy.pruning && alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }

    /// Empty cells in search order, shuffled if the policy says so.
    fn candidates<'b>(&mut self, occupied: Mask, buf: &'b mut [Position; 9]) -> &'b [Position] {
        let mut len = 0;
        for pos in Position::MOVE_ORDER {
            if !occupied.contains(pos) {
                buf[len] = pos;
                len += 1;
            }
        }
        let moves = &mut buf[..len];
        if self.policy.shuffle
            && let Some(rng) = self.rng.as_deref_mut()
        {
            moves.shuffle(rng);
        }
        moves
    }
}

/// Perfect alpha-beta search from an arbitrary node.
///
/// Pure and deterministic: the fixed move order only changes which nodes
/// are visited, never the value.
pub fn search(
    mover: Mask,
    opponent: Mask,
    depth: u8,
    alpha: i32,
    beta: i32,
    maximizing: bool,
) -> i32 {
    Searcher::new(SearchPolicy::PERFECT).score(mover, opponent, depth, alpha, beta, maximizing)
}
