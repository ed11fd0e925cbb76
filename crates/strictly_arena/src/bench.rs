//! Wall-clock timing of each tier on the empty board, the slowest position
//! to search.

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use serde::Serialize;
use std::time::{Duration, Instant};
use strictly_tictactoe::{Board, Difficulty, Engine, Move, Player, SearchStats};
use strum::IntoEnumIterator;
use tracing::{info, instrument};

/// Bytes assumed per search frame when estimating stack use.
pub const FRAME_BYTES: u32 = 64;

/// Timing for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BenchRow {
    /// Tier timed.
    pub difficulty: Difficulty,
    /// Decisions made.
    pub iterations: u32,
    /// Time for all of them.
    pub total: Duration,
    /// Move from the last run.
    pub last_move: Move,
    /// Counters merged over every run.
    pub stats: SearchStats,
}

impl BenchRow {
    /// Mean time per decision.
    pub fn average(&self) -> Duration {
        match self.iterations {
            0 => Duration::ZERO,
            n => self.total / n,
        }
    }

    /// Stack estimate from the deepest recursion seen.
    pub fn estimated_stack_bytes(&self) -> u32 {
        u32::from(self.stats.max_depth) * FRAME_BYTES
    }
}

/// Timings for every tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchReport {
    /// One row per tier, hard first.
    pub rows: Vec<BenchRow>,
}

impl std::fmt::Display for BenchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tic-tac-toe engine benchmark (empty board, X to move)")?;
        for row in &self.rows {
            writeln!(f)?;
            writeln!(f, "Tier: {}", row.difficulty)?;
            writeln!(f, "Last move: {}", row.last_move)?;
            writeln!(
                f,
                "Total time ({} runs): {:.6} s",
                row.iterations,
                row.total.as_secs_f64()
            )?;
            writeln!(f, "Avg time per move: {:.8} s", row.average().as_secs_f64())?;
            if row.stats.max_depth == 0 {
                writeln!(f, "Max recursion depth: 0 (no search)")?;
            } else {
                writeln!(f, "Max recursion depth: {}", row.stats.max_depth)?;
                writeln!(
                    f,
                    "Est. stack usage: ~{} bytes ({} bytes/frame)",
                    row.estimated_stack_bytes(),
                    FRAME_BYTES
                )?;
            }
        }
        Ok(())
    }
}

/// Times `config.iterations()` decisions per tier.
///
/// # Errors
///
/// Propagates engine refusals, which the empty board never triggers.
#[instrument(skip(config), fields(iterations = config.iterations()))]
pub fn bench(config: &ArenaConfig) -> Result<BenchReport, ArenaError> {
    let board = Board::new();
    let iterations = *config.iterations();
    let mut rows = Vec::new();

    for difficulty in Difficulty::iter() {
        let mut engine = match config.seed() {
            Some(seed) => Engine::seeded(*seed),
            None => Engine::from_os_rng(),
        }
        .with_config(*config.engine());

        let mut stats = SearchStats::default();
        let mut last_move = Move::NONE;
        let start = Instant::now();
        for _ in 0..iterations {
            let decision = engine.decide(&board, Player::X, difficulty)?;
            stats.merge(decision.stats);
            last_move = decision.as_move();
        }
        let total = start.elapsed();

        let row = BenchRow {
            difficulty,
            iterations,
            total,
            last_move,
            stats,
        };
        info!(
            %difficulty,
            avg_ns = row.average().as_nanos() as u64,
            max_depth = stats.max_depth,
            "Tier timed"
        );
        rows.push(row);
    }

    Ok(BenchReport { rows })
}
