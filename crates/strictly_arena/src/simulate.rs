//! Difficulty assessment: each tier against a fixed depth-limited opponent.
//!
//! The tier under test plays X, the benchmark plays O, and the starting
//! side alternates game by game so both get the same number of openings.

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::referee::{Game, GameTransition, Outcome};
use rand::Rng;
use serde::Serialize;
use strictly_tictactoe::{Difficulty, Engine, MediumVariant, Player};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// Symbol the tier under test plays.
pub const TEST_SYMBOL: Player = Player::X;
/// Symbol the benchmark opponent plays.
pub const BENCHMARK_SYMBOL: Player = Player::O;

/// Results for one tier, from the tested side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Games the tested tier won.
    pub wins: u32,
    /// Games the benchmark won.
    pub losses: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(player) if player == TEST_SYMBOL => self.wins += 1,
            Outcome::Winner(_) => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Games counted.
    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Share of `count` in percent of all games, 0 when nothing was played.
    pub fn percent(&self, count: u32) -> f64 {
        match self.total() {
            0 => 0.0,
            total => f64::from(count) / f64::from(total) * 100.0,
        }
    }
}

/// Tally for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierReport {
    /// Tier under test.
    pub difficulty: Difficulty,
    /// Its results.
    pub tally: Tally,
}

/// Results of a whole simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    /// Games per tier, always even.
    pub games: u32,
    /// One entry per tier, hard first.
    pub tiers: Vec<TierReport>,
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AI difficulty simulation")?;
        writeln!(f, "Opponent: depth-limited search as {}", BENCHMARK_SYMBOL)?;
        writeln!(
            f,
            "Games per tier: {} ({} starts each side)",
            self.games,
            self.games / 2
        )?;
        for report in &self.tiers {
            let tally = report.tally;
            writeln!(f)?;
            writeln!(f, "Tier: {} as {}", report.difficulty, TEST_SYMBOL)?;
            writeln!(f, "Wins:   {:6} ({:5.1}%)", tally.wins, tally.percent(tally.wins))?;
            writeln!(f, "Losses: {:6} ({:5.1}%)", tally.losses, tally.percent(tally.losses))?;
            writeln!(f, "Draws:  {:6} ({:5.1}%)", tally.draws, tally.percent(tally.draws))?;
        }
        Ok(())
    }
}

/// Plays one game to the end and returns how it finished.
///
/// Each side is asked with an explicit turn. A refused or empty decision
/// falls back to the first empty cell.
///
/// # Errors
///
/// Fails only if the referee has no cell left to place on.
#[instrument(level = "debug", skip(tested, benchmark))]
pub fn play_game<R: Rng>(
    tested: &mut Engine<R>,
    difficulty: Difficulty,
    benchmark: &mut Engine<R>,
    tested_starts: bool,
) -> Result<Outcome, ArenaError> {
    let first = if tested_starts {
        TEST_SYMBOL
    } else {
        BENCHMARK_SYMBOL
    };
    let mut game = Game::start(first);

    loop {
        let mover = game.to_move();
        let decision = if mover == TEST_SYMBOL {
            tested.decide(game.board(), mover, difficulty)
        } else {
            benchmark.decide(game.board(), mover, Difficulty::Medium)
        };
        let position = match decision {
            Ok(decision) => Some(decision.position),
            Err(e) => {
                warn!(error = %e, player = %mover, "Engine refused, falling back");
                None
            }
        };

        match game.place_or_first_empty(position)? {
            GameTransition::InProgress(next) => game = next,
            finished => {
                let outcome = finished.outcome().unwrap_or(Outcome::Draw);
                debug!(%outcome, "Game finished");
                return Ok(outcome);
            }
        }
    }
}

/// Runs every tier against the benchmark.
///
/// The game count is rounded up to an even number so both sides open
/// equally often.
///
/// # Errors
///
/// Propagates referee failures from [`play_game`].
#[instrument(skip(config), fields(games = config.games()))]
pub fn simulate(config: &ArenaConfig) -> Result<SimulationReport, ArenaError> {
    let games = config.games().div_ceil(2) * 2;
    let benchmark_config = config.engine().with_medium_variant(MediumVariant::DepthLimited);

    let mut tiers = Vec::new();
    for (index, difficulty) in Difficulty::iter().enumerate() {
        let (tested, benchmark) = match config.seed() {
            Some(seed) => (
                Engine::seeded(seed.wrapping_add(index as u64 * 2)),
                Engine::seeded(seed.wrapping_add(index as u64 * 2 + 1)),
            ),
            None => (Engine::from_os_rng(), Engine::from_os_rng()),
        };
        let mut tested = tested.with_config(*config.engine());
        let mut benchmark = benchmark.with_config(benchmark_config);

        let mut tally = Tally::default();
        for game in 0..games {
            let outcome = play_game(&mut tested, difficulty, &mut benchmark, game % 2 == 0)?;
            tally.record(outcome);
        }

        info!(
            %difficulty,
            wins = tally.wins,
            losses = tally.losses,
            draws = tally.draws,
            "Tier simulated"
        );
        tiers.push(TierReport { difficulty, tally });
    }

    Ok(SimulationReport { games, tiers })
}
