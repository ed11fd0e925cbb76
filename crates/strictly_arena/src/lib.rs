//! Strictly Arena
//!
//! Shell harness around the `strictly_tictactoe` engine: one-off move
//! suggestions, tier-vs-benchmark simulations refereed by a typestate game,
//! and wall-clock timing.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bench;
mod cli;
mod config;
mod error;
mod referee;
mod simulate;
mod suggest;

pub use bench::{BenchReport, BenchRow, FRAME_BYTES, bench};
pub use cli::{Cli, Command};
pub use config::{ArenaConfig, ConfigError};
pub use error::ArenaError;
pub use referee::{Draw, Game, GameTransition, InProgress, Outcome, PlaceError, Won};
pub use simulate::{
    BENCHMARK_SYMBOL, SimulationReport, TEST_SYMBOL, Tally, TierReport, play_game, simulate,
};
pub use suggest::{Suggestion, suggest};
