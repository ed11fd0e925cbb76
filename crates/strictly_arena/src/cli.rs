//! Command-line interface for strictly_arena.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::{Difficulty, LinearPerspective, MediumVariant, Player};

/// Strictly Arena - exercise the tic-tac-toe engine from the shell
#[derive(Parser, Debug)]
#[command(name = "strictly_arena")]
#[command(about = "Suggest, simulate and benchmark tic-tac-toe engine moves", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for reproducible runs (overrides the config file)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Medium tier implementation (overrides the config file)
    #[arg(long, global = true)]
    pub medium_variant: Option<MediumVariant>,

    /// Symbol the easy tier evaluates for (overrides the config file)
    #[arg(long, global = true)]
    pub linear_perspective: Option<LinearPerspective>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Suggest a move for a board
    Suggest {
        /// Board as nine cells, X/O/_ with optional / or | separators
        board: String,

        /// Symbol to play
        #[arg(short, long, default_value = "o")]
        symbol: Player,

        /// Difficulty tier
        #[arg(short, long, default_value = "hard")]
        difficulty: Difficulty,

        /// Print the decision as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play every tier against the depth-limited benchmark
    Simulate {
        /// Games per tier (rounded up to even)
        #[arg(short, long)]
        games: Option<u32>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Time each tier on the empty board
    Bench {
        /// Decisions per tier
        #[arg(short, long)]
        iterations: Option<u32>,
    },
}
