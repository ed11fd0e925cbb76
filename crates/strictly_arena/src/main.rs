//! Strictly Arena - command-line entry point.

use anyhow::Result;
use clap::Parser;
use strictly_arena::{ArenaConfig, Cli, Command, bench, simulate, suggest};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    debug!(?config, "Effective configuration");

    match cli.command {
        Command::Suggest {
            board,
            symbol,
            difficulty,
            json,
        } => {
            let suggestion = suggest(&board, symbol, difficulty, *config.engine(), *config.seed())?;
            if json {
                println!("{}", suggestion.to_json()?);
            } else {
                println!("{}", suggestion);
            }
        }
        Command::Simulate { games, json } => {
            let config = config.with_games(games);
            info!(games = config.games(), "Starting simulation");
            let report = simulate(&config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report);
            }
        }
        Command::Bench { iterations } => {
            let config = config.with_iterations(iterations);
            info!(iterations = config.iterations(), "Starting benchmark");
            print!("{}", bench(&config)?);
        }
    }

    Ok(())
}

/// Config file (or defaults) with command-line overrides applied.
fn load_config(cli: &Cli) -> Result<ArenaConfig> {
    let config = ArenaConfig::load(cli.config.as_deref())?;
    let mut engine = *config.engine();
    if let Some(variant) = cli.medium_variant {
        engine = engine.with_medium_variant(variant);
    }
    if let Some(perspective) = cli.linear_perspective {
        engine = engine.with_linear_perspective(perspective);
    }
    Ok(config.with_engine(engine).with_seed(cli.seed))
}
