//! Arena configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tictactoe::EngineConfig;
use tracing::{debug, info, instrument};

/// Settings for the arena commands.
///
/// ```toml
/// seed = 7
/// games = 2000
/// iterations = 5000
///
/// [engine]
/// medium_variant = "depth_limited"
/// linear_perspective = "fixed_x"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Tier settings handed to every engine.
    #[serde(default)]
    engine: EngineConfig,

    /// Seed for reproducible runs; the OS seeds the engines when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Games per tier in `simulate`.
    #[serde(default = "default_games")]
    games: u32,

    /// Decisions per tier in `bench`.
    #[serde(default = "default_iterations")]
    iterations: u32,
}

fn default_games() -> u32 {
    1000
}

fn default_iterations() -> u32 {
    10_000
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            seed: None,
            games: default_games(),
            iterations: default_iterations(),
        }
    }
}

impl ArenaConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            games = config.games,
            iterations = config.iterations,
            seed = ?config.seed,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Returns a copy with different tier settings.
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    /// Overrides the seed when `seed` is set.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Overrides the game count when `games` is set.
    pub fn with_games(mut self, games: Option<u32>) -> Self {
        if let Some(games) = games {
            self.games = games;
        }
        self
    }

    /// Overrides the iteration count when `iterations` is set.
    pub fn with_iterations(mut self, iterations: Option<u32>) -> Self {
        if let Some(iterations) = iterations {
            self.iterations = iterations;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
