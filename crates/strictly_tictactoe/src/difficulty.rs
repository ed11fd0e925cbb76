//! Difficulty tiers and the policies they resolve to.

use crate::evaluator::LinearPerspective;
use crate::search::SearchPolicy;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Difficulty tier requested by the caller.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Perfect play.
    Hard,
    /// Beatable search.
    Medium,
    /// One-ply linear model.
    Easy,
}

/// How the medium tier weakens the search.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MediumVariant {
    /// Perfect search, replaced by a random legal cell some of the time.
    #[default]
    ForcedMistake,
    /// Depth-capped search over shuffled move order.
    DepthLimited,
}

/// Concrete move-selection procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Perfect search with random tie-breaks. With a non-zero `error_rate`
    /// (percent), that share of calls plays a random legal cell instead.
    Perfect {
        /// Chance in percent (0-100) of a forced random move.
        error_rate: u8,
    },
    /// Weakened search; root candidates are shuffled and the first maximum wins.
    Shallow {
        /// Policy for the recursive search.
        policy: SearchPolicy,
    },
    /// Greedy one-ply linear evaluation.
    Linear {
        /// Which symbol is placed and scored.
        perspective: LinearPerspective,
    },
}

/// Tunables for the tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Which medium implementation to use.
    #[serde(default)]
    medium_variant: MediumVariant,

    /// Forced-mistake chance for the medium tier, in percent.
    #[serde(default = "default_medium_error_rate")]
    medium_error_rate: u8,

    /// Depth cap for the depth-limited medium tier.
    #[serde(default = "default_shallow_depth_cap")]
    shallow_depth_cap: u8,

    /// Symbol the easy tier evaluates for.
    #[serde(default)]
    linear_perspective: LinearPerspective,
}

fn default_medium_error_rate() -> u8 {
    20
}

fn default_shallow_depth_cap() -> u8 {
    5
}

impl EngineConfig {
    /// Creates a configuration; the error rate is clamped to 100.
    #[instrument]
    pub fn new(
        medium_variant: MediumVariant,
        medium_error_rate: u8,
        shallow_depth_cap: u8,
        linear_perspective: LinearPerspective,
    ) -> Self {
        Self {
            medium_variant,
            medium_error_rate: medium_error_rate.min(100),
            shallow_depth_cap,
            linear_perspective,
        }
    }

    /// Returns a copy using `variant` for the medium tier.
    pub fn with_medium_variant(mut self, variant: MediumVariant) -> Self {
        self.medium_variant = variant;
        self
    }

    /// Returns a copy with a different forced-mistake chance.
    pub fn with_medium_error_rate(mut self, error_rate: u8) -> Self {
        self.medium_error_rate = error_rate.min(100);
        self
    }

    /// Returns a copy with a different easy-tier perspective.
    pub fn with_linear_perspective(mut self, perspective: LinearPerspective) -> Self {
        self.linear_perspective = perspective;
        self
    }

    /// Resolves a tier to the procedure that plays it.
    #[instrument(skip(self))]
    pub fn strategy(&self, difficulty: Difficulty) -> Strategy {
        match difficulty {
            Difficulty::Hard => Strategy::Perfect { error_rate: 0 },
            Difficulty::Medium => match self.medium_variant {
                MediumVariant::ForcedMistake => Strategy::Perfect {
                    error_rate: self.medium_error_rate.min(100),
                },
                MediumVariant::DepthLimited => Strategy::Shallow {
                    policy: SearchPolicy::shallow(self.shallow_depth_cap),
                },
            },
            Difficulty::Easy => Strategy::Linear {
                perspective: self.linear_perspective,
            },
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(
            MediumVariant::default(),
            default_medium_error_rate(),
            default_shallow_depth_cap(),
            LinearPerspective::default(),
        )
    }
}
