//! Run configuration
//!
//! Owned by the embedding application; the seeder only consumes it. The
//! scale tier maps to a per-type target count; the value-source variant
//! picks between purely random and semantically-aware generation.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::SeedError;

/// Per-type instance count tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleTier {
    #[default]
    Low,
    Mid,
    High,
}

impl ScaleTier {
    /// Target instance count per entity type for this tier.
    pub fn target_count(self) -> usize {
        match self {
            ScaleTier::Low => 100,
            ScaleTier::Mid => 500,
            ScaleTier::High => 1000,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScaleTier::Low => "low",
            ScaleTier::Mid => "mid",
            ScaleTier::High => "high",
        }
    }
}

impl FromStr for ScaleTier {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(ScaleTier::Low),
            "mid" => Ok(ScaleTier::Mid),
            "high" => Ok(ScaleTier::High),
            other => Err(SeedError::Configuration(format!(
                "unknown scale tier '{other}'"
            ))),
        }
    }
}

/// Which value-source variant populates scalar fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSourceKind {
    #[default]
    Random,
    Semantic,
}

impl FromStr for ValueSourceKind {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(ValueSourceKind::Random),
            "semantic" => Ok(ValueSourceKind::Semantic),
            other => Err(SeedError::Configuration(format!(
                "unknown value source '{other}'"
            ))),
        }
    }
}

/// Configuration for one seeding run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Skip the entire run when false
    pub enabled: bool,
    /// Scale tier mapping to the per-type target count
    pub tier: ScaleTier,
    /// Value-source variant for scalar fields
    pub value_source: ValueSourceKind,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tier: ScaleTier::default(),
            value_source: ValueSourceKind::default(),
        }
    }
}

impl SeedConfig {
    pub fn new(tier: ScaleTier, value_source: ValueSourceKind) -> Self {
        Self {
            enabled: true,
            tier,
            value_source,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Read configuration from `SEEDFRAME_ENABLED`, `SEEDFRAME_TIER` and
    /// `SEEDFRAME_VALUE_SOURCE`, falling back to defaults for unset or
    /// unparseable variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(enabled) = std::env::var("SEEDFRAME_ENABLED") {
            config.enabled = !matches!(enabled.to_lowercase().as_str(), "false" | "0" | "no");
        }
        if let Ok(tier) = std::env::var("SEEDFRAME_TIER") {
            match tier.parse() {
                Ok(tier) => config.tier = tier,
                Err(err) => tracing::warn!(%err, "ignoring SEEDFRAME_TIER"),
            }
        }
        if let Ok(source) = std::env::var("SEEDFRAME_VALUE_SOURCE") {
            match source.parse() {
                Ok(source) => config.value_source = source,
                Err(err) => tracing::warn!(%err, "ignoring SEEDFRAME_VALUE_SOURCE"),
            }
        }

        config
    }
}
