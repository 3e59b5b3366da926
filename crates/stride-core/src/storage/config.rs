//! TOML-based application configuration.
//!
//! Holds the engine tunables (cooldown window, ladder hours, tip rotation
//! bounds) so product can adjust behavior without a code change.
//!
//! Configuration is stored at `~/.config/stride/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;

/// Card-engine tuning knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum seconds between full ladder evaluations.
    #[serde(default = "default_cooldown_seconds")]
    pub cooldown_seconds: i64,
    /// Local hour from which StreakAtRisk may fire.
    #[serde(default = "default_streak_risk_hour")]
    pub streak_risk_hour: u32,
    /// Local hour from which AlmostThere and EveningNudge may fire.
    #[serde(default = "default_evening_hour")]
    pub evening_hour: u32,
    /// Progress ratio floor for AlmostThere ([floor, 1.0) is eligible).
    #[serde(default = "default_almost_there_ratio")]
    pub almost_there_ratio: f64,
    /// Daily show cap applied to every tier-1/2 card.
    #[serde(default = "default_daily_show_cap")]
    pub daily_show_cap: u32,
    /// Capacity of the recent-tip FIFO.
    #[serde(default = "default_recency_capacity")]
    pub recency_capacity: usize,
    /// When the recency list covers the whole catalog, only this many most
    /// recent tips stay excluded from rotation.
    #[serde(default = "default_recency_strict_window")]
    pub recency_strict_window: usize,
    /// Seed for the tip rotation RNG (None = random).
    #[serde(default)]
    pub tip_seed: Option<u64>,
}

fn default_cooldown_seconds() -> i64 {
    2
}
fn default_streak_risk_hour() -> u32 {
    19
}
fn default_evening_hour() -> u32 {
    17
}
fn default_almost_there_ratio() -> f64 {
    0.5
}
fn default_daily_show_cap() -> u32 {
    1
}
fn default_recency_capacity() -> usize {
    25
}
fn default_recency_strict_window() -> usize {
    10
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cooldown_seconds: default_cooldown_seconds(),
            streak_risk_hour: default_streak_risk_hour(),
            evening_hour: default_evening_hour(),
            almost_there_ratio: default_almost_there_ratio(),
            daily_show_cap: default_daily_show_cap(),
            recency_capacity: default_recency_capacity(),
            recency_strict_window: default_recency_strict_window(),
            tip_seed: None,
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/stride/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/stride"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load the configuration, falling back to defaults if the file is
    /// missing.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Save the configuration to disk.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let text = toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, text).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })
    }
}
