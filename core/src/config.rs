use crate::{
    error::{ClockError, ClockResult},
    preset::PresetKey,
    types::ScreenPoint,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub width:  u32,
    pub height: u32,
}

impl DisplayConfig {
    /// Where the turn-switch burst is spawned.
    pub fn midpoint(&self) -> ScreenPoint {
        ScreenPoint::midpoint(self.width, self.height)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { width: 800, height: 600 }
    }
}

/// Knobs for the seeded auto-play driver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AutoplayConfig {
    pub seed: u64,
    /// Think time per move, as a fraction of the preset's initial time.
    pub min_think_fraction: f64,
    pub max_think_fraction: f64,
    /// Stop after this many turn switches even if nobody flags.
    pub max_moves: u32,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            min_think_fraction: 0.0,
            max_think_fraction: 0.08,
            max_moves: 200,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    pub default_preset: PresetKey,
    /// How often the runner calls `advance`, per second.
    pub poll_hz: u32,
    pub display: DisplayConfig,
    pub autoplay: AutoplayConfig,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            default_preset: PresetKey::Blitz,
            poll_hz: 120,
            display: DisplayConfig::default(),
            autoplay: AutoplayConfig::default(),
        }
    }
}

impl ClockConfig {
    /// Load from a JSON file. Missing fields, nested ones included, take
    /// their defaults.
    pub fn load(path: &str) -> ClockResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config = Self::from_json(&content)?;
        log::debug!("loaded config from {path}: {config:?}");
        Ok(config)
    }

    pub fn from_json(content: &str) -> ClockResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ClockResult<()> {
        if self.poll_hz == 0 {
            return Err(invalid("poll_hz must be at least 1"));
        }
        if self.display.width == 0 || self.display.height == 0 {
            return Err(invalid("display dimensions must be non-zero"));
        }
        let a = &self.autoplay;
        if !(0.0..=1.0).contains(&a.min_think_fraction)
            || !(0.0..=1.0).contains(&a.max_think_fraction)
        {
            return Err(invalid("think fractions must lie in [0, 1]"));
        }
        if a.min_think_fraction > a.max_think_fraction {
            return Err(invalid("min_think_fraction exceeds max_think_fraction"));
        }
        Ok(())
    }

    /// One frame of the runner's poll loop.
    pub fn poll_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.poll_hz.max(1)))
    }
}

fn invalid(reason: &str) -> ClockError {
    ClockError::InvalidConfig { reason: reason.to_string() }
}
