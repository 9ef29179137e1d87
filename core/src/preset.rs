//! The fixed time-control table.
//!
//! RULE: Presets are compiled in. There is no editing at runtime;
//! selecting one is a total function from `PresetKey`.

use crate::{
    error::{ClockError, ClockResult},
    types::Seconds,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A named time control: starting time plus Fischer increment.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TimeControlPreset {
    pub name:              &'static str,
    pub initial_seconds:   Seconds,
    pub increment_seconds: Seconds,
}

const BLITZ: TimeControlPreset = TimeControlPreset {
    name:              "Blitz",
    initial_seconds:   300.0,
    increment_seconds: 5.0,
};

const RAPID: TimeControlPreset = TimeControlPreset {
    name:              "Rapid",
    initial_seconds:   600.0,
    increment_seconds: 10.0,
};

const CLASSICAL: TimeControlPreset = TimeControlPreset {
    name:              "Classical",
    initial_seconds:   1800.0,
    increment_seconds: 30.0,
};

/// Closed set of selectable presets, in display order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum PresetKey {
    #[default]
    Blitz,
    Rapid,
    Classical,
}

impl PresetKey {
    pub const ALL: [PresetKey; 3] = [PresetKey::Blitz, PresetKey::Rapid, PresetKey::Classical];

    pub fn preset(self) -> TimeControlPreset {
        match self {
            Self::Blitz     => BLITZ,
            Self::Rapid     => RAPID,
            Self::Classical => CLASSICAL,
        }
    }

    /// Number-row binding: `1` is Blitz, `2` Rapid, `3` Classical.
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(Self::Blitz),
            '2' => Some(Self::Rapid),
            '3' => Some(Self::Classical),
            _   => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blitz     => "blitz",
            Self::Rapid     => "rapid",
            Self::Classical => "classical",
        }
    }
}

impl fmt::Display for PresetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.preset().name)
    }
}

impl FromStr for PresetKey {
    type Err = ClockError;

    /// Accepts the snake_case name (case-insensitive) or the number-row digit.
    fn from_str(s: &str) -> ClockResult<Self> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(key) = Self::from_digit(c) {
                return Ok(key);
            }
        }
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ClockError::UnknownPreset { name: s.to_string() })
    }
}
