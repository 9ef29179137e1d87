//! Engine notifications.
//!
//! RULE: The engine never calls into rendering or audio. Everything the
//! presentation layer reacts to (the click, the particle burst, the alarm)
//! is queued here as a `ClockEvent` and drained once per frame.

use crate::{
    preset::PresetKey,
    types::{Player, ScreenPoint, Seconds},
};
use serde::{Deserialize, Serialize};

/// Every notification the engine emits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClockEvent {
    PresetSelected {
        preset: PresetKey,
        initial_seconds: Seconds,
    },
    Started {
        player: Player,
    },
    /// A player pressed their clock. `burst_origin` is where the
    /// presentation layer spawns its effect.
    TurnSwitched {
        from: Player,
        to: Player,
        increment: Seconds,
        from_remaining: Seconds,
        burst_origin: ScreenPoint,
    },
    TimedOut {
        loser: Player,
    },
    Reset {
        preset: PresetKey,
    },
}

impl ClockEvent {
    /// Stable snake_case name, matching the serde tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PresetSelected { .. } => "preset_selected",
            Self::Started { .. }        => "started",
            Self::TurnSwitched { .. }   => "turn_switched",
            Self::TimedOut { .. }       => "timed_out",
            Self::Reset { .. }          => "reset",
        }
    }
}

/// Returned by `advance` / `switch_turn` when a flag falls.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeOut {
    pub loser: Player,
}
