//! Shared primitive types used across the clock.

use serde::{Deserialize, Serialize};

/// Seconds on a player's clock. Fractional, may dip below zero for the
/// instant between accounting and the time-out check.
pub type Seconds = f64;

/// One of the two seats at the board.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::Player1, Player::Player2];

    /// The player who moves after this one.
    pub fn opponent(self) -> Self {
        match self {
            Self::Player1 => Self::Player2,
            Self::Player2 => Self::Player1,
        }
    }

    /// Slot in the per-player remaining-time array.
    pub fn index(self) -> usize {
        match self {
            Self::Player1 => 0,
            Self::Player2 => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Player1 => "player 1",
            Self::Player2 => "player 2",
        }
    }
}

/// A point in the presentation layer's screen space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    /// Centre of a `width` x `height` surface, in whole pixels.
    pub fn midpoint(width: u32, height: u32) -> Self {
        Self {
            x: (width / 2) as f32,
            y: (height / 2) as f32,
        }
    }
}
