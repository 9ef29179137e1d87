//! Input vocabulary: the logical intents the engine understands, the
//! default key map onto them, and the JSON commands the runner accepts.
//!
//! RULE: Whatever the input device, intents reach the engine through
//! `apply_intent` on the single thread that owns it.

use crate::{
    engine::ClockEngine,
    error::{ClockError, ClockResult},
    event::TimeOut,
    preset::PresetKey,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "intent", content = "preset", rename_all = "snake_case")]
pub enum Intent {
    SelectPreset(PresetKey),
    Start,
    SwitchTurn,
    Reset,
    Quit,
}

impl Intent {
    /// Default key map: `1`-`3` presets, `s` start, space switch,
    /// `r` reset, `q` quit. Letters are case-insensitive.
    pub fn from_key(key: char) -> ClockResult<Self> {
        if let Some(preset) = PresetKey::from_digit(key) {
            return Ok(Self::SelectPreset(preset));
        }
        match key.to_ascii_lowercase() {
            's' => Ok(Self::Start),
            ' ' => Ok(Self::SwitchTurn),
            'r' => Ok(Self::Reset),
            'q' => Ok(Self::Quit),
            _   => Err(ClockError::UnboundKey { key }),
        }
    }

    /// One line of terminal input. Surrounding whitespace is ignored; an
    /// empty line is a bare Enter, the clock press. Anything else must be a
    /// single bound key.
    pub fn from_line(line: &str) -> ClockResult<Self> {
        let trimmed = line.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (None, _)         => Ok(Self::SwitchTurn),
            (Some(key), None) => Self::from_key(key),
            _ => Err(ClockError::NotASingleKey { line: trimmed.to_string() }),
        }
    }
}

/// What applying an intent did, for the caller's loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Continue,
    TimedOut(TimeOut),
    Quit,
}

/// Route one intent to its engine operation.
pub fn apply_intent(engine: &mut ClockEngine, intent: Intent, now: Instant) -> Applied {
    match intent {
        Intent::SelectPreset(key) => engine.select_preset(key),
        Intent::Start => {
            engine.start(now);
        }
        Intent::SwitchTurn => {
            if let Some(timeout) = engine.switch_turn(now) {
                return Applied::TimedOut(timeout);
            }
        }
        Intent::Reset => engine.reset(),
        Intent::Quit => return Applied::Quit,
    }
    Applied::Continue
}

/// One line of the runner's JSON protocol.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    SelectPreset { preset: PresetKey },
    Start,
    SwitchTurn,
    Reset,
    GetState,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> ClockResult<Self> {
        Ok(serde_json::from_str(line.trim())?)
    }

    /// The intent this command carries. `GetState` carries none.
    pub fn intent(&self) -> Option<Intent> {
        match self {
            Self::SelectPreset { preset } => Some(Intent::SelectPreset(*preset)),
            Self::Start      => Some(Intent::Start),
            Self::SwitchTurn => Some(Intent::SwitchTurn),
            Self::Reset      => Some(Intent::Reset),
            Self::Quit       => Some(Intent::Quit),
            Self::GetState   => None,
        }
    }
}
