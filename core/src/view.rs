//! What the presentation layer reads each frame.

use crate::{
    engine::ClockEngine,
    format::format_clock,
    preset::PresetKey,
    types::{Player, Seconds},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClockView {
    pub preset:          PresetKey,
    pub preset_name:     String,
    pub player1_seconds: Seconds,
    pub player2_seconds: Seconds,
    pub player1_display: String,
    pub player2_display: String,
    /// Highlighted face.
    pub turn:            Option<Player>,
    pub running:         bool,
    pub timed_out:       Option<Player>,
}

impl ClockView {
    pub fn of(engine: &ClockEngine) -> Self {
        let p1 = engine.remaining(Player::Player1);
        let p2 = engine.remaining(Player::Player2);
        Self {
            preset:          engine.preset_key(),
            preset_name:     engine.active_preset().name.to_string(),
            player1_seconds: p1,
            player2_seconds: p2,
            player1_display: format_clock(p1),
            player2_display: format_clock(p2),
            turn:            engine.turn(),
            running:         engine.is_running(),
            timed_out:       engine.timed_out(),
        }
    }

    /// Single status line, e.g. `Blitz | >04:59 | 05:00`.
    pub fn status_line(&self) -> String {
        let face = |player: Player, display: &str| {
            let marker = if self.turn == Some(player) { ">" } else { " " };
            format!("{marker}{display}")
        };
        let mut line = format!(
            "{} | {} | {}",
            self.preset_name,
            face(Player::Player1, &self.player1_display),
            face(Player::Player2, &self.player2_display),
        );
        if let Some(loser) = self.timed_out {
            line.push_str(&format!(" | {} flagged", loser.label()));
        }
        line
    }
}
