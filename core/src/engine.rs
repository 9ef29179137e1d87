//! The clock engine: two countdowns and the turn state machine.
//!
//! STATES:
//!   Idle                  not started, or reset / preset changed
//!   Running { player }    `player`'s countdown is live
//!   TimedOut { loser }    a live countdown reached zero; stopped
//!
//! RULES:
//!   - Time accounting is pull-based. Elapsed time is charged only inside
//!     `advance` and `switch_turn`, from the `Instant` the caller supplies.
//!   - Only the player holding the turn is ever charged.
//!   - The increment goes to the player who just finished their turn,
//!     once per completed turn, never to the player about to move.
//!   - Operations that do not apply in the current state are no-ops and
//!     emit nothing. Nothing here returns an error.

use crate::{
    config::ClockConfig,
    event::{ClockEvent, TimeOut},
    format::format_clock,
    preset::{PresetKey, TimeControlPreset},
    types::{Player, ScreenPoint, Seconds},
};
use std::time::Instant;

/// Running, turn and last-tick folded into one value, so a running clock
/// always has a turn and a timestamp and a stopped one never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockPhase {
    Idle,
    Running { player: Player, last_tick: Instant },
    TimedOut { loser: Player },
}

#[derive(Debug, Clone)]
pub struct ClockEngine {
    preset_key:   PresetKey,
    remaining:    [Seconds; 2],
    phase:        ClockPhase,
    burst_origin: ScreenPoint,
    events:       Vec<ClockEvent>,
}

impl ClockEngine {
    pub fn new(preset_key: PresetKey, burst_origin: ScreenPoint) -> Self {
        let initial = preset_key.preset().initial_seconds;
        Self {
            preset_key,
            remaining: [initial; 2],
            phase: ClockPhase::Idle,
            burst_origin,
            events: Vec::new(),
        }
    }

    pub fn from_config(config: &ClockConfig) -> Self {
        Self::new(config.default_preset, config.display.midpoint())
    }

    // ── Read side ──────────────────────────────────────────────

    pub fn active_preset(&self) -> TimeControlPreset {
        self.preset_key.preset()
    }

    pub fn preset_key(&self) -> PresetKey {
        self.preset_key
    }

    pub fn remaining(&self, player: Player) -> Seconds {
        self.remaining[player.index()]
    }

    pub fn phase(&self) -> ClockPhase {
        self.phase
    }

    /// Whose countdown is live, if any.
    pub fn turn(&self) -> Option<Player> {
        match self.phase {
            ClockPhase::Running { player, .. } => Some(player),
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, ClockPhase::Running { .. })
    }

    pub fn last_tick(&self) -> Option<Instant> {
        match self.phase {
            ClockPhase::Running { last_tick, .. } => Some(last_tick),
            _ => None,
        }
    }

    /// The player whose flag fell, until the next reset, preset change or start.
    pub fn timed_out(&self) -> Option<Player> {
        match self.phase {
            ClockPhase::TimedOut { loser } => Some(loser),
            _ => None,
        }
    }

    pub fn burst_origin(&self) -> ScreenPoint {
        self.burst_origin
    }

    /// Clock-face rendering. See `format_clock`.
    pub fn format(seconds: Seconds) -> String {
        format_clock(seconds)
    }

    pub fn display(&self, player: Player) -> String {
        format_clock(self.remaining(player))
    }

    // ── Events ─────────────────────────────────────────────────

    /// Events emitted since the last drain, oldest first.
    pub fn pending_events(&self) -> &[ClockEvent] {
        &self.events
    }

    /// Take every queued event. Call once per frame.
    pub fn drain_events(&mut self) -> Vec<ClockEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Operations ─────────────────────────────────────────────

    /// Switch time control. Both clocks go back to the new preset's
    /// starting time and the game stops.
    pub fn select_preset(&mut self, key: PresetKey) {
        self.preset_key = key;
        self.restore_initial();
        log::debug!("preset selected: {key}");
        self.events.push(ClockEvent::PresetSelected {
            preset: key,
            initial_seconds: key.preset().initial_seconds,
        });
    }

    /// Start player 1's clock. Returns false (and changes nothing) if a
    /// clock is already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_running() {
            log::debug!("start ignored: already running");
            return false;
        }
        self.phase = ClockPhase::Running {
            player: Player::Player1,
            last_tick: now,
        };
        log::info!(
            "{} started: {} / {}",
            self.preset_key,
            self.display(Player::Player1),
            self.display(Player::Player2),
        );
        self.events.push(ClockEvent::Started { player: Player::Player1 });
        true
    }

    /// The mover presses their clock.
    ///
    /// Charges the mover up to `now` first. If that charge flags them, the
    /// time-out is returned and the turn does not pass. Otherwise the mover
    /// receives the increment and the opponent's clock starts.
    pub fn switch_turn(&mut self, now: Instant) -> Option<TimeOut> {
        if !self.is_running() {
            return None;
        }
        if let Some(timeout) = self.advance(now) {
            return Some(timeout);
        }
        let ClockPhase::Running { player, .. } = self.phase else {
            return None;
        };

        let increment = self.active_preset().increment_seconds;
        self.remaining[player.index()] += increment;
        let next = player.opponent();
        self.phase = ClockPhase::Running { player: next, last_tick: now };

        log::debug!(
            "turn switched {} -> {}: +{increment}s, {} left",
            player.label(),
            next.label(),
            self.display(player),
        );
        self.events.push(ClockEvent::TurnSwitched {
            from: player,
            to: next,
            increment,
            from_remaining: self.remaining(player),
            burst_origin: self.burst_origin,
        });
        None
    }

    /// Charge the running player for the time since the last tick, then
    /// move the last tick to `now`.
    ///
    /// A `now` earlier than the last tick charges nothing. The tick still
    /// moves to `now`, so play after the jump is charged normally.
    pub fn advance(&mut self, now: Instant) -> Option<TimeOut> {
        let ClockPhase::Running { player, last_tick } = self.phase else {
            return None;
        };

        let elapsed = match now.checked_duration_since(last_tick) {
            Some(d) => d.as_secs_f64(),
            None => {
                log::warn!(
                    "clock went backwards by {:?}; charging nothing",
                    last_tick - now
                );
                0.0
            }
        };
        self.remaining[player.index()] -= elapsed;
        self.phase = ClockPhase::Running { player, last_tick: now };

        self.check_flags()
    }

    /// Back to the current preset's starting position. Always succeeds.
    pub fn reset(&mut self) {
        self.restore_initial();
        log::debug!("reset to {}", self.preset_key);
        self.events.push(ClockEvent::Reset { preset: self.preset_key });
    }

    // ── Internals ──────────────────────────────────────────────

    fn restore_initial(&mut self) {
        let initial = self.active_preset().initial_seconds;
        self.remaining = [initial; 2];
        self.phase = ClockPhase::Idle;
    }

    /// Player 1 is checked first; only one time-out is reported per call.
    fn check_flags(&mut self) -> Option<TimeOut> {
        let loser = Player::BOTH
            .into_iter()
            .find(|p| self.remaining[p.index()] <= 0.0)?;

        self.remaining[loser.index()] = 0.0;
        self.phase = ClockPhase::TimedOut { loser };
        log::info!("{} ran out of time", loser.label());
        self.events.push(ClockEvent::TimedOut { loser });
        Some(TimeOut { loser })
    }
}

impl Default for ClockEngine {
    fn default() -> Self {
        Self::from_config(&ClockConfig::default())
    }
}
