//! Seeded self-play: drives a real `ClockEngine` through a whole game
//! against a `ManualClock`, one poll frame at a time.
//!
//! Each move draws a think time from `ThinkRng`, scaled to the preset's
//! starting time, then burns it down in `poll_period` steps exactly like
//! the runner's frame loop would before pressing the clock. The game ends
//! when a flag falls or after `max_moves` turn switches.

use crate::{
    clock::{ClockSource, ManualClock},
    config::ClockConfig,
    engine::ClockEngine,
    error::ClockResult,
    event::ClockEvent,
    preset::PresetKey,
    rng::ThinkRng,
    types::{Player, Seconds},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameReport {
    pub preset:          PresetKey,
    pub seed:            u64,
    /// Completed turn switches.
    pub moves:           u32,
    pub loser:           Option<Player>,
    pub player1_seconds: Seconds,
    pub player2_seconds: Seconds,
    /// Simulated wall time from start to the last tick.
    pub elapsed_seconds: Seconds,
    pub events:          Vec<ClockEvent>,
}

impl GameReport {
    /// One JSON line per event, in emission order.
    pub fn event_log(&self) -> ClockResult<Vec<String>> {
        self.events
            .iter()
            .map(|e| serde_json::to_string(e).map_err(Into::into))
            .collect()
    }
}

pub fn autoplay(preset: PresetKey, config: &ClockConfig) -> GameReport {
    let settings = &config.autoplay;
    let mut rng = ThinkRng::new(settings.seed);
    let clock = ManualClock::new();
    let frame = config.poll_period();

    let mut engine = ClockEngine::new(preset, config.display.midpoint());
    let initial = engine.active_preset().initial_seconds;
    let mut events = Vec::new();
    let mut moves = 0;
    let mut loser = None;

    engine.start(clock.now());
    events.extend(engine.drain_events());

    'game: while moves < settings.max_moves {
        let think_secs = rng.uniform(
            settings.min_think_fraction * initial,
            settings.max_think_fraction * initial,
        );
        let think = Duration::from_secs_f64(think_secs.max(0.0));

        let mut spent = Duration::ZERO;
        while spent < think {
            let step = frame.min(think - spent);
            clock.advance(step);
            spent += step;
            let timeout = engine.advance(clock.now());
            events.extend(engine.drain_events());
            if let Some(t) = timeout {
                loser = Some(t.loser);
                break 'game;
            }
        }

        let timeout = engine.switch_turn(clock.now());
        events.extend(engine.drain_events());
        if let Some(t) = timeout {
            loser = Some(t.loser);
            break;
        }
        moves += 1;
    }

    log::info!(
        "autoplay {preset} seed={}: {moves} moves, loser={:?}",
        settings.seed,
        loser
    );

    GameReport {
        preset,
        seed: settings.seed,
        moves,
        loser,
        player1_seconds: engine.remaining(Player::Player1),
        player2_seconds: engine.remaining(Player::Player2),
        elapsed_seconds: clock.elapsed().as_secs_f64(),
        events,
    }
}
