//! Clock source port: where "now" comes from.
//!
//! RULE: The engine never reads the system clock itself. Callers pass an
//! `Instant` into every time-sensitive operation, taken from a
//! `ClockSource`. Production uses `SystemClock`; tests and auto-play use
//! `ManualClock` so time only moves when told to.

use std::{
    cell::Cell,
    time::{Duration, Instant},
};

pub trait ClockSource {
    /// Current monotonic reading.
    fn now(&self) -> Instant;
}

/// Reads `Instant::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A frozen clock that moves only via `advance` / `rewind`.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(origin: Instant) -> Self {
        Self {
            origin,
            offset: Cell::new(Duration::ZERO),
        }
    }

    pub fn origin(&self) -> Instant {
        self.origin
    }

    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    pub fn advance_secs(&self, secs: f64) {
        self.advance(Duration::from_secs_f64(secs));
    }

    /// Move the clock backward, saturating at the origin. Simulates a
    /// misbehaving platform clock.
    pub fn rewind(&self, by: Duration) {
        self.offset.set(self.offset.get().saturating_sub(by));
    }

    /// Time since the origin.
    pub fn elapsed(&self) -> Duration {
        self.offset.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockSource for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.offset.get()
    }
}
