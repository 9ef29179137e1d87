//! Two-player chess clock core.
//!
//! `ClockEngine` owns both countdowns and the turn state machine. Everything
//! else here feeds it (`clock`, `command`, `config`) or reads from it
//! (`event`, `view`, `format`). `autoplay` drives it headlessly.

pub mod autoplay;
pub mod clock;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod format;
pub mod preset;
pub mod rng;
pub mod types;
pub mod view;
