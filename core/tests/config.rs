use chessclock_core::{config::ClockConfig, error::ClockError, preset::PresetKey, types::ScreenPoint};
use std::time::Duration;

#[test]
fn defaults_match_the_desktop_clock() {
    let config = ClockConfig::default();
    assert_eq!(config.default_preset, PresetKey::Blitz);
    assert_eq!(config.poll_hz, 120);
    assert_eq!(config.display.midpoint(), ScreenPoint { x: 400.0, y: 300.0 });
    assert!(config.validate().is_ok());
}

#[test]
fn partial_json_fills_defaults() {
    let config = ClockConfig::from_json(r#"{ "default_preset": "rapid", "poll_hz": 60 }"#)
        .expect("valid config");
    assert_eq!(config.default_preset, PresetKey::Rapid);
    assert_eq!(config.poll_hz, 60);
    assert_eq!(config.display.width, 800);
    assert_eq!(config.autoplay.seed, 42);
}

#[test]
fn partial_nested_sections_fill_defaults() {
    let config = ClockConfig::from_json(r#"{ "autoplay": { "seed": 7 }, "display": { "width": 1024 } }"#)
        .expect("partial nested config");
    assert_eq!(config.autoplay.seed, 7);
    assert_eq!(config.autoplay.max_think_fraction, 0.08);
    assert_eq!(config.autoplay.max_moves, 200);
    assert_eq!(config.display.width, 1024);
    assert_eq!(config.display.height, 600);
    assert_eq!(config.display.midpoint(), ScreenPoint { x: 512.0, y: 300.0 });
}

#[test]
fn poll_period_follows_rate() {
    let config = ClockConfig { poll_hz: 50, ..ClockConfig::default() };
    assert_eq!(config.poll_period(), Duration::from_millis(20));
}

#[test]
fn zero_poll_rate_rejected() {
    let err = ClockConfig::from_json(r#"{ "poll_hz": 0 }"#).unwrap_err();
    assert!(matches!(err, ClockError::InvalidConfig { .. }), "got {err:?}");
}

#[test]
fn inverted_think_band_rejected() {
    let json = r#"{ "autoplay": { "seed": 1, "min_think_fraction": 0.5,
                   "max_think_fraction": 0.1, "max_moves": 10 } }"#;
    assert!(matches!(
        ClockConfig::from_json(json),
        Err(ClockError::InvalidConfig { .. })
    ));
}

#[test]
fn missing_file_reports_path() {
    let err = ClockConfig::load("/definitely/not/here/clock.json").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("/definitely/not/here/clock.json"), "got: {message}");
}

#[test]
fn bundled_config_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/clock.json");
    let config = ClockConfig::load(path).expect("bundled config");
    assert!(config.validate().is_ok());
}
