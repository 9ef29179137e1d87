//! Key map, JSON commands, and intent routing.

use chessclock_core::{
    clock::{ClockSource, ManualClock},
    command::{apply_intent, Applied, Command, Intent},
    engine::ClockEngine,
    error::ClockError,
    event::TimeOut,
    preset::PresetKey,
    types::Player,
};

#[test]
fn default_key_map() {
    assert_eq!(Intent::from_key('1').unwrap(), Intent::SelectPreset(PresetKey::Blitz));
    assert_eq!(Intent::from_key('2').unwrap(), Intent::SelectPreset(PresetKey::Rapid));
    assert_eq!(Intent::from_key('3').unwrap(), Intent::SelectPreset(PresetKey::Classical));
    assert_eq!(Intent::from_key('s').unwrap(), Intent::Start);
    assert_eq!(Intent::from_key('S').unwrap(), Intent::Start);
    assert_eq!(Intent::from_key(' ').unwrap(), Intent::SwitchTurn);
    assert_eq!(Intent::from_key('r').unwrap(), Intent::Reset);
    assert_eq!(Intent::from_key('q').unwrap(), Intent::Quit);
}

#[test]
fn unbound_key_is_rejected() {
    match Intent::from_key('x') {
        Err(ClockError::UnboundKey { key }) => assert_eq!(key, 'x'),
        other => panic!("expected UnboundKey, got {other:?}"),
    }
    assert!(Intent::from_key('4').is_err());
}

#[test]
fn terminal_lines_are_trimmed_single_keys() {
    assert_eq!(Intent::from_line("").unwrap(), Intent::SwitchTurn);
    assert_eq!(Intent::from_line("\n").unwrap(), Intent::SwitchTurn);
    assert_eq!(Intent::from_line("   ").unwrap(), Intent::SwitchTurn);
    assert_eq!(Intent::from_line("  s").unwrap(), Intent::Start);
    assert_eq!(Intent::from_line("2\r").unwrap(), Intent::SelectPreset(PresetKey::Rapid));
    assert_eq!(Intent::from_line(" q ").unwrap(), Intent::Quit);
}

#[test]
fn multi_character_lines_are_rejected() {
    match Intent::from_line("start") {
        Err(ClockError::NotASingleKey { line }) => assert_eq!(line, "start"),
        other => panic!("expected NotASingleKey, got {other:?}"),
    }
    assert!(matches!(
        Intent::from_line(" x "),
        Err(ClockError::UnboundKey { key: 'x' })
    ));
}

#[test]
fn preset_names_parse() {
    assert_eq!("rapid".parse::<PresetKey>().unwrap(), PresetKey::Rapid);
    assert_eq!("Classical".parse::<PresetKey>().unwrap(), PresetKey::Classical);
    assert_eq!(" 1 ".parse::<PresetKey>().unwrap(), PresetKey::Blitz);
    assert!(matches!(
        "bullet".parse::<PresetKey>(),
        Err(ClockError::UnknownPreset { .. })
    ));
}

#[test]
fn json_commands_parse() {
    assert_eq!(
        Command::parse(r#"{"cmd":"select_preset","preset":"classical"}"#).unwrap(),
        Command::SelectPreset { preset: PresetKey::Classical }
    );
    assert_eq!(Command::parse(r#"{"cmd":"switch_turn"}"#).unwrap(), Command::SwitchTurn);
    assert_eq!(Command::parse("{\"cmd\":\"get_state\"}\n").unwrap(), Command::GetState);
    assert!(Command::GetState.intent().is_none());
    assert_eq!(Command::Reset.intent(), Some(Intent::Reset));
    assert!(matches!(
        Command::parse(r#"{"cmd":"pause"}"#),
        Err(ClockError::Serialization(_))
    ));
}

#[test]
fn intents_drive_the_engine() {
    let clock = ManualClock::new();
    let mut engine = ClockEngine::default();

    assert_eq!(
        apply_intent(&mut engine, Intent::SelectPreset(PresetKey::Rapid), clock.now()),
        Applied::Continue
    );
    assert_eq!(engine.preset_key(), PresetKey::Rapid);

    apply_intent(&mut engine, Intent::Start, clock.now());
    assert_eq!(engine.turn(), Some(Player::Player1));

    clock.advance_secs(5.0);
    apply_intent(&mut engine, Intent::SwitchTurn, clock.now());
    assert_eq!(engine.turn(), Some(Player::Player2));
    assert_eq!(engine.remaining(Player::Player1), 605.0);

    apply_intent(&mut engine, Intent::Reset, clock.now());
    assert!(!engine.is_running());

    assert_eq!(apply_intent(&mut engine, Intent::Quit, clock.now()), Applied::Quit);
}

#[test]
fn switch_intent_surfaces_timeout() {
    let clock = ManualClock::new();
    let mut engine = ClockEngine::default();
    apply_intent(&mut engine, Intent::Start, clock.now());
    clock.advance_secs(400.0);
    assert_eq!(
        apply_intent(&mut engine, Intent::SwitchTurn, clock.now()),
        Applied::TimedOut(TimeOut { loser: Player::Player1 })
    );
}
