//! clock-runner: headless terminal front end for the chess clock.
//!
//! Usage:
//!   clock-runner                       keys on stdin, one per line
//!   clock-runner --ipc-mode            JSON commands on stdin, JSON out
//!   clock-runner --autoplay --seed 7   play a seeded game and summarise
//!
//! Common flags: --config data/clock.json  --preset rapid

use anyhow::{Context, Result};
use chessclock_core::{
    autoplay::{autoplay, GameReport},
    clock::{ClockSource, SystemClock},
    command::{apply_intent, Applied, Command, Intent},
    config::ClockConfig,
    engine::ClockEngine,
    event::ClockEvent,
    format::format_clock,
    view::ClockView,
};
use chrono::{DateTime, Utc};
use crossbeam_channel::{unbounded, RecvTimeoutError, Sender};
use std::env;
use std::io::{self, BufRead, Write};
use std::thread;

/// What the reader thread hands to the loop that owns the engine.
enum Input {
    Intent(Intent),
    GetState,
    Eof,
}

#[derive(serde::Serialize)]
struct EventLine<'a> {
    at: DateTime<Utc>,
    #[serde(flatten)]
    event: &'a ClockEvent,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let autoplay_mode = args.iter().any(|a| a == "--autoplay");

    let mut config = match flag_value(&args, "--config") {
        Some(path) => ClockConfig::load(path)?,
        None => ClockConfig::default(),
    };
    if let Some(name) = flag_value(&args, "--preset") {
        config.default_preset = name.parse()?;
    }
    config.autoplay.seed = parse_arg(&args, "--seed", config.autoplay.seed);
    config.validate()?;

    if autoplay_mode {
        let report = autoplay(config.default_preset, &config);
        print_summary(&report);
        return Ok(());
    }

    if !ipc_mode {
        println!("Chess Clock, clock-runner");
        println!("  session:  {}", Utc::now().to_rfc3339());
        println!("  preset:   {}", config.default_preset);
        println!("  poll_hz:  {}", config.poll_hz);
        println!("  keys:     1/2/3 preset, s start, <enter> switch, r reset, q quit");
        println!();
    }

    run_loop(&config, ipc_mode)
}

/// Single owner of the engine. Input arrives over the channel; between
/// inputs the loop wakes once per poll period to charge the running clock.
fn run_loop(config: &ClockConfig, ipc_mode: bool) -> Result<()> {
    let (tx, rx) = unbounded();
    thread::Builder::new()
        .name("stdin-reader".into())
        .spawn(move || read_input(ipc_mode, tx))
        .context("spawning stdin reader")?;

    let clock = SystemClock;
    let mut engine = ClockEngine::from_config(config);
    let period = config.poll_period();
    let mut stdout = io::stdout();
    let mut last_status = String::new();

    loop {
        match rx.recv_timeout(period) {
            Ok(Input::Intent(intent)) => {
                if apply_intent(&mut engine, intent, clock.now()) == Applied::Quit {
                    break;
                }
                if ipc_mode {
                    write_state(&mut stdout, &engine)?;
                }
            }
            Ok(Input::GetState) => write_state(&mut stdout, &engine)?,
            Ok(Input::Eof) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }

        engine.advance(clock.now());

        for event in engine.drain_events() {
            present(&mut stdout, &event, ipc_mode)?;
        }

        if !ipc_mode {
            let status = ClockView::of(&engine).status_line();
            if status != last_status {
                write!(stdout, "\r{status}   ")?;
                stdout.flush()?;
                last_status = status;
            }
        }
    }

    if !ipc_mode {
        writeln!(stdout)?;
    }
    Ok(())
}

fn read_input(ipc_mode: bool, tx: Sender<Input>) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let input = if ipc_mode {
            match Command::parse(&line) {
                Ok(cmd) => cmd.intent().map_or(Input::GetState, Input::Intent),
                Err(e) => {
                    let err_json = serde_json::json!({ "error": e.to_string() });
                    println!("{err_json}");
                    continue;
                }
            }
        } else {
            match Intent::from_line(&line) {
                Ok(intent) => Input::Intent(intent),
                Err(e) => {
                    log::warn!("{e}");
                    continue;
                }
            }
        };
        if tx.send(input).is_err() {
            return;
        }
    }
    let _ = tx.send(Input::Eof);
}

/// Stand-in for the click, particle burst and alarm of a graphical front end.
fn present(out: &mut impl Write, event: &ClockEvent, ipc_mode: bool) -> Result<()> {
    if ipc_mode {
        let line = EventLine { at: Utc::now(), event };
        writeln!(out, "{}", serde_json::to_string(&line)?)?;
        return out.flush().map_err(Into::into);
    }
    match event {
        ClockEvent::TurnSwitched { from, burst_origin, .. } => {
            log::debug!("click: burst at ({}, {})", burst_origin.x, burst_origin.y);
            log::info!("{} pressed the clock", from.label());
        }
        ClockEvent::TimedOut { loser } => {
            writeln!(out, "\n*** {} ran out of time ***", loser.label())?;
        }
        ClockEvent::PresetSelected { preset, .. } => {
            log::info!("time control: {preset}");
        }
        ClockEvent::Started { .. } | ClockEvent::Reset { .. } => {}
    }
    Ok(())
}

fn write_state(out: &mut impl Write, engine: &ClockEngine) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string(&ClockView::of(engine))?)?;
    out.flush()?;
    Ok(())
}

fn print_summary(report: &GameReport) {
    println!("=== AUTOPLAY SUMMARY ===");
    println!("  preset:      {}", report.preset);
    println!("  seed:        {}", report.seed);
    println!("  moves:       {}", report.moves);
    println!("  elapsed:     {}", format_clock(report.elapsed_seconds));
    println!("  player 1:    {}", format_clock(report.player1_seconds));
    println!("  player 2:    {}", format_clock(report.player2_seconds));
    match report.loser {
        Some(loser) => println!("  result:      {} flagged", loser.label()),
        None => println!("  result:      move limit reached"),
    }
    println!("  events:      {}", report.events.len());
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
