//! Terminal runner (default binary).
//!
//! Runs the arcade at a fixed frame rate: input events are drained between
//! frames, the live mode is updated with the measured elapsed time, the status
//! poller refreshes the side panels, and the screen is redrawn. On exit the
//! final status report is printed as one JSON line.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_blockfall::config::{init_logging, AppConfig};
use tui_blockfall::core::{Arcade, StatusPoller, StatusReport};
use tui_blockfall::input::{map_key, KeyInput, KeyboardState};
use tui_blockfall::term::{FrameBuffer, Screen, TerminalRenderer, Viewport};
use tui_blockfall::types::{Command, TICK_MS};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = AppConfig::from_env()?.parse_args(&args)?;
    init_logging(&config)?;

    let seed = config.seed_or_random();
    info!("starting in {} mode with seed {}", config.mode.as_str(), seed);
    let mut arcade = Arcade::new(config.mode, seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut arcade);

    // Always try to restore terminal state.
    let _ = term.exit();
    let report = result?;

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

fn run(term: &mut TerminalRenderer, arcade: &mut Arcade) -> Result<StatusReport> {
    let screen = Screen::default();
    let mut keyboard = KeyboardState::new();
    let mut poller = StatusPoller::new();
    poller.refresh(arcade);

    let mut fb = FrameBuffer::new(0, 0);
    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Drain input until the next frame is due.
        let mut timeout = tick.saturating_sub(last_frame.elapsed());
        while event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    let now = Instant::now();
                    match map_key(key, arcade.mode()) {
                        Some(KeyInput::Control(control)) => keyboard.handle(control, key.kind, now),
                        Some(KeyInput::Command(command)) if key.kind == KeyEventKind::Press => {
                            if command == Command::Quit {
                                return Ok(poller.refresh(arcade).clone());
                            }
                            apply_command(arcade, &mut keyboard, command);
                            poller.refresh(arcade);
                        }
                        Some(KeyInput::Camera(turn)) if key.kind != KeyEventKind::Release => {
                            arcade.turn_camera(turn);
                        }
                        _ => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
            timeout = tick.saturating_sub(last_frame.elapsed());
        }

        let now = Instant::now();
        let elapsed_ms = now.duration_since(last_frame).as_secs_f64() * 1000.0;
        last_frame = now;

        arcade.update(elapsed_ms, keyboard.held(now));
        poller.poll(elapsed_ms, arcade);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        if let Some(report) = poller.latest() {
            screen.render_into(arcade, report, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }
    }
}

fn apply_command(arcade: &mut Arcade, keyboard: &mut KeyboardState, command: Command) {
    match command {
        Command::Start => arcade.start(),
        Command::Pause => arcade.pause(),
        Command::Reset => arcade.reset(),
        Command::SwitchMode => {
            keyboard.clear();
            arcade.switch_mode();
        }
        Command::Quit => {}
    }
}
