//! Terminal runner (default binary).
//!
//! Drives the rules engine at a fixed 60 Hz: each frame the held key becomes
//! one `Button`, the engine ticks once, and the screen is redrawn only when
//! something visible changed. On exit a one-line JSON summary is printed so a
//! wrapper script can carry the top score into the next session.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use frametris::core::{GameSnapshot, GameState};
use frametris::input::{should_quit, InputHandler};
use frametris::term::{FrameBuffer, GameView, TerminalRenderer, VIEW_HEIGHT, VIEW_WIDTH};
use frametris::types::{Button, GameMode, TICK_MS};
use frametris::RunnerConfig;

/// Printed to stdout after the terminal is restored.
#[derive(Debug, Serialize)]
struct ExitSummary {
    score: u32,
    top_score: u32,
    level: u8,
    lines: u32,
    mode: GameMode,
}

impl From<&GameSnapshot> for ExitSummary {
    fn from(snap: &GameSnapshot) -> Self {
        Self {
            score: snap.score,
            top_score: snap.top_score.max(snap.score),
            level: snap.level,
            lines: snap.lines,
            mode: snap.mode,
        }
    }
}

fn main() -> Result<()> {
    let config = RunnerConfig::from_env()?;
    init_logging(&config)?;
    info!(level = config.level, seed = config.seed, "starting frametris");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let snapshot = result?;
    println!("{}", serde_json::to_string(&ExitSummary::from(&snapshot))?);
    Ok(())
}

/// Log to a file when `FRAMETRIS_LOG_PATH` is set; the terminal is in raw mode.
fn init_logging(config: &RunnerConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("failed to create log file {path}"))?;
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("invalid FRAMETRIS_LOG_LEVEL {:?}", config.log_level))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &RunnerConfig) -> Result<GameSnapshot> {
    let mut game = GameState::new(config.game_config(), config.seed);
    let view = GameView::new();
    let mut fb = FrameBuffer::new(VIEW_WIDTH, VIEW_HEIGHT);
    let mut input = InputHandler::new();

    let frame = Duration::from_millis(TICK_MS as u64);
    let mut next_frame = Instant::now() + frame;
    let mut shown = (game.game_mode(), game.level());
    let mut dirty = true;

    loop {
        if dirty {
            view.render_into(&game.snapshot(), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        // Drain input until the next frame is due.
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release && should_quit(key) => {
                    return Ok(game.snapshot());
                }
                Event::Key(key) => {
                    input.handle_key_event(key);
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
            continue;
        }
        next_frame += frame;

        let button = input.next_frame();
        let changes = game.tick(button);
        if button == Button::Exit {
            debug!("exit button");
            return Ok(game.snapshot());
        }

        // Mode and level changes report no cell changes but still need a redraw.
        let now = (game.game_mode(), game.level());
        dirty |= !changes.is_empty() || now != shown;
        shown = now;
    }
}
