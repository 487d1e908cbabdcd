//! Terminal falling-block game runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer.
//! Logging goes to the file named by `TETRIS_LOG_PATH`, if any, so it never
//! draws over the alternate screen.

use std::fs::File;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::info;

use tui_blockfall::config::AppConfig;
use tui_blockfall::core::{Session, SessionSnapshot};
use tui_blockfall::input::{InputTracker, CONTROLS_HELP};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Longest step fed to the session; a stalled terminal must not fast-forward gravity.
const MAX_FRAME_MS: u32 = 250;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    if let Some(path) = &config.log_path {
        init_logging(path)?;
    }
    // Parse warnings above predate the logger; record what was actually used.
    info!("config: {:?}", config);

    let mut session =
        Session::new(config.engine, config.seed).context("invalid game configuration")?;
    info!(
        "starting {}x{} game, seed {}",
        config.engine.width, config.engine.height, config.seed
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("final score {} ({} lines)", session.score(), session.lines());
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut Session, config: &AppConfig) -> Result<()> {
    let release_events = term.enable_key_release_events().unwrap_or(false);
    let mut input = InputTracker::new()
        .with_key_release_timeout_ms(config.key_release_ms)
        .with_release_events(release_events);

    let view = GameView::default().with_controls(&CONTROLS_HELP);
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = SessionSnapshot::default();

    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    input.handle_key_event(key);
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let dt = (elapsed.as_millis() as u64).min(MAX_FRAME_MS as u64) as u32;

            let frame = input.update(dt);
            let events = session.tick(dt, &frame);
            if events.quit_requested {
                return Ok(());
            }
            if events.restarted {
                input.reset();
            }
        }
    }
}
