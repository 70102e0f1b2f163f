//! Terminal game runner.
//!
//! Owns the timed loop: render, poll input until the next gravity tick is
//! due, apply actions, tick. Gravity stops once the session ends; the loop
//! keeps rendering the final frame until the player quits.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::config::{parse_args, RunConfig, USAGE};
use blockfall::core::GameSession;
use blockfall::input::{action_for, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args)? {
        Some(config) => config,
        None => {
            println!("{}", USAGE);
            return Ok(());
        }
    };

    let seed = config.seed.unwrap_or_else(clock_seed);
    let mut session = GameSession::new(config.rows, config.cols, seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession, config: &RunConfig) -> Result<()> {
    let view = GameView::default();
    let drop_interval = Duration::from_millis(config.drop_ms);
    // Wake-up cadence once gravity has stopped, to catch quit keys
    let idle_poll = Duration::from_millis(250);

    // Ping-pongs with the renderer's previous frame, so steady state
    // allocates nothing.
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let mut ticking = true;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(session, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = if ticking {
            drop_interval.saturating_sub(last_tick.elapsed())
        } else {
            idle_poll
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key)
                    if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat =>
                {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = action_for(key) {
                        session.apply_action(action);
                    }
                }
                _ => {}
            }
        }

        if ticking && last_tick.elapsed() >= drop_interval {
            last_tick = Instant::now();
            ticking = session.tick();
        }
    }
}

/// Seed for unseeded runs, taken from the wall clock.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(0x5eed)
}
