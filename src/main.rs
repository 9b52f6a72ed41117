//! Terminal blockfall runner (default binary).
//!
//! Drives the core at a fixed 16 ms tick: poll keyboard events until the
//! tick deadline, sample the held-key snapshot, tick the game, render.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{is_new_game, is_pause, should_quit, KeyState};
use blockfall::persist::{FileStore, HighScoreStore};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Seed from the wall clock; gameplay needs no better randomness
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut store = FileStore::new(FileStore::default_path());

    let mut game = GameState::new(clock_seed(), store.load());
    game.start();

    let view = GameView::default();
    let mut keys = KeyState::new();
    let mut snapshot = GameSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snapshot);
        let fb = view.render(&snapshot, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if is_pause(key) && key.kind == KeyEventKind::Press {
                            keys.reset();
                            game.toggle_pause();
                        } else if is_new_game(key) && key.kind == KeyEventKind::Press {
                            // Fresh construction of all core state; the
                            // persisted high score carries over
                            keys.reset();
                            game = GameState::new(clock_seed(), store.load());
                            game.start();
                        } else {
                            keys.handle_key_press(key.code);
                        }
                    }
                    KeyEventKind::Release => {
                        keys.handle_key_release(key.code);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let input = keys.sample();
            game.tick(input, &mut store);
        }
    }
}
