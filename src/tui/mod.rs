//! Terminal UI: setup, event loop, and rendering.
//!
//! Single-threaded and synchronous: each key event is handled to
//! completion before the next frame is drawn.

mod app;
mod input;
mod ui;

pub use app::App;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stdout, stdout};
use tracing::info;

/// Runs the game until the user quits. The terminal is restored before
/// returning, whether the loop ended normally or with an error.
pub fn run() -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut out = stdout();
    if let Err(e) = execute!(out, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }
    let mut terminal =
        Terminal::new(CrosstermBackend::new(out)).context("Failed to create terminal")?;

    let result = run_loop(&mut terminal);

    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    info!("starting game loop");
    let mut app = App::new();

    while !app.should_quit() {
        terminal
            .draw(|frame| ui::draw(frame, &app))
            .context("Failed to draw frame")?;

        if let Event::Key(key) = event::read().context("Failed to read input event")?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
    }

    info!("game loop finished");
    Ok(())
}
