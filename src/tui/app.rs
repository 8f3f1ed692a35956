//! Application state and key handling.

use crate::game::{GameSession, Outcome, Position};
use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use super::input;

/// Main application state: the game session plus UI-only state (cursor,
/// quit flag). The session is owned here and mutated only in response to
/// key events, one event handled to completion at a time.
pub struct App {
    session: GameSession,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Returns the game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Checks whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status line text for the current outcome.
    pub fn status_text(&self) -> String {
        match self.session.outcome() {
            Outcome::InProgress(mark) => format!("Player {mark}'s turn"),
            Outcome::Win(mark, _) => format!("Player {mark} wins!"),
            Outcome::Draw => "It's a draw!".to_string(),
        }
    }

    /// Handles a key event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                self.session.reset();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                // Illegal selections are no-ops inside the session.
                self.session.apply_move(self.cursor);
            }
            code => {
                self.cursor = input::move_cursor(self.cursor, code);
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
