//! TicTacToe Classic library - game core and terminal UI.
//!
//! Two-player tic-tac-toe: a 3x3 grid, alternating turns, win/draw
//! detection, and restart.
//!
//! # Architecture
//!
//! - **Rules engine** ([`game::rules`]): pure functions deciding, for a
//!   board snapshot, whether a winning line exists and whether the game
//!   is a draw.
//! - **Game session** ([`GameSession`]): the board plus whose turn is
//!   next, mutated through a single move-application operation with
//!   silent no-op semantics for illegal moves, and a reset operation.
//! - **Terminal UI** ([`tui`]): ratatui presentation layer that owns the
//!   session, renders it, and feeds it key events.
//!
//! # Example
//!
//! ```
//! use tictactoe_classic::{GameSession, Mark, Outcome, Position};
//!
//! let mut session = GameSession::new();
//! session.apply_move(Position::TopLeft);
//! assert_eq!(session.outcome(), Outcome::InProgress(Mark::O));
//! session.reset();
//! assert_eq!(session.outcome(), Outcome::InProgress(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod game;
pub mod tui;

pub use game::{Board, Cell, GameSession, Line, Mark, Outcome, Position};
