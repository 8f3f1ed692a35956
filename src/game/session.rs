//! Turn-taking game session.

use super::position::Position;
use super::rules;
use super::types::{Board, Cell, Line, Mark, Outcome};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Mutable game state: the board plus whose turn is next.
///
/// A session is created in progress with X to move, mutated only through
/// [`GameSession::apply_move`], and replaced wholesale by
/// [`GameSession::reset`]. The outcome is never stored; it is recomputed
/// from the board on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    next_mark: Mark,
}

impl GameSession {
    /// Creates a fresh session: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next_mark: Mark::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    ///
    /// Still defined once the game is over; it simply stops changing.
    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    /// Returns the cell at the given position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.board.get(pos)
    }

    /// Classifies the current board: win before draw, otherwise in
    /// progress with the next mark to move.
    pub fn outcome(&self) -> Outcome {
        if let Some((mark, line)) = rules::find_winner(&self.board) {
            Outcome::Win(mark, line)
        } else if self.board.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress(self.next_mark)
        }
    }

    /// Returns the completed line, if the game has been won.
    pub fn winning_line(&self) -> Option<Line> {
        rules::find_winner(&self.board).map(|(_, line)| line)
    }

    /// Checks whether the given cell is part of the winning line.
    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.winning_line().is_some_and(|line| line.contains(&pos))
    }

    /// Applies a move at the given position and returns the resulting
    /// outcome.
    ///
    /// Moves on a taken cell or after the game has ended are deliberate
    /// no-ops, not errors: the caller is a UI where such clicks are
    /// expected and there is nothing useful to report. The session is
    /// left untouched and the unchanged outcome is returned.
    pub fn apply_move(&mut self, pos: Position) -> Outcome {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            debug!(%pos, ?outcome, "move ignored: game already over");
            return outcome;
        }
        if !self.board.is_empty(pos) {
            debug!(%pos, "move ignored: cell taken");
            return outcome;
        }

        self.board.set(pos, Cell::Taken(self.next_mark));
        self.next_mark = self.next_mark.other();
        let outcome = self.outcome();
        debug!(%pos, ?outcome, "move applied");
        outcome
    }

    /// Discards all state and returns to the initial session.
    pub fn reset(&mut self) {
        debug!("session reset");
        *self = Self::new();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
