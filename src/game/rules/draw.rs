//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::find_winner;
use tracing::instrument;

/// Checks if the board is a draw: every cell taken and no winner.
///
/// Win takes precedence; a full board containing a complete line is a
/// win, not a draw.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && find_winner(board).is_none()
}
