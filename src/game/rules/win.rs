//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Line, Mark, Position};
use tracing::instrument;

/// The 8 winning lines, checked in this order: rows, columns, diagonals.
/// First match wins when more than one line is complete.
pub const WIN_LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the winning mark together with the completed line,
/// `None` if no line holds three identical marks.
#[instrument]
pub fn find_winner(board: &Board) -> Option<(Mark, Line)> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Cell::Taken(mark) = board.get(a)
            && board.get(b) == Cell::Taken(mark)
            && board.get(c) == Cell::Taken(mark)
        {
            return Some((mark, line));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_winner_every_line() {
        for line in WIN_LINES {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Cell::Taken(Mark::X));
            }
            assert_eq!(find_winner(&board), Some((Mark::X, line)));
        }
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Taken(Mark::O));
        board.set(Position::Center, Cell::Taken(Mark::O));
        board.set(Position::BottomRight, Cell::Taken(Mark::O));
        assert_eq!(find_winner(&board), Some((Mark::O, WIN_LINES[6])));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Taken(Mark::X));
        board.set(Position::TopCenter, Cell::Taken(Mark::X));
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Taken(Mark::X));
        board.set(Position::TopCenter, Cell::Taken(Mark::O));
        board.set(Position::TopRight, Cell::Taken(Mark::X));
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_first_listed_line_wins_ties() {
        // Top row and left column both complete for X; the row is listed
        // first, so it is the one reported.
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            board.set(pos, Cell::Taken(Mark::X));
        }
        assert_eq!(find_winner(&board), Some((Mark::X, WIN_LINES[0])));
    }
}
