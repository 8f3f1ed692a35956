//! Integration tests for the game session state machine.

use tictactoe_classic::{Board, Cell, GameSession, Mark, Outcome, Position};

fn pos(index: usize) -> Position {
    Position::from_index(index).expect("test index in range")
}

fn play(session: &mut GameSession, indices: &[usize]) {
    for &i in indices {
        session.apply_move(pos(i));
    }
}

#[test]
fn test_initial_state() {
    let session = GameSession::new();
    assert_eq!(session.next_mark(), Mark::X);
    assert_eq!(session.outcome(), Outcome::InProgress(Mark::X));
    assert_eq!(*session.board(), Board::new());
    assert_eq!(session.winning_line(), None);
}

#[test]
fn test_turns_alternate_on_accepted_moves() {
    let mut session = GameSession::new();
    let mut expected = Mark::X;
    for i in [4, 0, 8, 2] {
        assert_eq!(session.next_mark(), expected);
        session.apply_move(pos(i));
        expected = expected.other();
        assert_eq!(session.next_mark(), expected);
    }
}

#[test]
fn test_occupied_cell_is_noop() {
    // Scenario: X takes a cell, the next click on it changes nothing.
    let mut session = GameSession::new();
    session.apply_move(pos(0));
    let before = session.clone();

    let outcome = session.apply_move(pos(0));
    assert_eq!(session, before);
    assert_eq!(session.next_mark(), Mark::O);
    assert_eq!(outcome, Outcome::InProgress(Mark::O));
}

#[test]
fn test_row_win() {
    // X at 0, 1, 2 with O interleaved at 3, 4.
    let mut session = GameSession::new();
    play(&mut session, &[0, 3, 1, 4, 2]);

    let outcome = session.outcome();
    let Outcome::Win(mark, line) = outcome else {
        panic!("expected a win, got {outcome:?}");
    };
    assert_eq!(mark, Mark::X);
    assert_eq!(line.map(Position::index), [0, 1, 2]);
    for p in line {
        assert!(session.is_winning_cell(p));
    }
    assert!(!session.is_winning_cell(pos(4)));
}

#[test]
fn test_draw_game() {
    // Ends as X O X / X O O / O X X - full, no line.
    let mut session = GameSession::new();
    play(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(session.outcome(), Outcome::Draw);
    assert_eq!(session.winning_line(), None);
    assert!(session.board().is_full());
}

#[test]
fn test_moves_after_win_are_noops() {
    let mut session = GameSession::new();
    play(&mut session, &[0, 3, 1, 4, 2]);
    let finished = session.clone();

    for p in Position::ALL {
        session.apply_move(p);
        assert_eq!(session, finished);
    }
    assert!(matches!(session.outcome(), Outcome::Win(Mark::X, _)));
}

#[test]
fn test_moves_after_draw_are_noops() {
    let mut session = GameSession::new();
    play(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let finished = session.clone();

    session.apply_move(pos(4));
    assert_eq!(session, finished);
    assert_eq!(session.outcome(), Outcome::Draw);
}

#[test]
fn test_reset_from_any_state() {
    let fresh = GameSession::new();

    // Mid-game
    let mut session = GameSession::new();
    play(&mut session, &[4, 0]);
    session.reset();
    assert_eq!(session, fresh);
    assert_eq!(session.outcome(), Outcome::InProgress(Mark::X));

    // Won
    let mut session = GameSession::new();
    play(&mut session, &[0, 3, 1, 4, 2]);
    session.reset();
    assert_eq!(session, fresh);

    // Drawn
    let mut session = GameSession::new();
    play(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    session.reset();
    assert_eq!(session, fresh);
}

#[test]
fn test_win_reported_before_draw_on_full_board() {
    // X fills its line last, so the board is full and won at once:
    // X X X / O O X / O X O with the final move at index 2.
    let mut session = GameSession::new();
    play(&mut session, &[0, 3, 1, 4, 8, 6, 5, 7, 2]);

    assert!(session.board().is_full());
    assert!(matches!(session.outcome(), Outcome::Win(Mark::X, _)));
}

#[test]
fn test_session_serialization_shape() {
    let mut session = GameSession::new();
    session.apply_move(pos(0));

    let json = serde_json::to_value(&session).expect("session serializes");
    assert_eq!(json["next_mark"], "O");
    assert_eq!(json["board"]["cells"][0], serde_json::json!({"Taken": "X"}));
    assert_eq!(json["board"]["cells"][1], "Empty");

    let back: GameSession = serde_json::from_value(json).expect("session deserializes");
    assert_eq!(back, session);
}
