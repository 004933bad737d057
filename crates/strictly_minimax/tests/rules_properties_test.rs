//! Properties of the rules engine over every board reachable from the empty board.

use std::collections::HashSet;
use strictly_minimax::{
    Action, Board, Player, RulesError, Square, apply, initial_board, is_terminal, legal_actions,
    outcome, player_to_move, utility, validate, winner,
};

fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_board()];
    let mut boards = Vec::new();
    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);
        if is_terminal(&board) {
            continue;
        }
        for action in legal_actions(&board) {
            stack.push(apply(&board, action).unwrap());
        }
    }
    boards
}

#[test]
fn test_reachable_board_count() {
    // Well-known count of distinct legal tic-tac-toe positions.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_player_to_move_follows_counts() {
    for board in reachable_boards() {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        match player_to_move(&board) {
            Player::X => assert_eq!(x, o, "{}", board),
            Player::O => assert_eq!(x, o + 1, "{}", board),
        }
        assert!(validate(&board).is_ok());
    }
}

#[test]
fn test_apply_changes_exactly_one_square() {
    for board in reachable_boards().into_iter().filter(|b| !is_terminal(b)) {
        let mover = player_to_move(&board);
        for action in legal_actions(&board) {
            let next = apply(&board, action).unwrap();
            let changed: Vec<usize> = (0..9)
                .filter(|&i| board.squares()[i] != next.squares()[i])
                .collect();
            assert_eq!(Some(changed), action.index().map(|i| vec![i]));
            assert_eq!(next.get(action), Some(Square::Occupied(mover)));
            assert_eq!(next.count(mover), board.count(mover) + 1);
            assert_eq!(next.count(mover.opponent()), board.count(mover.opponent()));
        }
    }
}

#[test]
fn test_terminal_iff_winner_or_full() {
    for board in reachable_boards() {
        let expected = winner(&board).is_some() || legal_actions(&board).is_empty();
        assert_eq!(is_terminal(&board), expected, "{}", board);
        assert_eq!(outcome(&board).is_some(), expected);
    }
}

#[test]
fn test_utility_agrees_with_winner() {
    for board in reachable_boards().into_iter().filter(is_terminal) {
        let expected = match winner(&board) {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        };
        assert_eq!(utility(&board), expected);
    }
}

#[test]
fn test_apply_never_mutates_input() {
    let board: Board = "X../.O./...".parse().unwrap();
    let copy = board;
    let _ = apply(&board, Action::new(2, 2)).unwrap();
    assert_eq!(board, copy);
}

#[test]
fn test_apply_errors() {
    let board: Board = "XX./OO./...".parse().unwrap();
    assert_eq!(
        apply(&board, Action::new(0, 0)),
        Err(RulesError::InvalidAction(Action::new(0, 0)))
    );
    assert_eq!(
        apply(&board, Action::new(3, 0)),
        Err(RulesError::InvalidPosition { row: 3, col: 0 })
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        RulesError::InvalidPosition { row: 3, col: 0 }.to_string(),
        "Invalid position: (3, 0) is outside the board"
    );
    assert_eq!(
        RulesError::InvalidAction(Action::new(1, 1)).to_string(),
        "Invalid action: square (1, 1) is already occupied"
    );
}

#[test]
fn test_action_serializes_as_coordinates() {
    let json = serde_json::to_string(&Action::new(0, 2)).unwrap();
    assert_eq!(json, r#"{"row":0,"col":2}"#);
}
