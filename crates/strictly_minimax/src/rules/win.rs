//! Win detection logic for tic-tac-toe.

use super::super::{Action, Board, Player, Square};
use tracing::instrument;

/// Every winning line, in the order they are checked: rows, columns, diagonals.
pub const LINES: [[Action; 3]; 8] = [
    // Rows
    [Action::new(0, 0), Action::new(0, 1), Action::new(0, 2)],
    [Action::new(1, 0), Action::new(1, 1), Action::new(1, 2)],
    [Action::new(2, 0), Action::new(2, 1), Action::new(2, 2)],
    // Columns
    [Action::new(0, 0), Action::new(1, 0), Action::new(2, 0)],
    [Action::new(0, 1), Action::new(1, 1), Action::new(2, 1)],
    [Action::new(0, 2), Action::new(1, 2), Action::new(2, 2)],
    // Diagonals
    [Action::new(0, 0), Action::new(1, 1), Action::new(2, 2)],
    [Action::new(0, 2), Action::new(1, 1), Action::new(2, 0)],
];

/// Returns the player holding a complete line, if any.
///
/// The first complete line in [`LINES`] order decides. Two complete lines of
/// different marks cannot arise from legal play.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&line| line_owner(board, line))
}

/// Owner of a single line when all three squares hold the same mark.
pub fn line_owner(board: &Board, [a, b, c]: [Action; 3]) -> Option<Player> {
    match board.get(a) {
        Some(Square::Occupied(player))
            if board.get(b) == Some(Square::Occupied(player))
                && board.get(c) == Some(Square::Occupied(player)) =>
        {
            Some(player)
        }
        _ => None,
    }
}
