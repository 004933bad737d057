//! Turn order derived from mark counts.

use super::super::{Board, Player};
use tracing::instrument;

/// Returns the player whose turn it is.
///
/// O moves when X is ahead; otherwise X moves. X therefore opens every game.
#[instrument(skip(board))]
pub fn player_to_move(board: &Board) -> Player {
    if board.count(Player::O) < board.count(Player::X) {
        Player::O
    } else {
        Player::X
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_opens() {
        assert_eq!(player_to_move(&Board::new()), Player::X);
    }

    #[test]
    fn test_o_moves_when_x_ahead() {
        let board: Board = "....X....".parse().unwrap();
        assert_eq!(player_to_move(&board), Player::O);
    }

    #[test]
    fn test_x_moves_when_counts_equal() {
        let board: Board = "XX.OO....".parse().unwrap();
        assert_eq!(player_to_move(&board), Player::X);
    }
}
