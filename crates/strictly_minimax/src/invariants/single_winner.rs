//! Single winner invariant: at most one player owns a line.

use super::super::rules::win::{LINES, line_owner};
use super::super::{Board, Player};
use super::Invariant;

/// Invariant: X and O do not both hold a complete line.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        let owns = |player: Player| LINES.iter().any(|&line| line_owner(board, line) == Some(player));
        !(owns(Player::X) && owns(Player::O))
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_winner_holds() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert!(SingleWinnerInvariant::holds(&board));
    }

    #[test]
    fn test_two_winners_fail() {
        let board: Board = "XXX/OOO/...".parse().unwrap();
        assert!(!SingleWinnerInvariant::holds(&board));
    }
}
