//! Balanced marks invariant: X leads O by zero or one.

use super::super::{Board, Player};
use super::Invariant;

/// Invariant: X count equals O count, or exceeds it by exactly one.
///
/// X always opens and players alternate, so no other split is reachable.
pub struct BalancedMarksInvariant;

impl Invariant<Board> for BalancedMarksInvariant {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);
        x_count == o_count || x_count == o_count + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}
