//! Contract-based validation for rules transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::rules::player_to_move;
use super::{Action, Board, Player, RulesError, Square};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), RulesError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), RulesError>;
}

// ─────────────────────────────────────────────────────────────
//  Apply Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: both coordinates lie in `[0, 3)`.
pub struct InBounds;

impl InBounds {
    /// Checks the action's coordinates.
    pub fn check(action: &Action) -> Result<(), RulesError> {
        if action.is_in_bounds() {
            Ok(())
        } else {
            Err(RulesError::InvalidPosition {
                row: action.row,
                col: action.col,
            })
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the target square.
    pub fn check(action: &Action, board: &Board) -> Result<(), RulesError> {
        if board.is_empty(*action) {
            Ok(())
        } else {
            Err(RulesError::InvalidAction(*action))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Apply Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for [`crate::apply`].
///
/// Preconditions (checked in this order):
/// - Action is in bounds
/// - Square is empty
///
/// Postconditions:
/// - Exactly one square changed, from empty to the mover's mark
/// - Only the mover's count went up, by one
pub struct ApplyContract;

impl Contract<Board, Action> for ApplyContract {
    fn pre(board: &Board, action: &Action) -> Result<(), RulesError> {
        InBounds::check(action)?;
        SquareIsEmpty::check(action, board)
    }

    #[instrument(skip(before, after))]
    fn post(before: &Board, after: &Board) -> Result<(), RulesError> {
        let mover = player_to_move(before);
        let changed: Vec<(Square, Square)> = before
            .squares()
            .iter()
            .zip(after.squares())
            .filter(|(b, a)| b != a)
            .map(|(b, a)| (*b, *a))
            .collect();

        let single_placement = changed.as_slice() == [(Square::Empty, Square::Occupied(mover))];
        let counts_ok = after.count(mover) == before.count(mover) + 1
            && after.count(mover.opponent()) == before.count(mover.opponent());

        if single_placement && counts_ok {
            Ok(())
        } else {
            warn!(changed = changed.len(), ?mover, "Apply postcondition violated");
            Err(RulesError::InvalidBoard {
                x_count: after.count(Player::X),
                o_count: after.count(Player::O),
                reason: format!(
                    "Postcondition failed: expected one {} placement, found {} changed squares",
                    mover,
                    changed.len()
                ),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply;

    #[test]
    fn test_precondition_empty_square() {
        let board = Board::new();
        assert!(ApplyContract::pre(&board, &Action::new(1, 1)).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let board: Board = "....X....".parse().unwrap();
        assert!(matches!(
            ApplyContract::pre(&board, &Action::new(1, 1)),
            Err(RulesError::InvalidAction(_))
        ));
    }

    #[test]
    fn test_bounds_checked_before_occupancy() {
        let board: Board = "XOXOXOOXO".parse().unwrap();
        assert!(matches!(
            ApplyContract::pre(&board, &Action::new(0, 3)),
            Err(RulesError::InvalidPosition { row: 0, col: 3 })
        ));
    }

    #[test]
    fn test_postcondition_holds_after_apply() {
        let before = Board::new();
        let after = apply(&before, Action::new(2, 0)).unwrap();
        assert!(ApplyContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_wrong_mark() {
        let before = Board::new();
        let after: Board = "O........".parse().unwrap();
        assert!(ApplyContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_extra_change() {
        let before = Board::new();
        let after: Board = "XO.......".parse().unwrap();
        assert!(ApplyContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_no_change() {
        let before: Board = "X........".parse().unwrap();
        assert!(ApplyContract::post(&before, &before).is_err());
    }
}
