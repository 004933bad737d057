//! First-class invariants for tic-tac-toe boards.
//!
//! Invariants are logical properties that every board reachable from the
//! empty board satisfies. They are testable independently and gate the
//! search engine's input.

use super::{Board, Player, RulesError};
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod balanced_marks;
pub mod single_winner;

pub use balanced_marks::BalancedMarksInvariant;
pub use single_winner::SingleWinnerInvariant;

/// All board invariants as a composable set.
pub type BoardInvariants = (BalancedMarksInvariant, SingleWinnerInvariant);

/// Fails fast with [`RulesError::InvalidBoard`] when the board could not
/// arise from legal play.
#[instrument(skip(board))]
pub fn validate(board: &Board) -> Result<(), RulesError> {
    BoardInvariants::check_all(board).map_err(|violations| {
        let reason = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%reason, "Board invariants violated");
        RulesError::InvalidBoard {
            x_count: board.count(Player::X),
            o_count: board.count(Player::O),
            reason,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, apply};

    #[test]
    fn test_invariant_set_holds_for_empty_board() {
        assert!(BoardInvariants::check_all(&Board::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut board = Board::new();
        for action in [Action::new(0, 0), Action::new(1, 1), Action::new(0, 2)] {
            board = apply(&board, action).unwrap();
        }
        assert!(BoardInvariants::check_all(&board).is_ok());
        assert!(validate(&board).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // O moved first and both players own a row.
        let board: Board = "OOO/XXX/O..".parse().unwrap();
        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_validate_reports_counts() {
        let board: Board = "XX.......".parse().unwrap();
        match validate(&board) {
            Err(RulesError::InvalidBoard {
                x_count, o_count, ..
            }) => {
                assert_eq!((x_count, o_count), (2, 0));
            }
            other => panic!("Expected InvalidBoard, got {:?}", other),
        }
    }
}
