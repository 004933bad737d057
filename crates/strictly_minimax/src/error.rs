//! Errors raised by the rules and search engines.

use super::action::Action;

/// Error that can occur when applying an action or reading a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RulesError {
    /// The action's coordinates fall outside the 3x3 board.
    #[display("Invalid position: ({row}, {col}) is outside the board")]
    InvalidPosition {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The action targets an occupied square.
    #[display("Invalid action: square {_0} is already occupied")]
    InvalidAction(#[error(not(source))] Action),

    /// The board could not arise from legal play.
    #[display("Invalid board: X={x_count}, O={o_count} ({reason})")]
    InvalidBoard {
        /// Number of X marks.
        x_count: usize,
        /// Number of O marks.
        o_count: usize,
        /// Violated invariants.
        reason: String,
    },

    /// Board notation did not hold exactly nine cells.
    #[display("Board notation must have 9 cells, got {got}")]
    InvalidBoardLength {
        /// Number of cells found.
        got: usize,
    },

    /// Board notation held an unknown cell character.
    #[display("Invalid character '{character}' at cell {position}")]
    InvalidCellCharacter {
        /// Offending character.
        character: char,
        /// Cell index where it appeared.
        position: usize,
    },
}
