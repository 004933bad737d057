//! Strictly Minimax - tic-tac-toe rules and optimal play
//!
//! Pure, synchronous game logic: a value-type [`Board`], free rules functions
//! over it, and a minimax search that returns a provably optimal [`Action`].
//!
//! # Architecture
//!
//! - **Board**: immutable 3x3 snapshot, parsed from and printed as notation
//! - **Rules**: turn order, legal actions, transitions, wins, draws, utility
//! - **Invariants / Contracts**: board validity and `apply` pre/postconditions
//! - **Search**: minimax with best-value cutoffs, sequential or root-parallel
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Action, Board, apply, best_action, is_terminal, utility};
//!
//! # fn example() -> Result<(), strictly_minimax::RulesError> {
//! let board: Board = "XX./OO./...".parse()?;
//! let action = best_action(&board)?;
//! assert_eq!(action, Some(Action::new(0, 2)));
//!
//! let board = apply(&board, Action::new(0, 2))?;
//! assert!(is_terminal(&board));
//! assert_eq!(utility(&board), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod search;
mod search_par;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Board model
pub use action::Action;
pub use types::{Board, Player, Square};

// Crate-level exports - Errors
pub use error::RulesError;

// Crate-level exports - Rules engine
pub use invariants::validate;
pub use rules::{
    Outcome, Utility, apply, is_draw, is_full, is_terminal, legal_actions, outcome,
    player_to_move, utility, winner,
};

// Crate-level exports - Search engine
pub use search::{
    ActionValue, O_WINS, Search, SearchStats, X_WINS, best_action, evaluate_actions, max_value,
    min_value, pick_best,
};
pub use search_par::{best_action_par, evaluate_actions_par};

/// Returns the starting board: every square empty.
pub fn initial_board() -> Board {
    Board::new()
}
