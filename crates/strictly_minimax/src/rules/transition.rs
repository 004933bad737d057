//! State transitions and terminal scoring.

use super::super::contracts::{ApplyContract, Contract};
use super::super::{Action, Board, Player, RulesError, Square};
use super::draw::is_full;
use super::turn::player_to_move;
use super::win::winner;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Score of a board from X's point of view: +1 X won, -1 O won, 0 otherwise.
pub type Utility = i8;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Utility of this outcome.
    pub fn utility(&self) -> Utility {
        match self {
            Outcome::Winner(Player::X) => 1,
            Outcome::Winner(Player::O) => -1,
            Outcome::Draw => 0,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Every legal action on the board, row-major.
///
/// Empty only when the board is full. A won board with empty squares still
/// lists them, so check [`is_terminal`] first when a move is needed.
#[instrument(skip(board))]
pub fn legal_actions(board: &Board) -> Vec<Action> {
    board.empty_cells()
}

/// Returns the board that results from the player to move marking `action`.
///
/// The input board is not modified.
///
/// # Errors
///
/// - [`RulesError::InvalidPosition`] if the action lies outside the board.
/// - [`RulesError::InvalidAction`] if the square is already occupied.
#[instrument(skip(board))]
pub fn apply(board: &Board, action: Action) -> Result<Board, RulesError> {
    ApplyContract::pre(board, &action)?;

    let mut next = *board;
    next.set(action, Square::Occupied(player_to_move(board)));

    #[cfg(debug_assertions)]
    ApplyContract::post(board, &next)?;

    Ok(next)
}

/// True when someone has won or no empty square remains.
#[instrument(skip(board))]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Score of the board: +1 if X won, -1 if O won, 0 otherwise.
///
/// Non-terminal boards score 0; use [`outcome`] to tell them apart from draws.
#[instrument(skip(board))]
pub fn utility(board: &Board) -> Utility {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// The finished game's outcome, or `None` while play continues.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> Option<Outcome> {
    match winner(board) {
        Some(player) => Some(Outcome::Winner(player)),
        None if is_full(board) => Some(Outcome::Draw),
        None => None,
    }
}
