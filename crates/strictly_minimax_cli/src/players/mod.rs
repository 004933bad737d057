//! Contestant trait and implementations.

mod engine;
mod human;
mod random;

pub use engine::EnginePlayer;
pub use human::HumanPlayer;
pub use random::RandomPlayer;

use anyhow::Result;
use strictly_minimax::{Action, Board};

/// Anything that can pick a move for the side to move.
pub trait Contestant {
    /// Picks an action on a non-terminal board.
    fn choose(&mut self, board: &Board) -> Result<Action>;

    /// Returns the contestant's display name.
    fn name(&self) -> &str;
}
