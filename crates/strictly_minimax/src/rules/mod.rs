//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions over a [`Board`](crate::Board).
//! Rules are separated from board storage so the search engine and the
//! contracts can compose them freely.

pub mod draw;
pub mod transition;
pub mod turn;
pub mod win;

pub use draw::{is_draw, is_full};
pub use transition::{Outcome, Utility, apply, is_terminal, legal_actions, outcome, utility};
pub use turn::player_to_move;
pub use win::winner;
