//! Core domain types for tic-tac-toe.

use super::action::Action;
use super::error::RulesError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first, maximizer).
    X,
    /// Player O (goes second, minimizer).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every rules transition returns a new board and
/// leaves its input untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given action's coordinates.
    ///
    /// Out-of-bounds coordinates read as `None`.
    pub fn get(&self, action: Action) -> Option<Square> {
        action.index().map(|i| self.squares[i])
    }

    /// Places a square without any rules checks. Only the rules engine writes.
    pub(crate) fn set(&mut self, action: Action, square: Square) {
        self.squares[action.offset()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, action: Action) -> bool {
        matches!(self.get(action), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Every empty coordinate, in row-major order.
    #[instrument(skip(self))]
    pub fn empty_cells(&self) -> Vec<Action> {
        Action::ALL
            .iter()
            .copied()
            .filter(|action| self.is_empty(*action))
            .collect()
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            let line: Vec<String> = cells.iter().map(|s| s.symbol().to_string()).collect();
            write!(f, "{}", line.join("|"))?;
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = RulesError;

    /// Parses nine cells (`X`, `O`, and `.`, `-`, `_` or space for empty).
    ///
    /// `/`, `|` and line breaks are row separators and are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut got = 0;
        for (position, character) in s
            .chars()
            .filter(|c| !matches!(c, '/' | '|' | '\n' | '\r'))
            .enumerate()
        {
            let square = match character.to_ascii_uppercase() {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                '.' | '-' | '_' | ' ' => Square::Empty,
                _ => {
                    return Err(RulesError::InvalidCellCharacter {
                        character,
                        position,
                    });
                }
            };
            if position < 9 {
                board.squares[position] = square;
            }
            got += 1;
        }
        if got != 9 {
            return Err(RulesError::InvalidBoardLength { got });
        }
        Ok(board)
    }
}
