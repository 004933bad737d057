//! Actions: board coordinates a player may mark.

use serde::{Deserialize, Serialize};

/// A (row, column) coordinate on the board.
///
/// Constructing an action never checks bounds; [`crate::apply`] rejects
/// coordinates outside `[0, 3)` with `InvalidPosition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Row, 0 is the top.
    pub row: usize,
    /// Column, 0 is the left.
    pub col: usize,
}

impl Action {
    /// Creates a new action.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// All 9 in-bounds actions, row-major.
    pub const ALL: [Action; 9] = [
        Action::new(0, 0),
        Action::new(0, 1),
        Action::new(0, 2),
        Action::new(1, 0),
        Action::new(1, 1),
        Action::new(1, 2),
        Action::new(2, 0),
        Action::new(2, 1),
        Action::new(2, 2),
    ];

    /// True when both coordinates lie in `[0, 3)`.
    pub fn is_in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }

    /// Row-major board index (0-8), or `None` when off the board.
    pub fn index(self) -> Option<usize> {
        self.is_in_bounds().then(|| self.offset())
    }

    /// Unchecked row-major index; callers check bounds first.
    pub(crate) fn offset(self) -> usize {
        debug_assert!(self.is_in_bounds(), "offset of off-board action {}", self);
        self.row * 3 + self.col
    }

    /// Creates an action from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable name of the square.
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            (2, 2) => "Bottom-right",
            _ => "Off-board",
        }
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        assert_eq!(Action::new(0, 0).index(), Some(0));
        assert_eq!(Action::new(1, 1).index(), Some(4));
        assert_eq!(Action::new(2, 2).index(), Some(8));
        assert_eq!(Action::from_index(5), Some(Action::new(1, 2)));
        assert_eq!(Action::from_index(9), None);
    }

    #[test]
    fn test_bounds() {
        assert!(Action::new(2, 2).is_in_bounds());
        assert!(!Action::new(3, 0).is_in_bounds());
        assert!(!Action::new(0, 3).is_in_bounds());
        assert_eq!(Action::new(3, 0).label(), "Off-board");
    }

    #[test]
    fn test_index_of_huge_coordinates_is_none() {
        assert_eq!(Action::new(usize::MAX, 0).index(), None);
        assert_eq!(Action::new(0, usize::MAX).index(), None);
        assert_eq!(Action::new(1, 3).index(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::from((0, 2)).to_string(), "(0, 2)");
        assert_eq!(Action::new(1, 1).label(), "Center");
    }
}
