//! Minimax search with best-value cutoffs.
//!
//! X maximizes utility and O minimizes it. Each value function stops scanning
//! its remaining siblings once it has reached the best score its side can get
//! (+1 for X, -1 for O). This is not alpha-beta: no bounds flow down the tree.
//!
//! Actions are scanned row-major, and the root keeps the first action that
//! strictly improves its best score, so ties always go to the lowest square.

use super::invariants::validate;
use super::rules::{Utility, apply, is_terminal, legal_actions, player_to_move, utility};
use super::{Action, Board, Player, RulesError};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Best score X can reach.
pub const X_WINS: Utility = 1;
/// Best score O can reach.
pub const O_WINS: Utility = -1;

/// Counters gathered during one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, terminal ones included.
    pub nodes: u64,
    /// Times a value function skipped remaining siblings.
    pub cutoffs: u64,
}

impl std::ops::AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}

/// A legal action together with its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionValue {
    /// The action.
    pub action: Action,
    /// Utility reached under optimal play after taking it.
    pub value: Utility,
}

/// Sequential minimax searcher.
///
/// Holds only statistics; every call starts from the board it is given.
#[derive(Debug, Clone, Default)]
pub struct Search {
    stats: SearchStats,
}

impl Search {
    /// Creates a searcher with zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics since the last `best_action` or `evaluate_actions` call.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Optimal action for the player to move, or `None` on a terminal board.
    ///
    /// # Errors
    ///
    /// [`RulesError::InvalidBoard`] if the board breaks the board invariants.
    #[instrument(skip(self, board))]
    pub fn best_action(&mut self, board: &Board) -> Result<Option<Action>, RulesError> {
        validate(board)?;
        self.stats = SearchStats::default();

        if is_terminal(board) {
            return Ok(None);
        }

        let mover = player_to_move(board);
        let target = optimum(mover);
        let mut best: Option<ActionValue> = None;

        for action in legal_actions(board) {
            let value = self.reply_value(mover, &apply(board, action)?)?;
            if best.is_none_or(|b| improves(mover, value, b.value)) {
                best = Some(ActionValue { action, value });
            }
            if value == target {
                break;
            }
        }

        debug!(
            ?mover,
            best = ?best,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "Search finished"
        );
        Ok(best.map(|b| b.action))
    }

    /// Minimax value of every legal action, row-major.
    ///
    /// Empty on terminal boards.
    ///
    /// # Errors
    ///
    /// [`RulesError::InvalidBoard`] if the board breaks the board invariants.
    #[instrument(skip(self, board))]
    pub fn evaluate_actions(&mut self, board: &Board) -> Result<Vec<ActionValue>, RulesError> {
        validate(board)?;
        self.stats = SearchStats::default();

        if is_terminal(board) {
            return Ok(Vec::new());
        }

        let mover = player_to_move(board);
        let values = legal_actions(board)
            .into_iter()
            .map(|action| {
                let value = self.reply_value(mover, &apply(board, action)?)?;
                Ok::<_, RulesError>(ActionValue { action, value })
            })
            .collect::<Result<Vec<_>, RulesError>>()?;

        debug!(nodes = self.stats.nodes, cutoffs = self.stats.cutoffs, "Evaluation finished");
        Ok(values)
    }

    /// Value of a board where X is to move.
    pub fn max_value(&mut self, board: &Board) -> Result<Utility, RulesError> {
        self.stats.nodes += 1;
        if is_terminal(board) {
            return Ok(utility(board));
        }

        let actions = legal_actions(board);
        let mut value = Utility::MIN;
        for (i, action) in actions.iter().enumerate() {
            value = value.max(self.min_value(&apply(board, *action)?)?);
            if value == X_WINS {
                if i + 1 < actions.len() {
                    self.stats.cutoffs += 1;
                }
                return Ok(value);
            }
        }
        Ok(value)
    }

    /// Value of a board where O is to move.
    pub fn min_value(&mut self, board: &Board) -> Result<Utility, RulesError> {
        self.stats.nodes += 1;
        if is_terminal(board) {
            return Ok(utility(board));
        }

        let actions = legal_actions(board);
        let mut value = Utility::MAX;
        for (i, action) in actions.iter().enumerate() {
            value = value.min(self.max_value(&apply(board, *action)?)?);
            if value == O_WINS {
                if i + 1 < actions.len() {
                    self.stats.cutoffs += 1;
                }
                return Ok(value);
            }
        }
        Ok(value)
    }

    /// Value of `next` after `mover` has played into it.
    pub(crate) fn reply_value(&mut self, mover: Player, next: &Board) -> Result<Utility, RulesError> {
        match mover {
            Player::X => self.min_value(next),
            Player::O => self.max_value(next),
        }
    }
}

/// Best score reachable by `player`.
pub(crate) fn optimum(player: Player) -> Utility {
    match player {
        Player::X => X_WINS,
        Player::O => O_WINS,
    }
}

/// True when `value` is strictly better than `best` for `player`.
pub(crate) fn improves(player: Player, value: Utility, best: Utility) -> bool {
    match player {
        Player::X => value > best,
        Player::O => value < best,
    }
}

/// Picks `mover`'s best entry from row-major `values`, first one on ties.
///
/// Lets a caller that already holds [`evaluate_actions`] output choose an
/// action without searching again. Agrees with [`best_action`].
pub fn pick_best(mover: Player, values: &[ActionValue]) -> Option<ActionValue> {
    values.iter().copied().fold(None, |best, candidate| match best {
        Some(b) if !improves(mover, candidate.value, b.value) => Some(b),
        _ => Some(candidate),
    })
}

/// Optimal action for the player to move, or `None` on a terminal board.
///
/// Ties go to the first optimal action in row-major order.
///
/// # Errors
///
/// [`RulesError::InvalidBoard`] if the board breaks the board invariants.
pub fn best_action(board: &Board) -> Result<Option<Action>, RulesError> {
    Search::new().best_action(board)
}

/// Minimax value of every legal action, row-major.
pub fn evaluate_actions(board: &Board) -> Result<Vec<ActionValue>, RulesError> {
    Search::new().evaluate_actions(board)
}

/// Value of a board where X is to move.
pub fn max_value(board: &Board) -> Result<Utility, RulesError> {
    Search::new().max_value(board)
}

/// Value of a board where O is to move.
pub fn min_value(board: &Board) -> Result<Utility, RulesError> {
    Search::new().min_value(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initial_board;

    #[test]
    fn test_terminal_board_has_no_action() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(best_action(&board), Ok(None));
        assert_eq!(evaluate_actions(&board), Ok(Vec::new()));
    }

    #[test]
    fn test_takes_immediate_win() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(best_action(&board), Ok(Some(Action::new(0, 2))));
    }

    #[test]
    fn test_o_takes_immediate_win() {
        let board: Board = "XX./OO./X..".parse().unwrap();
        assert_eq!(best_action(&board), Ok(Some(Action::new(1, 2))));
    }

    #[test]
    fn test_blocks_opponent() {
        // O must block X's top row.
        let board: Board = "XX./.O./...".parse().unwrap();
        assert_eq!(best_action(&board), Ok(Some(Action::new(0, 2))));
    }

    #[test]
    fn test_rejects_invalid_board() {
        let board: Board = "OO.......".parse().unwrap();
        assert!(matches!(
            best_action(&board),
            Err(RulesError::InvalidBoard { .. })
        ));
    }

    #[test]
    fn test_value_functions_on_terminal() {
        let board: Board = "XX./OOO/X..".parse().unwrap();
        assert_eq!(max_value(&board), Ok(-1));
        assert_eq!(min_value(&board), Ok(-1));
    }

    #[test]
    fn test_max_value_cuts_off_at_win() {
        let board: Board = "XX./OO./...".parse().unwrap();
        let mut search = Search::new();
        assert_eq!(search.max_value(&board), Ok(1));
        // (0, 2) is scanned first among five empties and wins on the spot.
        assert_eq!(search.stats(), SearchStats { nodes: 2, cutoffs: 1 });
    }

    #[test]
    fn test_min_value_cuts_off_at_loss() {
        let board: Board = ".XX/OO./X..".parse().unwrap();
        let mut search = Search::new();
        assert_eq!(search.min_value(&board), Ok(-1));
        // (0, 0) already forces a loss for X, so its three siblings are skipped.
        assert_eq!(search.stats(), SearchStats { nodes: 10, cutoffs: 3 });
    }

    #[test]
    fn test_pick_best_agrees_with_best_action() {
        for notation in ["X........", "XX./.O./...", "XX./OO./X..", ".XX/OO./X.."] {
            let board: Board = notation.parse().unwrap();
            let values = evaluate_actions(&board).unwrap();
            let picked = pick_best(player_to_move(&board), &values).map(|v| v.action);
            assert_eq!(Ok(picked), best_action(&board), "board {}", notation);
        }
    }

    #[test]
    fn test_pick_best_keeps_first_on_ties() {
        let values = [
            ActionValue { action: Action::new(0, 1), value: 0 },
            ActionValue { action: Action::new(1, 1), value: 1 },
            ActionValue { action: Action::new(2, 1), value: 1 },
        ];
        assert_eq!(pick_best(Player::X, &values), Some(values[1]));
        assert_eq!(pick_best(Player::O, &values), Some(values[0]));
        assert_eq!(pick_best(Player::X, &[]), None);
    }

    #[test]
    fn test_opening_values_are_draws() {
        let values = evaluate_actions(&initial_board()).unwrap();
        assert_eq!(values.len(), 9);
        assert!(values.iter().all(|v| v.value == 0));
    }

    #[test]
    fn test_opening_tie_breaks_to_first_square() {
        assert_eq!(best_action(&initial_board()), Ok(Some(Action::new(0, 0))));
    }
}
