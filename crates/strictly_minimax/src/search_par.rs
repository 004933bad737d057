//! Root-parallel minimax using rayon.
//!
//! Each root action is searched on its own thread with its own [`Search`].
//! Boards are plain values, so the branches share nothing. The reduction
//! applies the same row-major tie-break as [`Search::best_action`], and the
//! two always agree.

use rayon::prelude::*;

use super::invariants::validate;
use super::rules::{apply, is_terminal, legal_actions, player_to_move};
use super::search::{ActionValue, Search, SearchStats, pick_best};
use super::{Action, Board, RulesError};
use tracing::{debug, instrument};

/// Evaluates every root action in parallel and returns them row-major,
/// along with the summed statistics.
///
/// # Errors
///
/// [`RulesError::InvalidBoard`] if the board breaks the board invariants.
#[instrument(skip(board))]
pub fn evaluate_actions_par(board: &Board) -> Result<(Vec<ActionValue>, SearchStats), RulesError> {
    validate(board)?;
    if is_terminal(board) {
        return Ok((Vec::new(), SearchStats::default()));
    }

    let mover = player_to_move(board);
    let branches = legal_actions(board)
        .into_par_iter()
        .map(|action| {
            let mut search = Search::new();
            let value = search.reply_value(mover, &apply(board, action)?)?;
            Ok::<_, RulesError>((ActionValue { action, value }, search.stats()))
        })
        .collect::<Result<Vec<_>, RulesError>>()?;

    let mut stats = SearchStats::default();
    let values = branches
        .into_iter()
        .map(|(value, branch_stats)| {
            stats += branch_stats;
            value
        })
        .collect();

    debug!(nodes = stats.nodes, cutoffs = stats.cutoffs, "Parallel evaluation finished");
    Ok((values, stats))
}

/// Parallel counterpart of [`crate::best_action`].
///
/// # Errors
///
/// [`RulesError::InvalidBoard`] if the board breaks the board invariants.
#[instrument(skip(board))]
pub fn best_action_par(board: &Board) -> Result<Option<Action>, RulesError> {
    let (values, _) = evaluate_actions_par(board)?;
    Ok(pick_best(player_to_move(board), &values).map(|b| b.action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{best_action, evaluate_actions, initial_board};

    #[test]
    fn test_matches_sequential_on_opening() {
        let board = initial_board();
        assert_eq!(best_action_par(&board), best_action(&board));
    }

    #[test]
    fn test_matches_sequential_midgame() {
        for notation in ["X........", "X../.O./...", "XX./OO./...", "XO./.X./..O"] {
            let board: Board = notation.parse().unwrap();
            assert_eq!(best_action_par(&board), best_action(&board), "board {}", notation);
        }
    }

    #[test]
    fn test_values_match_sequential() {
        let board: Board = "X../.O./...".parse().unwrap();
        let (values, stats) = evaluate_actions_par(&board).unwrap();
        assert_eq!(values, evaluate_actions(&board).unwrap());
        assert!(stats.nodes >= values.len() as u64);
    }

    #[test]
    fn test_terminal_board() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(best_action_par(&board), Ok(None));
    }
}
