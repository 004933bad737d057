//! Minimax engine contestant.

use super::Contestant;
use anyhow::{Context, Result};
use strictly_minimax::{Action, Board, Search, best_action_par};
use tracing::{debug, instrument};

/// Plays the optimal action every turn.
#[derive(Debug, Clone)]
pub struct EnginePlayer {
    name: String,
    parallel: bool,
}

impl EnginePlayer {
    /// Creates an engine; `parallel` splits the root across threads.
    pub fn new(name: impl Into<String>, parallel: bool) -> Self {
        Self {
            name: name.into(),
            parallel,
        }
    }
}

impl Contestant for EnginePlayer {
    #[instrument(skip(self, board), fields(engine = %self.name))]
    fn choose(&mut self, board: &Board) -> Result<Action> {
        let action = if self.parallel {
            best_action_par(board)?
        } else {
            let mut search = Search::new();
            let action = search.best_action(board)?;
            debug!(stats = ?search.stats(), "Engine searched");
            action
        };
        action.context("Engine asked to move on a finished board")
    }

    fn name(&self) -> &str {
        &self.name
    }
}
