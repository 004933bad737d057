//! Contestant that plays uniformly random legal moves.

use super::Contestant;
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use strictly_minimax::{Action, Board, legal_actions};

/// Picks any empty square at random.
#[derive(Debug)]
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a random player; a seed makes its games reproducible.
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl Contestant for RandomPlayer {
    fn choose(&mut self, board: &Board) -> Result<Action> {
        legal_actions(board)
            .choose(&mut self.rng)
            .copied()
            .context("No empty square left")
    }

    fn name(&self) -> &str {
        &self.name
    }
}
