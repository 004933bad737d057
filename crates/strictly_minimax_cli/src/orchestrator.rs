//! Game orchestration between two contestants.

use super::players::Contestant;
use super::render::render;
use anyhow::{Context, Result};
use std::io::Write;
use strictly_minimax::{
    Action, Board, Outcome, Player, apply, initial_board, outcome, player_to_move, utility,
};
use tracing::{debug, info, instrument};

/// A finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// Actions in the order they were played.
    pub moves: Vec<Action>,
    /// Final board.
    pub board: Board,
    /// How the game ended.
    pub outcome: Outcome,
}

/// Runs games between an X contestant and an O contestant.
pub struct Orchestrator {
    player_x: Box<dyn Contestant>,
    player_o: Box<dyn Contestant>,
    show_utility: bool,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(player_x: Box<dyn Contestant>, player_o: Box<dyn Contestant>) -> Self {
        Self {
            player_x,
            player_o,
            show_utility: false,
        }
    }

    /// Also prints the board's utility after every ply.
    pub fn show_utility(mut self, show: bool) -> Self {
        self.show_utility = show;
        self
    }

    /// Plays one game from the empty board, printing each ply to `out`.
    #[instrument(skip(self, out), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn play(&mut self, out: &mut impl Write) -> Result<GameRecord> {
        info!("Starting game");
        let mut board = initial_board();
        let mut moves = Vec::new();
        writeln!(out, "{}\n", render(&board))?;

        let finished = loop {
            if let Some(finished) = outcome(&board) {
                break finished;
            }

            let mover = player_to_move(&board);
            let contestant = match mover {
                Player::X => &mut self.player_x,
                Player::O => &mut self.player_o,
            };

            debug!(player = %contestant.name(), "Waiting for move");
            let action = contestant.choose(&board)?;
            board = apply(&board, action)
                .with_context(|| format!("{} chose an illegal move {}", contestant.name(), action))?;
            moves.push(action);

            writeln!(out, "{} ({}) plays {} {}", contestant.name(), mover, action, action.label())?;
            writeln!(out, "{}", render(&board))?;
            if self.show_utility {
                writeln!(out, "utility: {}", utility(&board))?;
            }
            writeln!(out)?;
        };

        let result = match finished {
            Outcome::Winner(Player::X) => format!("{} (X) wins", self.player_x.name()),
            Outcome::Winner(Player::O) => format!("{} (O) wins", self.player_o.name()),
            Outcome::Draw => "Draw".to_string(),
        };
        writeln!(out, "{} after {} moves (utility {})", result, moves.len(), finished.utility())?;
        info!(outcome = %finished, plies = moves.len(), "Game over");

        Ok(GameRecord {
            moves,
            board,
            outcome: finished,
        })
    }
}
