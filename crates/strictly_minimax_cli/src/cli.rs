//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_minimax::Player;

/// Strictly Minimax - optimal tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Tic-tac-toe with a perfect minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, default_value = "strictly_minimax.toml", global = true)]
    pub config: std::path::PathBuf,

    /// Search root actions in parallel
    #[arg(long, global = true)]
    pub parallel: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the engine, entering moves on stdin
    Play {
        /// Mark the human plays (X moves first)
        #[arg(long)]
        human: Option<Player>,
    },

    /// Let the engine play itself
    Selfplay {
        /// Number of games to play
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        games: Option<u32>,
    },

    /// Play random moves for both sides, printing every ply
    Random {
        /// Number of games to play
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        games: Option<u32>,

        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the best action and every action's value for a board
    Best {
        /// Board notation, e.g. "XX./OO./..."
        #[arg(long)]
        board: String,
    },
}
