//! Strictly Minimax - terminal front end
//!
//! Plays tic-tac-toe against a perfect minimax engine, pits the engine
//! against itself, runs random-move games, or analyses a single board.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod orchestrator;
mod players;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::PlayConfig;
use orchestrator::Orchestrator;
use players::{Contestant, EnginePlayer, HumanPlayer, RandomPlayer};
use std::io::{self, Write};
use strictly_minimax::{
    Board, Outcome, Player, Search, evaluate_actions_par, pick_best, player_to_move,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = PlayConfig::from_file(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?
        .with_parallel(cli.parallel);

    match cli.command {
        Command::Play { human } => run_play(config.with_human(human)),
        Command::Selfplay { games } => run_selfplay(config.with_games(games)?),
        Command::Random { games, seed } => run_random(config.with_games(games)?.with_seed(seed)),
        Command::Best { board } => run_best(&board, *config.parallel()),
    }
}

/// Human against the engine on stdin/stdout.
#[instrument(skip(config))]
fn run_play(config: PlayConfig) -> Result<()> {
    let human: Box<dyn Contestant> = Box::new(HumanPlayer::new(
        "You",
        io::stdin().lock(),
        io::stdout(),
    ));
    let engine: Box<dyn Contestant> = Box::new(EnginePlayer::new("Engine", *config.parallel()));

    let (player_x, player_o) = match config.human() {
        Player::X => (human, engine),
        Player::O => (engine, human),
    };

    info!(human = %config.human(), "Starting human game");
    Orchestrator::new(player_x, player_o).play(&mut io::stdout())?;
    Ok(())
}

/// Engine against itself; every game must be a draw.
#[instrument(skip(config))]
fn run_selfplay(config: PlayConfig) -> Result<()> {
    let mut stdout = io::stdout();
    let mut draws = 0;
    for game in 1..=*config.games() {
        writeln!(stdout, "=== Game {} ===", game)?;
        let record = Orchestrator::new(
            Box::new(EnginePlayer::new("Engine X", *config.parallel())),
            Box::new(EnginePlayer::new("Engine O", *config.parallel())),
        )
        .play(&mut stdout)?;
        if record.outcome == Outcome::Draw {
            draws += 1;
        }
    }

    writeln!(stdout, "{} of {} games drawn", draws, config.games())?;
    anyhow::ensure!(draws == *config.games(), "Optimal self-play produced a decisive game");
    Ok(())
}

/// Random moves for both sides, printing the board and utility after every ply.
#[instrument(skip(config))]
fn run_random(config: PlayConfig) -> Result<()> {
    let mut stdout = io::stdout();
    let mut tally = [0u32; 3];
    for game in 0..*config.games() {
        writeln!(stdout, "=== Game {} ===", game + 1)?;
        let seed_for = |offset: u64| (*config.seed()).map(|s| s.wrapping_add(2 * u64::from(game) + offset));
        let record = Orchestrator::new(
            Box::new(RandomPlayer::new("Random X", seed_for(0))),
            Box::new(RandomPlayer::new("Random O", seed_for(1))),
        )
        .show_utility(true)
        .play(&mut stdout)?;

        let slot = match record.outcome {
            Outcome::Winner(Player::X) => 0,
            Outcome::Winner(Player::O) => 1,
            Outcome::Draw => 2,
        };
        tally[slot] += 1;
    }

    writeln!(
        stdout,
        "X wins: {}, O wins: {}, draws: {}",
        tally[0], tally[1], tally[2]
    )?;
    Ok(())
}

/// Prints the best action and every action's minimax value.
#[instrument]
fn run_best(notation: &str, parallel: bool) -> Result<()> {
    let board: Board = notation
        .parse()
        .with_context(|| format!("Parsing board '{}'", notation))?;
    strictly_minimax::validate(&board)?;

    let mut stdout = io::stdout();
    writeln!(stdout, "{}\n", render::render(&board))?;

    let values = if parallel {
        let (values, stats) = evaluate_actions_par(&board)?;
        info!(?stats, "Parallel evaluation");
        values
    } else {
        let mut search = Search::new();
        let values = search.evaluate_actions(&board)?;
        info!(stats = ?search.stats(), "Evaluation");
        values
    };

    let Some(best) = pick_best(player_to_move(&board), &values).map(|b| b.action) else {
        writeln!(
            stdout,
            "Game over: {}",
            strictly_minimax::outcome(&board).map_or("in progress".to_string(), |o| o.to_string())
        )?;
        return Ok(());
    };

    writeln!(stdout, "{} to move", player_to_move(&board))?;
    for value in &values {
        writeln!(stdout, "  {} {:<13} value {:>2}", value.action, value.action.label(), value.value)?;
    }
    writeln!(stdout, "Best action: {} {}", best, best.label())?;
    Ok(())
}
