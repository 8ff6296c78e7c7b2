//! tictactoe - terminal game entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tictactoe::{AppConfig, JsonLinesHistory, Terminal};
use tictactoe_core::{Board, GameMode, Player};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            computer,
            config,
        } => run_play(mode, computer, &config),
        Command::History { config } => run_history(&config),
        Command::Replay { index, config } => run_replay(index, &config),
        Command::Suggest { board, player } => run_suggest(&board, player),
    }
}

fn load_config(path: &Path) -> Result<AppConfig> {
    AppConfig::load_or_default(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

fn terminal(config: AppConfig) -> Terminal<impl BufRead, impl Write> {
    Terminal::new(io::stdin().lock(), io::stdout().lock(), config)
}

/// Run interactive games until the player quits
#[instrument(skip(config_path), fields(config = %config_path.display()))]
fn run_play(mode: GameMode, computer: Option<Player>, config_path: &Path) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(player) = computer {
        config = config.with_computer_player(player);
    }
    let mut store = JsonLinesHistory::new(config.history_path());
    info!(history = %store.path().display(), "Starting session");

    let games = terminal(config).play(mode, &mut store)?;
    info!(games, "Goodbye");
    Ok(())
}

/// Print the saved games
fn run_history(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let store = JsonLinesHistory::new(config.history_path());
    terminal(config).show_history(&store)
}

/// Replay one saved game
fn run_replay(index: usize, config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let store = JsonLinesHistory::new(config.history_path());
    terminal(config).replay(&store, index)
}

/// Print the best move for a position
fn run_suggest(board: &str, player: Option<Player>) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board `{}`", board))?;
    let player = player.unwrap_or_else(|| {
        if board.count(Player::X) > board.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    });
    terminal(AppConfig::default()).suggest(&board, player)
}
