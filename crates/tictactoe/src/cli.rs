//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::{GameMode, Player};

/// Tic-tac-toe in the terminal against a friend or a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe with a perfect computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play {
        /// Game mode: pvp or pvai
        #[arg(short, long, default_value = "pvai")]
        mode: GameMode,

        /// Marker the computer plays (overrides the config file)
        #[arg(long)]
        computer: Option<Player>,

        /// Path to the config file
        #[arg(short, long, default_value = tictactoe::DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },

    /// List finished games
    History {
        /// Path to the config file
        #[arg(short, long, default_value = tictactoe::DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },

    /// Step through a finished game move by move
    Replay {
        /// Game number as shown by `history` (1-based)
        index: usize,

        /// Path to the config file
        #[arg(short, long, default_value = tictactoe::DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },

    /// Print the best move for a position, e.g. `X../.O./...`
    Suggest {
        /// Board as nine cells, rows optionally separated by `/`
        board: String,

        /// Side to move (defaults to whoever has fewer marks, X on ties)
        #[arg(short, long)]
        player: Option<Player>,
    },
}
