//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with a running scoreboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Delay before the automatic new round, in milliseconds
        #[arg(long)]
        auto_reset_ms: Option<u64>,

        /// Wait for R instead of starting the next round automatically
        #[arg(long)]
        no_auto_reset: bool,
    },

    /// Apply a list of moves and print the resulting board and scores
    Replay {
        /// Positions as indices 0-8 or labels, space or comma separated
        #[arg(required = true, value_delimiter = ',')]
        moves: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            auto_reset_ms: None,
            no_auto_reset: false,
        }
    }
}
