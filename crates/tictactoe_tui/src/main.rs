//! tictactoe - two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_tui::{AppConfig, replay, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;

    match cli.command.unwrap_or_default() {
        Command::Play {
            auto_reset_ms,
            no_auto_reset,
        } => run_play(apply_overrides(config, auto_reset_ms, no_auto_reset)).await,
        Command::Replay { moves, json } => run_replay(&config, &moves, json),
    }
}

fn apply_overrides(config: AppConfig, auto_reset_ms: Option<u64>, no_auto_reset: bool) -> AppConfig {
    let config = match auto_reset_ms {
        Some(ms) => config.with_auto_reset_delay_ms(ms),
        None => config,
    };
    if no_auto_reset {
        config.with_auto_reset(false)
    } else {
        config
    }
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Run the interactive TUI, logging to a file so output does not tear the screen.
async fn run_play(config: AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    tui::run(config).await
}

/// Apply a move list and print the outcome.
fn run_replay(config: &AppConfig, moves: &[String], json: bool) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();

    let positions = replay::parse_moves(moves)?;
    info!(count = positions.len(), "Replaying moves");
    let summary = replay::replay(&positions);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.render());
    }
    Ok(())
}
