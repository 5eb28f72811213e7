//! Noughts - Unified CLI
//!
//! Terminal tic-tac-toe, plus a one-shot board judge.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::{AppConfig, Board, judge_report};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Play { config }) => run_play(config).await,
        None => run_play(None).await,
        Some(Command::Judge { board }) => run_judge(&board),
    }
}

/// Run the terminal game
async fn run_play(config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())
        .context("Failed to load configuration")?;

    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?config, "Starting noughts");
    noughts::tui::run(&config).await
}

/// Print the verdict for a single board
fn run_judge(board: &Board) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("{}", judge_report(board));
    Ok(())
}
