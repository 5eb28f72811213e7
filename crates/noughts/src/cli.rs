//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts::Board;
use std::path::PathBuf;

/// Noughts - terminal tic-tac-toe with a game clock
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Terminal tic-tac-toe for two players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Path to a TOML config file (defaults to ./noughts.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Judge a board given in notation such as "OX./.O./..X"
    Judge {
        /// Nine cells, row by row: O, X, or . for empty ('/' and spaces ignored)
        board: Board,
    },
}
