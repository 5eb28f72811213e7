//! Noughts - terminal tic-tac-toe for two players.
//!
//! Wires the pure game logic from [`noughts_core`] to a game clock and a
//! terminal view.
//!
//! # Architecture
//!
//! - **Session**: the explicitly-owned game state (board + clock)
//! - **Timer**: counts whole seconds while the game is running
//! - **TUI**: stateless rendering of session snapshots plus keyboard input
//! - **Config**: TOML settings for the clock period and logging
//!
//! # Example
//!
//! ```no_run
//! use noughts::{AppConfig, GameSession};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = AppConfig::load(None)?;
//! let mut session = GameSession::new(config.tick_period());
//! session.take_at(1, 1)?;
//! println!("{}", session.board().display_grid());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod report;
mod session;
mod timer;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};

// Crate-level exports - Game session
pub use session::{GameSession, Snapshot};
pub use timer::{DEFAULT_TICK_PERIOD, Timer};

// Crate-level exports - Reporting
pub use report::judge_report;

// Crate-level exports - Game types
pub use noughts_core::{
    Board, Cell, GameState, Mark, Outcome, Player, TakeError, Winner, WinningLine,
};
