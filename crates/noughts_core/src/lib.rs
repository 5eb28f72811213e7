//! Noughts and crosses game logic.
//!
//! Pure board state and rule evaluation, with no I/O and no async.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, mutated one cell at a time through [`Board::take`]
//! - **Rules**: the eight winning lines and remaining-move counting
//! - **Judge**: derives turn, moves left and outcome from a board on demand
//!
//! # Example
//!
//! ```
//! use noughts_core::{Board, Cell, Outcome, judge};
//!
//! let mut board = Board::new();
//! for index in [0, 3, 1, 4, 2] {
//!     let cell = Cell::from_index(index).unwrap();
//!     let player = judge::current_player(&board);
//!     board.take(cell, player).unwrap();
//! }
//!
//! let state = judge::evaluate(&board);
//! assert!(state.is_game_over());
//! assert_eq!(state.outcome(), Outcome::Won(noughts_core::Player::Circle));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
pub mod judge;
pub mod rules;
mod types;

pub use board::Board;
pub use error::{ParseBoardError, TakeError};
pub use judge::{GameState, Outcome, evaluate};
pub use rules::{WINNING_LINES, Winner, WinningLine, count_moves_left, find_winner};
pub use types::{CELLS, Cell, Mark, Player, SIDE};
