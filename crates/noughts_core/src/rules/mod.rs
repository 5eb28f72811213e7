//! Game rules for noughts and crosses.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the judge can recompute everything from the grid alone.

pub mod draw;
pub mod win;

pub use draw::{count_moves_left, is_full};
pub use win::{WINNING_LINES, Winner, WinningLine, find_winner};
