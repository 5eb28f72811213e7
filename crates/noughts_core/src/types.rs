//! Core domain types for noughts and crosses.

use crate::error::TakeError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const SIDE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Player {
    /// Circle (always moves first).
    Circle,
    /// Cross.
    Cross,
}

impl Player {
    /// The player who opens every game.
    pub const FIRST: Player = Player::Circle;

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Circle => Player::Cross,
            Player::Cross => Player::Circle,
        }
    }

    /// Single-character symbol used in board notation.
    pub fn symbol(self) -> char {
        match self {
            Player::Circle => 'O',
            Player::Cross => 'X',
        }
    }
}

/// The value occupying a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    /// Nobody has taken the cell yet.
    #[default]
    Empty,
    /// Cell taken by a player.
    Taken(Player),
}

impl Mark {
    /// Returns the player holding the cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Taken(player) => Some(player),
        }
    }

    /// Checks if the cell is still free.
    pub fn is_empty(self) -> bool {
        matches!(self, Mark::Empty)
    }

    /// Single-character symbol used in board notation.
    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::Taken(player) => player.symbol(),
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        Mark::Taken(player)
    }
}

/// A coordinate on the board, always inside the 3x3 grid.
///
/// Rows count from the top and columns from the left, both starting at zero.
/// The only ways to obtain a `Cell` go through bounds checks, so board
/// indexing with a `Cell` cannot go out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// The middle of the board.
    pub const CENTER: Cell = Cell::at(1, 1);

    /// Creates a cell from raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`TakeError::OutOfBounds`] if either coordinate is outside `0..3`.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, TakeError> {
        if row >= SIDE || col >= SIDE {
            return Err(TakeError::OutOfBounds { row, col });
        }
        Ok(Self::at(row, col))
    }

    /// Unchecked constructor for compile-time tables.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Creates a cell from its row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELLS).then(|| Self::at(index / SIDE, index % SIDE))
    }

    /// Creates a cell from a keypad digit (1-9, row-major from the top left).
    pub fn from_keypad(digit: u32) -> Option<Self> {
        match digit {
            1..=9 => Self::from_index(digit as usize - 1),
            _ => None,
        }
    }

    /// Row-major index of this cell (0-8).
    pub fn index(self) -> usize {
        self.row() * SIDE + self.col()
    }

    /// Keypad digit for this cell (1-9).
    pub fn keypad(self) -> u32 {
        self.index() as u32 + 1
    }

    /// Row of this cell.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column of this cell.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Returns the neighbouring cell in the given direction, if it is on the board.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row().checked_add_signed(d_row)?;
        let col = self.col().checked_add_signed(d_col)?;
        Self::new(row, col).ok()
    }

    /// All nine cells in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELLS).map(|index| Self::at(index / SIDE, index % SIDE))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
