//! Error types for board mutation and parsing.

use crate::types::Cell;

/// Rejected attempt to take a cell.
///
/// A rejected take never changes the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TakeError {
    /// Coordinates fall outside the 3x3 grid.
    #[display("Cell ({row}, {col}) is outside the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell {_0} is already taken")]
    Occupied(Cell),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for TakeError {}

/// Failure to read a board from its text notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// A character that is neither a mark, an empty marker, nor a separator.
    #[display("Unexpected symbol {_0:?} in board notation")]
    InvalidSymbol(char),

    /// Notation did not describe exactly nine cells.
    #[display("Board notation has {_0} cells, expected 9")]
    WrongCellCount(usize),
}

impl std::error::Error for ParseBoardError {}
