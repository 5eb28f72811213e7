//! Board storage and guarded mutation.

use crate::error::{ParseBoardError, TakeError};
use crate::judge;
use crate::types::{CELLS, Cell, Mark, Player, SIDE};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 noughts-and-crosses board.
///
/// Cells only ever go from empty to taken. The one way back to empty is
/// [`Board::reset`], which clears the whole grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Marks indexed by row, then column.
    rows: [[Mark; SIDE]; SIDE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the mark at the given cell.
    pub fn get(&self, cell: Cell) -> Mark {
        self.rows[cell.row()][cell.col()]
    }

    /// Checks if a cell is still free.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell).is_empty()
    }

    /// Read-only view of the grid, row by row.
    pub fn rows(&self) -> &[[Mark; SIDE]; SIDE] {
        &self.rows
    }

    /// Iterates over all cells and their marks in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Mark)> + '_ {
        Cell::all().map(|cell| (cell, self.get(cell)))
    }

    /// Iterates over the cells nobody has taken yet.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells()
            .filter(|(_, mark)| mark.is_empty())
            .map(|(cell, _)| cell)
    }

    /// Number of marks on the board.
    pub fn marks_placed(&self) -> usize {
        self.cells().filter(|(_, mark)| !mark.is_empty()).count()
    }

    /// Places `player`'s mark on `cell`.
    ///
    /// # Errors
    ///
    /// - [`TakeError::GameOver`] if the board is already won or full.
    /// - [`TakeError::Occupied`] if the cell already holds a mark.
    ///
    /// The board is left untouched on error.
    #[instrument(skip_all, fields(%cell, %player))]
    pub fn take(&mut self, cell: Cell, player: Player) -> Result<(), TakeError> {
        if judge::is_game_over(self) {
            debug!("Rejected take after game over");
            return Err(TakeError::GameOver);
        }

        if !self.is_empty(cell) {
            debug!("Rejected take on occupied cell");
            return Err(TakeError::Occupied(cell));
        }

        self.rows[cell.row()][cell.col()] = Mark::Taken(player);
        Ok(())
    }

    /// Places `player`'s mark using raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`TakeError::OutOfBounds`] for coordinates outside the grid,
    /// otherwise the same errors as [`Board::take`].
    pub fn take_at(&mut self, row: usize, col: usize, player: Player) -> Result<(), TakeError> {
        let cell = Cell::new(row, col)?;
        self.take(cell, player)
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.rows = [[Mark::Empty; SIDE]; SIDE];
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their keypad digit.
    pub fn display_grid(&self) -> String {
        let mut result = String::new();
        for (index, (cell, mark)) in self.cells().enumerate() {
            let symbol = match mark {
                Mark::Empty => char::from_digit(cell.keypad(), 10).unwrap_or('.'),
                Mark::Taken(player) => player.symbol(),
            };
            result.push(symbol);
            if cell.col() < SIDE - 1 {
                result.push('|');
            } else if index < CELLS - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl From<[[Mark; SIDE]; SIDE]> for Board {
    fn from(rows: [[Mark; SIDE]; SIDE]) -> Self {
        Self { rows }
    }
}

/// Compact notation: three rows of `O`/`X`/`.` joined by `/`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                write!(f, "/")?;
            }
            for mark in row {
                write!(f, "{}", mark.symbol())?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .map(|c| match c {
                'o' | 'O' => Ok(Mark::Taken(Player::Circle)),
                'x' | 'X' => Ok(Mark::Taken(Player::Cross)),
                '.' | '-' | '_' => Ok(Mark::Empty),
                other => Err(ParseBoardError::InvalidSymbol(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if marks.len() != CELLS {
            return Err(ParseBoardError::WrongCellCount(marks.len()));
        }

        let mut board = Board::new();
        for (cell, mark) in Cell::all().zip(marks) {
            board.rows[cell.row()][cell.col()] = mark;
        }
        Ok(board)
    }
}
