//! Win detection logic for noughts and crosses.

use crate::Board;
use crate::types::{Cell, Player};
use serde::Serialize;
use tracing::instrument;

/// One of the eight cell triples that wins the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WinningLine {
    name: &'static str,
    cells: [Cell; 3],
}

impl WinningLine {
    const fn new(name: &'static str, cells: [(usize, usize); 3]) -> Self {
        let [a, b, c] = cells;
        Self {
            name,
            cells: [
                Cell::at(a.0, a.1),
                Cell::at(b.0, b.1),
                Cell::at(c.0, c.1),
            ],
        }
    }

    /// The three cells making up the line.
    pub fn cells(&self) -> [Cell; 3] {
        self.cells
    }

    /// Checks if `cell` lies on this line.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Human-readable name of the line.
    pub fn label(&self) -> &'static str {
        self.name
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Every winning line, in scan order: rows, then columns, then diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    WinningLine::new("top row", [(0, 0), (0, 1), (0, 2)]),
    WinningLine::new("middle row", [(1, 0), (1, 1), (1, 2)]),
    WinningLine::new("bottom row", [(2, 0), (2, 1), (2, 2)]),
    // Columns
    WinningLine::new("left column", [(0, 0), (1, 0), (2, 0)]),
    WinningLine::new("middle column", [(0, 1), (1, 1), (2, 1)]),
    WinningLine::new("right column", [(0, 2), (1, 2), (2, 2)]),
    // Diagonals
    WinningLine::new("main diagonal", [(0, 0), (1, 1), (2, 2)]),
    WinningLine::new("anti-diagonal", [(2, 0), (1, 1), (0, 2)]),
];

/// The player holding a complete line, and the line itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Winner {
    player: Player,
    line: WinningLine,
}

impl Winner {
    /// The winning player.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The line that won the game.
    pub fn line(&self) -> WinningLine {
        self.line
    }

    /// Checks if `cell` is part of the winning line.
    pub fn contains(&self, cell: Cell) -> bool {
        self.line.contains(cell)
    }
}

/// Finds the first complete line on the board.
///
/// Lines are scanned in [`WINNING_LINES`] order, so when a contrived board
/// completes several lines at once the earliest one is reported.
#[instrument(skip(board))]
pub fn find_winner(board: &Board) -> Option<Winner> {
    WINNING_LINES.iter().copied().find_map(|line| {
        let [a, b, c] = line.cells().map(|cell| board.get(cell));
        let player = a.player().filter(|_| a == b && b == c)?;
        Some(Winner { player, line })
    })
}
