//! Remaining-move counting and full-board detection.

use crate::Board;
use tracing::instrument;

/// Counts the cells nobody has taken yet.
///
/// Always scans the whole grid; there is no running counter to drift.
#[instrument(skip(board))]
pub fn count_moves_left(board: &Board) -> usize {
    board.cells().filter(|(_, mark)| mark.is_empty()).count()
}

/// Checks if the board is full (all cells taken).
///
/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    count_moves_left(board) == 0
}
