//! Plain-text verdict for a board, used by the `judge` command.

use noughts_core::rules::is_full;
use noughts_core::{Board, count_moves_left, find_winner, judge};
use tracing::instrument;

/// Describes a board for the terminal: grid, turn, winner and game-over flag.
///
/// The winner comes from a full line scan, so hand-written positions that
/// could not arise in play are still judged by what is on the board.
#[instrument(skip(board), fields(%board))]
pub fn judge_report(board: &Board) -> String {
    let moves_left = count_moves_left(board);
    let winner = find_winner(board);
    let game_over = winner.is_some() || is_full(board);

    let to_move = if game_over {
        "N/A".to_string()
    } else {
        judge::current_player(board).to_string()
    };
    let winner = winner
        .map(|winner| format!("{} ({})", winner.player(), winner.line()))
        .unwrap_or_else(|| "N/A".to_string());

    format!(
        "{}\n\nTo move: {}\nMoves left: {}\nWinner: {}\nGame over: {}",
        board.display_grid(),
        to_move,
        moves_left,
        winner,
        if game_over { "yes" } else { "no" },
    )
}
