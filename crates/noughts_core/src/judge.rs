//! Derives turn, remaining moves and outcome from a board.
//!
//! Nothing here is stored. Every answer is recomputed from the grid, so the
//! derived state can never disagree with the marks actually on the board.

use crate::Board;
use crate::rules::{Winner, count_moves_left, find_winner};
use crate::types::{Cell, Player};
use serde::Serialize;
use tracing::{instrument, trace};

/// With more empty cells than this, nobody can hold three in a line yet.
///
/// A line needs three marks from one player, which takes at least five
/// marks on the board in an alternating game.
pub const WIN_SCAN_THRESHOLD: usize = 4;

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    /// Moves remain and nobody has won.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// Board filled with no complete line.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "{player} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Everything the view needs to know about a board, derived in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameState {
    current_player: Player,
    moves_left: usize,
    winner: Option<Winner>,
}

impl GameState {
    /// Player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Number of empty cells.
    pub fn moves_left(&self) -> usize {
        self.moves_left
    }

    /// The winner, if a line is complete.
    pub fn winner(&self) -> Option<&Winner> {
        self.winner.as_ref()
    }

    /// Checks if the game has reached a terminal state.
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some() || self.moves_left == 0
    }

    /// Checks if `cell` belongs to the winning line.
    pub fn is_winning_cell(&self, cell: Cell) -> bool {
        self.winner.is_some_and(|winner| winner.contains(cell))
    }

    /// Summarizes the state; a win takes precedence over a full board.
    pub fn outcome(&self) -> Outcome {
        match (self.winner, self.moves_left) {
            (Some(winner), _) => Outcome::Won(winner.player()),
            (None, 0) => Outcome::Draw,
            (None, _) => Outcome::InProgress,
        }
    }
}

/// Returns the player who moves after `current`.
#[instrument]
pub fn next_player(current: Player) -> Player {
    current.opponent()
}

/// Returns the player to move on `board`.
///
/// Circle opens and turns strictly alternate, so the answer follows from the
/// number of marks already placed.
#[instrument(skip(board))]
pub fn current_player(board: &Board) -> Player {
    let mut player = Player::FIRST;
    for _ in 0..board.marks_placed() {
        player = next_player(player);
    }
    player
}

/// Derives the full [`GameState`] for `board`.
///
/// The winner scan is skipped while more than [`WIN_SCAN_THRESHOLD`] cells
/// are empty.
#[instrument(skip(board), fields(%board))]
pub fn evaluate(board: &Board) -> GameState {
    let moves_left = count_moves_left(board);
    let winner = if moves_left > WIN_SCAN_THRESHOLD {
        trace!(moves_left, "Too early for a win, skipping scan");
        None
    } else {
        find_winner(board)
    };

    GameState {
        current_player: current_player(board),
        moves_left,
        winner,
    }
}

/// Checks if the game on `board` is over (won or drawn).
#[instrument(skip(board))]
pub fn is_game_over(board: &Board) -> bool {
    evaluate(board).is_game_over()
}
