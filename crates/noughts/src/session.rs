//! One in-memory game: the board, its judge, and the game clock.

use crate::timer::Timer;
use derive_getters::Getters;
use noughts_core::{Board, Cell, GameState, TakeError, judge};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Read-only picture of a session handed to the view.
///
/// A snapshot is a copy, so the view can read it freely without any way to
/// mutate the game behind it.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Snapshot {
    /// The grid.
    board: Board,
    /// Derived turn, moves left and winner.
    state: GameState,
    /// Whole seconds on the game clock.
    elapsed: u64,
}

/// A single game session.
///
/// Owns the board and the timer. The caller constructs it, drives it from
/// one event loop, and drops it on teardown, which also stops the clock.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    timer: Timer,
}

impl GameSession {
    /// Creates an empty game with the clock running.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument]
    pub fn new(tick_period: Duration) -> Self {
        info!("Starting new game session");
        Self {
            board: Board::new(),
            timer: Timer::started(tick_period),
        }
    }

    /// Read-only access to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Seconds elapsed on the game clock.
    pub fn elapsed(&self) -> u64 {
        self.timer.elapsed()
    }

    /// Checks if the game clock is running.
    pub fn is_clock_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Derives the current game state from the board.
    pub fn state(&self) -> GameState {
        judge::evaluate(&self.board)
    }

    /// Copies everything the view needs.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            state: self.state(),
            elapsed: self.elapsed(),
        }
    }

    /// Takes `cell` for the player whose turn it is.
    ///
    /// Stops the clock when this move ends the game.
    ///
    /// # Errors
    ///
    /// Returns the [`TakeError`] from the board; the session is unchanged.
    #[instrument(skip_all, fields(%cell))]
    pub fn take(&mut self, cell: Cell) -> Result<GameState, TakeError> {
        let player = judge::current_player(&self.board);
        self.board.take(cell, player)?;
        debug!(%player, board = %self.board, "Cell taken");

        let state = self.state();
        if state.is_game_over() {
            self.timer.stop();
            info!(outcome = %state.outcome(), elapsed = self.elapsed(), "Game over");
        }
        Ok(state)
    }

    /// Takes a cell by raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`TakeError::OutOfBounds`] for coordinates outside the grid,
    /// otherwise the same errors as [`GameSession::take`].
    pub fn take_at(&mut self, row: usize, col: usize) -> Result<GameState, TakeError> {
        self.take(Cell::new(row, col)?)
    }

    /// Clears the board and restarts the clock from zero.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.timer.reset();
        info!("Game reset");
    }

    /// Waits for the next clock tick and returns the new elapsed seconds.
    ///
    /// Never resolves once the game is over. Cancel-safe.
    pub async fn tick(&mut self) -> u64 {
        self.timer.tick().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::{Outcome, Player};

    const PERIOD: Duration = Duration::from_secs(1);

    fn play(session: &mut GameSession, moves: &[usize]) {
        for &index in moves {
            let cell = Cell::from_index(index).unwrap();
            session.take(cell).unwrap();
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_session() {
        let session = GameSession::new(PERIOD);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.board(), &Board::new());
        assert_eq!(snapshot.state().current_player(), Player::Circle);
        assert_eq!(snapshot.state().moves_left(), 9);
        assert_eq!(*snapshot.elapsed(), 0);
        assert!(session.is_clock_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_take_uses_current_player() {
        let mut session = GameSession::new(PERIOD);
        let state = session.take_at(1, 1).unwrap();
        assert_eq!(state.current_player(), Player::Cross);

        let state = session.take_at(0, 0).unwrap();
        assert_eq!(state.current_player(), Player::Circle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_take_leaves_session_unchanged() {
        let mut session = GameSession::new(PERIOD);
        session.take_at(1, 1).unwrap();
        let before = session.snapshot();

        let center = Cell::new(1, 1).unwrap();
        assert_eq!(session.take(center), Err(TakeError::Occupied(center)));
        assert_eq!(
            session.take_at(5, 0),
            Err(TakeError::OutOfBounds { row: 5, col: 0 })
        );
        assert_eq!(session.snapshot(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clock_stops_on_win() {
        let mut session = GameSession::new(PERIOD);
        session.tick().await;
        play(&mut session, &[0, 4, 1, 6]);
        assert!(session.is_clock_running());

        let state = session.take(Cell::from_index(2).unwrap()).unwrap();
        assert_eq!(state.outcome(), Outcome::Won(Player::Circle));
        assert!(!session.is_clock_running());

        let waited = tokio::time::timeout(PERIOD * 5, session.tick()).await;
        assert!(waited.is_err());
        assert_eq!(session.elapsed(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clock_stops_on_draw() {
        let mut session = GameSession::new(PERIOD);
        play(&mut session, &[0, 4, 2, 1, 7, 3, 5, 8, 6]);
        assert_eq!(session.state().outcome(), Outcome::Draw);
        assert!(!session.is_clock_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_take_after_game_over() {
        let mut session = GameSession::new(PERIOD);
        play(&mut session, &[0, 4, 1, 6, 2]);
        assert_eq!(session.take_at(2, 2), Err(TakeError::GameOver));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_restores_fresh_game() {
        let mut session = GameSession::new(PERIOD);
        session.tick().await;
        session.tick().await;
        play(&mut session, &[0, 4, 1, 6, 2]);

        session.reset();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.board(), &Board::new());
        assert_eq!(snapshot.state().current_player(), Player::Circle);
        assert_eq!(*snapshot.elapsed(), 0);
        assert!(session.is_clock_running());
        assert_eq!(session.tick().await, 1);
    }
}
