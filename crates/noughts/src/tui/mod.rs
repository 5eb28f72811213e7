//! Terminal UI for the game.

mod input;
mod ui;

pub use input::{Action, action_for, move_cursor};
pub use ui::{View, draw, result_line, status_line};

use crate::config::AppConfig;
use crate::session::GameSession;
use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use noughts_core::Cell;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument, trace};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// What woke the event loop.
enum Wake {
    Tick(u64),
    Input(Option<io::Result<Event>>),
}

/// Runs the game until the player quits.
#[instrument(skip_all, fields(tick_millis = config.tick_millis()))]
pub async fn run(config: &AppConfig) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = setup_or_restore(enter_terminal, restore_terminal)?;

    let session = GameSession::new(config.tick_period());
    let res = run_game(&mut terminal, session, *config.show_hints()).await;

    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

/// Runs `setup`, calling `restore` before handing back its error.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    setup().inspect_err(|_| {
        if let Err(cleanup) = restore() {
            error!(error = ?cleanup, "Failed to restore terminal");
        }
    })
}

fn enter_terminal() -> Result<CrosstermTerminal> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout))
        .context("Failed to create terminal")
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(io::stdout(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    Ok(())
}

/// Single event loop: one clock tick or one key press per iteration.
///
/// The session is dropped on return, which releases the game clock.
async fn run_game(
    terminal: &mut CrosstermTerminal,
    mut session: GameSession,
    show_hints: bool,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut cursor = Cell::CENTER;

    loop {
        let snapshot = session.snapshot();
        let view = View { cursor, show_hints };
        terminal.draw(|frame| ui::draw(frame, &snapshot, view))?;

        let wake = tokio::select! {
            elapsed = session.tick() => Wake::Tick(elapsed),
            event = events.next() => Wake::Input(event),
        };

        match wake {
            Wake::Tick(elapsed) => trace!(elapsed, "Clock tick"),
            Wake::Input(None) => {
                info!("Terminal input closed");
                return Ok(());
            }
            Wake::Input(Some(Err(e))) => {
                return Err(e).context("Failed to read terminal event");
            }
            Wake::Input(Some(Ok(Event::Key(key)))) => match action_for(key, cursor) {
                Some(Action::Quit) => {
                    info!("User quit");
                    return Ok(());
                }
                Some(Action::Reset) => {
                    session.reset();
                    cursor = Cell::CENTER;
                }
                Some(Action::MoveCursor(cell)) => cursor = cell,
                Some(Action::Take(cell)) => {
                    cursor = cell;
                    match session.take(cell) {
                        Ok(state) => debug!(outcome = %state.outcome(), "Move applied"),
                        Err(e) => debug!(error = %e, "Move ignored"),
                    }
                }
                None => {}
            },
            // Resize and focus events only need a redraw.
            Wake::Input(Some(Ok(_))) => {}
        }
    }
}
