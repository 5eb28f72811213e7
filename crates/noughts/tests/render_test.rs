//! Tests for the terminal view, drawn into an in-memory backend.

use noughts::tui::{View, draw, result_line, status_line};
use noughts::{Cell, GameSession, Snapshot};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};
use std::ops::Range;
use std::time::Duration;

const WIDTH: u16 = 40;
const HEIGHT: u16 = 24;

/// Rows between the status line and the result box.
const BOARD_ROWS: Range<u16> = 4..20;

fn session_after(moves: &[usize]) -> GameSession {
    let mut session = GameSession::new(Duration::from_secs(1));
    for &index in moves {
        session.take(Cell::from_index(index).unwrap()).unwrap();
    }
    session
}

fn render(snapshot: &Snapshot, view: View) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| draw(frame, snapshot, view)).unwrap();
    terminal.backend().buffer().clone()
}

fn text(buffer: &Buffer) -> String {
    buffer.content.iter().map(|cell| cell.symbol()).collect()
}

/// Text of the grid area only, without the status, result and help lines.
fn board_text(buffer: &Buffer) -> String {
    BOARD_ROWS
        .flat_map(|y| (0..WIDTH).map(move |x| (x, y)))
        .map(|pos| buffer[pos].symbol())
        .collect()
}

fn cells_showing<'a>(buffer: &'a Buffer, symbol: &str) -> Vec<&'a ratatui::buffer::Cell> {
    let matches = |cell: &&ratatui::buffer::Cell| cell.symbol() == symbol;
    buffer.content.iter().filter(matches).collect()
}

#[tokio::test(start_paused = true)]
async fn test_status_and_result_lines() {
    let session = session_after(&[4]);
    let snapshot = session.snapshot();
    assert_eq!(status_line(&snapshot), "Currently playing: cross (0s)");
    assert_eq!(result_line(&snapshot), "Winner: N/A. Moves left: 8");

    let finished = session_after(&[0, 3, 1, 4, 2]).snapshot();
    assert_eq!(status_line(&finished), "Currently playing: N/A (0s)");
    assert_eq!(result_line(&finished), "Winner: circle. Moves left: 4");
}

#[tokio::test(start_paused = true)]
async fn test_renders_game_card() {
    let snapshot = session_after(&[4]).snapshot();
    let buffer = render(
        &snapshot,
        View {
            cursor: Cell::CENTER,
            show_hints: true,
        },
    );

    let screen = text(&buffer);
    assert!(screen.contains("Tic Tac Toe"));
    assert!(screen.contains("Currently playing: cross (0s)"));
    assert!(screen.contains("Winner: N/A. Moves left: 8"));
    assert!(screen.contains("arrows move, enter/1-9 take"));

    let grid = board_text(&buffer);
    assert!(grid.contains('O'));
    assert!(!grid.contains('5'), "taken cell still shows its hint");
    for digit in ['1', '2', '3', '4', '6', '7', '8', '9'] {
        assert!(grid.contains(digit), "hint {digit} missing");
    }
}

#[tokio::test(start_paused = true)]
async fn test_hints_hidden_when_disabled() {
    let snapshot = session_after(&[4]).snapshot();
    let buffer = render(
        &snapshot,
        View {
            cursor: Cell::CENTER,
            show_hints: false,
        },
    );

    let grid = board_text(&buffer);
    assert!(grid.contains('O'));
    assert!(
        !grid.chars().any(|c| c.is_ascii_digit()),
        "hint drawn with hints off: {grid:?}"
    );
}

#[tokio::test(start_paused = true)]
async fn test_cursor_highlighted_while_playing() {
    let snapshot = session_after(&[4]).snapshot();
    let buffer = render(
        &snapshot,
        View {
            cursor: Cell::CENTER,
            show_hints: false,
        },
    );

    let circle = buffer
        .content
        .iter()
        .find(|cell| cell.symbol() == "O")
        .expect("circle drawn");
    assert_eq!(circle.bg, Color::White);
}

#[tokio::test(start_paused = true)]
async fn test_winning_line_highlighted() {
    // O takes the top row, X holds 3 and 4.
    let snapshot = session_after(&[0, 3, 1, 4, 2]).snapshot();
    let buffer = render(
        &snapshot,
        View {
            cursor: Cell::CENTER,
            show_hints: true,
        },
    );

    let circles = cells_showing(&buffer, "O");
    let crosses = cells_showing(&buffer, "X");
    assert_eq!(circles.len(), 3);
    assert_eq!(crosses.len(), 2);
    assert!(circles.iter().all(|cell| cell.bg == Color::Green));
    assert!(crosses.iter().all(|cell| cell.bg != Color::Green));

    // Empty cells lose their keypad hints once the game is over.
    let grid = board_text(&buffer);
    assert!(!grid.chars().any(|c| c.is_ascii_digit()), "{grid:?}");
}
