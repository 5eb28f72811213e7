//! Stateless UI rendering for the game card.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::session::Snapshot;
use noughts_core::{Cell, Mark, Player, SIDE};

/// Options that change how the card is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View {
    /// Cell under the keyboard cursor.
    pub cursor: Cell,
    /// Draw keypad digits in empty cells.
    pub show_hints: bool,
}

const CELL_WIDTH: u16 = 7;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = 3 * 3 + 2;

/// Status line: who is playing and for how long.
pub fn status_line(snapshot: &Snapshot) -> String {
    let state = snapshot.state();
    let player = if state.is_game_over() {
        "N/A".to_string()
    } else {
        state.current_player().to_string()
    };
    format!("Currently playing: {} ({}s)", player, snapshot.elapsed())
}

/// Footer line: winner and remaining moves.
pub fn result_line(snapshot: &Snapshot) -> String {
    let state = snapshot.state();
    let winner = state
        .winner()
        .map(|winner| winner.player().to_string())
        .unwrap_or_else(|| "N/A".to_string());
    format!("Winner: {}. Moves left: {}", winner, state.moves_left())
}

/// Renders the whole game card.
pub fn draw(frame: &mut Frame, snapshot: &Snapshot, view: View) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Title
            Constraint::Length(1),         // Status
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3),         // Result
            Constraint::Length(1),         // Help
        ])
        .split(area);

    let title_style = if snapshot.state().is_game_over() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let title = Paragraph::new("Tic Tac Toe")
        .style(title_style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let status = Paragraph::new(status_line(snapshot))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(status, chunks[1]);

    draw_board(frame, chunks[2], snapshot, view);

    let result = Paragraph::new(result_line(snapshot))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(result, chunks[3]);

    let help = Paragraph::new("arrows move, enter/1-9 take, r reset, q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_board(frame: &mut Frame, area: Rect, snapshot: &Snapshot, view: View) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..SIDE {
        draw_row(frame, rows[row * 2], snapshot, view, row);
        if row < SIDE - 1 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, snapshot: &Snapshot, view: View, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for col in 0..SIDE {
        if let Ok(cell) = Cell::new(row, col) {
            draw_cell(frame, cols[col * 2], snapshot, view, cell);
        }
        if col < SIDE - 1 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, snapshot: &Snapshot, view: View, cell: Cell) {
    let state = snapshot.state();

    let (symbol, base_style) = match snapshot.board().get(cell) {
        Mark::Empty if view.show_hints && !state.is_game_over() => (
            cell.keypad().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Mark::Empty => (" ".to_string(), Style::default()),
        Mark::Taken(Player::Circle) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Mark::Taken(Player::Cross) => (
            "X".to_string(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let style = if state.is_winning_cell(cell) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if cell == view.cursor && !state.is_game_over() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let block_area = Rect {
        y: area.y + area.height.saturating_sub(1) / 2,
        height: 1,
        ..area
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {symbol} "), style)))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, block_area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(BOARD_WIDTH as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
