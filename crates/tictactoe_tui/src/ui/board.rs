//! Board rendering and click hit-testing.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use std::rc::Rc;
use tictactoe_core::{Game, Line, Player, Position, Square};

const BOARD_WIDTH: u16 = 40;
const BOARD_HEIGHT: u16 = 11;

/// Renders the board centered in the given area.
///
/// Empty squares show their digit key, the cursor square is shown
/// reversed while the game runs, and a completed line is highlighted.
pub fn render_board(f: &mut Frame, area: Rect, game: &Game, cursor: Position) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = rows_layout(board_area);

    render_row(f, rows[0], game, cursor, Line::TopRow.positions());
    render_separator(f, rows[1]);
    render_row(f, rows[2], game, cursor, Line::MiddleRow.positions());
    render_separator(f, rows[3]);
    render_row(f, rows[4], game, cursor, Line::BottomRow.positions());
}

/// Maps a click inside the given area to the square under it.
///
/// Walks the same layout math as [`render_board`], so separators and
/// clicks outside the grid return `None`.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Position> {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = rows_layout(board_area);

    for (row_area, line) in [
        (rows[0], Line::TopRow),
        (rows[2], Line::MiddleRow),
        (rows[4], Line::BottomRow),
    ] {
        if !contains(row_area, column, row) {
            continue;
        }
        let cols = cols_layout(row_area);
        for (cell, pos) in [cols[0], cols[2], cols[4]].into_iter().zip(line.positions()) {
            if contains(cell, column, row) {
                return Some(pos);
            }
        }
    }

    None
}

fn render_row(f: &mut Frame, area: Rect, game: &Game, cursor: Position, positions: [Position; 3]) {
    let cols = cols_layout(area);

    render_square(f, cols[0], game, cursor, positions[0]);
    render_vertical_sep(f, cols[1]);
    render_square(f, cols[2], game, cursor, positions[1]);
    render_vertical_sep(f, cols[3]);
    render_square(f, cols[4], game, cursor, positions[2]);
}

fn render_square(f: &mut Frame, area: Rect, game: &Game, cursor: Position, pos: Position) {
    let (text, mut style) = match game.board().get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    };

    if let Some(line) = game.winning_line()
        && line.contains(pos)
    {
        style = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
    }
    if !game.is_over() && pos == cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep =
        Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn rows_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area)
}

fn cols_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}

// Rect::contains takes a layout position value; a plain coordinate check
// avoids the name clash with the board position type.
fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
