//! Stateless UI rendering.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use rewind_tictactoe::{
    Player, Position, Square, StatusLine, is_winning_cell, move_list, order_toggle_label,
    status_line,
};

const HELP: &str =
    "arrows/1-9 move+play  enter play  u/d select  j jump  t order  r restart  q quit";

/// Draws the whole screen for `app`.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board + moves
            Constraint::Length(3), // Help / message
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(bold(Color::Cyan))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    draw_game(frame, body[0], app);
    draw_moves(frame, body[1], app);

    let footer = Paragraph::new(app.message().unwrap_or(HELP))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[2]);
}

fn bold(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().title("Board").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(5)])
        .split(inner);

    let status = status_line(app.game());
    let status_style = match status {
        StatusLine::Winner(_) => bold(Color::Green),
        StatusLine::Draw => bold(Color::Magenta),
        StatusLine::NextPlayer(_) => Style::default(),
    };
    frame.render_widget(
        Paragraph::new(status.to_string())
            .style(status_style)
            .alignment(Alignment::Center),
        rows[0],
    );

    let lines: Vec<Line> = Position::ALL
        .chunks(3)
        .enumerate()
        .flat_map(|(row, cells)| {
            let cells = cells.iter().enumerate().flat_map(|(col, &pos)| {
                let sep = if col < 2 { "│" } else { "" };
                [cell_span(app, pos), Span::raw(sep)]
            });
            let mut lines = vec![Line::from(cells.collect::<Vec<_>>())];
            if row < 2 {
                let separator = Style::default().fg(Color::DarkGray);
                lines.push(Line::from("─────┼─────┼─────").style(separator));
            }
            lines
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rows[1]);
}

fn cell_span(app: &App, pos: Position) -> Span<'static> {
    let game = app.game();
    let (symbol, base_style) = match game.current_board().get(pos) {
        Square::Empty => (
            format!("  {}  ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => ("  X  ".to_string(), bold(Color::Blue)),
        Square::Occupied(Player::O) => ("  O  ".to_string(), bold(Color::Red)),
    };

    let style = if is_winning_cell(game, pos) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else {
        base_style
    };
    let style = if pos == app.cursor() {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    };
    Span::styled(symbol, style)
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let title = format!(
        "Moves, {} (t: {})",
        game.order().label(),
        order_toggle_label(game.order())
    );

    let items: Vec<ListItem> = move_list(game)
        .into_iter()
        .map(|entry| {
            let mut style = Style::default();
            if entry.is_current {
                style = style.add_modifier(Modifier::BOLD);
            }
            if entry.move_number == app.selected_move() {
                style = style.fg(Color::Black).bg(Color::White);
            }
            ListItem::new(format!("{}. {}", entry.move_number, entry.label())).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(list, area);
}
