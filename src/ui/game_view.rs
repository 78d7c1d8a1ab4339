use crate::game::{BoardEngine, GameOutcome, Phase, PieceColor, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{board_widget, piece_color};

/// Render the game screen plus whichever dialog the phase calls for.
/// Returns the rect the board was drawn into.
pub fn render(
    frame: &mut Frame,
    engine: &BoardEngine,
    selected_column: usize,
    message: &Option<String>,
) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(board_widget::board_height(engine.board().rows())), // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, chunks[0]);
    let selector = (engine.phase() == Phase::InProgress).then_some(selected_column);
    let board_rect = board_widget::render_board(frame, engine, selector, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);

    match engine.phase() {
        Phase::NotStarted => render_start_dialog(frame, engine),
        Phase::Ended => render_result_dialog(frame, engine),
        Phase::InProgress => {}
    }

    board_rect
}

fn render_header(frame: &mut Frame, engine: &BoardEngine, area: Rect) {
    let current = engine.current_player();
    let color = piece_color(engine.player_color(current));

    let status = match engine.phase() {
        Phase::NotStarted => "Waiting to start".to_string(),
        Phase::InProgress => format!(
            "Current Player: {}  |  Move {}",
            current.name(),
            engine.move_count() + 1
        ),
        Phase::Ended => format!("Game Over  |  {} moves", engine.move_count()),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from("←/→: Move  |  Enter: Drop  |  1-9: Drop in column  |  R: Restart  |  Q: Quit");
    let line2 = Line::from("Click a column to drop a piece");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

fn swatch(color: PieceColor) -> Span<'static> {
    Span::styled("●●", Style::default().fg(piece_color(color)))
}

fn render_start_dialog(frame: &mut Frame, engine: &BoardEngine) {
    let mut lines = vec![Line::from("")];
    for (i, player) in Player::ALL.into_iter().enumerate() {
        let color = engine.player_color(player);
        lines.push(Line::from(vec![
            Span::raw(format!("{}  ", player.name())),
            swatch(color),
            Span::raw(format!("  {color}   [{}] change", i + 1)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: Start  |  Q: Quit",
        Style::default().add_modifier(Modifier::BOLD),
    )));

    render_dialog(frame, "New Game", lines);
}

fn render_result_dialog(frame: &mut Frame, engine: &BoardEngine) {
    let verdict = match engine.outcome() {
        Some(GameOutcome::Winner(player)) => Line::from(vec![
            Span::raw(format!("{} ", player.name())),
            swatch(engine.player_color(player)),
            Span::raw(" won!"),
        ]),
        Some(GameOutcome::Tie) | None => Line::from("Tie!"),
    };

    let lines = vec![
        Line::from(""),
        verdict,
        Line::from(""),
        Line::from(Span::styled(
            "R / Enter: Play again  |  Q: Quit",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    render_dialog(frame, "Game Over", lines);
}

fn render_dialog(frame: &mut Frame, title: &str, lines: Vec<Line<'static>>) {
    let width = lines.iter().map(|l| l.width() as u16).max().unwrap_or(0) + 6;
    let height = lines.len() as u16 + 3;
    let area = centered_rect(width, height, frame.area());

    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));

    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

/// A `width` x `height` rect centred in `area`, clipped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
