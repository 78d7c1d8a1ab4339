use crate::game::{BoardEngine, Cell, Position};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::piece_color;

/// Terminal columns taken by one board column
const CELL_WIDTH: u16 = 3;

/// Width of the framed board for `cols` columns
pub fn board_width(cols: usize) -> u16 {
    cols as u16 * CELL_WIDTH + 2
}

/// Height of the framed board: numbers, borders, and selector lines
pub fn board_height(rows: usize) -> u16 {
    rows as u16 + 4
}

/// Render the board with column numbers and a selector, horizontally
/// centred in `area`. Returns the rect actually drawn into.
pub fn render_board(
    frame: &mut Frame,
    engine: &BoardEngine,
    selected_column: Option<usize>,
    area: Rect,
) -> Rect {
    let board = engine.board();
    let (rows, cols) = (board.rows(), board.cols());
    let winning = engine.winning_line().unwrap_or(&[]);

    let width = board_width(cols).min(area.width);
    let height = board_height(rows).min(area.height);
    let rect = Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        height,
    );

    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw(" ")];
    for col in 0..cols {
        let label = format!("{:^3}", col + 1);
        if Some(col) == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    lines.push(Line::from(col_line));

    let bar = "═".repeat(cols * CELL_WIDTH as usize);
    lines.push(Line::from(format!("╔{bar}╗")));

    for row in 0..rows {
        let mut row_spans = vec![Span::raw("║")];
        for col in 0..cols {
            let span = match board.get(row, col) {
                Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Cell::Occupied(player) => {
                    let mut style = Style::default().fg(piece_color(engine.player_color(player)));
                    if winning.contains(&Position::new(row, col)) {
                        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                    }
                    Span::styled(" ● ", style)
                }
            };
            row_spans.push(span);
        }
        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("╚{bar}╝")));

    let mut indicator_line = vec![Span::raw(" ")];
    for col in 0..cols {
        if Some(col) == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(indicator_line));

    frame.render_widget(Paragraph::new(lines), rect);
    rect
}

/// Board column under the terminal cell (x, y), given the rect returned by
/// [`render_board`].
pub fn column_at(rect: Rect, cols: usize, x: u16, y: u16) -> Option<usize> {
    if y < rect.y || y >= rect.y + rect.height || x <= rect.x {
        return None;
    }
    let col = ((x - rect.x - 1) / CELL_WIDTH) as usize;
    (col < cols).then_some(col)
}
