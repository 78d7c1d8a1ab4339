//! Terminal UI: start dialog with colour pickers, the board view, and the
//! result dialog. Drives a [`BoardEngine`](crate::game::BoardEngine) and
//! renders the events it reports.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;

use crate::game::PieceColor;
use ratatui::style::Color;

/// Terminal colour for a player's pieces
pub fn piece_color(color: PieceColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}
