//! Core Connect Four game logic: board representation, player identities and
//! colours, and the board engine's phase machine.

mod board;
mod color;
mod engine;
mod event;
mod player;

pub use board::{Board, Cell, Position, CONNECT, DEFAULT_COLS, DEFAULT_ROWS};
pub use color::{PieceColor, PALETTE};
pub use engine::{BoardEngine, GameOutcome, MoveError, Phase, Placement};
pub use event::GameEvent;
pub use player::Player;
