use super::{GameOutcome, MoveError, PieceColor, Player, Position};

/// Notifications queued by the engine for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    PiecePlaced {
        position: Position,
        player: Player,
    },
    MoveRejected {
        column: usize,
        reason: MoveError,
    },
    Ended(GameOutcome),
    Restarted,
    ColorChanged {
        player: Player,
        color: PieceColor,
    },
}
