use std::collections::VecDeque;

use log::{debug, info};

use super::board::{self, Board, Position, DEFAULT_COLS, DEFAULT_ROWS};
use super::{GameEvent, PieceColor, Player};
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Tie,
}

/// Why a drop was not accepted. Rejections leave the engine untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    NotInProgress,
}

/// An accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub position: Position,
    pub player: Player,
    /// Set when this move ended the game
    pub outcome: Option<GameOutcome>,
}

/// Owns the grid, whose turn it is, and the game phase.
///
/// Lifecycle: `NotStarted --start_game--> InProgress --(win|tie)--> Ended
/// --restart--> NotStarted`. Player colours survive restarts.
#[derive(Debug, Clone)]
pub struct BoardEngine {
    board: Board,
    colors: [PieceColor; 2],
    current_player: Player,
    phase: Phase,
    outcome: Option<GameOutcome>,
    winning_line: Option<Vec<Position>>,
    move_count: usize,
    events: VecDeque<GameEvent>,
}

impl BoardEngine {
    /// Create an engine with an empty `rows` x `cols` grid and default colours
    pub fn new(rows: usize, cols: usize) -> Self {
        BoardEngine {
            board: Board::new(rows, cols),
            colors: [
                PieceColor::player_one_default(),
                PieceColor::player_two_default(),
            ],
            current_player: Player::One,
            phase: Phase::NotStarted,
            outcome: None,
            winning_line: None,
            move_count: 0,
            events: VecDeque::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let mut engine = BoardEngine::new(config.board.rows, config.board.cols);
        engine.colors = [config.players.player_one, config.players.player_two];
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Player to move, or the player who made the final move once ended
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Cells of the run that won the game, if any
    pub fn winning_line(&self) -> Option<&[Position]> {
        self.winning_line.as_deref()
    }

    /// Accepted moves in the current game
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn player_color(&self, player: Player) -> PieceColor {
        self.colors[player.index()]
    }

    pub fn set_player_color(&mut self, player: Player, color: PieceColor) {
        debug!("{} colour set to {}", player.name(), color);
        self.colors[player.index()] = color;
        self.events.push_back(GameEvent::ColorChanged { player, color });
    }

    /// Take all queued events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    /// Begin play. Returns false (and does nothing) unless the game has
    /// not started yet.
    pub fn start_game(&mut self) -> bool {
        if self.phase != Phase::NotStarted {
            return false;
        }
        info!(
            "game started on a {}x{} board",
            self.board.rows(),
            self.board.cols()
        );
        self.phase = Phase::InProgress;
        self.events.push_back(GameEvent::Started);
        true
    }

    /// Drop the current player's piece into `column`.
    ///
    /// The piece lands in the lowest empty row. A win is checked before a
    /// full-board tie; if neither happened the turn passes to the other
    /// player.
    pub fn drop_piece(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.phase != Phase::InProgress {
            return Err(self.reject(column, MoveError::NotInProgress));
        }

        let player = self.current_player;
        let row = match self.board.drop_piece(column, player) {
            Ok(row) => row,
            Err(e) => {
                let reason = match e {
                    board::MoveError::ColumnFull => MoveError::ColumnFull,
                    board::MoveError::InvalidColumn => MoveError::InvalidColumn,
                };
                return Err(self.reject(column, reason));
            }
        };

        let position = Position::new(row, column);
        self.move_count += 1;
        debug!("{} placed at ({}, {})", player.name(), row, column);
        self.events.push_back(GameEvent::PiecePlaced { position, player });

        let line = self.board.winning_line(row, column);
        debug_assert_eq!(line.is_some(), self.board.scan_for_win(player));

        let outcome = if let Some(line) = line {
            self.winning_line = Some(line);
            Some(GameOutcome::Winner(player))
        } else if self.board.is_full() {
            Some(GameOutcome::Tie)
        } else {
            None
        };

        match outcome {
            Some(outcome) => self.end_game(outcome),
            None => self.current_player = player.other(),
        }

        Ok(Placement {
            position,
            player,
            outcome,
        })
    }

    /// Clear the grid and go back to `NotStarted` with Player 1 to move.
    /// Colours are kept.
    pub fn restart(&mut self) {
        info!("game restarted after {} moves", self.move_count);
        self.board = Board::new(self.board.rows(), self.board.cols());
        self.current_player = Player::One;
        self.phase = Phase::NotStarted;
        self.outcome = None;
        self.winning_line = None;
        self.move_count = 0;
        self.events.push_back(GameEvent::Restarted);
    }

    fn end_game(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Winner(player) => {
                info!("{} won after {} moves", player.name(), self.move_count)
            }
            GameOutcome::Tie => info!("tie after {} moves", self.move_count),
        }
        self.phase = Phase::Ended;
        self.outcome = Some(outcome);
        self.events.push_back(GameEvent::Ended(outcome));
    }

    fn reject(&mut self, column: usize, reason: MoveError) -> MoveError {
        debug!("move in column {} rejected: {:?}", column, reason);
        self.events.push_back(GameEvent::MoveRejected { column, reason });
        reason
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
