use crate::game::{BoardEngine, GameEvent, MoveError, Phase, Player};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use log::debug;
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;

use super::board_widget;

pub struct App {
    engine: BoardEngine,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    /// Where the board was last drawn, for mouse hit-testing
    board_rect: Option<Rect>,
}

impl App {
    pub fn new(engine: BoardEngine) -> Self {
        let selected_column = engine.board().cols() / 2; // Start in middle
        App {
            engine,
            selected_column,
            should_quit: false,
            message: None,
            board_rect: None,
        }
    }

    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle terminal events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            code => match self.engine.phase() {
                Phase::NotStarted => self.handle_start_key(code),
                Phase::InProgress => self.handle_play_key(code),
                Phase::Ended => self.handle_result_key(code),
            },
        }

        self.process_events();
    }

    /// Left click on a board column drops a piece there
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left)
            || self.engine.phase() != Phase::InProgress
        {
            return;
        }
        let Some(rect) = self.board_rect else {
            return;
        };
        let cols = self.engine.board().cols();
        if let Some(col) = board_widget::column_at(rect, cols, mouse.column, mouse.row) {
            self.message = None;
            self.selected_column = col;
            self.drop_piece(col);
            self.process_events();
        }
    }

    fn handle_start_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char('s') => {
                self.engine.start_game();
            }
            KeyCode::Char('1') => self.cycle_color(Player::One),
            KeyCode::Char('2') => self.cycle_color(Player::Two),
            _ => {}
        }
    }

    fn handle_play_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.engine.board().cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col < self.engine.board().cols() {
                    self.selected_column = col;
                }
                self.drop_piece(col);
            }
            KeyCode::Char('r') => self.engine.restart(),
            _ => {}
        }
    }

    fn handle_result_key(&mut self, code: KeyCode) {
        if matches!(code, KeyCode::Enter | KeyCode::Char('r')) {
            self.engine.restart();
        }
    }

    fn cycle_color(&mut self, player: Player) {
        let next = self.engine.player_color(player).next_in_palette();
        self.engine.set_player_color(player, next);
    }

    /// Drop piece in a column. Rejections are reported through the event
    /// queue.
    fn drop_piece(&mut self, column: usize) {
        let _ = self.engine.drop_piece(column);
    }

    /// React to whatever the engine reported since the last call
    fn process_events(&mut self) {
        for event in self.engine.drain_events() {
            debug!("ui event: {:?}", event);
            match event {
                GameEvent::MoveRejected { reason, .. } => {
                    self.message = Some(
                        match reason {
                            MoveError::ColumnFull => "Column is full!",
                            MoveError::InvalidColumn => "Invalid column!",
                            MoveError::NotInProgress => "Game is not in progress!",
                        }
                        .to_string(),
                    );
                }
                GameEvent::ColorChanged { player, color } => {
                    self.message = Some(format!("{} colour: {}", player.name(), color));
                }
                GameEvent::Restarted => {
                    self.selected_column = self.engine.board().cols() / 2;
                    self.message = Some("New game! Pick colours and press Enter.".to_string());
                }
                GameEvent::Started
                | GameEvent::PiecePlaced { .. }
                | GameEvent::Ended(_) => {}
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut ratatui::Frame) {
        let rect = super::game_view::render(
            frame,
            &self.engine,
            self.selected_column,
            &self.message,
        );
        self.board_rect = Some(rect);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(BoardEngine::default())
    }
}
