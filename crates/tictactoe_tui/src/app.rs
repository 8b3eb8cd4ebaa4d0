//! Application state and logic.

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tictactoe_core::{Game, GameStatus, MoveError, Position};
use tracing::debug;

use crate::input;
use crate::ui;

/// Main application state.
pub struct App {
    game: Game,
    cursor: Position,
    status_message: String,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            status_message: "Player X's turn. Press 1-9 to make a move.".to_string(),
        }
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The square the keyboard cursor rests on.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Routes a key press.
    ///
    /// Digits select squares directly, arrows move the cursor, and Enter
    /// or Space selects the cursor square. Quit and restart are handled
    /// by the event loop before this.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = input::digit_to_position(c) {
                    self.select(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, code);
            }
            _ => {}
        }
    }

    /// Resolves a mouse click on the frame to a square selection.
    pub fn handle_click(&mut self, column: u16, row: u16, area: Rect) {
        if let Some(pos) = ui::hit_test(area, column, row) {
            self.cursor = pos;
            self.select(pos);
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.cursor = Position::Center;
        self.status_message = "Player X's turn. Press 1-9 to make a move.".to_string();
    }

    /// Attempts the move and refreshes the status message.
    fn select(&mut self, pos: Position) {
        debug!(position = %pos, "Selecting square");

        match self.game.make_move(pos) {
            Ok(()) => {
                self.status_message = match self.game.status() {
                    GameStatus::InProgress => {
                        match (self.game.history().last(), self.game.to_move()) {
                            (Some(last), Some(next)) => format!(
                                "{:?} played {}. Player {:?}'s turn.",
                                last.player, last.position, next
                            ),
                            _ => "Player X's turn. Press 1-9 to make a move.".to_string(),
                        }
                    }
                    GameStatus::Won(win) => format!(
                        "Player {:?} wins on the {}! Press 'r' to restart or 'q' to quit.",
                        win.winner, win.line
                    ),
                    GameStatus::Draw => {
                        "It's a draw! Press 'r' to restart or 'q' to quit.".to_string()
                    }
                };
            }
            // A finished game swallows selections so the end banner stays up.
            Err(MoveError::GameOver) => {}
            Err(err) => {
                self.status_message = format!("Invalid move: {}. Try again.", err);
            }
        }
    }
}
