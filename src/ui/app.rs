use crate::error::GameError;
use crate::game::{Game, GameStatus};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    game: Game,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(game: Game) -> Self {
        let selected_column = game.width() / 2; // Start in middle
        App {
            game,
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game.width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                // Reset game, keeping the board dimensions
                self.game = match Game::new(self.game.height(), self.game.width()) {
                    Ok(game) => game,
                    Err(_) => Game::default_size(),
                };
                self.selected_column = self.game.width() / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game.drop_piece(self.selected_column) {
            Ok(placement) => {
                self.message = match placement.status {
                    GameStatus::Won(player) => Some(format!("{} wins!", player.name())),
                    GameStatus::Drawn => Some("It's a draw!".to_string()),
                    GameStatus::InProgress => None,
                };
            }
            Err(GameError::ColumnFull { .. }) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(GameError::InvalidColumn { .. }) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(GameError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Game::default_size())
    }
}
