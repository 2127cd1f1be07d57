use crate::error::MoveError;
use crate::game::{GameEngine, Outcome, Snapshot};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

use super::game_view::{self, Palette};

pub struct App {
    engine: GameEngine,
    snapshot: Snapshot,
    palette: Palette,
    selected_column: usize,
    tick_rate: Duration,
    should_quit: bool,
    notice: Option<String>,
}

impl App {
    pub fn new(engine: GameEngine, palette: Palette, tick_rate: Duration) -> Self {
        let snapshot = engine.snapshot();
        let selected_column = middle_column(&engine);
        App {
            engine,
            snapshot,
            palette,
            selected_column,
            tick_rate,
            should_quit: false,
            notice: None,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
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
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear notice on any key press
        self.notice = None;
        let columns = self.engine.grid().dimensions().columns();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < columns {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column as isize);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c.to_digit(10).map_or(0, |d| d as usize - 1);
                if column < columns {
                    self.selected_column = column;
                }
                self.drop_piece(column as isize);
            }
            KeyCode::Char('r') => {
                self.snapshot = self.engine.reset();
                self.selected_column = middle_column(&self.engine);
                self.notice = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop a piece and keep the snapshot the engine hands back
    fn drop_piece(&mut self, column: isize) {
        let report = self.engine.drop(column);
        self.snapshot = report.snapshot;

        self.notice = match report.placed {
            Ok(_) => match self.snapshot.outcome {
                Outcome::InProgress => None,
                _ => Some("Game over! Press 'r' to play again.".to_string()),
            },
            Err(MoveError::ColumnFull) => Some("Column is full!".to_string()),
            Err(MoveError::InvalidColumn) => Some("Invalid column!".to_string()),
            Err(MoveError::GameOver) => Some("Game is over! Press 'r' to play again.".to_string()),
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        game_view::render(
            frame,
            &self.snapshot,
            &self.palette,
            self.selected_column,
            &self.notice,
        );
    }
}

fn middle_column(engine: &GameEngine) -> usize {
    engine.grid().dimensions().columns() / 2
}

impl Default for App {
    fn default() -> Self {
        Self::new(
            GameEngine::standard(),
            Palette::default(),
            Duration::from_millis(100),
        )
    }
}
