//! Application state and key handling.
//!
//! The cell cursor and the selected move-list entry are UI state only;
//! the game itself lives in [`GameState`].

use crate::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameState, HistoryOrder, Position, move_list};
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    selected_move: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with an empty board.
    #[instrument]
    pub fn new(order: HistoryOrder) -> Self {
        Self {
            game: GameState::with_order(order),
            cursor: Position::Center,
            selected_move: 0,
            message: None,
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Move number highlighted in the move list.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// Feedback from the last action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        self.message = None;
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_cell(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            KeyCode::Char('u') | KeyCode::PageUp => self.step_selection(false),
            KeyCode::Char('d') | KeyCode::PageDown => self.step_selection(true),
            KeyCode::Char('j') => self.jump_to_selected(),
            KeyCode::Char('t') => self.game.toggle_order(),
            KeyCode::Char('r') => {
                self.game.restart();
                self.selected_move = 0;
                self.message = Some("Game restarted".to_string());
            }
            _ => {}
        }
    }

    fn play(&mut self, pos: Position) {
        match self.game.try_play(pos) {
            Ok(mv) => {
                debug!(%mv, "Move played");
                self.selected_move = self.game.current_move();
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Moves the selection one row down (`forward`) or up the displayed list.
    fn step_selection(&mut self, forward: bool) {
        let entries = move_list(&self.game);
        let Some(row) = entries
            .iter()
            .position(|entry| entry.move_number == self.selected_move)
        else {
            self.selected_move = self.game.current_move();
            return;
        };
        let row = if forward {
            (row + 1).min(entries.len() - 1)
        } else {
            row.saturating_sub(1)
        };
        self.selected_move = entries[row].move_number;
    }

    fn jump_to_selected(&mut self) {
        if let Err(e) = self.game.try_jump_to(self.selected_move) {
            self.message = Some(e.to_string());
        }
    }
}
