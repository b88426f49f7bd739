//! Game state with time-travel history.
//!
//! The state is an ordered list of board snapshots plus a cursor into it.
//! Playing appends a snapshot after the cursor (discarding any later
//! branch); jumping only moves the cursor.

use super::action::{Move, MoveError};
use super::contracts::{Contract, PlayContract};
use super::history::HistoryOrder;
use super::rules::{self, GameStatus};
use super::{Board, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Complete state of one game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) history: Vec<Board>,
    pub(crate) current_move: usize,
    pub(crate) order: HistoryOrder,
}

impl GameState {
    /// Creates a new game with an empty board and ascending move list.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(HistoryOrder::default())
    }

    /// Creates a new game whose move list starts in `order`.
    #[instrument]
    pub fn with_order(order: HistoryOrder) -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            order,
        }
    }

    /// All board snapshots, game start first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Number of snapshots in the history (always at least 1).
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Index of the snapshot currently viewed.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The snapshot currently viewed.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// True when X plays next from the viewed snapshot.
    pub fn is_x_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// The player whose mark the next play places.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Status of the viewed snapshot.
    pub fn status(&self) -> GameStatus {
        rules::status(self.current_board())
    }

    /// Winning line on the viewed snapshot, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(self.current_board())
    }

    /// Display order of the move list.
    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    /// Flips the display order of the move list.
    #[instrument(skip(self), fields(order = ?self.order))]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggle();
        debug!(order = ?self.order, "Move list order toggled");
    }

    /// Places the next player's mark at `pos`.
    ///
    /// Everything after the viewed snapshot is discarded before the new
    /// snapshot is appended, and the cursor moves onto it.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the viewed board already has a winner.
    /// - [`MoveError::SquareOccupied`] if `pos` is taken.
    ///
    /// State is unchanged on error.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn try_play(&mut self, pos: Position) -> Result<Move, MoveError> {
        PlayContract::pre(self, &pos)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.next_player();
        let next = self.current_board().with_mark(pos, player);
        let discarded = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        if discarded > 0 {
            info!(discarded, "Later moves discarded by new play");
        }

        #[cfg(debug_assertions)]
        if let Err(e) = PlayContract::post(&before, self) {
            warn!(error = %e, "Play postcondition failed, restoring previous state");
            *self = before;
            return Err(e);
        }

        debug!(current_move = self.current_move, status = ?self.status(), "Play applied");
        Ok(Move::new(player, pos))
    }

    /// Same as [`GameState::try_play`] for a raw cell index.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for indices above 8, otherwise as `try_play`.
    pub fn try_play_index(&mut self, index: usize) -> Result<Move, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.try_play(pos)
    }

    /// Places the next player's mark at `pos`, ignoring invalid plays.
    pub fn play(&mut self, pos: Position) {
        if let Err(e) = self.try_play(pos) {
            debug!(error = %e, position = ?pos, "Play ignored");
        }
    }

    /// Places the next player's mark at cell `index`, ignoring invalid plays.
    pub fn play_index(&mut self, index: usize) {
        if let Err(e) = self.try_play_index(index) {
            debug!(error = %e, index, "Play ignored");
        }
    }

    /// Moves the cursor to snapshot `mv` without touching the history.
    ///
    /// # Errors
    ///
    /// [`MoveError::NoSuchMove`] if `mv` is not a history index.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn try_jump_to(&mut self, mv: usize) -> Result<(), MoveError> {
        if mv >= self.history.len() {
            return Err(MoveError::NoSuchMove {
                requested: mv,
                len: self.history.len(),
            });
        }
        self.current_move = mv;
        debug!(current_move = mv, "Jumped");
        Ok(())
    }

    /// Moves the cursor to snapshot `mv`, ignoring out-of-range targets.
    pub fn jump_to(&mut self, mv: usize) {
        if let Err(e) = self.try_jump_to(mv) {
            warn!(error = %e, "Jump ignored");
        }
    }

    /// Starts over from an empty board, keeping the display order.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        *self = Self::with_order(self.order);
        info!("Game restarted");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
