//! Serializable view of a game session.

use super::history::HistoryOrder;
use super::rules::GameStatus;
use super::view::{self, MoveEntry, StatusLine};
use super::{Board, GameState, Player, Position};
use serde::{Deserialize, Serialize};

/// Everything a client needs to draw the viewed snapshot.
///
/// Built from a [`GameState`]; the full history is summarized by the
/// move list rather than copied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board at the current move.
    pub board: Board,
    /// Status of that board.
    pub status: GameStatus,
    /// Status text for display.
    pub status_line: String,
    /// Player who would place the next mark.
    pub next_player: Player,
    /// Index of the viewed snapshot.
    pub current_move: usize,
    /// Winning cells, if any.
    pub winning_line: Option<[Position; 3]>,
    /// Move list order.
    pub order: HistoryOrder,
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
}

impl From<&GameState> for GameSnapshot {
    fn from(game: &GameState) -> Self {
        let status_line: StatusLine = view::status_line(game);
        Self {
            board: *game.current_board(),
            status: game.status(),
            status_line: status_line.to_string(),
            next_player: game.next_player(),
            current_move: game.current_move(),
            winning_line: game.winning_line(),
            order: game.order(),
            moves: view::move_list(game),
        }
    }
}

impl GameSnapshot {
    /// Returns true if the viewed board is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }
}
