//! Derived views for a presentation layer.
//!
//! Everything here is computed from a [`GameState`] and is idempotent: the
//! same state always renders the same status line and move list.

use super::history::{HistoryOrder, describe_move};
use super::rules::GameStatus;
use super::{Coordinate, GameState, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status text shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum StatusLine {
    /// The viewed board has a winning line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Game continues with this player.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
    /// Board is full with no winner.
    #[display("It's a DRAW!!")]
    Draw,
}

/// Status line for the viewed snapshot.
#[instrument(skip(game), fields(current_move = game.current_move()))]
pub fn status_line(game: &GameState) -> StatusLine {
    match game.status() {
        GameStatus::Won(player) => StatusLine::Winner(player),
        GameStatus::Draw => StatusLine::Draw,
        GameStatus::InProgress => StatusLine::NextPlayer(game.next_player()),
    }
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub move_number: usize,
    /// Cell filled by this move; `None` for game start.
    pub coordinate: Option<Coordinate>,
    /// True for the snapshot currently viewed.
    pub is_current: bool,
}

impl MoveEntry {
    /// Text shown for this entry.
    pub fn label(&self) -> String {
        match (self.is_current, self.coordinate) {
            (true, None) => "Game start".to_string(),
            (true, Some(c)) => format!("You are at the move ( {} )", c),
            (false, None) => "Go to game start".to_string(),
            (false, Some(c)) => format!("Go to move ( {} )", c),
        }
    }
}

/// One entry per history snapshot, in the state's display order.
///
/// Entries keep the number of the snapshot they represent, so a
/// descending list counts down to 0.
#[instrument(skip(game), fields(len = game.history_len(), order = ?game.order()))]
pub fn move_list(game: &GameState) -> Vec<MoveEntry> {
    let history = game.history();
    let mut entries: Vec<MoveEntry> = (0..history.len())
        .map(|move_number| MoveEntry {
            move_number,
            coordinate: describe_move(history, move_number),
            is_current: move_number == game.current_move(),
        })
        .collect();

    if game.order() == HistoryOrder::Descending {
        entries.reverse();
    }
    entries
}

/// Label for the control that flips the move list order.
pub fn order_toggle_label(order: HistoryOrder) -> &'static str {
    match order {
        HistoryOrder::Ascending => "Show descending history",
        HistoryOrder::Descending => "Show ascending history",
    }
}

/// True if `pos` is part of the winning line on the viewed board.
pub fn is_winning_cell(game: &GameState, pos: Position) -> bool {
    game.winning_line().is_some_and(|line| line.contains(&pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_next_player() {
        let mut game = GameState::new();
        assert_eq!(status_line(&game).to_string(), "Next player: X");
        game.play(Position::Center);
        assert_eq!(status_line(&game).to_string(), "Next player: O");
    }

    #[test]
    fn test_status_winner() {
        let mut game = GameState::new();
        for index in [0, 3, 1, 4, 2] {
            game.play_index(index);
        }
        assert_eq!(status_line(&game), StatusLine::Winner(Player::X));
        assert_eq!(status_line(&game).to_string(), "Winner: X");
    }

    #[test]
    fn test_entry_labels() {
        let start = MoveEntry {
            move_number: 0,
            coordinate: None,
            is_current: false,
        };
        let moved = MoveEntry {
            move_number: 3,
            coordinate: Some(Coordinate { row: 2, col: 3 }),
            is_current: false,
        };
        assert_eq!(start.label(), "Go to game start");
        assert_eq!(moved.label(), "Go to move ( 2,3 )");
        assert_eq!(
            MoveEntry {
                is_current: true,
                ..start
            }
            .label(),
            "Game start"
        );
        assert_eq!(
            MoveEntry {
                is_current: true,
                ..moved
            }
            .label(),
            "You are at the move ( 2,3 )"
        );
    }

    #[test]
    fn test_toggle_labels() {
        assert_eq!(
            order_toggle_label(HistoryOrder::Ascending),
            "Show descending history"
        );
        assert_eq!(
            order_toggle_label(HistoryOrder::Descending),
            "Show ascending history"
        );
    }

    #[test]
    fn test_winning_cells() {
        let mut game = GameState::new();
        for index in [2, 0, 4, 1, 6] {
            game.play_index(index);
        }
        for pos in Position::ALL {
            let expected = matches!(
                pos,
                Position::TopRight | Position::Center | Position::BottomLeft
            );
            assert_eq!(is_winning_cell(&game, pos), expected, "{pos:?}");
        }
    }
}
