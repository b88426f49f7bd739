//! Move history helpers: describing moves and ordering the move list.

use super::{Board, Coordinate, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Order in which the move list is displayed.
///
/// Only affects presentation; the history itself is never reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl HistoryOrder {
    /// Flips between ascending and descending.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Returns the display label for this order.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Returns the position set by move `mv`.
///
/// `None` for move 0 (game start), for moves past the end of `history`,
/// and when the two snapshots are identical.
#[instrument(skip(history), fields(len = history.len()))]
pub fn changed_position(history: &[Board], mv: usize) -> Option<Position> {
    if mv == 0 {
        return None;
    }
    let before = history.get(mv - 1)?;
    let after = history.get(mv)?;
    before
        .squares()
        .iter()
        .zip(after.squares())
        .position(|(b, a)| b != a)
        .and_then(Position::from_index)
}

/// Returns the 1-based coordinate of the cell that move `mv` filled.
///
/// Snapshots are compared cell by cell in index order and the first
/// difference is reported.
pub fn describe_move(history: &[Board], mv: usize) -> Option<Coordinate> {
    changed_position(history, mv).map(Position::coordinate)
}
