//! Cursor invariant: the viewed move exists.

use super::super::GameState;
use super::Invariant;

/// Invariant: history is non-empty and the cursor indexes into it.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        !game.history.is_empty() && game.current_move < game.history.len()
    }

    fn description() -> &'static str {
        "Current move indexes into a non-empty history"
    }
}
