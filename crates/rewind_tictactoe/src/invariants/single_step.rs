//! Single-step invariant: each snapshot fills exactly one empty square.

use super::super::{Board, GameState, Square};
use super::Invariant;

/// Invariant: the history starts empty and grows one mark at a time.
///
/// Snapshot `i` equals snapshot `i - 1` except for one square that was
/// empty before and is occupied after. Squares are never overwritten.
pub struct SingleStepInvariant;

impl SingleStepInvariant {
    fn is_single_step(before: &Board, after: &Board) -> bool {
        let mut changed = before
            .squares()
            .iter()
            .zip(after.squares())
            .filter(|(b, a)| b != a);

        matches!(
            (changed.next(), changed.next()),
            (Some((Square::Empty, Square::Occupied(_))), None)
        )
    }
}

impl Invariant<GameState> for SingleStepInvariant {
    fn holds(game: &GameState) -> bool {
        let Some(first) = game.history.first() else {
            return false;
        };
        *first == Board::new()
            && game
                .history
                .windows(2)
                .all(|pair| Self::is_single_step(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one previously empty square"
    }
}
