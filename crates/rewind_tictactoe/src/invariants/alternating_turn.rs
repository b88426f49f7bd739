//! Alternating turn invariant: marks go X, O, X, O, ...

use super::super::{GameState, Player, history};
use super::Invariant;

/// Invariant: the mark placed by move `i` belongs to the player whose turn
/// it was after `i - 1` moves. X always opens.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        (1..game.history.len()).all(|mv| {
            history::changed_position(&game.history, mv)
                .and_then(|pos| game.history[mv].get(pos).player())
                == Some(Player::for_move(mv - 1))
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = GameState::new();
        for index in [0, 4, 2, 6, 8] {
            game.play_index(index);
        }
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = GameState::new();
        game.play(Position::TopLeft);
        let repeat = game.history[1].with_mark(Position::Center, Player::X);
        game.history.push(repeat);
        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_o_opening_violates() {
        let mut game = GameState::new();
        game.history.push(Board::new().with_mark(Position::Center, Player::O));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
