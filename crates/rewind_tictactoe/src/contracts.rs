//! Contract-based validation for plays.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} action {Q}`.

use super::action::MoveError;
use super::game::GameState;
use super::invariants::{GameInvariants, InvariantSet};
use super::{Position, rules};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the viewed board has no winner yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] when a line is complete.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if rules::winning_line(game.current_board()).is_some() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target square is empty on the viewed board.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] for a taken square.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameState) -> Result<(), MoveError> {
        if game.current_board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: a play is legal if the game is not won and the
/// square is empty. The win check runs first.
pub struct LegalPlay;

impl LegalPlay {
    /// Validates all preconditions for a play.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        SquareIsEmpty::check(pos, game)?;
        Ok(())
    }
}

/// Contract for plays.
///
/// Postconditions:
/// - snapshots up to the old cursor are untouched
/// - exactly one snapshot follows them and the cursor points at it
/// - all [`GameInvariants`] hold
pub struct PlayContract;

impl Contract<GameState, Position> for PlayContract {
    fn pre(game: &GameState, pos: &Position) -> Result<(), MoveError> {
        LegalPlay::check(*pos, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let kept = before.current_move() + 1;
        if after.history_len() != kept + 1 {
            warn!(
                expected = kept + 1,
                actual = after.history_len(),
                "History length wrong after play"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history must end one snapshot after the played move"
                    .to_string(),
            ));
        }
        if after.history()[..kept] != before.history()[..kept] {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: earlier snapshots changed".to_string(),
            ));
        }
        if after.current_move() != kept {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: cursor must point at the new snapshot".to_string(),
            ));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariants violated after play");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    #[test]
    fn test_precondition_empty_square() {
        let game = GameState::new();
        assert!(PlayContract::pre(&game, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = GameState::new();
        game.play(Position::Center);
        assert_eq!(
            PlayContract::pre(&game, &Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_game_over_checked_first() {
        let mut game = GameState::new();
        // X: 0,1,2  O: 3,4
        for index in [0, 3, 1, 4, 2] {
            game.play_index(index);
        }
        // Occupied and won: the win is reported.
        assert_eq!(
            PlayContract::pre(&game, &Position::TopLeft),
            Err(MoveError::GameOver)
        );
        assert_eq!(
            PlayContract::pre(&game, &Position::BottomRight),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_play() {
        let before = GameState::new();
        let mut after = before.clone();
        after.play(Position::Center);
        assert!(PlayContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_rewritten_past() {
        let mut before = GameState::new();
        before.play(Position::Center);
        let mut after = before.clone();
        after.play(Position::TopLeft);

        after.history[1].set(Position::BottomRight, Square::Occupied(Player::O));
        assert!(PlayContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_unmoved_cursor() {
        let before = GameState::new();
        let mut after = before.clone();
        after.play(Position::Center);
        after.current_move = 0;
        assert!(PlayContract::post(&before, &after).is_err());
    }
}
