//! Tic-tac-toe game state with move history and time travel.
//!
//! The crate is pure logic: no terminal, no files, no clocks.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Position, status_line};
//!
//! let mut game = GameState::new();
//! game.play(Position::Center);
//! game.play(Position::TopLeft);
//! game.jump_to(1);
//! game.play(Position::BottomRight); // discards O's move
//!
//! assert_eq!(game.history_len(), 3);
//! assert!(game.is_x_next());
//! assert_eq!(status_line(&game).to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod history;
mod invariants;
mod position;
mod rules;
mod snapshot;
mod types;
mod view;

pub use action::{Move, MoveError};
pub use contracts::{Contract, GameNotOver, LegalPlay, PlayContract, SquareIsEmpty};
pub use game::GameState;
pub use history::{HistoryOrder, changed_position, describe_move};
pub use invariants::{
    AlternatingTurnInvariant, CursorInBoundsInvariant, GameInvariants, Invariant, InvariantSet,
    InvariantViolation, SingleStepInvariant,
};
pub use position::{Coordinate, Position};
pub use rules::{GameStatus, LINES, check_winner, is_draw, is_full, status, winning_line};
pub use snapshot::GameSnapshot;
pub use types::{Board, Player, Square};
pub use view::{
    MoveEntry, StatusLine, is_winning_cell, move_list, order_toggle_label, status_line,
};
