//! Headless replay: play a scripted list of cells and report the result.

use anyhow::{Context, Result};
use rewind_tictactoe::{GameSnapshot, GameState, HistoryOrder, move_list, status_line};
use tracing::{info, instrument};

/// Parses a comma-separated list of cell indices.
///
/// Blank input is an empty list. Range is not checked here; the game
/// ignores out-of-range cells like any other invalid play.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<usize>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .with_context(|| format!("Invalid cell index {:?}", s))
        })
        .collect()
}

/// Plays `moves` in order, then optionally jumps to move `jump`.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay(moves: &[usize], jump: Option<usize>, order: HistoryOrder) -> GameState {
    let mut game = GameState::with_order(order);
    for &index in moves {
        game.play_index(index);
    }
    if let Some(mv) = jump {
        game.jump_to(mv);
    }
    info!(
        history_len = game.history_len(),
        current_move = game.current_move(),
        "Replay finished"
    );
    game
}

/// Plain-text report: board, status line and move list.
pub fn render_text(game: &GameState) -> String {
    let mut out = String::new();
    out.push_str(&game.current_board().display());
    out.push_str("\n\n");
    out.push_str(&status_line(game).to_string());
    out.push_str("\n\n");
    for entry in move_list(game) {
        let marker = if entry.is_current { '>' } else { ' ' };
        let line = format!("{} {}. {}", marker, entry.move_number, entry.label());
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Pretty JSON report of the game snapshot.
pub fn render_json(game: &GameState) -> Result<String> {
    serde_json::to_string_pretty(&GameSnapshot::from(game)).context("Failed to serialize snapshot")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        assert_eq!(parse_moves("4, 0,8").unwrap(), vec![4, 0, 8]);
        assert_eq!(parse_moves("").unwrap(), Vec::<usize>::new());
        assert_eq!(parse_moves("1,,2,").unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_parse_moves_rejects_garbage() {
        let err = parse_moves("4,x").unwrap_err();
        assert!(err.to_string().contains("\"x\""));
        assert!(parse_moves("-1").is_err());
    }

    #[test]
    fn test_replay_ignores_invalid_plays() {
        let game = replay(&[4, 4, 12, 0], None, HistoryOrder::Ascending);
        assert_eq!(game.history_len(), 3);
    }

    #[test]
    fn test_render_text() {
        let game = replay(&[0, 3, 1, 4, 2], Some(5), HistoryOrder::Descending);
        let text = render_text(&game);
        let expected = "\
X|X|X
-+-+-
O|O|6
-+-+-
7|8|9

Winner: X

> 5. You are at the move ( 1,3 )
  4. Go to move ( 2,2 )
  3. Go to move ( 1,2 )
  2. Go to move ( 2,1 )
  1. Go to move ( 1,1 )
  0. Go to game start
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_json() {
        let game = replay(&[4], None, HistoryOrder::Ascending);
        let rendered = render_json(&game).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["status_line"], "Next player: O");
        assert_eq!(json["moves"][1]["coordinate"]["row"], 2);
    }
}
