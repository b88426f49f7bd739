//! Tests for the move list, status line and serializable snapshot.

use rewind_tictactoe::{
    GameSnapshot, GameState, GameStatus, HistoryOrder, Player, StatusLine, move_list,
    order_toggle_label, status_line,
};

fn labels(game: &GameState) -> Vec<String> {
    move_list(game).iter().map(|entry| entry.label()).collect()
}

#[test]
fn test_ascending_move_list() {
    let mut game = GameState::new();
    game.play_index(4);
    game.play_index(0);

    assert_eq!(
        labels(&game),
        vec![
            "Go to game start",
            "Go to move ( 2,2 )",
            "You are at the move ( 1,1 )",
        ]
    );
}

#[test]
fn test_descending_move_list_keeps_numbers() {
    let mut game = GameState::with_order(HistoryOrder::Descending);
    game.play_index(4);
    game.play_index(0);
    game.jump_to(0);

    let entries = move_list(&game);
    let numbers: Vec<usize> = entries.iter().map(|e| e.move_number).collect();
    assert_eq!(numbers, vec![2, 1, 0]);
    assert_eq!(
        labels(&game),
        vec!["Go to move ( 1,1 )", "Go to move ( 2,2 )", "Game start"]
    );
}

#[test]
fn test_toggle_flips_list_and_label() {
    let mut game = GameState::new();
    game.play_index(8);
    let ascending = move_list(&game);
    assert_eq!(order_toggle_label(game.order()), "Show descending history");

    game.toggle_order();
    let mut descending = move_list(&game);
    descending.reverse();
    assert_eq!(descending, ascending);
    assert_eq!(order_toggle_label(game.order()), "Show ascending history");
}

#[test]
fn test_draw_status_line() {
    let mut game = GameState::new();
    for index in [0, 1, 2, 3, 4, 6, 5, 8, 7] {
        game.play_index(index);
    }
    assert_eq!(status_line(&game), StatusLine::Draw);
    assert_eq!(status_line(&game).to_string(), "It's a DRAW!!");
}

#[test]
fn test_snapshot_json() {
    let mut game = GameState::new();
    for index in [0, 3, 1, 4, 2] {
        game.play_index(index);
    }

    let snapshot = GameSnapshot::from(&game);
    assert!(snapshot.is_over());
    assert_eq!(snapshot.status, GameStatus::Won(Player::X));
    assert_eq!(snapshot.moves.len(), 6);

    let json = serde_json::to_value(&snapshot).expect("snapshot serializes");
    assert_eq!(json["status_line"], "Winner: X");
    assert_eq!(json["current_move"], 5);
    assert_eq!(json["order"], "ascending");
    assert_eq!(json["winning_line"][2], "TopRight");

    let back: GameSnapshot = serde_json::from_value(json).expect("snapshot deserializes");
    assert_eq!(back, snapshot);
}
