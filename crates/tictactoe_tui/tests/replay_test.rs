//! Non-interactive replay of move lists.

use tictactoe_engine::{GameStatus, Player, Position};
use tictactoe_tui::replay::{parse_moves, replay};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_replay_draw_by_labels() {
    let moves = parse_moves(&args(&[
        "top-left",
        "top-center",
        "top-right",
        "center",
        "middle-left",
        "middle-right",
        "bottom-center",
        "bottom-left",
        "bottom-right",
    ]))
    .unwrap();
    let summary = replay(&moves);

    assert_eq!(summary.state.status(), GameStatus::Draw);
    assert_eq!(summary.scores.draws(), 1);
    assert!(summary.ignored.is_empty());
    assert!(summary.render().contains("Status: Draw"));
}

#[test]
fn test_moves_after_round_end_are_ignored() {
    let moves = parse_moves(&args(&["0,3,1,4,2", "8"])).unwrap();
    let summary = replay(&moves);

    assert_eq!(summary.state.status().winner(), Some(Player::X));
    assert_eq!(summary.ignored.len(), 1);
    assert_eq!(summary.ignored[0].reason, "Round is already over");
}

#[test]
fn test_summary_serializes_to_json() {
    let summary = replay(&parse_moves(&args(&["4"])).unwrap());
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["scores"]["x"], 0);
    assert!(json["state"]["board"].is_object());
    assert_eq!(json["ignored"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_unknown_position_is_an_error() {
    let err = parse_moves(&args(&["4", "middle"])).unwrap_err();
    assert_eq!(err.input, "middle");
}

#[test]
fn test_number_read_off_the_board_plays_that_square() {
    let first = replay(&parse_moves(&args(&["4"])).unwrap());
    let report = first.render();
    let middle_row = report.lines().nth(2).unwrap();
    assert_eq!(middle_row, "3|X|5");

    // Typing the label shown left of the X picks middle-left, not the center again.
    let shown = middle_row.split('|').next().unwrap();
    let summary = replay(&parse_moves(&args(&["4", shown])).unwrap());

    assert!(summary.ignored.is_empty());
    assert_eq!(
        summary.state.board().get(Position::MiddleLeft).player(),
        Some(Player::O)
    );
}
