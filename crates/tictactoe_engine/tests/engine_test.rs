//! Tests for the round-and-score engine.

use std::sync::{Arc, Mutex};
use tictactoe_engine::{
    Board, GameEngine, GameEvent, GameState, GameStatus, InvalidMove, Move, Player, Position,
    ScoreBoard, ScoreKey, Square, WinningLine,
};

/// Plays X to the top row: X 0, O 3, X 1, O 4, X 2.
fn x_wins_top_row(engine: &mut GameEngine) {
    for pos in [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ] {
        engine.apply_move(pos).expect("valid move");
    }
}

/// Fills the board without a line: X O X / X O O / O X X.
const DRAW_SEQUENCE: [Position; 9] = [
    Position::TopLeft,
    Position::TopCenter,
    Position::TopRight,
    Position::Center,
    Position::MiddleLeft,
    Position::MiddleRight,
    Position::BottomCenter,
    Position::BottomLeft,
    Position::BottomRight,
];

#[test]
fn test_initial_state() {
    let engine = GameEngine::new();
    assert_eq!(engine.state().board(), &Board::new());
    assert_eq!(engine.state().current_player(), Player::X);
    assert_eq!(engine.state().status(), GameStatus::InProgress);
    assert!(engine.scores().is_zero());
    assert_eq!(engine.winning_line(), None);
}

#[test]
fn test_top_row_win_scores_x_once() {
    let mut engine = GameEngine::new();
    x_wins_top_row(&mut engine);

    let expected = Board::from_squares([
        Square::Occupied(Player::X),
        Square::Occupied(Player::X),
        Square::Occupied(Player::X),
        Square::Occupied(Player::O),
        Square::Occupied(Player::O),
        Square::Empty,
        Square::Empty,
        Square::Empty,
        Square::Empty,
    ]);
    assert_eq!(engine.state().board(), &expected);
    assert_eq!(
        engine.state().status(),
        GameStatus::Won(Player::X, WinningLine::TOP_ROW)
    );
    assert_eq!(engine.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
    assert_eq!(engine.scores().wins(Player::X), 1);
    assert_eq!(engine.scores().wins(Player::O), 0);
    assert_eq!(engine.scores().draws(), 0);
}

#[test]
fn test_winner_stays_current_player() {
    let mut engine = GameEngine::new();
    x_wins_top_row(&mut engine);
    assert_eq!(engine.state().current_player(), Player::X);
}

#[test]
fn test_o_can_win() {
    let engine = GameEngine::replay([
        Position::TopLeft,
        Position::TopRight,
        Position::TopCenter,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
    ])
    .expect("valid replay");

    assert_eq!(
        engine.state().status(),
        GameStatus::Won(Player::O, WinningLine::ANTI_DIAGONAL)
    );
    assert_eq!(engine.scores().get(ScoreKey::O), 1);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let engine = GameEngine::replay(DRAW_SEQUENCE).expect("valid replay");

    assert_eq!(engine.state().status(), GameStatus::Draw);
    assert!(engine.state().board().is_full());
    assert_eq!(engine.scores().draws(), 1);
    assert_eq!(engine.scores().rounds_played(), 1);
}

#[test]
fn test_win_on_last_square_is_not_a_draw() {
    // X O X / O X O / O X X: X completes the diagonal with the ninth mark.
    let engine = GameEngine::replay([
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ])
    .expect("valid replay");

    assert_eq!(
        engine.state().status(),
        GameStatus::Won(Player::X, WinningLine::DIAGONAL)
    );
    assert_eq!(engine.scores().draws(), 0);
    assert_eq!(engine.scores().wins(Player::X), 1);
}

#[test]
fn test_occupied_square_is_refused_without_change() {
    let mut engine = GameEngine::new();
    engine.apply_move(Position::Center).unwrap();
    let before: GameState = engine.state().clone();
    let scores_before: ScoreBoard = *engine.scores();

    let err = engine.apply_move(Position::Center).unwrap_err();

    assert_eq!(err, InvalidMove::SquareOccupied(Position::Center));
    assert!(err.to_string().contains("occupied"));
    assert_eq!(engine.state(), &before);
    assert_eq!(engine.scores(), &scores_before);
}

#[test]
fn test_moves_after_win_are_refused_without_change() {
    let mut engine = GameEngine::new();
    x_wins_top_row(&mut engine);
    let before = engine.state().clone();

    let empty = engine.state().board().empty_positions();
    assert_eq!(empty.len(), 4);
    for pos in empty {
        assert_eq!(engine.apply_move(pos), Err(InvalidMove::RoundOver));
    }
    assert_eq!(engine.state(), &before);
    assert_eq!(engine.scores().wins(Player::X), 1);
}

#[test]
fn test_turns_alternate() {
    let mut engine = GameEngine::new();
    let mut expected = Player::X;

    for pos in [
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
        Position::TopRight,
    ] {
        assert_eq!(engine.state().current_player(), expected);
        engine.apply_move(pos).unwrap();
        expected = expected.opponent();
    }
    assert_eq!(engine.state().current_player(), Player::X);
}

#[test]
fn test_reset_game_keeps_scores() {
    let mut engine = GameEngine::new();
    x_wins_top_row(&mut engine);
    let scores = *engine.scores();

    let state = engine.reset_game();

    assert_eq!(state, &GameState::new());
    assert!(state.history().is_empty());
    assert_eq!(engine.scores(), &scores);
    assert_eq!(engine.winning_line(), None);
}

#[test]
fn test_reset_game_mid_round() {
    let mut engine = GameEngine::new();
    engine.apply_move(Position::Center).unwrap();
    engine.reset_game();

    assert_eq!(engine.state().current_player(), Player::X);
    assert!(engine.state().board().is_empty(Position::Center));
    assert!(engine.scores().is_zero());
}

#[test]
fn test_reset_score_zeroes_and_starts_round() {
    let mut engine = GameEngine::new();
    x_wins_top_row(&mut engine);
    engine.reset_game();
    for pos in DRAW_SEQUENCE {
        engine.apply_move(pos).unwrap();
    }
    assert_eq!(engine.scores().rounds_played(), 2);

    let scores = engine.reset_score();
    assert!(scores.is_zero());
    assert_eq!(engine.state(), &GameState::new());
}

#[test]
fn test_scores_accumulate_across_rounds() {
    let mut engine = GameEngine::new();
    for _ in 0..3 {
        x_wins_top_row(&mut engine);
        engine.reset_game();
    }
    for pos in DRAW_SEQUENCE {
        engine.apply_move(pos).unwrap();
    }

    assert_eq!(engine.scores().wins(Player::X), 3);
    assert_eq!(engine.scores().draws(), 1);
    assert_eq!(engine.round(), 4);
}

#[test]
fn test_replay_stops_at_first_invalid_move() {
    let result = GameEngine::replay([Position::Center, Position::Center]);
    assert_eq!(
        result.unwrap_err(),
        InvalidMove::SquareOccupied(Position::Center)
    );
}

#[test]
fn test_engines_are_independent() {
    let mut first = GameEngine::new();
    let second = GameEngine::new();
    x_wins_top_row(&mut first);

    assert_eq!(first.scores().wins(Player::X), 1);
    assert!(second.scores().is_zero());
    assert_eq!(second.state(), &GameState::new());
}

#[test]
fn test_state_serializes() {
    let mut engine = GameEngine::new();
    x_wins_top_row(&mut engine);

    let json = serde_json::to_value(engine.state()).unwrap();
    assert_eq!(json["current_player"], "X");
    assert_eq!(json["history"].as_array().map(Vec::len), Some(5));

    let back: GameState = serde_json::from_value(json).unwrap();
    assert_eq!(&back, engine.state());
}

/// Records every event with the scores the observer saw alongside it.
fn record_events(engine: &mut GameEngine) -> Arc<Mutex<Vec<(GameEvent, ScoreBoard)>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    engine.subscribe(move |event: &GameEvent, _: &GameState, scores: &ScoreBoard| {
        sink.lock().unwrap().push((*event, *scores));
    });
    seen
}

#[test]
fn test_win_emits_round_won_with_line_after_last_mark() {
    let mut engine = GameEngine::new();
    let seen = record_events(&mut engine);
    x_wins_top_row(&mut engine);

    let events: Vec<GameEvent> = seen.lock().unwrap().iter().map(|(e, _)| *e).collect();
    assert_eq!(events.len(), 10);
    assert_eq!(
        events[8..],
        [
            GameEvent::MarkPlaced(Move::new(Player::X, Position::TopRight)),
            GameEvent::RoundWon {
                player: Player::X,
                line: WinningLine::TOP_ROW,
            },
        ]
    );

    // Observers see the score already updated.
    let (_, scores) = seen.lock().unwrap()[9];
    assert_eq!(scores.wins(Player::X), 1);
}

#[test]
fn test_event_sequence_over_win_draw_and_score_reset() {
    let mut engine = GameEngine::new();
    let seen = record_events(&mut engine);

    x_wins_top_row(&mut engine);
    engine.reset_game();
    for pos in DRAW_SEQUENCE {
        engine.apply_move(pos).unwrap();
    }
    engine.reset_score();

    let seen = seen.lock().unwrap();
    let round_events: Vec<GameEvent> = seen
        .iter()
        .map(|(e, _)| *e)
        .filter(|e| !matches!(e, GameEvent::MarkPlaced(_) | GameEvent::TurnPassed(_)))
        .collect();
    assert_eq!(
        round_events,
        vec![
            GameEvent::RoundWon {
                player: Player::X,
                line: WinningLine::TOP_ROW,
            },
            GameEvent::RoundReset { round: 2 },
            GameEvent::RoundDrawn,
            GameEvent::ScoresCleared,
            GameEvent::RoundReset { round: 3 },
        ]
    );

    // A draw passes the turn eight times and ends with the ninth mark.
    let draw_start = seen
        .iter()
        .position(|(e, _)| *e == GameEvent::RoundReset { round: 2 })
        .unwrap();
    let draw: Vec<GameEvent> = seen[draw_start + 1..]
        .iter()
        .map(|(e, _)| *e)
        .take_while(|e| *e != GameEvent::ScoresCleared)
        .collect();
    assert_eq!(draw.len(), 18);
    assert_eq!(
        draw[16],
        GameEvent::MarkPlaced(Move::new(Player::X, Position::BottomRight))
    );
    assert_eq!(draw[17], GameEvent::RoundDrawn);

    let drawn_scores = seen
        .iter()
        .find(|(e, _)| *e == GameEvent::RoundDrawn)
        .map(|(_, s)| *s)
        .unwrap();
    assert_eq!(drawn_scores.draws(), 1);
    assert_eq!(drawn_scores.wins(Player::X), 1);

    let (_, cleared_scores) = seen
        .iter()
        .find(|(e, _)| *e == GameEvent::ScoresCleared)
        .unwrap();
    assert!(cleared_scores.is_zero());
}
