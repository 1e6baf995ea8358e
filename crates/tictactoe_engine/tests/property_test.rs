//! Property-based tests for the engine.
//!
//! Random sequences of cell picks are fed to the engine, including picks
//! that the engine must refuse.

use proptest::prelude::*;
use tictactoe_engine::invariants::{GameInvariants, InvariantSet};
use tictactoe_engine::{GameEngine, GameStatus, InvalidMove, Player, Position};

fn arbitrary_position() -> impl Strategy<Value = Position> {
    (0usize..9).prop_map(|i| Position::from_index(i).expect("index in range"))
}

proptest! {
    #[test]
    fn mark_counts_stay_balanced(picks in prop::collection::vec(arbitrary_position(), 0..30)) {
        let mut engine = GameEngine::new();
        for pos in picks {
            let _ = engine.apply_move(pos);
            let board = engine.state().board();
            let x = board.count(Player::X);
            let o = board.count(Player::O);
            prop_assert!(x == o || x == o + 1, "x = {}, o = {}", x, o);
        }
    }

    #[test]
    fn refused_moves_change_nothing(picks in prop::collection::vec(arbitrary_position(), 0..30)) {
        let mut engine = GameEngine::new();
        for pos in picks {
            let before = engine.state().clone();
            let scores = *engine.scores();
            match engine.apply_move(pos) {
                Ok(_) => {}
                Err(InvalidMove::RoundOver) => {
                    prop_assert!(before.status().is_terminal());
                    prop_assert_eq!(engine.state(), &before);
                    prop_assert_eq!(engine.scores(), &scores);
                }
                Err(InvalidMove::SquareOccupied(p)) => {
                    prop_assert_eq!(p, pos);
                    prop_assert_eq!(engine.state(), &before);
                    prop_assert_eq!(engine.scores(), &scores);
                }
            }
        }
    }

    #[test]
    fn successful_moves_alternate_players(picks in prop::collection::vec(arbitrary_position(), 0..30)) {
        let mut engine = GameEngine::new();
        let mut expected = Player::X;
        for pos in picks {
            let mover = engine.state().current_player();
            if engine.apply_move(pos).is_ok() {
                prop_assert_eq!(mover, expected);
                expected = expected.opponent();
            }
        }
        for (turn, mov) in engine.history().iter().enumerate() {
            let expected = if turn % 2 == 0 { Player::X } else { Player::O };
            prop_assert_eq!(mov.player, expected);
        }
    }

    #[test]
    fn invariants_hold_and_scores_track_outcomes(
        rounds in prop::collection::vec(prop::collection::vec(arbitrary_position(), 0..12), 1..5)
    ) {
        let mut engine = GameEngine::new();
        let mut finished = 0u32;
        for picks in rounds {
            for pos in picks {
                let _ = engine.apply_move(pos);
                prop_assert!(GameInvariants::check_all(engine.state()).is_ok());
            }
            if engine.state().status() != GameStatus::InProgress {
                finished += 1;
            }
            engine.reset_game();
        }
        prop_assert_eq!(engine.scores().rounds_played(), finished);
    }
}
