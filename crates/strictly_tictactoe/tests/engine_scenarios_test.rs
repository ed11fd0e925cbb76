//! Scenario tests for the engine entry points.

use strictly_tictactoe::{
    Board, Difficulty, Engine, EngineConfig, EngineError, INFINITY, InvalidBoard,
    LinearPerspective, MediumVariant, Move, Player, Position, Reason, check_winner, encode,
    is_full_board, search,
};

/// Plays a game to the end, passing the turn explicitly, and returns the
/// winner, if any.
fn play_out(
    x: &mut Engine,
    x_level: Difficulty,
    o: &mut Engine,
    o_level: Difficulty,
    first: Player,
) -> Option<Player> {
    let mut board = Board::new();
    let mut to_move = first;
    loop {
        if let Some(winner) = check_winner(&board) {
            return Some(winner);
        }
        if is_full_board(&board) {
            return None;
        }
        let decision = match to_move {
            Player::X => x.decide(&board, Player::X, x_level),
            Player::O => o.decide(&board, Player::O, o_level),
        };
        let pos = decision.expect("engine refused an open board").position;
        assert!(board.is_empty(pos), "engine picked occupied {pos}");
        board = board.with(pos, to_move);
        to_move = to_move.opponent();
    }
}

#[test]
fn test_blocks_immediate_threat() {
    // A A _
    // _ B _
    // _ _ _
    let board: Board = "XX_/_O_/___".parse().unwrap();
    for seed in 0..20 {
        let mut engine = Engine::seeded(seed);
        assert_eq!(
            engine.choose_move(&board, Player::O, Difficulty::Hard),
            Move { row: 0, col: 2 },
            "seed {seed}"
        );
    }
}

#[test]
fn test_blocks_immediate_threat_validated() {
    let board: Board = "XX_/_O_/___".parse().unwrap();
    let decision = Engine::seeded(3)
        .decide(&board, Player::O, Difficulty::Hard)
        .unwrap();
    assert_eq!(decision.position, Position::TopRight);
    assert_eq!(decision.mover, Player::O);
    assert_eq!(decision.reason, Reason::Searched);
}

#[test]
fn test_takes_win_over_block() {
    // O can win on the middle row instead of blocking X's top row.
    let board: Board = "XX_/OO_/X__".parse().unwrap();
    let mut engine = Engine::seeded(1);
    let decision = engine.decide(&board, Player::O, Difficulty::Hard).unwrap();
    assert_eq!(decision.position, Position::MiddleRight);
    assert_eq!(decision.score, Some(9));
}

#[test]
fn test_hard_vs_hard_always_draws() {
    for seed in 0..10 {
        for first in [Player::X, Player::O] {
            let mut x = Engine::seeded(seed);
            let mut o = Engine::seeded(seed + 1000);
            let winner = play_out(&mut x, Difficulty::Hard, &mut o, Difficulty::Hard, first);
            assert_eq!(winner, None, "seed {seed}, {first} first");
        }
    }
}

#[test]
fn test_inferred_turns_draw_when_x_starts() {
    for seed in 0..10 {
        let mut x = Engine::seeded(seed);
        let mut o = Engine::seeded(seed + 1000);
        let mut board = Board::new();
        let mut to_move = Player::X;
        while check_winner(&board).is_none() && !is_full_board(&board) {
            let mv = match to_move {
                Player::X => x.choose_move(&board, Player::X, Difficulty::Hard),
                Player::O => o.choose_move(&board, Player::O, Difficulty::Hard),
            };
            let pos = mv.position().expect("sentinel on open board");
            assert!(board.is_empty(pos));
            board = board.with(pos, to_move);
            to_move = to_move.opponent();
        }
        assert_eq!(check_winner(&board), None, "seed {seed}");
    }
}

#[test]
fn test_hard_never_loses_to_random_play() {
    let random = EngineConfig::default().with_medium_error_rate(100);
    for seed in 0..40 {
        for first in [Player::X, Player::O] {
            let mut hard = Engine::seeded(seed);
            let mut chaos = Engine::seeded(seed + 500).with_config(random);
            let winner = play_out(
                &mut hard,
                Difficulty::Hard,
                &mut chaos,
                Difficulty::Medium,
                first,
            );
            assert_ne!(winner, Some(Player::O), "seed {seed}, {first} first");
        }
    }
}

#[test]
fn test_hard_never_loses_to_depth_limited() {
    let shallow = EngineConfig::default().with_medium_variant(MediumVariant::DepthLimited);
    for seed in 0..20 {
        for first in [Player::X, Player::O] {
            let mut hard = Engine::seeded(seed);
            let mut medium = Engine::seeded(seed + 77).with_config(shallow);
            let winner = play_out(
                &mut hard,
                Difficulty::Hard,
                &mut medium,
                Difficulty::Medium,
                first,
            );
            assert_ne!(winner, Some(Player::O), "seed {seed}, {first} first");
        }
    }
}

#[test]
fn test_opening_is_never_losing() {
    for seed in 0..20 {
        for symbol in [Player::X, Player::O] {
            let board = Board::new();
            let decision = Engine::seeded(seed)
                .decide(&board, symbol, Difficulty::Hard)
                .unwrap();
            let masks = encode(&board);
            let replayed = search(
                masks.of(symbol).with(decision.position),
                masks.of(symbol.opponent()),
                1,
                -INFINITY,
                INFINITY,
                false,
            );
            assert!(replayed >= 0, "opening {} scored {replayed}", decision.position);
            assert_eq!(decision.score, Some(replayed));
        }
    }
}

#[test]
fn test_ties_are_broken_at_random() {
    // Every opening draws, so different seeds should not all agree.
    let board = Board::new();
    let openings: std::collections::HashSet<Position> = (0..40)
        .map(|seed| {
            Engine::seeded(seed)
                .decide(&board, Player::X, Difficulty::Hard)
                .unwrap()
                .position
        })
        .collect();
    assert!(openings.len() > 1);
}

#[test]
fn test_full_board_returns_sentinel_for_every_tier() {
    let drawn: Board = "XOX/OXX/OXO".parse().unwrap();
    let won: Board = "XXX/OOX/XOO".parse().unwrap();
    let variants = [MediumVariant::ForcedMistake, MediumVariant::DepthLimited];
    for board in [drawn, won] {
        for variant in variants {
            let config = EngineConfig::default().with_medium_variant(variant);
            let mut engine = Engine::seeded(9).with_config(config);
            for difficulty in [Difficulty::Hard, Difficulty::Medium, Difficulty::Easy] {
                for symbol in [Player::X, Player::O] {
                    assert_eq!(engine.choose_move(&board, symbol, difficulty), Move::NONE);
                }
            }
        }
    }
}

#[test]
fn test_decide_full_board_is_no_move() {
    let board: Board = "XOX/OXX/OXO".parse().unwrap();
    let err = Engine::seeded(0)
        .decide(&board, Player::O, Difficulty::Hard)
        .unwrap_err();
    assert_eq!(err, EngineError::NoMoveAvailable);
    assert_eq!(err.to_string(), "No empty square left to play");
}

#[test]
fn test_decide_rejects_invalid_boards() {
    let mut engine = Engine::seeded(0);

    let lopsided: Board = "XXX/X__/___".parse().unwrap();
    assert_eq!(
        engine.decide(&lopsided, Player::O, Difficulty::Hard),
        Err(EngineError::InvalidBoard {
            reason: InvalidBoard::CountMismatch { x: 4, o: 0 }
        })
    );

    let double: Board = "XXX/OOO/___".parse().unwrap();
    assert_eq!(
        engine.decide(&double, Player::X, Difficulty::Hard),
        Err(EngineError::InvalidBoard {
            reason: InvalidBoard::BothWin
        })
    );

    let wrong_turn: Board = "X__/___/___".parse().unwrap();
    let err = engine
        .decide(&wrong_turn, Player::X, Difficulty::Easy)
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid board: it is not X's turn");
}

#[test]
fn test_choose_move_tolerates_invalid_boards() {
    // The compatibility path makes no promises, but still plays an empty cell.
    let lopsided: Board = "XXX/X__/___".parse().unwrap();
    let mv = Engine::seeded(5).choose_move(&lopsided, Player::O, Difficulty::Hard);
    let pos = mv.position().unwrap();
    assert!(lopsided.is_empty(pos));
}

#[test]
fn test_zero_error_rate_matches_hard() {
    let config = EngineConfig::default().with_medium_error_rate(0);
    let boards = ["___/___/___", "X__/___/___", "X__/_O_/__X", "XO_/_X_/___"];
    for board in boards {
        let board: Board = board.parse().unwrap();
        for seed in 0..10 {
            let hard = Engine::seeded(seed).choose(&board, Player::O, Difficulty::Hard);
            let medium = Engine::seeded(seed)
                .with_config(config)
                .choose(&board, Player::O, Difficulty::Medium);
            assert_eq!(hard, medium, "board {board}, seed {seed}");
        }
    }
}

#[test]
fn test_full_error_rate_never_searches() {
    let config = EngineConfig::default().with_medium_error_rate(100);
    let mut engine = Engine::seeded(11).with_config(config);
    let board = Board::new();
    let mut counts = [0usize; 9];
    for _ in 0..900 {
        let decision = engine.choose(&board, Player::X, Difficulty::Medium).unwrap();
        assert_eq!(decision.reason, Reason::ForcedMistake);
        assert_eq!(decision.stats.nodes, 0);
        assert_eq!(decision.score, None);
        counts[decision.position.to_index()] += 1;
    }
    // Uniform over nine cells: each should land near 100.
    assert!(counts.iter().all(|c| (50..=150).contains(c)), "{counts:?}");
}

#[test]
fn test_forced_mistake_only_plays_empty_cells() {
    let config = EngineConfig::default().with_medium_error_rate(100);
    let board: Board = "XOX/_O_/X__".parse().unwrap();
    let mut engine = Engine::seeded(2).with_config(config);
    for _ in 0..100 {
        let pos = engine
            .choose_move(&board, Player::O, Difficulty::Medium)
            .position()
            .unwrap();
        assert!(board.is_empty(pos));
    }
}

#[test]
fn test_default_medium_sometimes_errs() {
    let mut engine = Engine::seeded(21);
    let board = Board::new();
    let reasons: Vec<Reason> = (0..200)
        .map(|_| {
            engine
                .choose(&board, Player::X, Difficulty::Medium)
                .unwrap()
                .reason
        })
        .collect();
    let mistakes = reasons.iter().filter(|r| **r == Reason::ForcedMistake).count();
    assert!((10..=80).contains(&mistakes), "{mistakes} mistakes in 200");
}

#[test]
fn test_depth_limited_reports_capped_depth() {
    let config = EngineConfig::default().with_medium_variant(MediumVariant::DepthLimited);
    let mut engine = Engine::seeded(4).with_config(config);
    let decision = engine
        .choose(&Board::new(), Player::X, Difficulty::Medium)
        .unwrap();
    assert_eq!(decision.stats.max_depth, 5);
    assert_eq!(decision.reason, Reason::Searched);
}

#[test]
fn test_hard_reports_full_depth() {
    let decision = Engine::seeded(4)
        .choose(&Board::new(), Player::X, Difficulty::Hard)
        .unwrap();
    assert_eq!(decision.stats.max_depth, 9);
    assert!(decision.stats.nodes > 0);
    assert!(decision.stats.cutoffs > 0);
}

#[test]
fn test_depth_limited_still_wins_when_it_can() {
    let config = EngineConfig::default().with_medium_variant(MediumVariant::DepthLimited);
    let board: Board = "OO_/XX_/X__".parse().unwrap();
    for seed in 0..10 {
        let mut engine = Engine::seeded(seed).with_config(config);
        let mv = engine.choose_move(&board, Player::O, Difficulty::Medium);
        assert_eq!(mv, Move { row: 0, col: 2 }, "seed {seed}");
    }
}

#[test]
fn test_easy_opens_in_center() {
    for seed in 0..5 {
        let mv = Engine::seeded(seed).choose_move(&Board::new(), Player::X, Difficulty::Easy);
        assert_eq!(mv, Move { row: 1, col: 1 });
    }
}

#[test]
fn test_easy_evaluates_as_x_by_default() {
    let board = Board::new().with(Position::Center, Player::X);
    let decision = Engine::seeded(0)
        .choose(&board, Player::O, Difficulty::Easy)
        .unwrap();
    assert_eq!(decision.position, Position::TopRight);
    assert_eq!(decision.mover, Player::X);
    assert_eq!(decision.reason, Reason::Evaluated);
    assert!(decision.evaluation.unwrap() > 0.0);
}

#[test]
fn test_easy_engine_symbol_perspective() {
    let config =
        EngineConfig::default().with_linear_perspective(LinearPerspective::EngineSymbol);
    let board = Board::new().with(Position::Center, Player::X);
    let decision = Engine::seeded(0)
        .with_config(config)
        .choose(&board, Player::O, Difficulty::Easy)
        .unwrap();
    assert_eq!(decision.position, Position::TopRight);
    assert_eq!(decision.mover, Player::O);
    assert!(decision.evaluation.unwrap() < 0.0);
}

#[test]
fn test_decision_serializes() {
    let decision = Engine::seeded(8)
        .decide(&Board::new(), Player::X, Difficulty::Easy)
        .unwrap();
    let json = serde_json::to_value(decision).unwrap();
    assert_eq!(json["position"], "Center");
    assert_eq!(json["reason"], "Evaluated");
    assert_eq!(json["stats"]["max_depth"], 0);
}
