//! End-to-end match tests.
//!
//! These drive complete matches through the public API: seating, round
//! boundaries, scoring and the exact-target win condition.

use dice_match::{
    GameError, GameRng, Match, MatchConfig, MatchState, Player, PlayerId, RollVector, StrategyKind,
};

fn new_match(config: MatchConfig, seed: u64, names: &[&str]) -> Match {
    let mut game = Match::new(config, GameRng::new(seed)).unwrap();
    for name in names {
        game.add_player(*name).unwrap();
    }
    game
}

/// Two players, one six-sided die, all-equal scoring, first to 2.
#[test]
fn test_single_die_match_ends_in_shared_win() {
    let config = MatchConfig::new(6, 1, 2).with_strategy(StrategyKind::AllEqual);
    let mut game = new_match(config, 7, &["Juan", "María"]);
    game.start();

    let mut turns = 0;
    while !game.is_won() {
        game.take_turn().unwrap();
        turns += 1;
    }

    assert_eq!(turns, 4);
    assert_eq!(game.rounds_completed(), 2);
    let mut winners = game.winners().unwrap().to_vec();
    winners.sort();
    assert_eq!(winners, vec![PlayerId::new(0), PlayerId::new(1)]);
    assert!(game.players().all(|p| p.score() == 2));
}

#[test]
fn test_turn_before_start_is_rejected() {
    let mut game = Match::new(MatchConfig::default(), GameRng::new(1)).unwrap();
    assert_eq!(game.take_turn(), Err(GameError::NotStarted));
}

#[test]
fn test_state_transitions() {
    let config = MatchConfig::new(6, 1, 1).with_strategy(StrategyKind::AllEqual);
    let mut game = new_match(config, 3, &["Juan"]);

    assert_eq!(game.state(), MatchState::Setup);
    game.start();
    assert_eq!(game.state(), MatchState::Active);
    game.take_turn().unwrap();
    assert_eq!(game.state(), MatchState::Finished);

    // Finished is terminal.
    assert!(!game.start());
    assert_eq!(game.take_turn(), Err(GameError::AlreadyFinished));
    assert_eq!(game.state(), MatchState::Finished);
}

#[test]
fn test_round_winners_reported_once_per_cycle() {
    let mut game = new_match(MatchConfig::new(6, 2, 50), 11, &["Juan", "María", "Pedro", "Ana"]);
    game.start();

    for turn in 1..=40 {
        let result = game.take_turn().unwrap();
        assert_eq!(result.is_some(), turn % 4 == 0, "turn {}", turn);
    }
    assert_eq!(game.rounds_completed(), 10);
}

#[test]
fn test_seating_is_fixed_after_start() {
    let mut game = new_match(MatchConfig::new(6, 2, 100), 5, &["A", "B", "C", "D", "E"]);
    game.start();
    let seating: Vec<PlayerId> = game.players().map(Player::id).collect();

    for _ in 0..3 {
        for seat in 0..seating.len() {
            assert_eq!(game.current_player().unwrap().id(), seating[seat]);
            game.take_turn().unwrap();
        }
    }
    assert_eq!(game.players().map(Player::id).collect::<Vec<_>>(), seating);
}

#[test]
fn test_seating_is_shuffled_by_seed() {
    let names = ["A", "B", "C", "D", "E", "F", "G", "H"];
    let seatings: Vec<Vec<PlayerId>> = (0..8)
        .map(|seed| {
            let mut game = new_match(MatchConfig::default(), seed, &names);
            game.start();
            game.players().map(Player::id).collect()
        })
        .collect();

    // Eight seeds over 8! orders: at least two must differ.
    assert!(seatings.iter().any(|s| s != &seatings[0]));
}

#[test]
fn test_same_seed_replays_identically() {
    let play = |seed: u64| {
        let mut game = new_match(MatchConfig::default(), seed, &["Juan", "María", "Pedro"]);
        game.start();
        let mut rolls: Vec<RollVector> = Vec::new();
        while !game.is_won() {
            game.take_turn().unwrap();
            rolls.push(game.last_roll().unwrap().clone());
        }
        (rolls, game.summary())
    };

    assert_eq!(play(2024), play(2024));
}

#[test]
fn test_round_number_and_last_roll() {
    let mut game = new_match(MatchConfig::new(6, 3, 100), 9, &["Juan", "María"]);
    game.start();

    assert_eq!(game.round_number(), 1);
    assert!(game.last_roll().is_none());

    game.take_turn().unwrap();
    assert_eq!(game.round_number(), 1);
    assert_eq!(game.last_roll(), game.player(1).unwrap().last_roll());
    assert_eq!(game.last_roll().unwrap().len(), 3);

    game.take_turn().unwrap();
    assert_eq!(game.round_number(), 2);
    assert_eq!(game.last_roll(), game.player(2).unwrap().last_roll());
}

#[test]
fn test_histories_stay_aligned_at_round_end() {
    let lengths_match = |histories: &[&[RollVector]]| -> Vec<u32> {
        let len = histories[0].len();
        assert!(histories.iter().all(|h| h.len() == len));
        vec![0; histories.len()]
    };
    let mut game = Match::with_strategy(MatchConfig::new(6, 2, 1), lengths_match, GameRng::new(4)).unwrap();
    for name in ["Juan", "María", "Pedro"] {
        game.add_player(name).unwrap();
    }
    game.start();

    for _ in 0..30 {
        game.take_turn().unwrap();
    }
    assert!(!game.is_won());
}

#[test]
fn test_custom_strategy_picks_single_winner() {
    // Only the first seat ever scores.
    let first_seat = |histories: &[&[RollVector]]| -> Vec<u32> {
        (0..histories.len()).map(|i| u32::from(i == 0)).collect()
    };
    let mut game = Match::with_strategy(MatchConfig::new(6, 2, 3), first_seat, GameRng::new(8)).unwrap();
    for name in ["Juan", "María"] {
        game.add_player(name).unwrap();
    }
    game.start();
    let first = game.player(1).unwrap().id();

    while !game.is_won() {
        game.take_turn().unwrap();
    }

    assert_eq!(game.winners(), Some(&[first][..]));
    assert_eq!(game.rounds_completed(), 3);
    assert_eq!(game.summary().strategy, "custom");
}

#[test]
fn test_overshooting_target_never_wins() {
    // Two points per round jump from 2 straight to 4, past a target of 3.
    let double = |histories: &[&[RollVector]]| -> Vec<u32> { vec![2; histories.len()] };
    let mut game = Match::with_strategy(MatchConfig::new(6, 1, 3), double, GameRng::new(1)).unwrap();
    game.add_player("Juan").unwrap();
    game.start();

    for _ in 0..10 {
        game.take_turn().unwrap();
    }
    assert!(!game.is_won());
    assert_eq!(game.player(1).unwrap().score(), 20);
}

#[test]
fn test_huge_points_report_overflow_without_panicking() {
    let huge = |histories: &[&[RollVector]]| -> Vec<u32> { vec![u32::MAX; histories.len()] };
    let mut game = Match::with_strategy(MatchConfig::new(6, 1, 3), huge, GameRng::new(1)).unwrap();
    game.add_player("Juan").unwrap();
    game.add_player("María").unwrap();
    game.start();

    // First round lands exactly on u32::MAX for both players.
    game.take_turn().unwrap();
    assert_eq!(game.take_turn().unwrap().map(|w| w.len()), Some(2));

    game.take_turn().unwrap();
    let err = game.take_turn().unwrap_err();
    assert!(matches!(err, GameError::ScoreOverflow { score: u32::MAX, points: u32::MAX, .. }));

    // Nothing from the failed round was applied.
    assert!(game.players().all(|p| p.score() == u32::MAX));
    assert!(!game.is_won());
}

#[test]
fn test_highest_sum_match_awards_one_point_per_round_at_most() {
    let mut game = new_match(MatchConfig::default(), 31, &["Juan", "María", "Pedro"]);
    game.start();

    let mut total_rounds = 0;
    while !game.is_won() {
        if let Some(scored) = game.take_turn().unwrap() {
            assert!(!scored.is_empty(), "someone always holds the highest sum");
            total_rounds += 1;
        }
    }

    let summary = game.summary();
    assert_eq!(summary.rounds_completed, total_rounds);
    for id in game.winners().unwrap() {
        assert_eq!(game.player_by_id(*id).unwrap().score(), 3);
    }
    assert!(summary.standings.iter().all(|s| s.score <= 3));
}
