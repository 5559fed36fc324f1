//! Policy-vs-policy matches through the full rules engine.

use rust_quoridor::ai::{play_match, AiStrategy, RandomMover};
use rust_quoridor::core::{Coord, GameConfig, PlayerKind};

const MAX_PLIES: u32 = 400;

#[test]
fn test_heuristic_vs_heuristic_stays_legal() {
    let mut human = AiStrategy::default();
    let mut ai = AiStrategy::default();

    let outcome = play_match(GameConfig::default(), &mut human, &mut ai, MAX_PLIES).unwrap();

    assert_eq!(outcome.error, None);
    assert!(outcome.plies <= MAX_PLIES);
    assert!(outcome.walls_placed[PlayerKind::Human] <= 10);
    assert!(outcome.walls_placed[PlayerKind::Ai] <= 10);
}

#[test]
fn test_heuristic_vs_random_walls_stays_legal() {
    for seed in 0..5 {
        let mut human = RandomMover::new(seed).with_wall_probability(0.4);
        let mut ai = AiStrategy::default();

        let outcome = play_match(GameConfig::default(), &mut human, &mut ai, MAX_PLIES).unwrap();
        assert_eq!(outcome.error, None, "seed {seed}");
        assert!(outcome.plies <= MAX_PLIES);
    }
}

#[test]
fn test_matches_are_reproducible() {
    let run = || {
        let mut human = RandomMover::new(99).with_wall_probability(0.2);
        let mut ai = AiStrategy::default();
        play_match(GameConfig::default(), &mut human, &mut ai, MAX_PLIES).unwrap()
    };

    let first = run();
    let second = run();

    let positions = |h: &[rust_quoridor::MoveRecord]| -> Vec<(PlayerKind, Coord)> {
        h.iter().map(|r| (r.player, r.position)).collect()
    };
    assert_eq!(first.winner, second.winner);
    assert_eq!(first.plies, second.plies);
    assert_eq!(first.walls_placed, second.walls_placed);
    assert_eq!(positions(&first.history), positions(&second.history));
    assert_eq!(first.decision_stats, second.decision_stats);
}

#[test]
fn test_series_with_forked_movers() {
    let play_series = || {
        let mut base = RandomMover::new(2024).with_wall_probability(0.3);
        (0..3)
            .map(|_| {
                let mut human = base.fork();
                let mut ai = AiStrategy::default();
                let outcome =
                    play_match(GameConfig::default(), &mut human, &mut ai, MAX_PLIES).unwrap();
                (human.seed(), outcome)
            })
            .collect::<Vec<_>>()
    };

    let first = play_series();
    let second = play_series();

    let seeds: Vec<u64> = first.iter().map(|(seed, _)| *seed).collect();
    assert_ne!(seeds[0], seeds[1]);
    assert_ne!(seeds[1], seeds[2]);

    for ((seed_a, a), (seed_b, b)) in first.iter().zip(&second) {
        assert_eq!(seed_a, seed_b);
        assert_eq!(a.error, None);
        assert_eq!(a.winner, b.winner);
        assert_eq!(a.plies, b.plies);
        assert_eq!(a.decision_stats, b.decision_stats);
        assert!(a.decision_stats[PlayerKind::Ai].candidates_scored > 0);
    }
}

#[test]
fn test_small_board_without_reachability_rule() {
    let config = GameConfig::default()
        .with_board_size(5)
        .with_walls_per_player(3)
        .with_reachability_rule(false);
    let mut human = RandomMover::new(5).with_wall_probability(0.5);
    let mut ai = AiStrategy::default();

    let outcome = play_match(config, &mut human, &mut ai, MAX_PLIES).unwrap();
    assert_eq!(outcome.error, None);
    assert!(outcome.walls_placed[PlayerKind::Human] <= 3);
}
