//! The heuristic decision procedure.
//!
//! One call to [`AiStrategy::decide`] produces exactly one action:
//!
//! 1. Measure both players' shortest routes on the live walls.
//! 2. Classify urgency from the opponent's distance.
//! 3. Take a winning move if there is one. This step is an addition to
//!    the classic order, where step 4 would run first and could wall
//!    instead of winning.
//! 4. If the opponent wins next move, try to wall off that step and return
//!    the best block immediately.
//! 5. Score every legal pawn move.
//! 6. When the opponent is close, score walls along the first steps of
//!    their route.
//! 7. Return the best candidate, or fall back to a fixed move order, or
//!    `Stay`.
//!
//! The strategy holds no game state between calls. It only reads the
//! [`GameView`] and simulates walls on copies.

use std::time::Instant;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Action, Coord, Direction, GameView, PlayerKind, Wall};

use super::config::AiConfig;
use super::observer::{DecisionObserver, NullObserver};
use super::scoring::{
    block_score, blocking_walls, imminent_block_score, measure_wall, score_move, DiscardReason,
    Situation, Urgency, WallImpact,
};
use super::stats::DecisionStats;

/// Where a candidate came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandidateOrigin {
    /// A pawn move.
    Move,
    /// A wall stopping an imminent win.
    ImminentBlock,
    /// A wall along the opponent's route.
    ContestedBlock,
}

/// A scored action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The action.
    pub action: Action,
    /// Heuristic score; higher is better.
    pub score: i64,
    /// Which step produced it.
    pub origin: CandidateOrigin,
}

/// The outcome of one decision.
///
/// Equality ignores wall-clock timing (see [`DecisionStats`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// The action to apply.
    pub action: Action,
    /// Score of the chosen candidate; `None` for winning moves and fallbacks.
    pub score: Option<i64>,
    /// Urgency at decision time.
    pub urgency: Urgency,
    /// Work done.
    pub stats: DecisionStats,
}

/// Single-ply heuristic AI.
pub struct AiStrategy {
    config: AiConfig,
    observer: Box<dyn DecisionObserver>,
}

impl Default for AiStrategy {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}

impl std::fmt::Debug for AiStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiStrategy")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AiStrategy {
    /// Create a strategy with the given weights.
    #[must_use]
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            observer: Box::new(NullObserver),
        }
    }

    /// Attach a decision observer.
    #[must_use]
    pub fn with_observer(mut self, observer: impl DecisionObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Scoring weights in use.
    #[must_use]
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Choose one action for `player`.
    pub fn decide(&mut self, view: &GameView<'_>, player: PlayerKind) -> Decision {
        let started = Instant::now();
        let mut stats = DecisionStats::new();

        let situation = Situation::assess(view, player, &mut stats);
        let opponent_distance = situation.opponent_distance();
        let urgency = Urgency::classify(opponent_distance, &self.config);
        self.observer.urgency(player, opponent_distance, urgency);

        let legal = view.legal_moves(player);
        let has_walls = view.player(player).has_walls_left();

        if let Some(&to) = legal.iter().find(|c| c.y == situation.goal_row) {
            stats.short_circuit = true;
            return self.finish(Action::Move { to }, None, urgency, stats, started);
        }

        if urgency == Urgency::ImminentWin && has_walls {
            if let Some(block) = self.imminent_block(&situation, &mut stats) {
                stats.short_circuit = true;
                return self.finish(block.action, Some(block.score), urgency, stats, started);
            }
        }

        let mut candidates: Vec<Candidate> = Vec::with_capacity(legal.len() + 8);
        for &to in &legal {
            let candidate = Candidate {
                action: Action::Move { to },
                score: score_move(&situation, to, &self.config, &mut stats),
                origin: CandidateOrigin::Move,
            };
            self.record(&candidate, &mut stats);
            candidates.push(candidate);
        }

        let contested = urgency >= Urgency::Emergency
            || (urgency == Urgency::Critical && opponent_distance <= situation.distance());
        if contested && has_walls {
            self.contested_blocks(&situation, &mut candidates, &mut stats);
        }

        // Stable: ties keep generation order, moves before walls.
        candidates.sort_by(|a, b| b.score.cmp(&a.score));

        match candidates.into_iter().next() {
            Some(best) => self.finish(best.action, Some(best.score), urgency, stats, started),
            None => {
                stats.fallback_used = true;
                let action = fallback(view, player, &situation);
                self.finish(action, None, urgency, stats, started)
            }
        }
    }

    fn finish(
        &mut self,
        action: Action,
        score: Option<i64>,
        urgency: Urgency,
        mut stats: DecisionStats,
        started: Instant,
    ) -> Decision {
        stats.time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        let decision = Decision {
            action,
            score,
            urgency,
            stats,
        };
        self.observer.decided(&decision);
        decision
    }

    /// Best wall cutting the opponent's single remaining step, if any.
    fn imminent_block(
        &mut self,
        situation: &Situation,
        stats: &mut DecisionStats,
    ) -> Option<Candidate> {
        let path = situation.opponent_path.as_ref()?;
        let (from, to) = path.steps().next()?;

        let mut best: Option<Candidate> = None;
        for wall in blocking_walls(from, to) {
            let Some(impact) = self.evaluate_wall(situation, wall, stats) else {
                continue;
            };
            let candidate = Candidate {
                action: Action::PlaceWall(wall),
                score: imminent_block_score(&impact, &self.config),
                origin: CandidateOrigin::ImminentBlock,
            };
            self.record(&candidate, stats);
            if best.as_ref().map_or(true, |b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }
        best
    }

    /// Walls along the first steps of the opponent's route.
    fn contested_blocks(
        &mut self,
        situation: &Situation,
        candidates: &mut Vec<Candidate>,
        stats: &mut DecisionStats,
    ) {
        let Some(path) = situation.opponent_path.as_ref() else {
            return;
        };

        let mut seen: FxHashSet<Wall> = FxHashSet::default();
        for (from, to) in path.steps().take(self.config.max_block_steps) {
            for wall in blocking_walls(from, to) {
                if !seen.insert(wall) {
                    continue;
                }
                let Some(impact) = self.evaluate_wall(situation, wall, stats) else {
                    continue;
                };
                let candidate = Candidate {
                    action: Action::PlaceWall(wall),
                    score: block_score(&impact, &self.config),
                    origin: CandidateOrigin::ContestedBlock,
                };
                self.record(&candidate, stats);
                candidates.push(candidate);
            }
        }
    }

    /// Simulate and filter one wall. Failures discard the candidate only.
    fn evaluate_wall(
        &mut self,
        situation: &Situation,
        wall: Wall,
        stats: &mut DecisionStats,
    ) -> Option<WallImpact> {
        let verdict = measure_wall(situation, wall, stats)
            .map_err(DiscardReason::Simulation)
            .and_then(|impact| impact.check().map(|()| impact));
        match verdict {
            Ok(impact) => Some(impact),
            Err(reason) => {
                stats.discarded += 1;
                self.observer.discarded(wall, reason);
                None
            }
        }
    }

    fn record(&mut self, candidate: &Candidate, stats: &mut DecisionStats) {
        stats.candidates_scored += 1;
        self.observer.candidate(candidate);
    }
}

/// First legal step toward the goal, then left, right, away; else `Stay`.
fn fallback(view: &GameView<'_>, player: PlayerKind, situation: &Situation) -> Action {
    let toward = Direction::toward_row(situation.position.y, situation.goal_row);
    [toward, Direction::Left, Direction::Right, toward.reverse()]
        .into_iter()
        .map(|dir| situation.position.step(dir))
        .find(|&to: &Coord| view.check_move(player, to).is_ok())
        .map_or(Action::Stay, |to| Action::Move { to })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, GridBoard, PlayerMap, PlayerState};

    fn players(human: Coord, ai: Coord, ai_walls: u32) -> PlayerMap<PlayerState> {
        PlayerMap::new(|kind| match kind {
            PlayerKind::Human => PlayerState::new(kind, human, 10, 0),
            PlayerKind::Ai => PlayerState::new(kind, ai, ai_walls, 8),
        })
    }

    #[test]
    fn test_opening_move_heads_for_goal() {
        let board = GridBoard::new(9);
        let players = players(Coord::new(4, 8), Coord::new(4, 0), 10);
        let view = GameView::new(&board, &players, PlayerKind::Ai, GameState::Playing);

        let decision = AiStrategy::default().decide(&view, PlayerKind::Ai);
        assert_eq!(decision.action, Action::move_to(4, 1));
        assert_eq!(decision.urgency, Urgency::Normal);
        assert_eq!(decision.stats.simulations, 0);
    }

    #[test]
    fn test_takes_winning_move() {
        let board = GridBoard::new(9);
        // Both one step away; winning beats blocking.
        let players = players(Coord::new(2, 1), Coord::new(6, 7), 10);
        let view = GameView::new(&board, &players, PlayerKind::Ai, GameState::Playing);

        let decision = AiStrategy::default().decide(&view, PlayerKind::Ai);
        assert_eq!(decision.action, Action::move_to(6, 8));
        assert!(decision.stats.short_circuit);
    }

    #[test]
    fn test_blocks_imminent_win() {
        let board = GridBoard::new(9);
        let players = players(Coord::new(4, 1), Coord::new(0, 3), 10);
        let view = GameView::new(&board, &players, PlayerKind::Ai, GameState::Playing);

        let decision = AiStrategy::default().decide(&view, PlayerKind::Ai);
        assert_eq!(decision.urgency, Urgency::ImminentWin);
        assert!(decision.stats.short_circuit);
        // The offset neighbour guards a different edge and gives no delay.
        assert_eq!(decision.action, Action::PlaceWall(Wall::horizontal(4, 1)));
        assert_eq!(decision.score, Some(11_000));
    }

    #[test]
    fn test_no_walls_means_no_block() {
        let board = GridBoard::new(9);
        let players = players(Coord::new(4, 1), Coord::new(0, 3), 0);
        let view = GameView::new(&board, &players, PlayerKind::Ai, GameState::Playing);

        let decision = AiStrategy::default().decide(&view, PlayerKind::Ai);
        assert!(matches!(decision.action, Action::Move { .. }));
        assert_eq!(decision.stats.simulations, 0);
    }

    #[test]
    fn test_boxed_in_stays() {
        let mut board = GridBoard::new(3);
        board.add_wall(Wall::horizontal(0, 1)).unwrap();
        board.add_wall(Wall::vertical(1, 0)).unwrap();
        let players = PlayerMap::new(|kind| match kind {
            PlayerKind::Human => PlayerState::new(kind, Coord::new(2, 2), 0, 0),
            PlayerKind::Ai => PlayerState::new(kind, Coord::new(0, 0), 0, 2),
        });
        let view = GameView::new(&board, &players, PlayerKind::Ai, GameState::Playing);

        let decision = AiStrategy::default().decide(&view, PlayerKind::Ai);
        assert_eq!(decision.action, Action::Stay);
        assert!(decision.stats.fallback_used);
        assert_eq!(decision.score, None);
    }

    #[test]
    fn test_repeated_decisions_compare_equal() {
        let board = GridBoard::new(9);
        let players = players(Coord::new(4, 2), Coord::new(4, 0), 10);
        let view = GameView::new(&board, &players, PlayerKind::Ai, GameState::Playing);
        let mut ai = AiStrategy::default();

        let first = ai.decide(&view, PlayerKind::Ai);
        let mut second = ai.decide(&view, PlayerKind::Ai);
        second.stats.time_us = first.stats.time_us + 1_000;
        assert_eq!(first, second);
    }

    #[test]
    fn test_decide_never_touches_board() {
        let board = GridBoard::new(9);
        let before = board.clone();
        let players = players(Coord::new(4, 2), Coord::new(4, 6), 10);
        let view = GameView::new(&board, &players, PlayerKind::Ai, GameState::Playing);

        let decision = AiStrategy::default().decide(&view, PlayerKind::Ai);
        assert!(decision.stats.simulations > 0);
        assert_eq!(board, before);
    }
}
