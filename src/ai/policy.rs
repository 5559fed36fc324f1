//! Policies: anything that can pick an action for a seat.
//!
//! - `AiStrategy`: the heuristic AI
//! - `RandomMover`: seeded random baseline for self-play and tests

use crate::core::{Action, GameRng, GameView, Orientation, PlayerKind, Wall};

use super::stats::DecisionStats;
use super::strategy::AiStrategy;

/// Chooses one action per turn from a read-only view.
pub trait Policy: Send {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Pick an action for `player`.
    ///
    /// The returned action should be legal for `view`; the caller applies
    /// it through the rules engine and reports any rejection.
    fn choose(&mut self, view: &GameView<'_>, player: PlayerKind) -> Action;

    /// Like [`choose`](Policy::choose), plus the search counters if the
    /// policy keeps any.
    fn choose_with_stats(
        &mut self,
        view: &GameView<'_>,
        player: PlayerKind,
    ) -> (Action, Option<DecisionStats>) {
        (self.choose(view, player), None)
    }
}

impl Policy for AiStrategy {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn choose(&mut self, view: &GameView<'_>, player: PlayerKind) -> Action {
        self.decide(view, player).action
    }

    fn choose_with_stats(
        &mut self,
        view: &GameView<'_>,
        player: PlayerKind,
    ) -> (Action, Option<DecisionStats>) {
        let decision = self.decide(view, player);
        (decision.action, Some(decision.stats))
    }
}

/// Random legal moves, with the occasional random wall.
///
/// Walls are only chosen if they keep both players' routes open, so every
/// action it returns is legal under either reachability setting.
#[derive(Clone, Debug)]
pub struct RandomMover {
    rng: GameRng,
    wall_probability: f64,
}

/// Random wall keys tried before giving up on a wall this turn.
const WALL_ATTEMPTS: usize = 16;

impl RandomMover {
    /// Create a mover that never places walls.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            wall_probability: 0.0,
        }
    }

    /// Set the chance of trying a wall each turn.
    #[must_use]
    pub fn with_wall_probability(mut self, probability: f64) -> Self {
        self.wall_probability = probability;
        self
    }

    /// Seed of the underlying RNG stream.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// A mover with the same wall probability on an independent,
    /// deterministic RNG stream. Use one fork per match in a series.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            rng: self.rng.fork(),
            wall_probability: self.wall_probability,
        }
    }

    fn random_wall(&mut self, view: &GameView<'_>) -> Option<Wall> {
        let size = view.board().size();
        for _ in 0..WALL_ATTEMPTS {
            let orientation = if self.rng.gen_bool(0.5) {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let wall = Wall::new(self.rng.gen_range(0..size), self.rng.gen_range(0..size), orientation);
            if view.board().is_valid_wall_placement(wall) && view.wall_keeps_routes(wall) {
                return Some(wall);
            }
        }
        None
    }
}

impl Policy for RandomMover {
    fn name(&self) -> &str {
        "random"
    }

    fn choose(&mut self, view: &GameView<'_>, player: PlayerKind) -> Action {
        if view.player(player).has_walls_left() && self.rng.gen_bool(self.wall_probability) {
            if let Some(wall) = self.random_wall(view) {
                return Action::PlaceWall(wall);
            }
        }

        let moves = view.legal_moves(player);
        self.rng
            .choose(&moves)
            .map_or(Action::Stay, |&to| Action::Move { to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Game;

    #[test]
    fn test_random_mover_is_deterministic() {
        let game = Game::default();
        let mut a = RandomMover::new(7).with_wall_probability(0.5);
        let mut b = RandomMover::new(7).with_wall_probability(0.5);

        for _ in 0..10 {
            assert_eq!(
                a.choose(&game.view(), PlayerKind::Human),
                b.choose(&game.view(), PlayerKind::Human)
            );
        }
    }

    #[test]
    fn test_random_mover_actions_are_legal() {
        let mut game = Game::default();
        let mut mover = RandomMover::new(3).with_wall_probability(0.3);

        for _ in 0..40 {
            if game.is_game_over() {
                break;
            }
            let player = game.current_player();
            let action = mover.choose(&game.view(), player);
            assert_eq!(game.apply_action(&action), Ok(()), "{action} rejected");
        }
    }

    #[test]
    fn test_forks_are_reproducible() {
        let mut base = RandomMover::new(5).with_wall_probability(0.5);
        let mut same = RandomMover::new(5).with_wall_probability(0.5);

        let mut a = base.fork();
        let mut b = same.fork();
        assert_eq!(a.seed(), b.seed());
        assert_ne!(a.seed(), base.seed());
        assert_ne!(base.fork().seed(), a.seed());

        let game = Game::default();
        for _ in 0..10 {
            assert_eq!(
                a.choose(&game.view(), PlayerKind::Human),
                b.choose(&game.view(), PlayerKind::Human)
            );
        }
    }

    #[test]
    fn test_stats_only_from_heuristic() {
        let game = Game::default();
        let mut ai = AiStrategy::default();
        let mut random = RandomMover::new(1);

        let (action, stats) = ai.choose_with_stats(&game.view(), PlayerKind::Human);
        assert_eq!(action, Action::move_to(4, 7));
        assert!(stats.is_some_and(|s| s.path_searches > 0));

        let (_, stats) = random.choose_with_stats(&game.view(), PlayerKind::Human);
        assert!(stats.is_none());
    }

    #[test]
    fn test_heuristic_policy_name() {
        let ai = AiStrategy::default();
        assert_eq!(Policy::name(&ai), "heuristic");
        assert_eq!(RandomMover::new(0).name(), "random");
    }
}
