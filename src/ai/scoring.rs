//! Heuristic evaluation: urgency, wall simulation, candidate scores.
//!
//! All functions here are pure over a [`WallSet`]. Simulated placements
//! work on a structurally shared copy; the live board is never touched.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::{Coord, GameView, PlayerKind, Wall, WallSet};
use crate::path::{self, Path};

use super::config::AiConfig;
use super::stats::DecisionStats;

/// Distance used for a goal row that cannot be reached.
pub const UNREACHABLE_DISTANCE: u32 = 999;

/// How close the opponent is to winning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Urgency {
    /// Nothing to react to.
    Normal,
    /// Opponent is close; walls are considered if they are not behind.
    Critical,
    /// Opponent is very close; walls are always considered.
    Emergency,
    /// Opponent wins on their next move.
    ImminentWin,
}

impl Urgency {
    /// Classify by the opponent's distance to their goal row.
    #[must_use]
    pub fn classify(opponent_distance: u32, config: &AiConfig) -> Self {
        if opponent_distance <= config.imminent_distance {
            Urgency::ImminentWin
        } else if opponent_distance <= config.emergency_distance {
            Urgency::Emergency
        } else if opponent_distance <= config.critical_distance {
            Urgency::Critical
        } else {
            Urgency::Normal
        }
    }

    /// Bonus added to contested walls placed at this urgency.
    #[must_use]
    pub fn bonus(self, config: &AiConfig) -> i64 {
        match self {
            Urgency::ImminentWin => config.urgency_bonus[0],
            Urgency::Emergency => config.urgency_bonus[1],
            Urgency::Critical => config.urgency_bonus[2],
            Urgency::Normal => 0,
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Urgency::Normal => write!(f, "normal"),
            Urgency::Critical => write!(f, "critical"),
            Urgency::Emergency => write!(f, "emergency"),
            Urgency::ImminentWin => write!(f, "imminent-win"),
        }
    }
}

/// A simulated wall set could not be built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Edge index outside the board.
    #[error("{0} is out of range")]
    InvalidWall(Wall),
    /// Edge already walled.
    #[error("{0} is already placed")]
    DuplicateWall(Wall),
}

/// Why a wall candidate was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscardReason {
    /// The simulated wall set could not be built.
    Simulation(SimulationError),
    /// The opponent would have no route left.
    SealsOpponent,
    /// The AI would have no route left.
    SealsSelf,
    /// The opponent's route would not get longer.
    NoDelay,
}

impl std::fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscardReason::Simulation(err) => write!(f, "{err}"),
            DiscardReason::SealsOpponent => write!(f, "opponent would be sealed off"),
            DiscardReason::SealsSelf => write!(f, "own route would be sealed off"),
            DiscardReason::NoDelay => write!(f, "opponent is not delayed"),
        }
    }
}

/// Copy of `walls` with `wall` added.
pub fn simulate_wall(walls: &WallSet, size: i32, wall: Wall) -> Result<WallSet, SimulationError> {
    if !wall.is_in_range(size) {
        return Err(SimulationError::InvalidWall(wall));
    }
    if walls.contains(wall) {
        return Err(SimulationError::DuplicateWall(wall));
    }
    Ok(walls.with(wall))
}

/// Wall keys that would block the step `from -> to`.
///
/// The canonical key for the edge, then its neighbour one unit back along
/// the wall axis. Neither is range-checked.
#[must_use]
pub fn blocking_walls(from: Coord, to: Coord) -> SmallVec<[Wall; 2]> {
    let mut walls = SmallVec::new();
    if let Some(wall) = Wall::between(from, to) {
        walls.push(wall);
        walls.push(wall.offset_neighbor());
    }
    walls
}

/// Both players' routes on the live board, seen from one player's seat.
#[derive(Clone, Debug)]
pub struct Situation {
    /// The deciding player.
    pub player: PlayerKind,
    /// Board edge length.
    pub size: i32,
    /// Live walls.
    pub walls: WallSet,
    /// Deciding player's cell.
    pub position: Coord,
    /// Deciding player's goal row.
    pub goal_row: i32,
    /// Opponent's cell.
    pub opponent_position: Coord,
    /// Opponent's goal row.
    pub opponent_goal_row: i32,
    /// Deciding player's shortest route.
    pub path: Option<Path>,
    /// Opponent's shortest route.
    pub opponent_path: Option<Path>,
}

impl Situation {
    /// Compute both routes for `player`.
    pub fn assess(view: &GameView<'_>, player: PlayerKind, stats: &mut DecisionStats) -> Self {
        let board = view.board();
        let me = view.player(player);
        let opponent = view.player(player.opponent());

        stats.path_searches += 2;
        Self {
            player,
            size: board.size(),
            walls: board.walls().clone(),
            position: me.position(),
            goal_row: me.goal_row(),
            opponent_position: opponent.position(),
            opponent_goal_row: opponent.goal_row(),
            path: board.shortest_path(me.position(), me.goal_row()),
            opponent_path: board.shortest_path(opponent.position(), opponent.goal_row()),
        }
    }

    /// Deciding player's distance, or [`UNREACHABLE_DISTANCE`].
    #[must_use]
    pub fn distance(&self) -> u32 {
        self.path.as_ref().map_or(UNREACHABLE_DISTANCE, Path::distance)
    }

    /// Opponent's distance, or [`UNREACHABLE_DISTANCE`].
    #[must_use]
    pub fn opponent_distance(&self) -> u32 {
        self.opponent_path
            .as_ref()
            .map_or(UNREACHABLE_DISTANCE, Path::distance)
    }
}

/// Effect of one simulated wall on both routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallImpact {
    /// The simulated wall.
    pub wall: Wall,
    /// Opponent's distance before the wall.
    pub opponent_before: u32,
    /// Opponent's distance after the wall.
    pub opponent_after: Option<u32>,
    /// Own distance before the wall.
    pub own_before: u32,
    /// Own distance after the wall.
    pub own_after: Option<u32>,
}

impl WallImpact {
    /// Extra steps the opponent needs.
    #[must_use]
    pub fn delay(&self) -> i64 {
        self.opponent_after
            .map_or(0, |after| i64::from(after) - i64::from(self.opponent_before))
    }

    /// Extra steps the deciding player needs.
    #[must_use]
    pub fn own_delay(&self) -> i64 {
        self.own_after
            .map_or(0, |after| i64::from(after) - i64::from(self.own_before))
    }

    /// Keep only walls that leave both routes open and slow the opponent.
    pub fn check(&self) -> Result<(), DiscardReason> {
        if self.opponent_after.is_none() {
            return Err(DiscardReason::SealsOpponent);
        }
        if self.own_after.is_none() {
            return Err(DiscardReason::SealsSelf);
        }
        if self.delay() <= 0 {
            return Err(DiscardReason::NoDelay);
        }
        Ok(())
    }
}

/// Simulate `wall` and measure both routes on the result.
pub fn measure_wall(
    situation: &Situation,
    wall: Wall,
    stats: &mut DecisionStats,
) -> Result<WallImpact, SimulationError> {
    let walls = simulate_wall(&situation.walls, situation.size, wall)?;
    stats.simulations += 1;
    stats.path_searches += 2;

    Ok(WallImpact {
        wall,
        opponent_before: situation.opponent_distance(),
        opponent_after: path::distance_to_row(
            &walls,
            situation.size,
            situation.opponent_position,
            situation.opponent_goal_row,
        ),
        own_before: situation.distance(),
        own_after: path::distance_to_row(
            &walls,
            situation.size,
            situation.position,
            situation.goal_row,
        ),
    })
}

/// Score for stepping the deciding player's pawn to `to`.
pub fn score_move(
    situation: &Situation,
    to: Coord,
    config: &AiConfig,
    stats: &mut DecisionStats,
) -> i64 {
    stats.path_searches += 1;
    let Some(new_distance) =
        path::distance_to_row(&situation.walls, situation.size, to, situation.goal_row)
    else {
        return config.dead_end_score;
    };

    let mut score =
        (i64::from(situation.distance()) - i64::from(new_distance)) * config.progress_weight;

    let rows_before = situation.position.rows_from(situation.goal_row);
    let rows_after = to.rows_from(situation.goal_row);
    if rows_after < rows_before {
        score += config.toward_goal_bonus;
    } else if rows_after > rows_before {
        score -= config.away_from_goal_penalty;
    }

    if let Some(&bonus) = usize::try_from(new_distance)
        .ok()
        .and_then(|d| config.proximity_bonus.get(d))
    {
        score += bonus;
    }

    let center = situation.size / 2;
    score += i64::from(center - (to.x - center).abs()) * config.centrality_weight;
    score
}

/// Score for a wall that stops an imminent win.
#[must_use]
pub fn imminent_block_score(impact: &WallImpact, config: &AiConfig) -> i64 {
    config.imminent_block_base + impact.delay() * config.imminent_block_delay
}

/// Score for a contested wall along the opponent's route.
#[must_use]
pub fn block_score(impact: &WallImpact, config: &AiConfig) -> i64 {
    impact.delay() * config.block_delay_weight - impact.own_delay() * config.self_delay_weight
        + Urgency::classify(impact.opponent_before, config).bonus(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, GridBoard, PlayerMap, PlayerState};

    fn situation(board: &GridBoard, ai: Coord, human: Coord) -> Situation {
        let players = PlayerMap::new(|kind| match kind {
            PlayerKind::Human => PlayerState::new(kind, human, 10, 0),
            PlayerKind::Ai => PlayerState::new(kind, ai, 10, board.size() - 1),
        });
        let view = GameView::new(board, &players, PlayerKind::Ai, GameState::Playing);
        Situation::assess(&view, PlayerKind::Ai, &mut DecisionStats::new())
    }

    #[test]
    fn test_urgency_thresholds() {
        let config = AiConfig::default();
        assert_eq!(Urgency::classify(0, &config), Urgency::ImminentWin);
        assert_eq!(Urgency::classify(1, &config), Urgency::ImminentWin);
        assert_eq!(Urgency::classify(2, &config), Urgency::Emergency);
        assert_eq!(Urgency::classify(4, &config), Urgency::Critical);
        assert_eq!(Urgency::classify(5, &config), Urgency::Normal);
        assert_eq!(Urgency::classify(UNREACHABLE_DISTANCE, &config), Urgency::Normal);
        assert!(Urgency::ImminentWin > Urgency::Emergency);
    }

    #[test]
    fn test_blocking_walls_for_vertical_step() {
        let walls = blocking_walls(Coord::new(4, 1), Coord::new(4, 0));
        assert_eq!(walls.as_slice(), &[Wall::horizontal(4, 1), Wall::horizontal(3, 1)]);
    }

    #[test]
    fn test_blocking_walls_for_horizontal_step() {
        let walls = blocking_walls(Coord::new(3, 5), Coord::new(2, 5));
        assert_eq!(walls.as_slice(), &[Wall::vertical(3, 5), Wall::vertical(3, 4)]);
    }

    #[test]
    fn test_blocking_walls_not_adjacent() {
        assert!(blocking_walls(Coord::new(0, 0), Coord::new(2, 0)).is_empty());
    }

    #[test]
    fn test_simulate_wall_leaves_source_untouched() {
        let walls = WallSet::new();
        let simulated = simulate_wall(&walls, 9, Wall::horizontal(4, 1)).unwrap();

        assert!(walls.is_empty());
        assert!(simulated.contains(Wall::horizontal(4, 1)));
    }

    #[test]
    fn test_simulate_wall_errors() {
        let walls: WallSet = [Wall::horizontal(4, 1)].into_iter().collect();

        assert_eq!(
            simulate_wall(&walls, 9, Wall::horizontal(4, 1)),
            Err(SimulationError::DuplicateWall(Wall::horizontal(4, 1)))
        );
        assert_eq!(
            simulate_wall(&walls, 9, Wall::vertical(0, 3)),
            Err(SimulationError::InvalidWall(Wall::vertical(0, 3)))
        );
    }

    #[test]
    fn test_measure_wall_delay() {
        let board = GridBoard::new(9);
        let sit = situation(&board, Coord::new(4, 0), Coord::new(4, 1));
        let mut stats = DecisionStats::new();

        let impact = measure_wall(&sit, Wall::horizontal(4, 1), &mut stats).unwrap();
        assert_eq!(impact.opponent_before, 1);
        assert_eq!(impact.opponent_after, Some(2));
        assert_eq!(impact.delay(), 1);
        assert_eq!(impact.check(), Ok(()));
        assert_eq!(stats.simulations, 1);
    }

    #[test]
    fn test_measure_wall_without_delay() {
        let board = GridBoard::new(9);
        let sit = situation(&board, Coord::new(4, 0), Coord::new(4, 1));
        let impact = measure_wall(&sit, Wall::vertical(7, 7), &mut DecisionStats::new()).unwrap();

        assert_eq!(impact.delay(), 0);
        assert_eq!(impact.check(), Err(DiscardReason::NoDelay));
    }

    #[test]
    fn test_score_move_prefers_progress() {
        let board = GridBoard::new(9);
        let sit = situation(&board, Coord::new(4, 0), Coord::new(4, 8));
        let config = AiConfig::default();
        let mut stats = DecisionStats::new();

        let forward = score_move(&sit, Coord::new(4, 1), &config, &mut stats);
        let sideways = score_move(&sit, Coord::new(5, 0), &config, &mut stats);

        // 1 step of progress, toward goal, centred.
        assert_eq!(forward, 1_000 + 300 + 40);
        assert_eq!(sideways, 30);
        assert_eq!(stats.path_searches, 2);
    }

    #[test]
    fn test_score_move_dead_end() {
        let mut board = GridBoard::new(3);
        board.add_wall(Wall::horizontal(0, 2)).unwrap();
        board.add_wall(Wall::horizontal(1, 2)).unwrap();
        board.add_wall(Wall::horizontal(2, 2)).unwrap();
        let config = AiConfig::default();

        // Row 2 is sealed off from row 1; AI sits on row 0 heading for row 2.
        let sit = situation(&board, Coord::new(1, 0), Coord::new(1, 2));
        assert_eq!(sit.distance(), UNREACHABLE_DISTANCE);
        assert_eq!(
            score_move(&sit, Coord::new(1, 1), &config, &mut DecisionStats::new()),
            config.dead_end_score
        );
    }

    #[test]
    fn test_block_score_tiers() {
        let config = AiConfig::default();
        let impact = WallImpact {
            wall: Wall::horizontal(4, 3),
            opponent_before: 2,
            opponent_after: Some(4),
            own_before: 6,
            own_after: Some(7),
        };
        assert_eq!(block_score(&impact, &config), 2 * 300 - 150 + 2_000);
        assert_eq!(imminent_block_score(&impact, &config), 10_000 + 2 * 1_000);
    }
}
