//! Heuristic AI scoring parameters.

use serde::{Deserialize, Serialize};

/// Weights and thresholds for the heuristic AI.
///
/// All scores are integers; candidates are ranked by the sum of the terms
/// that apply to them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    /// Opponent distance at or below which the opponent is about to win.
    pub imminent_distance: u32,

    /// Opponent distance at or below which walls are always considered.
    pub emergency_distance: u32,

    /// Opponent distance at or below which walls are considered when the
    /// opponent is not behind the AI.
    pub critical_distance: u32,

    /// Base score for a wall that stops an imminent win.
    pub imminent_block_base: i64,

    /// Per-step bonus for an imminent-win block.
    pub imminent_block_delay: i64,

    /// Per-step bonus for shortening the AI's own path with a move.
    pub progress_weight: i64,

    /// Bonus for a move that brings the pawn closer to its goal row.
    pub toward_goal_bonus: i64,

    /// Penalty for a move that takes the pawn away from its goal row.
    pub away_from_goal_penalty: i64,

    /// Bonus by resulting path distance: index 0, 1, 2.
    pub proximity_bonus: [i64; 3],

    /// Per-column bonus for staying near the centre.
    pub centrality_weight: i64,

    /// Score for a move after which the goal row is unreachable.
    pub dead_end_score: i64,

    /// Per-step bonus for delaying the opponent with a contested wall.
    pub block_delay_weight: i64,

    /// Per-step penalty for delaying the AI itself with a contested wall.
    pub self_delay_weight: i64,

    /// Contested-wall bonus by urgency: imminent, emergency, critical.
    pub urgency_bonus: [i64; 3],

    /// How many steps of the opponent's path are probed for blocking walls.
    pub max_block_steps: usize,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            imminent_distance: 1,
            emergency_distance: 2,
            critical_distance: 4,
            imminent_block_base: 10_000,
            imminent_block_delay: 1_000,
            progress_weight: 1_000,
            toward_goal_bonus: 300,
            away_from_goal_penalty: 200,
            proximity_bonus: [50_000, 10_000, 5_000],
            centrality_weight: 10,
            dead_end_score: -10_000,
            block_delay_weight: 300,
            self_delay_weight: 150,
            urgency_bonus: [3_000, 2_000, 1_000],
            max_block_steps: 4,
        }
    }
}

impl AiConfig {
    /// Set the urgency thresholds.
    #[must_use]
    pub fn with_thresholds(mut self, emergency: u32, critical: u32) -> Self {
        self.emergency_distance = emergency;
        self.critical_distance = critical;
        self
    }

    /// Set how many opponent steps are probed for blocking walls.
    #[must_use]
    pub fn with_max_block_steps(mut self, steps: usize) -> Self {
        self.max_block_steps = steps;
        self
    }

    /// Set the per-step progress weight for moves.
    #[must_use]
    pub fn with_progress_weight(mut self, weight: i64) -> Self {
        self.progress_weight = weight;
        self
    }

    /// Set the contested-wall delay weights.
    #[must_use]
    pub fn with_block_weights(mut self, opponent_delay: i64, own_delay: i64) -> Self {
        self.block_delay_weight = opponent_delay;
        self.self_delay_weight = own_delay;
        self
    }

    /// Disable contested walls entirely; only imminent-win blocks remain.
    #[must_use]
    pub fn without_contested_walls(mut self) -> Self {
        self.max_block_steps = 0;
        self
    }
}
