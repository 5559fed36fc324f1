//! Game configuration.
//!
//! A `GameConfig` fixes everything about a session that does not change
//! during play: board size, wall budget, who moves first, and whether
//! wall placements must leave both players a route to goal.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::error::ConfigError;
use super::player::PlayerKind;

/// Standard board edge length.
pub const DEFAULT_BOARD_SIZE: i32 = 9;

/// Standard per-player wall budget.
pub const DEFAULT_WALLS_PER_PLAYER: u32 = 10;

/// Smallest supported board.
pub const MIN_BOARD_SIZE: i32 = 3;

/// Largest supported board.
pub const MAX_BOARD_SIZE: i32 = 64;

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board edge length (the grid is `board_size × board_size`).
    pub board_size: i32,

    /// Walls each player starts with.
    pub walls_per_player: u32,

    /// Who acts first.
    pub first_player: PlayerKind,

    /// Reject any wall that leaves either player without a path to goal.
    pub enforce_reachability: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            walls_per_player: DEFAULT_WALLS_PER_PLAYER,
            first_player: PlayerKind::Human,
            enforce_reachability: true,
        }
    }
}

impl GameConfig {
    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: i32) -> Self {
        self.board_size = size;
        self
    }

    /// Set the per-player wall budget.
    #[must_use]
    pub fn with_walls_per_player(mut self, walls: u32) -> Self {
        self.walls_per_player = walls;
        self
    }

    /// Set who moves first.
    #[must_use]
    pub fn with_first_player(mut self, player: PlayerKind) -> Self {
        self.first_player = player;
        self
    }

    /// Enable or disable the reachability rule for wall placement.
    #[must_use]
    pub fn with_reachability_rule(mut self, enforce: bool) -> Self {
        self.enforce_reachability = enforce;
        self
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::BoardSize(self.board_size));
        }
        Ok(())
    }

    /// Middle column; pawns start here.
    #[must_use]
    pub fn center_column(&self) -> i32 {
        self.board_size / 2
    }

    /// Starting cell for a player.
    ///
    /// The human starts on the last row and races to row 0; the AI starts
    /// on row 0 and races to the last row.
    #[must_use]
    pub fn start_position(&self, player: PlayerKind) -> Coord {
        match player {
            PlayerKind::Human => Coord::new(self.center_column(), self.board_size - 1),
            PlayerKind::Ai => Coord::new(self.center_column(), 0),
        }
    }

    /// Goal row for a player: the edge opposite their start row.
    #[must_use]
    pub fn goal_row(&self, player: PlayerKind) -> i32 {
        match player {
            PlayerKind::Human => 0,
            PlayerKind::Ai => self.board_size - 1,
        }
    }
}
