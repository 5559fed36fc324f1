//! Builder for games that start from an arbitrary position.
//!
//! Handy for tests, puzzles and replaying a mid-game position. Preset
//! walls are checked for range and duplicates only; they do not spend
//! budget and are not subject to the reachability rule.

use crate::core::{
    ConfigError, Coord, GameConfig, GridBoard, PlayerKind, PlayerMap, PlayerState, Wall,
};

use super::engine::Game;

/// Builds a [`Game`] from a custom position.
///
/// ```
/// use rust_quoridor::core::{Coord, PlayerKind, Wall};
/// use rust_quoridor::rules::GameBuilder;
///
/// let game = GameBuilder::new()
///     .human_at(Coord::new(4, 1))
///     .wall(Wall::horizontal(4, 1))
///     .current_player(PlayerKind::Ai)
///     .build()
///     .unwrap();
/// assert_eq!(game.distance_to_goal(PlayerKind::Human), Some(2));
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    positions: PlayerMap<Option<Coord>>,
    walls_remaining: PlayerMap<Option<u32>>,
    walls: Vec<Wall>,
    current: Option<PlayerKind>,
}

impl GameBuilder {
    /// Start from the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific configuration.
    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Place the human's pawn.
    #[must_use]
    pub fn human_at(mut self, position: Coord) -> Self {
        self.positions[PlayerKind::Human] = Some(position);
        self
    }

    /// Place the AI's pawn.
    #[must_use]
    pub fn ai_at(mut self, position: Coord) -> Self {
        self.positions[PlayerKind::Ai] = Some(position);
        self
    }

    /// Add a preset wall.
    #[must_use]
    pub fn wall(mut self, wall: Wall) -> Self {
        self.walls.push(wall);
        self
    }

    /// Add several preset walls.
    #[must_use]
    pub fn walls(mut self, walls: impl IntoIterator<Item = Wall>) -> Self {
        self.walls.extend(walls);
        self
    }

    /// Override a player's remaining wall budget.
    #[must_use]
    pub fn walls_remaining(mut self, player: PlayerKind, walls: u32) -> Self {
        self.walls_remaining[player] = Some(walls);
        self
    }

    /// Set whose turn it is.
    #[must_use]
    pub fn current_player(mut self, player: PlayerKind) -> Self {
        self.current = Some(player);
        self
    }

    /// Validate and build the game.
    pub fn build(self) -> Result<Game, ConfigError> {
        let config = self.config;
        config.validate()?;

        let mut board = GridBoard::new(config.board_size);
        for wall in self.walls {
            board.add_wall(wall)?;
        }

        let players = PlayerMap::new(|kind| {
            PlayerState::new(
                kind,
                self.positions[kind].unwrap_or_else(|| config.start_position(kind)),
                self.walls_remaining[kind].unwrap_or(config.walls_per_player),
                config.goal_row(kind),
            )
        });
        for kind in PlayerKind::BOTH {
            if !board.contains(players[kind].position()) {
                return Err(ConfigError::PawnOutOfBounds(kind));
            }
        }
        if players[PlayerKind::Human].position() == players[PlayerKind::Ai].position() {
            return Err(ConfigError::PawnsOverlap);
        }

        let current = self.current.unwrap_or(config.first_player);
        Ok(Game::from_parts(config, board, players, current))
    }
}
