//! Core engine types: coordinates, walls, board, players, actions, state.
//!
//! Everything here is plain data plus pure queries. Turn order and action
//! application live in [`crate::rules`].

pub mod action;
pub mod board;
pub mod config;
pub mod coord;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;
pub mod wall;

pub use action::{Action, MoveRecord};
pub use board::GridBoard;
pub use config::{GameConfig, DEFAULT_BOARD_SIZE, DEFAULT_WALLS_PER_PLAYER};
pub use coord::{Coord, Direction};
pub use error::{ConfigError, MoveError, RulesError, WallError};
pub use player::{PlayerKind, PlayerMap, PlayerState};
pub use rng::GameRng;
pub use state::{GameState, GameView};
pub use wall::{is_movement_blocked, Orientation, ParseOrientationError, Wall, WallSet};
