//! # rust-quoridor
//!
//! Rules engine and heuristic computer opponent for a two-player wall-race
//! board game: pawns race to the opposite edge of a square grid while
//! placing walls on cell edges to slow each other down.
//!
//! ## Design Principles
//!
//! 1. **Total operations**: every rules call either succeeds or leaves the
//!    game untouched. The `bool` API is for UI probing, the `try_*` API
//!    returns the reason.
//!
//! 2. **One edge convention**: [`Wall::between`](core::Wall::between) is the
//!    single mapping from a cell edge to a wall key. Movement blocking and
//!    the AI's blocking-wall generator both use it.
//!
//! 3. **Simulate on copies**: the AI evaluates walls on persistent
//!    [`WallSet`](core::WallSet) values (`im-rs`), never on the live board.
//!
//! 4. **No presentation state**: rendering collaborators subscribe through
//!    [`GameObserver`](rules::GameObserver).
//!
//! ## Modules
//!
//! - `core`: coordinates, walls, board, players, actions, configuration
//! - `path`: breadth-first shortest-path search
//! - `rules`: the `Game` session and its builder
//! - `ai`: heuristic strategy, policies, self-play
//!
//! ## Example
//!
//! ```
//! use rust_quoridor::{Game, Orientation, PlayerKind};
//!
//! let mut game = Game::default();
//! assert!(game.make_move(4, 7));
//! assert!(game.make_ai_move());
//! assert!(game.place_wall(4, 2, Orientation::Horizontal));
//! assert_eq!(game.current_player(), PlayerKind::Ai);
//! ```

pub mod ai;
pub mod core;
pub mod path;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ConfigError, Coord, Direction, GameConfig, GameState, GameView, GridBoard, MoveError,
    MoveRecord, Orientation, PlayerKind, PlayerMap, PlayerState, RulesError, Wall, WallError,
    WallSet,
};

pub use crate::path::Path;

pub use crate::rules::{Game, GameBuilder, GameObserver, WallCallback};

pub use crate::ai::{
    play_match, AiConfig, AiStrategy, Decision, DecisionObserver, MatchOutcome, Policy,
    RandomMover,
};
