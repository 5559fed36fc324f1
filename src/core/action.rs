//! Actions and the move history.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::player::PlayerKind;
use super::wall::Wall;

/// One turn's worth of action.
///
/// Human input and AI decisions are both expressed as `Action` and go
/// through the same rules path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Step the pawn to an adjacent cell.
    Move {
        /// Destination cell.
        to: Coord,
    },
    /// Place a wall.
    PlaceWall(Wall),
    /// Pass the turn. Only legal when no pawn move is available.
    Stay,
}

impl Action {
    /// Move action to `(x, y)`.
    #[must_use]
    pub const fn move_to(x: i32, y: i32) -> Self {
        Action::Move {
            to: Coord::new(x, y),
        }
    }

    /// True for wall placements.
    #[must_use]
    pub const fn is_wall(&self) -> bool {
        matches!(self, Action::PlaceWall(_))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move { to } => write!(f, "move to {to}"),
            Action::PlaceWall(wall) => write!(f, "place {wall}"),
            Action::Stay => write!(f, "stay"),
        }
    }
}

/// A completed pawn move, kept for replay and display.
///
/// Not consulted by any game logic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who moved.
    pub player: PlayerKind,

    /// Where the pawn ended up.
    pub position: Coord,

    /// Ply number of the move (1-based count of accepted actions).
    pub ply: u32,

    /// Wall-clock time of the move, milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
}

impl MoveRecord {
    /// Create a record stamped with the current time.
    #[must_use]
    pub fn now(player: PlayerKind, position: Coord, ply: u32) -> Self {
        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0);

        Self {
            player,
            position,
            ply,
            timestamp_ms,
        }
    }
}
