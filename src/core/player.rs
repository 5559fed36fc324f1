//! Player identity and per-player state.
//!
//! ## PlayerKind
//!
//! The two seats at the table: `Human` and `Ai`. Identity only; how a seat
//! chooses its actions lives in [`crate::ai`].
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerKind`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::coord::Coord;

/// Which seat a player occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// The interactive player.
    Human,
    /// The computer opponent.
    Ai,
}

impl PlayerKind {
    /// Both seats, human first.
    pub const BOTH: [PlayerKind; 2] = [PlayerKind::Human, PlayerKind::Ai];

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerKind::Human => PlayerKind::Ai,
            PlayerKind::Ai => PlayerKind::Human,
        }
    }

    /// Slot index (human = 0, AI = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerKind::Human => 0,
            PlayerKind::Ai => 1,
        }
    }
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "Human"),
            PlayerKind::Ai => write!(f, "AI"),
        }
    }
}

/// Position and wall budget for one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    kind: PlayerKind,
    position: Coord,
    walls_remaining: u32,
    goal_row: i32,
}

impl PlayerState {
    /// Create a player state.
    #[must_use]
    pub fn new(kind: PlayerKind, position: Coord, walls: u32, goal_row: i32) -> Self {
        Self {
            kind,
            position,
            walls_remaining: walls,
            goal_row,
        }
    }

    /// Seat this state belongs to.
    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Current cell.
    #[must_use]
    pub fn position(&self) -> Coord {
        self.position
    }

    /// Move the pawn. No legality checks; the rules engine does those.
    pub fn set_position(&mut self, position: Coord) {
        self.position = position;
    }

    /// Row this player must reach to win.
    #[must_use]
    pub fn goal_row(&self) -> i32 {
        self.goal_row
    }

    /// True if the pawn stands on the goal row.
    #[must_use]
    pub fn has_reached_goal(&self) -> bool {
        self.position.y == self.goal_row
    }

    /// Walls left to place.
    #[must_use]
    pub fn walls_remaining(&self) -> u32 {
        self.walls_remaining
    }

    /// True if at least one wall is left.
    #[must_use]
    pub fn has_walls_left(&self) -> bool {
        self.walls_remaining > 0
    }

    /// Spend one wall.
    ///
    /// Returns `false` and leaves the budget unchanged when none are left.
    pub fn use_wall(&mut self) -> bool {
        if self.walls_remaining > 0 {
            self.walls_remaining -= 1;
            true
        } else {
            false
        }
    }
}

/// Per-seat storage with O(1) access by `PlayerKind`.
///
/// ```
/// use rust_quoridor::core::{PlayerKind, PlayerMap};
///
/// let mut walls: PlayerMap<u32> = PlayerMap::with_value(10);
/// walls[PlayerKind::Ai] -= 1;
/// assert_eq!(walls[PlayerKind::Human], 10);
/// assert_eq!(walls[PlayerKind::Ai], 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerKind) -> T) -> Self {
        Self {
            data: [factory(PlayerKind::Human), factory(PlayerKind::Ai)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerKind) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerKind) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over `(seat, value)` pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerKind, &T)> {
        PlayerKind::BOTH.into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<PlayerKind> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerKind) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerKind> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerKind) -> &mut Self::Output {
        self.get_mut(player)
    }
}
