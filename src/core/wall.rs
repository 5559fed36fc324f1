//! Walls and persistent wall sets.
//!
//! ## Edge convention
//!
//! A wall blocks exactly one cell edge and is keyed by the cell on the
//! far (higher-index) side of that edge:
//!
//! - `Horizontal (x, y)` separates `(x, y - 1)` from `(x, y)`; valid for
//!   `x ∈ [0, N-1]`, `y ∈ [1, N-1]`.
//! - `Vertical (x, y)` separates `(x - 1, y)` from `(x, y)`; valid for
//!   `x ∈ [1, N-1]`, `y ∈ [0, N-1]`.
//!
//! [`Wall::between`] is the only place that maps an edge to a wall key.
//! Movement blocking and the AI's blocking-wall generator both go through
//! it, so they can never disagree.
//!
//! ## WallSet
//!
//! `WallSet` uses `im::OrdSet`, so cloning is O(1) and a simulated
//! placement shares structure with the live set.

use std::str::FromStr;

use im::OrdSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::coord::Coord;

/// Wall orientation.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Blocks vertical movement between two rows.
    Horizontal,
    /// Blocks horizontal movement between two columns.
    Vertical,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// Error returned when parsing an unknown orientation name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown wall orientation `{0}`")]
pub struct ParseOrientationError(pub String);

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Ok(Orientation::Horizontal),
            "vertical" | "v" => Ok(Orientation::Vertical),
            _ => Err(ParseOrientationError(s.to_string())),
        }
    }
}

/// A single-edge wall.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Wall {
    /// Column of the edge key.
    pub x: i32,
    /// Row of the edge key.
    pub y: i32,
    /// Which kind of edge this wall sits on.
    pub orientation: Orientation,
}

impl Wall {
    /// Create a new wall.
    #[must_use]
    pub const fn new(x: i32, y: i32, orientation: Orientation) -> Self {
        Self { x, y, orientation }
    }

    /// Horizontal wall at `(x, y)`.
    #[must_use]
    pub const fn horizontal(x: i32, y: i32) -> Self {
        Self::new(x, y, Orientation::Horizontal)
    }

    /// Vertical wall at `(x, y)`.
    #[must_use]
    pub const fn vertical(x: i32, y: i32) -> Self {
        Self::new(x, y, Orientation::Vertical)
    }

    /// The edge key as a coordinate.
    #[must_use]
    pub const fn key(self) -> Coord {
        Coord::new(self.x, self.y)
    }

    /// The canonical wall for the edge between two orthogonally adjacent
    /// cells, in either order.
    ///
    /// Returns `None` when the cells are not adjacent.
    ///
    /// ```
    /// use rust_quoridor::core::{Coord, Wall};
    ///
    /// let a = Coord::new(4, 0);
    /// let b = Coord::new(4, 1);
    /// assert_eq!(Wall::between(a, b), Some(Wall::horizontal(4, 1)));
    /// assert_eq!(Wall::between(b, a), Some(Wall::horizontal(4, 1)));
    /// assert_eq!(Wall::between(a, Coord::new(5, 1)), None);
    /// ```
    #[must_use]
    pub fn between(a: Coord, b: Coord) -> Option<Wall> {
        if !a.is_adjacent(b) {
            return None;
        }
        if a.y == b.y {
            Some(Wall::vertical(a.x.max(b.x), a.y))
        } else {
            Some(Wall::horizontal(a.x, a.y.max(b.y)))
        }
    }

    /// The two cells this wall separates, lower-index side first.
    #[must_use]
    pub const fn separated_cells(self) -> (Coord, Coord) {
        match self.orientation {
            Orientation::Horizontal => (Coord::new(self.x, self.y - 1), self.key()),
            Orientation::Vertical => (Coord::new(self.x - 1, self.y), self.key()),
        }
    }

    /// The neighbouring wall key one unit back along the wall's own axis.
    ///
    /// For a horizontal wall this is the edge to its left; for a vertical
    /// wall, the edge above it. The result may be out of range.
    #[must_use]
    pub const fn offset_neighbor(self) -> Wall {
        match self.orientation {
            Orientation::Horizontal => Wall::horizontal(self.x - 1, self.y),
            Orientation::Vertical => Wall::vertical(self.x, self.y - 1),
        }
    }

    /// True if the edge index is valid on a board of `size × size`.
    #[must_use]
    pub const fn is_in_range(self, size: i32) -> bool {
        match self.orientation {
            Orientation::Horizontal => {
                self.x >= 0 && self.x < size && self.y >= 1 && self.y < size
            }
            Orientation::Vertical => {
                self.x >= 1 && self.x < size && self.y >= 0 && self.y < size
            }
        }
    }
}

impl std::fmt::Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wall at ({}, {})", self.orientation, self.x, self.y)
    }
}

/// Persistent set of placed walls, split by orientation.
///
/// Values are cheap to clone; simulations clone and insert freely without
/// affecting the source set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallSet {
    horizontal: OrdSet<Coord>,
    vertical: OrdSet<Coord>,
}

impl WallSet {
    /// Create an empty wall set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn set(&self, orientation: Orientation) -> &OrdSet<Coord> {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    /// Membership test.
    #[must_use]
    pub fn contains(&self, wall: Wall) -> bool {
        self.set(wall.orientation).contains(&wall.key())
    }

    /// Insert a wall. Returns `false` if it was already present.
    pub fn insert(&mut self, wall: Wall) -> bool {
        let set = match wall.orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        };
        set.insert(wall.key()).is_none()
    }

    /// A copy of this set with `wall` added.
    #[must_use]
    pub fn with(&self, wall: Wall) -> Self {
        let mut next = self.clone();
        next.insert(wall);
        next
    }

    /// Total number of walls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.horizontal.len() + self.vertical.len()
    }

    /// True if no walls are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.horizontal.is_empty() && self.vertical.is_empty()
    }

    /// Iterate over all walls, horizontal first, each in key order.
    pub fn iter(&self) -> impl Iterator<Item = Wall> + '_ {
        let h = self.horizontal.iter().map(|c| Wall::horizontal(c.x, c.y));
        let v = self.vertical.iter().map(|c| Wall::vertical(c.x, c.y));
        h.chain(v)
    }
}

impl FromIterator<Wall> for WallSet {
    fn from_iter<I: IntoIterator<Item = Wall>>(iter: I) -> Self {
        let mut set = WallSet::new();
        for wall in iter {
            set.insert(wall);
        }
        set
    }
}

/// True iff a wall occupies the edge between two adjacent cells.
///
/// Symmetric in `from`/`to`. Non-adjacent pairs report `false`; adjacency
/// is checked separately by move legality.
#[must_use]
pub fn is_movement_blocked(walls: &WallSet, from: Coord, to: Coord) -> bool {
    Wall::between(from, to).is_some_and(|wall| walls.contains(wall))
}
