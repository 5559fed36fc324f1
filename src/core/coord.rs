//! Board coordinates and the four orthogonal step directions.
//!
//! Coordinates are signed so that UI code can probe arbitrary input
//! (including negative values) without a conversion step. Validity is a
//! property of the board, not of the coordinate: see
//! [`GridBoard::is_inside`](crate::core::GridBoard::is_inside).

use serde::{Deserialize, Serialize};

/// A cell position on the grid, 0-indexed.
///
/// `x` is the column, `y` is the row.
///
/// ```
/// use rust_quoridor::core::{Coord, Direction};
///
/// let c = Coord::new(4, 8);
/// assert_eq!(c.step(Direction::Up), Coord::new(4, 7));
/// assert!(c.is_adjacent(Coord::new(3, 8)));
/// assert!(!c.is_adjacent(Coord::new(3, 7)));
/// ```
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coord {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring coordinate one step in `direction`.
    ///
    /// The result may lie outside the board.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Manhattan distance to another coordinate.
    #[must_use]
    pub const fn manhattan(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// True if `other` is exactly one orthogonal step away.
    #[must_use]
    pub const fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }

    /// Number of rows between this coordinate and `row`.
    #[must_use]
    pub const fn rows_from(self, row: i32) -> u32 {
        self.y.abs_diff(row)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Orthogonal step directions.
///
/// `Up` decreases the row index, `Down` increases it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward the last row.
    Down,
    /// Toward column 0.
    Left,
    /// Toward the last column.
    Right,
}

impl Direction {
    /// Neighbour expansion order used by searches and move generation.
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    /// Column/row delta of a single step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The vertical direction that moves from `row` toward `goal_row`.
    ///
    /// Returns `Down` when already on the goal row.
    #[must_use]
    pub const fn toward_row(row: i32, goal_row: i32) -> Self {
        if goal_row < row {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
