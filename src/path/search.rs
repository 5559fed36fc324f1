use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{is_movement_blocked, Coord, Direction, WallSet};

/// A route from a start cell to a goal row.
///
/// Start inclusive; every consecutive pair is orthogonally adjacent and
/// not separated by a wall. Never empty, including after deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coord>", into = "Vec<Coord>")]
pub struct Path {
    cells: Vec<Coord>,
}

/// A path must hold at least its start cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("path has no cells")]
pub struct EmptyPathError;

impl TryFrom<Vec<Coord>> for Path {
    type Error = EmptyPathError;

    fn try_from(cells: Vec<Coord>) -> Result<Self, Self::Error> {
        if cells.is_empty() {
            return Err(EmptyPathError);
        }
        Ok(Self { cells })
    }
}

impl From<Path> for Vec<Coord> {
    fn from(path: Path) -> Self {
        path.cells
    }
}

impl Path {
    /// Cells along the route, start first.
    #[must_use]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Number of cells, including the start.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a path holds at least its start cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves needed (`len - 1`).
    #[must_use]
    pub fn distance(&self) -> u32 {
        u32::try_from(self.cells.len().saturating_sub(1)).unwrap_or(u32::MAX)
    }

    /// First cell.
    #[must_use]
    pub fn start(&self) -> Coord {
        self.cells[0]
    }

    /// Last cell, on the goal row.
    #[must_use]
    pub fn end(&self) -> Coord {
        self.cells[self.cells.len() - 1]
    }

    /// Consecutive `(from, to)` steps along the route.
    pub fn steps(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        self.cells.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

/// Shortest route from `start` to any cell whose row is `goal_row`.
///
/// Neighbours are expanded in [`Direction::ALL`] order, so ties between
/// equally short routes resolve the same way every time. Returns `None`
/// when the goal row is unreachable or `start` is off the board.
///
/// ```
/// use rust_quoridor::core::{Coord, Wall, WallSet};
/// use rust_quoridor::path::shortest_path;
///
/// let walls: WallSet = [Wall::horizontal(4, 1)].into_iter().collect();
/// let path = shortest_path(&walls, 9, Coord::new(4, 1), 0).unwrap();
/// assert_eq!(path.distance(), 2);
/// ```
#[must_use]
pub fn shortest_path(walls: &WallSet, size: i32, start: Coord, goal_row: i32) -> Option<Path> {
    let inside = |c: Coord| (0..size).contains(&c.x) && (0..size).contains(&c.y);
    if !inside(start) {
        return None;
    }

    // Parent links double as the visited set.
    let mut parents: FxHashMap<Coord, Coord> = FxHashMap::default();
    parents.insert(start, start);
    let mut queue = VecDeque::from([start]);

    while let Some(cell) = queue.pop_front() {
        if cell.y == goal_row {
            return Some(Path {
                cells: unwind(&parents, start, cell),
            });
        }

        for dir in Direction::ALL {
            let next = cell.step(dir);
            if !inside(next) || parents.contains_key(&next) {
                continue;
            }
            if is_movement_blocked(walls, cell, next) {
                continue;
            }
            parents.insert(next, cell);
            queue.push_back(next);
        }
    }

    None
}

fn unwind(parents: &FxHashMap<Coord, Coord>, start: Coord, end: Coord) -> Vec<Coord> {
    let mut cells = vec![end];
    let mut cursor = end;
    while cursor != start {
        match parents.get(&cursor) {
            Some(&prev) => {
                cells.push(prev);
                cursor = prev;
            }
            None => break,
        }
    }
    cells.reverse();
    cells
}

/// Moves needed to reach `goal_row`, or `None` if unreachable.
#[must_use]
pub fn distance_to_row(walls: &WallSet, size: i32, start: Coord, goal_row: i32) -> Option<u32> {
    shortest_path(walls, size, start, goal_row).map(|p| p.distance())
}

/// True if `goal_row` is reachable from `start`.
#[must_use]
pub fn can_reach(walls: &WallSet, size: i32, start: Coord, goal_row: i32) -> bool {
    shortest_path(walls, size, start, goal_row).is_some()
}
