//! The grid and its placed walls.

use serde::{Deserialize, Serialize};

use super::config::DEFAULT_BOARD_SIZE;
use super::coord::Coord;
use super::error::WallError;
use super::wall::{self, Wall, WallSet};
use crate::path::{self as pathfinding, Path};

/// Fixed-size square grid plus the walls placed on it.
///
/// Walls are append-only for the lifetime of a board. `version` increases
/// on every successful insert so callers can key caches on it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBoard {
    size: i32,
    walls: WallSet,
    version: u64,
}

impl Default for GridBoard {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl GridBoard {
    /// Create an empty board of `size × size` cells.
    #[must_use]
    pub fn new(size: i32) -> Self {
        Self {
            size,
            walls: WallSet::new(),
            version: 0,
        }
    }

    /// Board edge length.
    #[must_use]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// True iff `0 <= x, y < size`.
    #[must_use]
    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        (0..self.size).contains(&x) && (0..self.size).contains(&y)
    }

    /// Coordinate form of [`is_inside`](Self::is_inside).
    #[must_use]
    pub fn contains(&self, cell: Coord) -> bool {
        self.is_inside(cell.x, cell.y)
    }

    /// Membership test on the wall set.
    #[must_use]
    pub fn has_wall(&self, wall: Wall) -> bool {
        self.walls.contains(wall)
    }

    /// Structural legality of a placement: edge in range and not taken.
    ///
    /// Does not look at wall budgets or reachability.
    pub fn check_wall_placement(&self, wall: Wall) -> Result<(), WallError> {
        if !wall.is_in_range(self.size) {
            return Err(WallError::OutOfRange);
        }
        if self.walls.contains(wall) {
            return Err(WallError::DuplicateWall);
        }
        Ok(())
    }

    /// Pure query form of [`check_wall_placement`](Self::check_wall_placement).
    #[must_use]
    pub fn is_valid_wall_placement(&self, wall: Wall) -> bool {
        self.check_wall_placement(wall).is_ok()
    }

    /// Insert a wall.
    ///
    /// Fails with `DuplicateWall` if the edge is already walled and with
    /// `OutOfRange` if the edge index is invalid.
    pub fn add_wall(&mut self, wall: Wall) -> Result<(), WallError> {
        self.check_wall_placement(wall)?;
        self.walls.insert(wall);
        self.version += 1;
        Ok(())
    }

    /// True iff a wall sits on the edge between two adjacent cells.
    #[must_use]
    pub fn is_movement_blocked(&self, from: Coord, to: Coord) -> bool {
        wall::is_movement_blocked(&self.walls, from, to)
    }

    /// Shortest path from `start` to any cell on `goal_row`.
    #[must_use]
    pub fn shortest_path(&self, start: Coord, goal_row: i32) -> Option<Path> {
        pathfinding::shortest_path(&self.walls, self.size, start, goal_row)
    }

    /// All placed walls.
    #[must_use]
    pub fn walls(&self) -> &WallSet {
        &self.walls
    }

    /// Number of placed walls.
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Mutation counter, bumped once per placed wall.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_inside() {
        let board = GridBoard::new(9);
        assert!(board.is_inside(0, 0));
        assert!(board.is_inside(8, 8));
        assert!(!board.is_inside(9, 0));
        assert!(!board.is_inside(-1, 4));
        assert!(!board.is_inside(4, 9));
    }

    #[test]
    fn test_add_wall_twice_fails_with_duplicate() {
        let mut board = GridBoard::new(9);
        let wall = Wall::horizontal(3, 3);

        assert_eq!(board.add_wall(wall), Ok(()));
        assert_eq!(board.add_wall(wall), Err(WallError::DuplicateWall));
        assert_eq!(board.wall_count(), 1);
        assert_eq!(board.version(), 1);
    }

    #[test]
    fn test_add_wall_out_of_range() {
        let mut board = GridBoard::new(9);
        assert_eq!(board.add_wall(Wall::vertical(0, 0)), Err(WallError::OutOfRange));
        assert_eq!(board.add_wall(Wall::horizontal(2, 0)), Err(WallError::OutOfRange));
        assert_eq!(board.wall_count(), 0);
        assert_eq!(board.version(), 0);
    }

    #[test]
    fn test_valid_wall_placement_is_pure() {
        let mut board = GridBoard::new(9);
        board.add_wall(Wall::vertical(4, 4)).unwrap();
        let before = board.clone();

        assert!(!board.is_valid_wall_placement(Wall::vertical(4, 4)));
        assert!(board.is_valid_wall_placement(Wall::horizontal(4, 4)));
        assert!(!board.is_valid_wall_placement(Wall::vertical(0, 3)));

        assert_eq!(board, before);
    }

    #[test]
    fn test_movement_blocked_symmetric() {
        let mut board = GridBoard::new(9);
        board.add_wall(Wall::vertical(5, 2)).unwrap();

        assert!(board.is_movement_blocked(Coord::new(4, 2), Coord::new(5, 2)));
        assert!(board.is_movement_blocked(Coord::new(5, 2), Coord::new(4, 2)));
        assert!(!board.is_movement_blocked(Coord::new(5, 2), Coord::new(6, 2)));
        assert!(!board.is_movement_blocked(Coord::new(4, 3), Coord::new(5, 3)));
    }
}
