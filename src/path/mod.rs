//! Breadth-first shortest-path search over the grid.
//!
//! Searches run against a [`WallSet`](crate::core::WallSet) rather than a
//! board, so the same code serves the live board and the AI's simulated
//! wall sets. Every query is computed fresh; no result can outlive the
//! walls it was computed for.
//!
//! Pawns are not obstacles for the search: a path describes the route
//! walls allow, not which cells are free this turn.

mod search;

pub use search::{can_reach, distance_to_row, shortest_path, EmptyPathError, Path};
