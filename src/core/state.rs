//! Game progression state and the read-only view handed to policies.
//!
//! ## GameState
//!
//! `Playing` until a pawn reaches its goal row, then `Won`. `Draw` is kept
//! for completeness; the current rules never produce it.
//!
//! ## GameView
//!
//! Borrowed snapshot of everything a decision needs: board, both players,
//! whose turn it is. Move legality lives here so the rules engine and the
//! AI's move generator share one definition.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::GridBoard;
use super::coord::{Coord, Direction};
use super::error::MoveError;
use super::player::{PlayerKind, PlayerMap, PlayerState};
use super::wall::Wall;
use crate::path;

/// Session progression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Actions are accepted.
    #[default]
    Playing,
    /// A player reached their goal row.
    Won,
    /// Reserved.
    Draw,
}

impl GameState {
    /// True once no further actions are accepted.
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameState::Playing)
    }
}

/// Read-only view of a game.
#[derive(Clone, Copy, Debug)]
pub struct GameView<'a> {
    board: &'a GridBoard,
    players: &'a PlayerMap<PlayerState>,
    current: PlayerKind,
    state: GameState,
}

impl<'a> GameView<'a> {
    /// Build a view from its parts.
    ///
    /// Useful for evaluating synthetic positions without a full `Game`.
    #[must_use]
    pub fn new(
        board: &'a GridBoard,
        players: &'a PlayerMap<PlayerState>,
        current: PlayerKind,
        state: GameState,
    ) -> Self {
        Self {
            board,
            players,
            current,
            state,
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &'a GridBoard {
        self.board
    }

    /// A player's state.
    #[must_use]
    pub fn player(&self, kind: PlayerKind) -> &'a PlayerState {
        &self.players[kind]
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerKind {
        self.current
    }

    /// Progression state.
    #[must_use]
    pub fn game_state(&self) -> GameState {
        self.state
    }

    /// Legality of `player` stepping to `to`, ignoring turn order.
    ///
    /// Checks bounds, occupancy, adjacency and walls, in that order.
    pub fn check_move(&self, player: PlayerKind, to: Coord) -> Result<(), MoveError> {
        if !self.board.contains(to) {
            return Err(MoveError::OutOfBounds);
        }
        if self.players[player.opponent()].position() == to {
            return Err(MoveError::Occupied);
        }
        let from = self.players[player].position();
        if !from.is_adjacent(to) {
            return Err(MoveError::NotAdjacent);
        }
        if self.board.is_movement_blocked(from, to) {
            return Err(MoveError::WallBlocked);
        }
        Ok(())
    }

    /// Every legal destination for `player`, in [`Direction::ALL`] order.
    #[must_use]
    pub fn legal_moves(&self, player: PlayerKind) -> SmallVec<[Coord; 4]> {
        let from = self.players[player].position();
        Direction::ALL
            .iter()
            .map(|&dir| from.step(dir))
            .filter(|&to| self.check_move(player, to).is_ok())
            .collect()
    }

    /// True if both players still reach their goal rows with `wall` added.
    ///
    /// Works on a copy of the wall set; the board is not touched.
    #[must_use]
    pub fn wall_keeps_routes(&self, wall: Wall) -> bool {
        let walls = self.board.walls().with(wall);
        PlayerKind::BOTH.iter().all(|&kind| {
            let player = &self.players[kind];
            path::can_reach(&walls, self.board.size(), player.position(), player.goal_row())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(human: Coord, ai: Coord) -> PlayerMap<PlayerState> {
        PlayerMap::new(|kind| match kind {
            PlayerKind::Human => PlayerState::new(kind, human, 10, 0),
            PlayerKind::Ai => PlayerState::new(kind, ai, 10, 8),
        })
    }

    #[test]
    fn test_game_state_is_over() {
        assert!(!GameState::Playing.is_over());
        assert!(GameState::Won.is_over());
        assert_eq!(GameState::default(), GameState::Playing);
    }

    #[test]
    fn test_check_move_reasons() {
        let mut board = GridBoard::new(9);
        board.add_wall(Wall::vertical(4, 8)).unwrap();
        let players = players(Coord::new(4, 8), Coord::new(5, 8));
        let view = GameView::new(&board, &players, PlayerKind::Human, GameState::Playing);

        let human = PlayerKind::Human;
        assert_eq!(view.check_move(human, Coord::new(4, 9)), Err(MoveError::OutOfBounds));
        assert_eq!(view.check_move(human, Coord::new(5, 8)), Err(MoveError::Occupied));
        assert_eq!(view.check_move(human, Coord::new(4, 6)), Err(MoveError::NotAdjacent));
        assert_eq!(view.check_move(human, Coord::new(3, 8)), Err(MoveError::WallBlocked));
        assert_eq!(view.check_move(human, Coord::new(4, 7)), Ok(()));
    }

    #[test]
    fn test_legal_moves_in_corner() {
        let board = GridBoard::new(9);
        let players = players(Coord::new(0, 8), Coord::new(4, 0));
        let view = GameView::new(&board, &players, PlayerKind::Human, GameState::Playing);

        let moves = view.legal_moves(PlayerKind::Human);
        assert_eq!(moves.as_slice(), &[Coord::new(0, 7), Coord::new(1, 8)]);
    }

    #[test]
    fn test_wall_keeps_routes() {
        let mut board = GridBoard::new(3);
        board.add_wall(Wall::horizontal(0, 1)).unwrap();
        board.add_wall(Wall::horizontal(1, 1)).unwrap();
        let players = PlayerMap::new(|kind| match kind {
            PlayerKind::Human => PlayerState::new(kind, Coord::new(1, 2), 10, 0),
            PlayerKind::Ai => PlayerState::new(kind, Coord::new(1, 0), 10, 2),
        });
        let view = GameView::new(&board, &players, PlayerKind::Human, GameState::Playing);

        // Row 0 and row 1 are joined only through column 2.
        assert!(!view.wall_keeps_routes(Wall::horizontal(2, 1)));
        assert!(view.wall_keeps_routes(Wall::horizontal(2, 2)));
        assert_eq!(board.wall_count(), 2);
    }
}
