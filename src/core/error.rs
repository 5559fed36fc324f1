//! Error taxonomy for rules validation.
//!
//! Every variant is recoverable: the rules engine reports it and leaves
//! state untouched. The `bool` API on [`Game`](crate::rules::Game) folds
//! these into `false`; the `try_*` API hands them back.

use thiserror::Error;

use super::player::PlayerKind;

/// Why a pawn move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Destination is outside the board.
    #[error("destination is outside the board")]
    OutOfBounds,
    /// Destination holds the other pawn.
    #[error("destination is occupied by the other player")]
    Occupied,
    /// Destination is not one orthogonal step away.
    #[error("destination is not orthogonally adjacent")]
    NotAdjacent,
    /// A wall sits on the edge being crossed.
    #[error("a wall blocks this move")]
    WallBlocked,
}

/// Why a wall placement was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum WallError {
    /// Edge index is outside the valid range for its orientation.
    #[error("wall edge index is out of range")]
    OutOfRange,
    /// A wall already occupies this edge.
    #[error("a wall is already placed on this edge")]
    DuplicateWall,
    /// The placing player has no walls left.
    #[error("no walls remaining")]
    NoWallsLeft,
    /// The wall would leave a player with no route to their goal row.
    #[error("wall would cut a player off from their goal row")]
    BlocksPath,
}

/// Any rejected action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    /// Illegal pawn move.
    #[error("illegal move: {0}")]
    IllegalMove(#[from] MoveError),
    /// Illegal wall placement.
    #[error("illegal wall placement: {0}")]
    IllegalWallPlacement(#[from] WallError),
    /// Action attempted out of turn.
    #[error("it is {expected}'s turn, not {actual}'s")]
    MisorderedAction {
        /// Player whose turn it is.
        expected: PlayerKind,
        /// Player who attempted to act.
        actual: PlayerKind,
    },
    /// Player tried to pass while a legal move exists.
    #[error("cannot pass while a legal move exists")]
    CannotPass,
    /// The game has already been won.
    #[error("the game is over")]
    GameOver,
}

/// Invalid game configuration or setup.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Board size outside the supported range.
    #[error("board size {0} is not supported (must be {min}..={max})", min = super::config::MIN_BOARD_SIZE, max = super::config::MAX_BOARD_SIZE)]
    BoardSize(i32),
    /// A pawn was placed off the board.
    #[error("{0} starts outside the board")]
    PawnOutOfBounds(PlayerKind),
    /// Both pawns share a cell.
    #[error("both pawns start on the same cell")]
    PawnsOverlap,
    /// A preset wall is invalid.
    #[error("preset wall rejected: {0}")]
    Wall(#[from] WallError),
}
