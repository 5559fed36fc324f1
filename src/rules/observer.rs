//! Notifications for collaborators that mirror game state (renderers, UIs).
//!
//! The engine holds no presentation state. Observers are called
//! synchronously, after the change has been committed.

use crate::core::{Coord, PlayerKind, Wall};

/// Receiver for committed game events.
///
/// Every method has an empty default, so implementors only override what
/// they care about.
pub trait GameObserver: Send {
    /// A wall was placed.
    fn wall_placed(&mut self, _player: PlayerKind, _wall: Wall) {}

    /// A pawn moved.
    fn pawn_moved(&mut self, _player: PlayerKind, _from: Coord, _to: Coord) {}

    /// A player reached their goal row.
    fn game_won(&mut self, _winner: PlayerKind) {}
}

/// Observer that ignores everything. The default.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {}

/// Adapts a closure into a wall-placement observer.
///
/// ```
/// use rust_quoridor::core::Orientation;
/// use rust_quoridor::rules::{Game, WallCallback};
///
/// let mut game = Game::default().with_observer(WallCallback::new(|wall| {
///     println!("draw {wall}");
/// }));
/// assert!(game.place_wall(2, 3, Orientation::Horizontal));
/// ```
pub struct WallCallback<F>(pub F);

impl<F> WallCallback<F>
where
    F: FnMut(Wall) + Send,
{
    /// Wrap a closure.
    pub fn new(callback: F) -> Self {
        Self(callback)
    }
}

impl<F> GameObserver for WallCallback<F>
where
    F: FnMut(Wall) + Send,
{
    fn wall_placed(&mut self, _player: PlayerKind, wall: Wall) {
        (self.0)(wall);
    }
}
