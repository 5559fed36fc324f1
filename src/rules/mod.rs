//! Rules engine: turn order, action application, win detection.
//!
//! [`Game`] is the only type that mutates a board or a player. Human input
//! and AI decisions both go through it as [`Action`](crate::core::Action)s
//! and are validated the same way.

pub mod builder;
pub mod engine;
pub mod observer;

pub use builder::GameBuilder;
pub use engine::Game;
pub use observer::{GameObserver, NoopObserver, WallCallback};
