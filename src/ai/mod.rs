//! Computer opponent.
//!
//! A bounded single-ply heuristic: it never searches deeper than "what
//! happens to both shortest routes if I make this one action". The
//! decision unit takes a read-only [`GameView`](crate::core::GameView)
//! and a seat, so it can be tested against synthetic positions without a
//! running game.
//!
//! ## Modules
//!
//! - `config`: scoring weights and thresholds
//! - `scoring`: urgency, wall simulation, candidate scores
//! - `strategy`: the decision procedure
//! - `observer`: decision tracing hooks
//! - `policy`: the `Policy` trait and a random baseline
//! - `self_play`: policy-vs-policy matches
//! - `stats`: per-decision counters

pub mod config;
pub mod observer;
pub mod policy;
pub mod scoring;
pub mod self_play;
pub mod stats;
pub mod strategy;

pub use config::AiConfig;
pub use observer::{DecisionObserver, NullObserver, RecordingObserver, TracingObserver};
pub use policy::{Policy, RandomMover};
pub use scoring::{
    blocking_walls, simulate_wall, DiscardReason, SimulationError, Urgency, UNREACHABLE_DISTANCE,
};
pub use self_play::{play_match, MatchOutcome};
pub use stats::DecisionStats;
pub use strategy::{AiStrategy, Candidate, CandidateOrigin, Decision};
