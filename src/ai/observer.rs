//! Decision tracing hooks.
//!
//! The strategy reports what it considered through a `DecisionObserver`.
//! The default is [`NullObserver`], which keeps tests silent;
//! [`TracingObserver`] forwards everything to `tracing` at debug/trace
//! level.

use std::sync::{Arc, Mutex};

use tracing::{debug, trace};

use crate::core::{PlayerKind, Wall};

use super::scoring::{DiscardReason, Urgency};
use super::strategy::{Candidate, Decision};

/// Receiver for the steps of one AI decision.
pub trait DecisionObserver: Send {
    /// Urgency was classified from the opponent's distance.
    fn urgency(&mut self, _player: PlayerKind, _opponent_distance: u32, _urgency: Urgency) {}

    /// A candidate was scored.
    fn candidate(&mut self, _candidate: &Candidate) {}

    /// A wall candidate was dropped.
    fn discarded(&mut self, _wall: Wall, _reason: DiscardReason) {}

    /// The final decision.
    fn decided(&mut self, _decision: &Decision) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl DecisionObserver for NullObserver {}

/// Observer that emits `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl DecisionObserver for TracingObserver {
    fn urgency(&mut self, player: PlayerKind, opponent_distance: u32, urgency: Urgency) {
        debug!(%player, opponent_distance, %urgency, "assessed position");
    }

    fn candidate(&mut self, candidate: &Candidate) {
        trace!(action = %candidate.action, score = candidate.score, origin = ?candidate.origin, "candidate");
    }

    fn discarded(&mut self, wall: Wall, reason: DiscardReason) {
        trace!(%wall, %reason, "wall discarded");
    }

    fn decided(&mut self, decision: &Decision) {
        debug!(
            action = %decision.action,
            score = ?decision.score,
            urgency = %decision.urgency,
            candidates = decision.stats.candidates_scored,
            simulations = decision.stats.simulations,
            "decided"
        );
    }
}

/// Observer that records every event, for tests and tooling.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    /// Scored candidates, in generation order.
    pub candidates: Vec<Candidate>,
    /// Dropped walls and why.
    pub discarded: Vec<(Wall, DiscardReason)>,
    /// Decisions made.
    pub decisions: Vec<Decision>,
}

impl DecisionObserver for RecordingObserver {
    fn candidate(&mut self, candidate: &Candidate) {
        self.candidates.push(candidate.clone());
    }

    fn discarded(&mut self, wall: Wall, reason: DiscardReason) {
        self.discarded.push((wall, reason));
    }

    fn decided(&mut self, decision: &Decision) {
        self.decisions.push(decision.clone());
    }
}

/// Shared observers, so a caller can inspect what the strategy reported.
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use rust_quoridor::ai::{AiStrategy, RecordingObserver};
/// use rust_quoridor::core::PlayerKind;
/// use rust_quoridor::rules::Game;
///
/// let log = Arc::new(Mutex::new(RecordingObserver::default()));
/// let mut ai = AiStrategy::default().with_observer(Arc::clone(&log));
/// let game = Game::default();
/// ai.decide(&game.view(), PlayerKind::Ai);
/// assert_eq!(log.lock().unwrap().decisions.len(), 1);
/// ```
impl<T: DecisionObserver> DecisionObserver for Arc<Mutex<T>> {
    fn urgency(&mut self, player: PlayerKind, opponent_distance: u32, urgency: Urgency) {
        if let Ok(mut inner) = self.lock() {
            inner.urgency(player, opponent_distance, urgency);
        }
    }

    fn candidate(&mut self, candidate: &Candidate) {
        if let Ok(mut inner) = self.lock() {
            inner.candidate(candidate);
        }
    }

    fn discarded(&mut self, wall: Wall, reason: DiscardReason) {
        if let Ok(mut inner) = self.lock() {
            inner.discarded(wall, reason);
        }
    }

    fn decided(&mut self, decision: &Decision) {
        if let Ok(mut inner) = self.lock() {
            inner.decided(decision);
        }
    }
}
