//! Per-decision statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Counters collected during one AI decision, or summed over a match.
///
/// Equality ignores `time_us`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DecisionStats {
    /// Candidates that received a score.
    pub candidates_scored: u32,

    /// Wall placements simulated on a copied wall set.
    pub simulations: u32,

    /// Wall candidates dropped (invalid, no gain, or cutting off a path).
    pub discarded: u32,

    /// Shortest-path searches run.
    pub path_searches: u32,

    /// The decision came from the fixed-order fallback.
    pub fallback_used: bool,

    /// The decision returned early (winning move or imminent block).
    pub short_circuit: bool,

    /// Wall-clock time spent deciding (microseconds).
    pub time_us: u64,
}

impl DecisionStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of simulated walls that were discarded.
    #[must_use]
    pub fn discard_rate(&self) -> f64 {
        if self.simulations == 0 {
            0.0
        } else {
            f64::from(self.discarded) / f64::from(self.simulations)
        }
    }

    /// Add another decision's counters to these.
    ///
    /// Flags are sticky: set if either side had them set.
    pub fn merge(&mut self, other: &DecisionStats) {
        self.candidates_scored += other.candidates_scored;
        self.simulations += other.simulations;
        self.discarded += other.discarded;
        self.path_searches += other.path_searches;
        self.fallback_used |= other.fallback_used;
        self.short_circuit |= other.short_circuit;
        self.time_us = self.time_us.saturating_add(other.time_us);
    }
}

impl PartialEq for DecisionStats {
    fn eq(&self, other: &Self) -> bool {
        self.candidates_scored == other.candidates_scored
            && self.simulations == other.simulations
            && self.discarded == other.discarded
            && self.path_searches == other.path_searches
            && self.fallback_used == other.fallback_used
            && self.short_circuit == other.short_circuit
    }
}

impl Eq for DecisionStats {}
