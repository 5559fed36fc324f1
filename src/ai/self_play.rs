//! Policy-vs-policy matches.
//!
//! Runs a full game through the rules engine, asking each seat's
//! [`Policy`] for an action in turn. Used for regression tests and for
//! tuning [`AiConfig`](super::AiConfig) weights.

use tracing::{debug, info, instrument, warn};

use crate::core::{ConfigError, GameConfig, MoveRecord, PlayerKind, PlayerMap, RulesError};
use crate::rules::Game;

use super::policy::Policy;
use super::stats::DecisionStats;

/// Result of one match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Winner, or `None` if the ply limit was hit or an action failed.
    pub winner: Option<PlayerKind>,

    /// Actions applied.
    pub plies: u32,

    /// Walls placed by each seat.
    pub walls_placed: PlayerMap<u32>,

    /// Pawn moves, oldest first.
    pub history: Vec<MoveRecord>,

    /// First rejected action, which ends the match.
    pub error: Option<RulesError>,

    /// Search counters summed per seat. Zero for policies that keep none.
    pub decision_stats: PlayerMap<DecisionStats>,
}

impl MatchOutcome {
    /// True if the match ended with a winner.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }
}

/// Play one match of at most `max_plies` actions.
#[instrument(level = "debug", skip(human, ai), fields(human_policy = human.name(), ai_policy = ai.name()))]
pub fn play_match(
    config: GameConfig,
    human: &mut dyn Policy,
    ai: &mut dyn Policy,
    max_plies: u32,
) -> Result<MatchOutcome, ConfigError> {
    let mut game = Game::new(config)?;
    let mut walls_placed: PlayerMap<u32> = PlayerMap::default();
    let mut decision_stats: PlayerMap<DecisionStats> = PlayerMap::default();
    let mut error = None;

    while !game.is_game_over() && game.ply() < max_plies {
        let seat = game.current_player();
        let policy: &mut dyn Policy = match seat {
            PlayerKind::Human => &mut *human,
            PlayerKind::Ai => &mut *ai,
        };
        let (action, stats) = policy.choose_with_stats(&game.view(), seat);
        if let Some(stats) = stats {
            decision_stats[seat].merge(&stats);
        }

        if let Err(err) = game.apply_action(&action) {
            warn!(%seat, %action, %err, "policy chose an illegal action");
            error = Some(err);
            break;
        }
        if action.is_wall() {
            walls_placed[seat] += 1;
        }
        debug!(%seat, %action, ply = game.ply(), "applied");
    }

    let outcome = MatchOutcome {
        winner: game.winner(),
        plies: game.ply(),
        walls_placed,
        history: game.history().to_vec(),
        error,
        decision_stats,
    };
    info!(
        winner = ?outcome.winner,
        plies = outcome.plies,
        human_discard_rate = outcome.decision_stats[PlayerKind::Human].discard_rate(),
        ai_discard_rate = outcome.decision_stats[PlayerKind::Ai].discard_rate(),
        "match finished"
    );
    Ok(outcome)
}
