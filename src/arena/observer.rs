//! Hooks invoked by the match runner.

use serde::{Deserialize, Serialize};

use crate::core::{Move, Outcome, RandomnessCheck};
use crate::players::Player;
use crate::report::MatchReport;
use crate::stats::MatchSummary;

/// One played round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Starting pair this round descends from.
    pub start: (Move, Move),
    /// Round index within the starting pair (0-based).
    pub round: u32,
    pub move1: Move,
    pub move2: Move,
    pub outcome1: Outcome,
    pub outcome2: Outcome,
}

/// An outcome share outside the randomness band.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomnessDrift {
    pub player1: Player,
    pub player2: Player,
    pub outcome: Outcome,
    pub rate: u32,
    pub check: RandomnessCheck,
}

impl std::fmt::Display for RandomnessDrift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] vs [{}]: {} rate {}% outside {}% +/- {}",
            self.player1, self.player2, self.outcome, self.rate, self.check.expected, self.check.tolerance
        )
    }
}

/// Observer of match progress.
///
/// All methods default to no-ops, so observers only implement what they
/// need.
pub trait ArenaObserver {
    /// Called after every round is resolved.
    fn on_round(&mut self, _round: &RoundRecord) {}

    /// Called once for each successful match, before the match is closed.
    fn on_success(&mut self, _summary: &MatchSummary) {}

    /// Called for every outcome share that fails the randomness check.
    fn on_randomness_drift(&mut self, _drift: &RandomnessDrift) {}
}

/// Writes reports and drifts through the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl ArenaObserver for LogObserver {
    fn on_success(&mut self, summary: &MatchSummary) {
        log::info!("successful match\n{}", MatchReport(summary));
    }

    fn on_randomness_drift(&mut self, drift: &RandomnessDrift) {
        log::warn!("randomness drift: {}", drift);
    }
}

/// Ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl ArenaObserver for NullObserver {}

impl<O: ArenaObserver + ?Sized> ArenaObserver for &mut O {
    fn on_round(&mut self, round: &RoundRecord) {
        (**self).on_round(round);
    }

    fn on_success(&mut self, summary: &MatchSummary) {
        (**self).on_success(summary);
    }

    fn on_randomness_drift(&mut self, drift: &RandomnessDrift) {
        (**self).on_randomness_drift(drift);
    }
}
