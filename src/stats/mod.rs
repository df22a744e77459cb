//! Match statistics and the cross-match ranking.
//!
//! ## Lifetimes
//!
//! - **Per match**: `MatchSummary` counters, reset by `begin_match`.
//! - **Per run**: `Ranking`, never reset; every successful match adds one
//!   point to its player 1.
//!
//! ## Phases
//!
//! `Idle -> InMatch -> Idle`. Recording a round while idle is a
//! programming error and panics. The last match's counters stay readable
//! after `end_match` until the next `begin_match`.

pub mod ranking;
pub mod summary;

pub use ranking::{Ranking, RankingEntry};
pub use summary::MatchSummary;

use crate::core::{ArenaConfig, Outcome};
use crate::players::Player;

/// Statistics phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    InMatch,
}

/// Statistics collector shared by every match of a run.
#[derive(Clone, Debug)]
pub struct Statistics {
    success_threshold: u8,
    phase: Phase,
    current: Option<MatchSummary>,
    ranking: Ranking,
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new(50)
    }
}

impl Statistics {
    /// Create a collector; player 1 succeeds above `success_threshold`
    /// percent wins.
    pub fn new(success_threshold: u8) -> Self {
        Self {
            success_threshold,
            phase: Phase::Idle,
            current: None,
            ranking: Ranking::new(),
        }
    }

    /// Create a collector using the config's success threshold.
    pub fn from_config(config: &ArenaConfig) -> Self {
        Self::new(config.success_threshold)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn success_threshold(&self) -> u8 {
        self.success_threshold
    }

    /// Start a match: stores the pair and zeroes the counters.
    ///
    /// # Panics
    /// If a match is already in progress.
    pub fn begin_match(&mut self, player1: Player, player2: Player) {
        assert_eq!(self.phase, Phase::Idle, "begin_match called during a match");
        self.current = Some(MatchSummary::new(player1, player2));
        self.phase = Phase::InMatch;
    }

    /// Record player 1's outcome for one round.
    ///
    /// # Panics
    /// If no match is in progress.
    pub fn update(&mut self, outcome: Outcome) {
        assert_eq!(self.phase, Phase::InMatch, "update called outside a match");
        self.current_mut().record(outcome);
    }

    /// Close the match. A successful player 1 gains one ranking point.
    /// Returns whether the match was successful.
    ///
    /// # Panics
    /// If no match is in progress or no round was recorded.
    pub fn end_match(&mut self) -> bool {
        assert_eq!(self.phase, Phase::InMatch, "end_match called outside a match");
        let successful = self.is_successful();
        if successful {
            let player1 = self.summary().player1;
            let score = self.ranking.increment(player1);
            log::trace!("{} now scores {}", player1, score);
        }
        self.phase = Phase::Idle;
        successful
    }

    /// Is player 1's truncated win rate strictly above the threshold?
    #[must_use]
    pub fn is_successful(&self) -> bool {
        self.win_rate() > u32::from(self.success_threshold)
    }

    /// Counters of the current (or last finished) match.
    ///
    /// # Panics
    /// If no match was ever started.
    #[must_use]
    pub fn summary(&self) -> &MatchSummary {
        self.current
            .as_ref()
            .expect("statistics queried before begin_match")
    }

    #[must_use]
    pub fn rounds_played(&self) -> u64 {
        self.current.as_ref().map_or(0, |s| s.rounds)
    }

    #[must_use]
    pub fn win_rate(&self) -> u32 {
        self.summary().win_rate()
    }

    #[must_use]
    pub fn lose_rate(&self) -> u32 {
        self.summary().lose_rate()
    }

    #[must_use]
    pub fn tie_rate(&self) -> u32 {
        self.summary().tie_rate()
    }

    #[must_use]
    pub fn ranking(&self) -> &Ranking {
        &self.ranking
    }

    /// Up to `n` ranking entries, best first.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<RankingEntry> {
        self.ranking.top(n)
    }

    fn current_mut(&mut self) -> &mut MatchSummary {
        self.current
            .as_mut()
            .expect("match counters missing while in a match")
    }
}
