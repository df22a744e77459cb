//! Per-match counters.

use serde::{Deserialize, Serialize};

use crate::core::Outcome;
use crate::players::Player;

/// Round counts for one match, seen from player 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub player1: Player,
    pub player2: Player,
    pub rounds: u64,
    pub wins: u64,
    pub losses: u64,
    pub ties: u64,
}

impl MatchSummary {
    /// Empty tally for a new match.
    #[must_use]
    pub fn new(player1: Player, player2: Player) -> Self {
        Self {
            player1,
            player2,
            rounds: 0,
            wins: 0,
            losses: 0,
            ties: 0,
        }
    }

    /// Count one round.
    pub fn record(&mut self, outcome: Outcome) {
        self.rounds += 1;
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    /// Truncated percentage of wins.
    ///
    /// # Panics
    /// If no rounds were recorded.
    #[must_use]
    pub fn win_rate(&self) -> u32 {
        self.percent(self.wins)
    }

    /// Truncated percentage of losses.
    #[must_use]
    pub fn lose_rate(&self) -> u32 {
        self.percent(self.losses)
    }

    /// Truncated percentage of ties.
    #[must_use]
    pub fn tie_rate(&self) -> u32 {
        self.percent(self.ties)
    }

    /// Truncated percentage for `outcome`.
    #[must_use]
    pub fn rate(&self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::Win => self.win_rate(),
            Outcome::Lose => self.lose_rate(),
            Outcome::Tie => self.tie_rate(),
        }
    }

    /// Exact floor of `count * 100 / rounds`. Floating-point truncation can
    /// land one lower (2610 of 9000 gives 29 here, 28 via `f64`).
    fn percent(&self, count: u64) -> u32 {
        assert!(self.rounds > 0, "percentage requested before any round was played");
        // count <= rounds, so the quotient is at most 100
        (count * 100 / self.rounds) as u32
    }
}
