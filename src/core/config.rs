//! Arena configuration.
//!
//! One `ArenaConfig` drives a whole run: how many rounds are played from
//! each starting pair, how the shared RNG is seeded, where the success
//! line sits and whether the randomness diagnostic is active.

use serde::{Deserialize, Serialize};

use super::ArenaError;

/// Tolerance band for the randomness diagnostic.
///
/// When either player draws randomly, every outcome share over a match
/// should land within `tolerance` points of `expected` percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomnessCheck {
    /// Expected share of each outcome, in percent.
    pub expected: u8,
    /// Allowed absolute deviation, in percentage points.
    pub tolerance: u8,
}

impl Default for RandomnessCheck {
    fn default() -> Self {
        Self {
            expected: 33,
            tolerance: 1,
        }
    }
}

impl RandomnessCheck {
    /// Is `rate` inside the band?
    #[must_use]
    pub fn accepts(&self, rate: u32) -> bool {
        rate.abs_diff(u32::from(self.expected)) <= u32::from(self.tolerance)
    }
}

/// Arena configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Rounds played from each of the nine starting pairs.
    /// A match is `rounds_per_start * 9` rounds.
    pub rounds_per_start: u32,

    /// Seed for the shared RNG.
    pub seed: u64,

    /// Player 1 succeeds when its truncated win rate is strictly above this.
    /// Statistics handed to an arena must be built from the same value
    /// (`Statistics::from_config`).
    pub success_threshold: u8,

    /// Entries shown in the ranking report.
    pub ranking_size: usize,

    /// Randomness diagnostic, `None` to disable.
    pub randomness_check: Option<RandomnessCheck>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            rounds_per_start: 1000,
            seed: 42,
            success_threshold: 50,
            ranking_size: 5,
            randomness_check: Some(RandomnessCheck::default()),
        }
    }
}

impl ArenaConfig {
    /// Create a config with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rounds per starting pair.
    pub fn with_rounds_per_start(mut self, rounds: u32) -> Self {
        self.rounds_per_start = rounds;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the success threshold (percent).
    pub fn with_success_threshold(mut self, threshold: u8) -> Self {
        self.success_threshold = threshold;
        self
    }

    /// Set the number of ranking entries reported.
    pub fn with_ranking_size(mut self, size: usize) -> Self {
        self.ranking_size = size;
        self
    }

    /// Replace the randomness diagnostic.
    pub fn with_randomness_check(mut self, check: Option<RandomnessCheck>) -> Self {
        self.randomness_check = check;
        self
    }

    /// Total rounds in one match.
    #[must_use]
    pub fn rounds_per_match(&self) -> u64 {
        u64::from(self.rounds_per_start) * 9
    }

    /// Reject configurations the match runner cannot play.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.rounds_per_start == 0 {
            return Err(ArenaError::InvalidConfig(
                "rounds_per_start must be at least 1".into(),
            ));
        }
        if self.success_threshold > 100 {
            return Err(ArenaError::InvalidConfig(format!(
                "success_threshold {} exceeds 100",
                self.success_threshold
            )));
        }
        if let Some(check) = self.randomness_check {
            if check.expected > 100 {
                return Err(ArenaError::InvalidConfig(format!(
                    "randomness expected share {} exceeds 100",
                    check.expected
                )));
            }
        }
        Ok(())
    }
}
