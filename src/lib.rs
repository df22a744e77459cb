//! # rps-arena
//!
//! Rock-Paper-Scissors strategy tournaments.
//!
//! ## Design Principles
//!
//! 1. **First-order players**: A player's next move depends only on the
//!    round just played (own move, opponent move, own outcome). No history.
//!
//! 2. **Value identity**: Players are plain values. Two players built from
//!    the same strategies are the same ranking entry.
//!
//! 3. **Explicit randomness**: One seeded `GameRng` per arena feeds every
//!    `Random` draw of a run. Same seed, same tournament.
//!
//! ## Modules
//!
//! - `core`: Moves, outcomes, RNG, configuration, errors
//! - `strategy`: Strategy rules and the strategy engine
//! - `players`: Simple and adaptive players, roster enumeration
//! - `stats`: Per-match counters and the cross-match ranking
//! - `arena`: Match runner and its observer hooks
//! - `tournament`: Round robin, head-to-head comparison, randomness probe
//! - `report`: Console report formats

pub mod core;
pub mod strategy;
pub mod players;
pub mod stats;
pub mod arena;
pub mod tournament;
pub mod report;

// Re-export commonly used types
pub use crate::core::{
    resolve, ArenaConfig, ArenaError, GameRng, GameRngState, Move, Outcome, RandomnessCheck,
};

pub use crate::strategy::{next_move, Strategy};

pub use crate::players::{create_players, Player, PlayerKind};

pub use crate::stats::{MatchSummary, Phase, Ranking, RankingEntry, Statistics};

pub use crate::arena::{
    Arena, ArenaObserver, LogObserver, NullObserver, RandomnessDrift, RoundRecord, START_PAIRS,
};

pub use crate::tournament::{beaten_by, compare, randomness_probe, round_robin};

pub use crate::report::{ComparisonReport, MatchReport, RankingReport};
