//! Match runner.
//!
//! ## Overview
//!
//! A match between an ordered pair of players is played from each of the
//! nine starting move pairs in turn, `rounds_per_start` rounds each. Every
//! round is resolved, player 1's outcome is recorded, and both players pick
//! their next move from the same round's state.
//!
//! ## Usage
//!
//! ```rust
//! use rps_arena::arena::Arena;
//! use rps_arena::core::ArenaConfig;
//! use rps_arena::players::Player;
//! use rps_arena::stats::Statistics;
//! use rps_arena::strategy::Strategy;
//!
//! let config = ArenaConfig::default().with_rounds_per_start(30);
//! let mut stats = Statistics::from_config(&config);
//! let mut arena = Arena::new(config);
//!
//! let forward = Player::simple(Strategy::Forward);
//! let keep = Player::simple(Strategy::Keep);
//! arena.play_match(forward, keep, &mut stats);
//!
//! assert_eq!(stats.rounds_played(), 270);
//! ```

pub mod observer;
pub mod runner;

pub use observer::{ArenaObserver, LogObserver, NullObserver, RandomnessDrift, RoundRecord};
pub use runner::{Arena, START_PAIRS};
