//! Core vocabulary: moves, outcomes, RNG, configuration, errors.
//!
//! Everything here is independent of players and strategies; the higher
//! layers build on these values.

pub mod moves;
pub mod rng;
pub mod config;
pub mod error;

pub use moves::{resolve, Move, Outcome};
pub use rng::{GameRng, GameRngState};
pub use config::{ArenaConfig, RandomnessCheck};
pub use error::ArenaError;
