//! Strategies and the strategy engine.
//!
//! A strategy is a first-order transition rule: the next move depends only
//! on the player's own last move and the opponent's last move (plus the
//! shared RNG for `Random`).

pub mod engine;

pub use engine::{next_move, Strategy};
