//! Players and tournament rosters.
//!
//! ## Player
//!
//! A sum type over the two player kinds. Value equality is identity: two
//! players built independently from the same strategies rank as one.
//!
//! ## Roster
//!
//! `create_players` enumerates the rosters used by the tournament drivers.

pub mod player;
pub mod roster;

pub use player::Player;
pub use roster::{create_players, PlayerKind};
