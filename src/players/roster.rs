//! Roster enumeration for round-robin tournaments.

use serde::{Deserialize, Serialize};

use super::Player;
use crate::strategy::Strategy;

/// Which kind of player a roster holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    Simple,
    Adaptive,
}

/// Enumerate every player of `kind` built from `Strategy::BASE`.
///
/// Simple rosters hold one player per base strategy. Adaptive rosters hold
/// the full cube over (win, lose, tie), win varying slowest.
pub fn create_players(kind: PlayerKind) -> Vec<Player> {
    match kind {
        PlayerKind::Simple => Strategy::BASE.into_iter().map(Player::simple).collect(),
        PlayerKind::Adaptive => {
            let mut players = Vec::with_capacity(Strategy::BASE.len().pow(3));
            for win in Strategy::BASE {
                for lose in Strategy::BASE {
                    for tie in Strategy::BASE {
                        players.push(Player::adaptive(win, lose, tie));
                    }
                }
            }
            players
        }
    }
}
