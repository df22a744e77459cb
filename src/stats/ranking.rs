//! Cross-match ranking of successful players.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::players::Player;

/// One ranking line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub player: Player,
    pub score: u32,
}

/// Successful-match counts keyed by player identity.
///
/// Entries keep their first-insertion order, which breaks ties in `top`.
#[derive(Clone, Debug, Default)]
pub struct Ranking {
    entries: Vec<RankingEntry>,
    index: FxHashMap<Player, usize>,
}

impl Ranking {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one point to `player`, creating the entry at zero first.
    /// Returns the new score.
    pub fn increment(&mut self, player: Player) -> u32 {
        let slot = match self.index.get(&player) {
            Some(&slot) => slot,
            None => {
                self.entries.push(RankingEntry { player, score: 0 });
                let slot = self.entries.len() - 1;
                self.index.insert(player, slot);
                slot
            }
        };
        let entry = &mut self.entries[slot];
        entry.score += 1;
        entry.score
    }

    /// Current score, zero when the player never succeeded.
    #[must_use]
    pub fn score(&self, player: &Player) -> u32 {
        self.index
            .get(player)
            .map(|&slot| self.entries[slot].score)
            .unwrap_or(0)
    }

    /// Up to `n` entries by descending score, ties in insertion order.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<RankingEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));
        sorted.truncate(n);
        sorted
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &RankingEntry> {
        self.entries.iter()
    }
}
