//! Strategy definitions and execution.

use serde::{Deserialize, Serialize};

use crate::core::{ArenaError, GameRng, Move};

/// Named move-transition rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Uniform draw from the shared RNG, ignoring history.
    Random,
    /// Repeat own last move.
    Keep,
    /// Advance own last move one step (Rock -> Paper -> Scissors).
    Forward,
    /// Retreat own last move one step.
    Backward,
    /// Repeat the opponent's last move.
    Copy,
    /// Always Rock.
    Rock,
    /// Always Paper.
    Paper,
    /// Always Scissors.
    Scissors,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Strategy; 8] = [
        Strategy::Random,
        Strategy::Keep,
        Strategy::Forward,
        Strategy::Backward,
        Strategy::Copy,
        Strategy::Rock,
        Strategy::Paper,
        Strategy::Scissors,
    ];

    /// Strategies used to build tournament rosters: everything except
    /// `Random` and the three fixed moves.
    pub const BASE: [Strategy; 4] = [
        Strategy::Keep,
        Strategy::Forward,
        Strategy::Backward,
        Strategy::Copy,
    ];

    /// Does this strategy draw from the RNG?
    #[must_use]
    pub const fn is_random(self) -> bool {
        matches!(self, Strategy::Random)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Random => "Random",
            Strategy::Keep => "Keep",
            Strategy::Forward => "Forward",
            Strategy::Backward => "Backward",
            Strategy::Copy => "Copy",
            Strategy::Rock => "Rock",
            Strategy::Paper => "Paper",
            Strategy::Scissors => "Scissors",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Strategy {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ArenaError::UnknownStrategy(trimmed.to_string()))
    }
}

impl TryFrom<u8> for Strategy {
    type Error = ArenaError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Strategy::ALL
            .get(usize::from(raw))
            .copied()
            .ok_or(ArenaError::StrategyOutOfRange(raw))
    }
}

/// Compute the next move for `strategy`.
///
/// # Arguments
/// * `strategy` - The rule to apply
/// * `own` - This player's move in the round just played
/// * `opponent` - The opponent's move in the round just played
/// * `rng` - Shared RNG, only touched by `Random`
pub fn next_move(strategy: Strategy, own: Move, opponent: Move, rng: &mut GameRng) -> Move {
    match strategy {
        Strategy::Random => rng.gen_move(),
        Strategy::Keep => own,
        Strategy::Forward => own.next(),
        Strategy::Backward => own.previous(),
        Strategy::Copy => opponent,
        Strategy::Rock => Move::Rock,
        Strategy::Paper => Move::Paper,
        Strategy::Scissors => Move::Scissors,
    }
}
