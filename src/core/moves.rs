//! Moves, outcomes and the outcome resolver.
//!
//! ## Cyclic order
//!
//! Moves form a cycle `Rock -> Paper -> Scissors -> Rock` where every move
//! beats its predecessor and loses to its successor:
//!
//! ```
//! use rps_arena::core::{resolve, Move, Outcome};
//!
//! assert_eq!(Move::Rock.next(), Move::Paper);
//! assert!(Move::Paper.beats(Move::Rock));
//! assert_eq!(resolve(Move::Scissors, Move::Paper), (Outcome::Win, Outcome::Lose));
//! ```

use serde::{Deserialize, Serialize};

/// A single Rock-Paper-Scissors move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves in cyclic order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Position in the cycle (Rock = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Move at a cycle position, wrapping around.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 3]
    }

    /// Cyclic successor: the move that beats this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Cyclic predecessor: the move this one beats.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Does this move beat `other`?
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        self.previous() == other
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        };
        f.write_str(name)
    }
}

/// Result of a round, always relative to one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    /// The opponent's view of the same round.
    #[must_use]
    pub const fn mirror(self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Tie => "Tie",
        };
        f.write_str(name)
    }
}

/// Resolve a round: returns `(outcome_a, outcome_b)`.
#[must_use]
pub fn resolve(a: Move, b: Move) -> (Outcome, Outcome) {
    if a == b {
        (Outcome::Tie, Outcome::Tie)
    } else if a.beats(b) {
        (Outcome::Win, Outcome::Lose)
    } else {
        (Outcome::Lose, Outcome::Win)
    }
}
