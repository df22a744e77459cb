//! Simple and adaptive players.

use serde::{Deserialize, Serialize};

use crate::core::{ArenaError, GameRng, Move, Outcome};
use crate::strategy::{self, Strategy};

/// A tournament participant.
///
/// Players hold no history: the next move is a function of the previous
/// round only (own outcome, own move, opponent move).
///
/// ```
/// use rps_arena::players::Player;
/// use rps_arena::strategy::Strategy;
///
/// let p = Player::adaptive(Strategy::Forward, Strategy::Copy, Strategy::Forward);
/// assert_eq!(p.to_string(), "Forward/Copy/Forward");
/// assert_eq!("Forward/Copy/Forward".parse::<Player>().unwrap(), p);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// One strategy applied regardless of outcome.
    Simple(Strategy),
    /// Strategy chosen by the outcome of the previous round.
    Adaptive {
        win: Strategy,
        lose: Strategy,
        tie: Strategy,
    },
}

impl Player {
    #[must_use]
    pub const fn simple(strategy: Strategy) -> Self {
        Player::Simple(strategy)
    }

    #[must_use]
    pub const fn adaptive(win: Strategy, lose: Strategy, tie: Strategy) -> Self {
        Player::Adaptive { win, lose, tie }
    }

    /// Strategy applied after a round with the given outcome.
    #[must_use]
    pub const fn strategy_for(&self, outcome: Outcome) -> Strategy {
        match *self {
            Player::Simple(strategy) => strategy,
            Player::Adaptive { win, lose, tie } => match outcome {
                Outcome::Win => win,
                Outcome::Lose => lose,
                Outcome::Tie => tie,
            },
        }
    }

    /// Does any of this player's strategies draw randomly?
    #[must_use]
    pub const fn is_random(&self) -> bool {
        match *self {
            Player::Simple(strategy) => strategy.is_random(),
            Player::Adaptive { win, lose, tie } => {
                win.is_random() || lose.is_random() || tie.is_random()
            }
        }
    }

    /// Next move given the round just played from this player's side.
    pub fn next_move(&self, last: Outcome, own: Move, opponent: Move, rng: &mut GameRng) -> Move {
        strategy::next_move(self.strategy_for(last), own, opponent, rng)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Simple(strategy) => write!(f, "{}", strategy),
            Player::Adaptive { win, lose, tie } => write!(f, "{}/{}/{}", win, lose, tie),
        }
    }
}

impl std::str::FromStr for Player {
    type Err = ArenaError;

    /// Parses `Strategy` into a simple player and `Win/Lose/Tie` into an
    /// adaptive one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        match parts.as_slice() {
            [single] => Ok(Player::Simple(single.parse()?)),
            [win, lose, tie] => Ok(Player::Adaptive {
                win: win.parse()?,
                lose: lose.parse()?,
                tie: tie.parse()?,
            }),
            _ => Err(ArenaError::MalformedPlayer(s.to_string())),
        }
    }
}
