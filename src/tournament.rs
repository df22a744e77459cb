//! Tournament drivers built on the match runner.
//!
//! - `round_robin`: every ordered pair of a roster, one shared ranking
//! - `beaten_by` / `compare`: head-to-head comparison of two players
//!   against a common roster
//! - `randomness_probe`: `Random` against `Random` as a sanity run for
//!   the shared RNG

use crate::arena::{Arena, ArenaObserver};
use crate::players::Player;
use crate::report::ComparisonReport;
use crate::stats::{MatchSummary, Statistics};
use crate::strategy::Strategy;

/// Play every ordered pair of `players`, including each player against
/// itself, accumulating the ranking in `stats`.
///
/// Returns the number of successful matches.
pub fn round_robin<O: ArenaObserver>(
    arena: &mut Arena<O>,
    players: &[Player],
    stats: &mut Statistics,
) -> usize {
    log::info!(
        "round robin: {} players, {} rounds per start",
        players.len(),
        arena.config().rounds_per_start
    );
    let mut successes = 0;
    for &player1 in players {
        for &player2 in players {
            if arena.play_match(player1, player2, stats) {
                successes += 1;
            }
        }
    }
    log::info!(
        "round robin done: {} of {} matches successful",
        successes,
        players.len() * players.len()
    );
    successes
}

/// Opponents from `roster` that `player` defeats, in roster order.
///
/// Each match uses fresh statistics, so nothing leaks into any ranking.
pub fn beaten_by<O: ArenaObserver>(
    arena: &mut Arena<O>,
    player: Player,
    roster: &[Player],
) -> Vec<Player> {
    let threshold = arena.config().success_threshold;
    roster
        .iter()
        .copied()
        .filter(|&opponent| arena.play_match(player, opponent, &mut Statistics::new(threshold)))
        .collect()
}

/// Compare two players by the roster opponents each one alone defeats.
pub fn compare<O: ArenaObserver>(
    arena: &mut Arena<O>,
    first: Player,
    second: Player,
    roster: &[Player],
) -> ComparisonReport {
    let beaten_first = beaten_by(arena, first, roster);
    let beaten_second = beaten_by(arena, second, roster);
    log::info!(
        "[{}] beats {} opponents, [{}] beats {}",
        first,
        beaten_first.len(),
        second,
        beaten_second.len()
    );

    let only_first = beaten_first
        .iter()
        .copied()
        .filter(|p| !beaten_second.contains(p))
        .collect();
    let only_second = beaten_second
        .iter()
        .copied()
        .filter(|p| !beaten_first.contains(p))
        .collect();

    ComparisonReport {
        first,
        second,
        only_first,
        only_second,
    }
}

/// Play `Random` against `Random` and return the match counters.
pub fn randomness_probe<O: ArenaObserver>(arena: &mut Arena<O>) -> MatchSummary {
    let random = Player::simple(Strategy::Random);
    let mut stats = Statistics::from_config(arena.config());
    arena.play_match(random, random, &mut stats);
    stats.summary().clone()
}
