//! Match execution engine.

use super::observer::{ArenaObserver, LogObserver, RandomnessDrift, RoundRecord};
use crate::core::{resolve, ArenaConfig, GameRng, GameRngState, Move, Outcome, RandomnessCheck};
use crate::players::Player;
use crate::stats::{MatchSummary, Statistics};

/// Starting move pairs, in play order.
pub const START_PAIRS: [(Move, Move); 9] = [
    (Move::Rock, Move::Rock),
    (Move::Rock, Move::Paper),
    (Move::Rock, Move::Scissors),
    (Move::Paper, Move::Rock),
    (Move::Paper, Move::Paper),
    (Move::Paper, Move::Scissors),
    (Move::Scissors, Move::Rock),
    (Move::Scissors, Move::Paper),
    (Move::Scissors, Move::Scissors),
];

/// Runs matches with one RNG shared by every `Random` draw of the run.
pub struct Arena<O: ArenaObserver = LogObserver> {
    config: ArenaConfig,
    rng: GameRng,
    observer: O,
}

impl Arena<LogObserver> {
    /// Create an arena that reports through `log`.
    pub fn new(config: ArenaConfig) -> Self {
        Self::with_observer(config, LogObserver)
    }
}

impl<O: ArenaObserver> Arena<O> {
    /// Create an arena with a custom observer.
    pub fn with_observer(config: ArenaConfig, observer: O) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            rng,
            observer,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Change the rounds played per starting pair for subsequent matches.
    pub fn set_rounds_per_start(&mut self, rounds: u32) {
        self.config.rounds_per_start = rounds;
    }

    /// Restart the shared RNG.
    pub fn reseed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.rng.reseed(seed);
    }

    pub fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Capture the shared RNG position.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Rewind the shared RNG to a captured position.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.config.seed = state.seed;
        self.rng = GameRng::from_state(state);
    }

    /// Play a full match and report whether player 1 was successful.
    ///
    /// Statistics are opened for the pair, every starting pair is played,
    /// the randomness diagnostic runs when either player is random, the
    /// observer sees successful matches, and the match is closed (scoring
    /// player 1 in the ranking on success).
    ///
    /// # Panics
    /// If `rounds_per_start` is zero, or if `stats` was built with a
    /// success threshold other than the config's.
    pub fn play_match(&mut self, player1: Player, player2: Player, stats: &mut Statistics) -> bool {
        let rounds = self.config.rounds_per_start;
        assert!(rounds > 0, "rounds_per_start must be at least 1");
        assert_eq!(
            stats.success_threshold(),
            self.config.success_threshold,
            "statistics threshold differs from the arena config"
        );

        stats.begin_match(player1, player2);
        for start in START_PAIRS {
            self.play_from(player1, player2, start, rounds, stats);
        }

        if player1.is_random() || player2.is_random() {
            if let Some(check) = self.config.randomness_check {
                self.check_randomness(stats.summary(), check);
            }
        }

        let successful = stats.is_successful();
        log::debug!(
            "[{}] vs [{}]: {}% wins over {} rounds{}",
            player1,
            player2,
            stats.win_rate(),
            stats.rounds_played(),
            if successful { ", successful" } else { "" }
        );
        if successful {
            self.observer.on_success(stats.summary());
        }
        stats.end_match();
        successful
    }

    fn play_from(
        &mut self,
        player1: Player,
        player2: Player,
        start: (Move, Move),
        rounds: u32,
        stats: &mut Statistics,
    ) {
        let (mut move1, mut move2) = start;
        for round in 0..rounds {
            let (outcome1, outcome2) = resolve(move1, move2);
            stats.update(outcome1);
            self.observer.on_round(&RoundRecord {
                start,
                round,
                move1,
                move2,
                outcome1,
                outcome2,
            });

            // both decisions read the same round
            let next1 = player1.next_move(outcome1, move1, move2, &mut self.rng);
            let next2 = player2.next_move(outcome2, move2, move1, &mut self.rng);
            (move1, move2) = (next1, next2);
        }
    }

    fn check_randomness(&mut self, summary: &MatchSummary, check: RandomnessCheck) {
        for outcome in [Outcome::Win, Outcome::Lose, Outcome::Tie] {
            let rate = summary.rate(outcome);
            if !check.accepts(rate) {
                self.observer.on_randomness_drift(&RandomnessDrift {
                    player1: summary.player1,
                    player2: summary.player2,
                    outcome,
                    rate,
                    check,
                });
            }
        }
    }
}
