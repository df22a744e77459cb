//! Property tests for the outcome resolver, the strategy engine and the
//! match runner.

use proptest::prelude::*;

use rps_arena::arena::{Arena, NullObserver};
use rps_arena::core::{resolve, ArenaConfig, GameRng, Move, Outcome};
use rps_arena::players::Player;
use rps_arena::stats::Statistics;
use rps_arena::strategy::{next_move, Strategy as Rule};

fn any_move() -> impl Strategy<Value = Move> {
    prop::sample::select(Move::ALL.to_vec())
}

fn any_outcome() -> impl Strategy<Value = Outcome> {
    prop::sample::select(vec![Outcome::Win, Outcome::Lose, Outcome::Tie])
}

fn any_rule() -> impl Strategy<Value = Rule> {
    prop::sample::select(Rule::ALL.to_vec())
}

fn deterministic_rule() -> impl Strategy<Value = Rule> {
    prop::sample::select(
        Rule::ALL
            .into_iter()
            .filter(|s| !s.is_random())
            .collect::<Vec<_>>(),
    )
}

fn any_player() -> impl Strategy<Value = Player> {
    prop_oneof![
        any_rule().prop_map(Player::simple),
        (any_rule(), any_rule(), any_rule()).prop_map(|(w, l, t)| Player::adaptive(w, l, t)),
    ]
}

proptest! {
    #[test]
    fn resolve_is_mirrored(a in any_move(), b in any_move()) {
        let (ra, rb) = resolve(a, b);
        prop_assert_eq!(ra.mirror(), rb);
        prop_assert_eq!(resolve(b, a), (rb, ra));
        prop_assert_eq!(ra == Outcome::Tie, a == b);
    }

    #[test]
    fn forward_and_backward_are_inverse(m in any_move(), opp in any_move()) {
        let mut rng = GameRng::new(0);
        let fwd = next_move(Rule::Forward, m, opp, &mut rng);
        prop_assert_eq!(next_move(Rule::Backward, fwd, opp, &mut rng), m);
        let back = next_move(Rule::Backward, m, opp, &mut rng);
        prop_assert_eq!(next_move(Rule::Forward, back, opp, &mut rng), m);
    }

    #[test]
    fn keep_is_idempotent(m in any_move(), opp in any_move(), steps in 1usize..20) {
        let mut rng = GameRng::new(0);
        let mut current = m;
        for _ in 0..steps {
            current = next_move(Rule::Keep, current, opp, &mut rng);
        }
        prop_assert_eq!(current, m);
    }

    #[test]
    fn deterministic_rules_are_pure(
        rule in deterministic_rule(),
        own in any_move(),
        opp in any_move(),
        seed in any::<u64>(),
    ) {
        let mut rng1 = GameRng::new(seed);
        let mut rng2 = GameRng::new(seed.wrapping_add(1));
        prop_assert_eq!(
            next_move(rule, own, opp, &mut rng1),
            next_move(rule, own, opp, &mut rng2)
        );
    }

    #[test]
    fn adaptive_player_uses_bound_rule(
        win in deterministic_rule(),
        lose in deterministic_rule(),
        tie in deterministic_rule(),
        last in any_outcome(),
        own in any_move(),
        opp in any_move(),
    ) {
        let mut rng = GameRng::new(0);
        let player = Player::adaptive(win, lose, tie);
        let bound = match last {
            Outcome::Win => win,
            Outcome::Lose => lose,
            Outcome::Tie => tie,
        };
        prop_assert_eq!(
            player.next_move(last, own, opp, &mut rng),
            next_move(bound, own, opp, &mut rng)
        );
    }

    #[test]
    fn player_display_parses_back(player in any_player()) {
        prop_assert_eq!(player.to_string().parse::<Player>(), Ok(player));
    }

    #[test]
    fn match_records_nine_blocks(
        p1 in any_player(),
        p2 in any_player(),
        rounds in 1u32..40,
        seed in any::<u64>(),
    ) {
        let config = ArenaConfig::new()
            .with_rounds_per_start(rounds)
            .with_seed(seed)
            .with_randomness_check(None);
        let mut arena = Arena::with_observer(config, NullObserver);
        let mut stats = Statistics::default();

        let successful = arena.play_match(p1, p2, &mut stats);

        let s = stats.summary();
        prop_assert_eq!(s.rounds, u64::from(rounds) * 9);
        prop_assert_eq!(s.wins + s.losses + s.ties, s.rounds);
        prop_assert_eq!(successful, s.win_rate() > 50);
        prop_assert_eq!(stats.ranking().score(&p1), u32::from(successful));
    }
}
