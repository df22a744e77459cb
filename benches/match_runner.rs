use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rps_arena::arena::{Arena, NullObserver};
use rps_arena::core::ArenaConfig;
use rps_arena::players::{create_players, Player, PlayerKind};
use rps_arena::stats::Statistics;
use rps_arena::strategy::Strategy;
use rps_arena::tournament::round_robin;

fn bench_single_match(c: &mut Criterion) {
    let config = ArenaConfig::new().with_rounds_per_start(1000).with_randomness_check(None);
    let mut arena = Arena::with_observer(config, NullObserver);
    let p1 = Player::adaptive(Strategy::Forward, Strategy::Copy, Strategy::Forward);
    let p2 = Player::simple(Strategy::Random);

    c.bench_function("play_match 9k rounds", |b| {
        b.iter(|| {
            let mut stats = Statistics::default();
            black_box(arena.play_match(black_box(p1), black_box(p2), &mut stats))
        })
    });
}

fn bench_simple_round_robin(c: &mut Criterion) {
    let config = ArenaConfig::new().with_rounds_per_start(100);
    let mut arena = Arena::with_observer(config, NullObserver);
    let players = create_players(PlayerKind::Simple);

    c.bench_function("round_robin simple roster", |b| {
        b.iter(|| {
            let mut stats = Statistics::default();
            black_box(round_robin(&mut arena, &players, &mut stats))
        })
    });
}

criterion_group!(benches, bench_single_match, bench_simple_round_robin);
criterion_main!(benches);
