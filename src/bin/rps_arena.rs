//! Command line driver: runs the simulations and prints the reports.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use rps_arena::arena::{Arena, ArenaObserver, RandomnessDrift};
use rps_arena::core::ArenaConfig;
use rps_arena::players::{create_players, Player, PlayerKind};
use rps_arena::report::{MatchReport, RankingReport};
use rps_arena::stats::{MatchSummary, Statistics};
use rps_arena::strategy::Strategy;
use rps_arena::tournament;

#[derive(Parser)]
#[command(author, version, about = "Rock-Paper-Scissors strategy tournaments", long_about = None)]
struct Cli {
    /// Seed for the shared RNG (default: config file, else fresh entropy).
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// JSON file holding an ArenaConfig.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Rounds per starting pair, overriding the simulation's default.
    #[arg(long, global = true)]
    rounds: Option<u32>,

    /// Disable the randomness diagnostic.
    #[arg(long, global = true)]
    no_randomness_check: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Random against Random, prints the match report")]
    Randomness,
    #[command(about = "Round robin over the simple roster")]
    Simple,
    #[command(about = "Round robin over the adaptive roster", alias = "improved")]
    Adaptive,
    #[command(about = "Opponents only one of two adaptive players defeats")]
    Compare {
        #[arg(default_value = "Forward/Copy/Forward")]
        first: Player,
        #[arg(default_value = "Copy/Forward/Forward")]
        second: Player,
    },
    #[command(about = "Every simulation in sequence (default)")]
    All,
}

/// Prints successful match reports to stdout.
struct ConsoleObserver;

impl ArenaObserver for ConsoleObserver {
    fn on_success(&mut self, summary: &MatchSummary) {
        print!("{}", MatchReport(summary));
    }

    fn on_randomness_drift(&mut self, drift: &RandomnessDrift) {
        log::warn!("randomness drift: {}", drift);
    }
}

const RANDOMNESS_ROUNDS: u32 = 1_000_000;
const SIMPLE_ROUNDS: u32 = 100_000;
const ADAPTIVE_ROUNDS: u32 = 1_000;
const COMPARE_ROUNDS: u32 = 1_000;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ArenaConfig::default().with_seed(rand::random()),
    };
    let file_rounds = cli.config.as_ref().map(|_| config.rounds_per_start);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if cli.no_randomness_check {
        config = config.with_randomness_check(None);
    }
    if let Some(rounds) = cli.rounds {
        config = config.with_rounds_per_start(rounds);
    }
    config.validate()?;
    log::info!("seed {}", config.seed);

    let mut arena = Arena::with_observer(config, ConsoleObserver);
    let rounds = |default: u32| rounds_per_start(cli.rounds, file_rounds, default);

    match cli.command.unwrap_or(Command::All) {
        Command::Randomness => randomness(&mut arena, rounds(RANDOMNESS_ROUNDS)),
        Command::Simple => simulate(&mut arena, PlayerKind::Simple, rounds(SIMPLE_ROUNDS)),
        Command::Adaptive => simulate(&mut arena, PlayerKind::Adaptive, rounds(ADAPTIVE_ROUNDS)),
        Command::Compare { first, second } => compare(&mut arena, first, second, rounds(COMPARE_ROUNDS)),
        Command::All => {
            randomness(&mut arena, rounds(RANDOMNESS_ROUNDS));
            simulate(&mut arena, PlayerKind::Simple, rounds(SIMPLE_ROUNDS));
            simulate(&mut arena, PlayerKind::Adaptive, rounds(ADAPTIVE_ROUNDS));
            let first = Player::adaptive(Strategy::Forward, Strategy::Copy, Strategy::Forward);
            let second = Player::adaptive(Strategy::Copy, Strategy::Forward, Strategy::Forward);
            compare(&mut arena, first, second, rounds(COMPARE_ROUNDS));
        }
    }
    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<ArenaConfig> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// `--rounds` wins, then the config file, then the simulation's default.
fn rounds_per_start(flag: Option<u32>, file: Option<u32>, default: u32) -> u32 {
    flag.or(file).unwrap_or(default)
}

fn randomness(arena: &mut Arena<ConsoleObserver>, rounds: u32) {
    arena.set_rounds_per_start(rounds);
    let summary = tournament::randomness_probe(arena);
    print!("{}", MatchReport(&summary));
}

fn simulate(arena: &mut Arena<ConsoleObserver>, kind: PlayerKind, rounds: u32) {
    arena.set_rounds_per_start(rounds);
    let players = create_players(kind);
    let mut stats = Statistics::from_config(arena.config());
    tournament::round_robin(arena, &players, &mut stats);
    let top = stats.top(arena.config().ranking_size);
    print!("{}", RankingReport(&top));
}

fn compare(arena: &mut Arena<ConsoleObserver>, first: Player, second: Player, rounds: u32) {
    arena.set_rounds_per_start(rounds);
    let roster = create_players(PlayerKind::Adaptive);
    let report = tournament::compare(arena, first, second, &roster);
    print!("{}", report);
}
