//! Battlewords - command-line generator and player.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use battlewords::{
    BattlewordsConfig, GameSession, PlacementEngine, Puzzle, daily_seed, daily_seed_from_iso,
    load_pool, play,
};
use clap::Parser;
use cli::{Cli, Command, SeedArgs};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = BattlewordsConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Generate {
            seed,
            policy,
            curate,
            json,
        } => {
            let config = match policy {
                Some(policy) => config.with_overlap_policy(policy),
                None => config,
            };
            let config = if curate { config.with_curation(true) } else { config };
            run_generate(&config, &seed, json)
        }
        Command::DailySeed { date } => run_daily_seed(date.as_deref()),
        Command::Play { seed } => run_play(&config, &seed),
    }
}

/// Seed from `--seed`, `--date`, or none.
fn resolve_seed(args: &SeedArgs) -> Result<Option<u64>> {
    match (&args.seed, &args.date) {
        (Some(seed), _) => Ok(Some(*seed)),
        (None, Some(date)) => Ok(Some(daily_seed_from_iso(date)?)),
        (None, None) => Ok(None),
    }
}

#[instrument(skip(config))]
fn build_puzzle(config: &BattlewordsConfig, args: &SeedArgs) -> Result<Puzzle> {
    let seed = resolve_seed(args)?;
    let (pool, origin) = load_pool(config);
    info!(%origin, ?seed, "Generating puzzle");
    let puzzle = PlacementEngine::new(config.placement(seed)).generate(&pool)?;
    Ok(puzzle)
}

/// Generate a puzzle and print it
fn run_generate(config: &BattlewordsConfig, args: &SeedArgs, json: bool) -> Result<()> {
    let puzzle = build_puzzle(config, args)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&puzzle)?);
        return Ok(());
    }
    print!("{}", puzzle.display_grid());
    for word in puzzle.words() {
        println!("{}", word);
    }
    Ok(())
}

/// Print the daily seed
fn run_daily_seed(date: Option<&str>) -> Result<()> {
    match date {
        Some(date) => println!("{} {}", date.trim(), daily_seed_from_iso(date)?),
        None => {
            let today = chrono::Local::now().date_naive();
            println!("{} {}", today.format("%Y-%m-%d"), daily_seed(today));
        }
    }
    Ok(())
}

/// Play on stdin/stdout
fn run_play(config: &BattlewordsConfig, args: &SeedArgs) -> Result<()> {
    let puzzle = build_puzzle(config, args)?;
    let mut session = GameSession::new(puzzle);
    let stdin = std::io::stdin();
    play(&mut session, stdin.lock(), std::io::stdout())?;
    Ok(())
}
