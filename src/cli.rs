//! Command-line interface for battlewords.

use battlewords::OverlapPolicy;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Battlewords - find six hidden words on a 12x12 grid
#[derive(Parser, Debug)]
#[command(name = "battlewords")]
#[command(about = "Word-finding puzzle generator and player", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Where the generation seed comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct SeedArgs {
    /// Explicit 64-bit seed
    #[arg(long, conflicts_with = "date")]
    pub seed: Option<u64>,

    /// Derive the seed from a date (YYYY-MM-DD), the daily puzzle
    #[arg(long)]
    pub date: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a puzzle and print it
    Generate {
        /// Seed selection
        #[command(flatten)]
        seed: SeedArgs,

        /// Overlap policy (strict or overlap_allowed)
        #[arg(long)]
        policy: Option<OverlapPolicy>,

        /// Reject overlap layouts that spell unintended words
        #[arg(long)]
        curate: bool,

        /// Print the puzzle as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the seed for a date (default: today)
    DailySeed {
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
    },

    /// Play a puzzle on the terminal
    Play {
        /// Seed selection
        #[command(flatten)]
        seed: SeedArgs,
    },
}
