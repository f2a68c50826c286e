//! Command-line interface definitions.

pub mod check;
pub mod data;
pub mod output;
pub mod rank;
pub mod score;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tradecraft - marketboard profit estimation.
#[derive(Parser, Debug)]
#[command(name = "tradecraft")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank items by expected profit
    Rank(RankArgs),

    /// Explain how one item is obtained and sold
    Score(ScoreArgs),

    /// Validate configuration file
    CheckConfig(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Input files shared by commands that score items.
#[derive(Parser, Debug)]
pub struct DataArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Item table as a JSON array
    #[arg(long, default_value = "items.json")]
    pub items: PathBuf,

    /// Market dump with worlds, listings and sales as JSON
    #[arg(long, default_value = "market.json")]
    pub market: PathBuf,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Arguments for the `rank` subcommand.
#[derive(Parser, Debug)]
pub struct RankArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Override the number of results
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Print results as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `score` subcommand.
#[derive(Parser, Debug)]
pub struct ScoreArgs {
    /// Item id to score
    pub item_id: u32,

    #[command(flatten)]
    pub data: DataArgs,

    /// Also look for a cross-world arbitrage
    #[arg(long)]
    pub arbitrage: bool,

    /// Print results as JSON instead of tables
    #[arg(long)]
    pub json: bool,
}
