//! Tradecraft - marketboard profit estimation.
//!
//! For an item and a player, find the easiest way to obtain it (vendors,
//! shop currencies, gathering, crafting, or the marketboard) and the most
//! valuable way to dispose of it, then score the difference by how quickly
//! the item sells.
//!
//! # Modules
//!
//! - [`domain`] - Items, exchange methods, recipes, listings and purchase plans
//! - [`port`] - The market repository trait the scorer reads through
//! - [`adapter`] - An in-memory repository backed by JSON market dumps
//! - [`resolver`] - Obtain and sale resolvers, the profit scorer and bulk ranking
//! - [`config`] - Configuration loading from TOML files
//! - [`error`] - Error types for the crate
//! - [`cli`] - The `tradecraft` command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tradecraft::adapter::MemoryRepository;
//! use tradecraft::config::Config;
//! use tradecraft::domain::{ItemId, ItemTable};
//! use tradecraft::resolver::ProfitScorer;
//!
//! # async fn run() -> tradecraft::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let player = config.player_context()?;
//! let scorer = ProfitScorer::new(
//!     Arc::new(MemoryRepository::from_json_file("market.json")?),
//!     Arc::new(ItemTable::from_json_file("items.json")?),
//!     config.resolver.clone(),
//!     config.scoring.clone(),
//! );
//! let profit = scorer.score(ItemId::new(5333), &player).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod resolver;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
