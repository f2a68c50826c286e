//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file. Every section has defaults, so
//! an empty file is a valid configuration apart from the player section the
//! CLI needs to score anything.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::domain::{DataCenterId, Job, PlayerContext, WorldId};
use crate::error::{ConfigError, Result};

// Submodules
mod logging;
mod resolver;

// Re-export all public types from submodules
pub use logging::LoggingConfig;
pub use resolver::{MissingIngredientPolicy, RankingConfig, ResolverConfig, ScoringConfig};

/// The player the CLI scores items for.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerConfig {
    pub home_world: u32,
    pub data_center: u32,
    #[serde(default)]
    pub gc_rank: u8,
    /// Job abbreviation to level, e.g. `WVR = 90`.
    #[serde(default)]
    pub jobs: HashMap<String, u8>,
    #[serde(default)]
    pub retainers: Vec<String>,
}

impl PlayerConfig {
    /// Build the player context, rejecting unknown job names.
    #[allow(clippy::result_large_err)]
    pub fn to_context(&self) -> Result<PlayerContext> {
        let mut player = PlayerContext::new(
            WorldId::new(self.home_world),
            DataCenterId::new(self.data_center),
        )
        .with_gc_rank(self.gc_rank);

        for (name, level) in &self.jobs {
            let job: Job = name.parse().map_err(|reason| ConfigError::InvalidValue {
                field: "player.jobs",
                reason,
            })?;
            player = player.with_job(job, *level);
        }
        for retainer in &self.retainers {
            player = player.with_retainer(retainer.clone());
        }
        Ok(player)
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub player: Option<PlayerConfig>,
}

impl Config {
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text.
    #[allow(clippy::result_large_err)]
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.resolver.max_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "resolver.max_depth",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        if self.resolver.level_cap == 0 {
            return Err(ConfigError::InvalidValue {
                field: "resolver.level_cap",
                reason: "must be positive".into(),
            }
            .into());
        }
        if self.scoring.sales_window_days <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "scoring.sales_window_days",
                reason: "must be positive".into(),
            }
            .into());
        }
        let floor = self.scoring.min_sales_per_hour;
        if floor.is_nan() || floor <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "scoring.min_sales_per_hour",
                reason: "must be positive".into(),
            }
            .into());
        }
        if self.ranking.concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ranking.concurrency",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        if let Some(player) = &self.player {
            player.to_context()?;
        }
        Ok(())
    }

    /// The configured player, required by commands that score items.
    #[allow(clippy::result_large_err)]
    pub fn player_context(&self) -> Result<PlayerContext> {
        self.player
            .as_ref()
            .ok_or(ConfigError::MissingField { field: "player" })?
            .to_context()
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
