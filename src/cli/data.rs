//! Loading the inputs shared by scoring commands.

use std::sync::Arc;

use crate::adapter::MemoryRepository;
use crate::cli::DataArgs;
use crate::config::Config;
use crate::domain::{ItemTable, PlayerContext};
use crate::error::Result;
use crate::resolver::ProfitScorer;

/// Everything a scoring command needs.
pub struct Workspace {
    pub config: Config,
    pub player: PlayerContext,
    pub scorer: ProfitScorer,
}

/// Load config, item table and market dump, and initialize logging.
pub fn load(args: &DataArgs) -> Result<Workspace> {
    let mut config = Config::load(&args.config)?;
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    config.init_logging();

    let player = config.player_context()?;
    let table = ItemTable::from_json_file(&args.items)?;
    let repository = MemoryRepository::from_json_file(&args.market)?;
    tracing::info!(
        items = table.len(),
        listings = repository.listing_count(),
        "inputs loaded"
    );

    let scorer = ProfitScorer::new(
        Arc::new(repository),
        Arc::new(table),
        config.resolver.clone(),
        config.scoring.clone(),
    );
    Ok(Workspace {
        config,
        player,
        scorer,
    })
}
