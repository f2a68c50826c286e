//! `tradecraft check-config`: validate a configuration file.

use std::path::Path;

use crate::cli::output;
use crate::config::Config;
use crate::error::Result;

/// Validate configuration file without scoring anything.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    output::note(&format!("Checking configuration: {}", path.display()));

    let config = Config::load(path)?;
    output::ok("Configuration file is valid");

    output::section("Summary");
    output::key_value("Log level", &config.logging.level);
    output::key_value("Max depth", config.resolver.max_depth);
    output::key_value("Level cap", config.resolver.level_cap);
    output::key_value(
        "Missing items",
        format!("{:?}", config.resolver.missing_ingredient).to_lowercase(),
    );
    output::key_value(
        "Sales window",
        format!("{} days", config.scoring.sales_window_days),
    );
    output::key_value("Concurrency", config.ranking.concurrency);
    output::key_value(
        "Timeout",
        format!("{}ms", config.ranking.score_timeout_ms),
    );

    match config.player_context() {
        Ok(player) => {
            output::key_value("Home world", player.home_world);
            output::key_value("Data center", player.data_center);
            output::key_value("Jobs", player.jobs.len());
            output::key_value("Retainers", player.retainers.len());
            println!();
            output::ok("Configuration is ready to use.");
        }
        Err(_) => {
            println!();
            output::warn("No [player] section; rank and score need one");
        }
    }
    Ok(())
}
