//! Resolver, scoring and ranking tunables.

use serde::Deserialize;

/// What to do with a recipe ingredient missing from the item table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingIngredientPolicy {
    /// Treat the ingredient as free and contributing nothing.
    #[default]
    Skip,
    /// Abort the recipe.
    Fail,
}

/// Obtain resolver configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum crafting recursion depth below the requested item.
    pub max_depth: usize,
    /// Highest job level in the game; drives the low-level recipe discount.
    pub level_cap: u8,
    pub missing_ingredient: MissingIngredientPolicy,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            level_cap: 90,
            missing_ingredient: MissingIngredientPolicy::Skip,
        }
    }
}

/// Profit scoring configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Trailing window of sale history used for sales velocity.
    pub sales_window_days: i64,
    /// Floor for sales velocity so thin history never divides by zero.
    pub min_sales_per_hour: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            sales_window_days: 7,
            min_sales_per_hour: 0.001,
        }
    }
}

/// Bulk ranking configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Items scored at the same time.
    pub concurrency: usize,
    /// Deadline for scoring a single item.
    pub score_timeout_ms: u64,
    /// Items whose best sale value per unit exceeds this are dropped as outliers.
    pub max_sale_value: Option<f64>,
    /// Maximum number of results returned.
    pub limit: Option<usize>,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            concurrency: 8,
            score_timeout_ms: 5_000,
            max_sale_value: Some(10_000_000.0),
            limit: Some(100),
        }
    }
}
