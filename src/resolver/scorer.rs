//! Profit scorer: the single entry point tying repository data to the resolvers.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::config::{ResolverConfig, ScoringConfig};
use crate::domain::{
    ArbitrageInfo, Effort, Gil, ItemId, ItemTable, Listing, PlayerContext, ProfitInfo, Sale,
};
use crate::error::{Error, Result};
use crate::port::MarketRepository;

use super::arbitrage::best_arbitrage;
use super::obtain::ObtainResolver;
use super::sale::best_sale_method;
use super::snapshot::MarketSnapshot;

/// Shortest gap counted between two sales.
const MIN_SALE_GAP_SECS: f64 = 60.0;

/// Scores items for a player against live market data.
///
/// Holds only shared, immutable state; clone freely and score concurrently.
#[derive(Clone)]
pub struct ProfitScorer {
    repository: Arc<dyn MarketRepository>,
    table: Arc<ItemTable>,
    resolver: ResolverConfig,
    scoring: ScoringConfig,
}

impl ProfitScorer {
    pub fn new(
        repository: Arc<dyn MarketRepository>,
        table: Arc<ItemTable>,
        resolver: ResolverConfig,
        scoring: ScoringConfig,
    ) -> Self {
        Self {
            repository,
            table,
            resolver,
            scoring,
        }
    }

    pub fn table(&self) -> &ItemTable {
        &self.table
    }

    /// Score an item now.
    pub async fn score(&self, item_id: ItemId, player: &PlayerContext) -> Result<Option<ProfitInfo>> {
        self.score_at(item_id, player, Utc::now()).await
    }

    /// Score an item with sale velocity measured up to `now`.
    ///
    /// `Ok(None)` when the item cannot be sold or cannot be obtained.
    pub async fn score_at(
        &self,
        item_id: ItemId,
        player: &PlayerContext,
        now: DateTime<Utc>,
    ) -> Result<Option<ProfitInfo>> {
        let item = self
            .table
            .get(item_id)
            .ok_or(Error::UnknownItem(item_id.get()))?;

        let (listings, sales) = if item.is_marketable() {
            let listings = self
                .repository
                .listings_for_item_on_data_center(item.id, player.data_center)
                .await?;
            let sales = self
                .repository
                .sales_for_item_on_world(item.id, player.home_world)
                .await?;
            (listings, sales)
        } else {
            (Vec::new(), Vec::new())
        };

        let Some(sale) = best_sale_method(item, &listings, &sales, player) else {
            tracing::debug!(item_id = %item.id, "no sale method");
            return Ok(None);
        };
        let competition = competition_factor(&listings, player);

        let snapshot = MarketSnapshot::collect(
            self.repository.as_ref(),
            &self.table,
            item,
            listings,
            player,
            self.resolver.max_depth,
        )
        .await?;
        let resolver = ObtainResolver::new(&self.table, &snapshot, player, &self.resolver);
        let Some(obtain) = resolver.resolve(item, sale.quantity) else {
            tracing::debug!(item_id = %item.id, quantity = sale.quantity, "no obtain plan");
            return Ok(None);
        };

        let profit_margin = sale.value - obtain.cost();
        let sales_per_hour = sales_per_hour(
            &sales,
            now,
            self.scoring.sales_window_days,
            self.scoring.min_sales_per_hour,
        );
        let score = profit_score(profit_margin, sales_per_hour, competition, obtain.effort);

        tracing::debug!(
            item_id = %item.id,
            margin = profit_margin,
            sales_per_hour,
            score,
            "item scored"
        );

        Ok(Some(ProfitInfo {
            item_id: item.id,
            obtain,
            sale,
            profit_margin,
            sales_per_hour,
            competition_factor: competition,
            score,
        }))
    }

    /// Score buying on another world and reselling at home.
    pub async fn arbitrage(
        &self,
        item_id: ItemId,
        player: &PlayerContext,
    ) -> Result<Option<ArbitrageInfo>> {
        self.arbitrage_at(item_id, player, Utc::now()).await
    }

    pub async fn arbitrage_at(
        &self,
        item_id: ItemId,
        player: &PlayerContext,
        now: DateTime<Utc>,
    ) -> Result<Option<ArbitrageInfo>> {
        let item = self
            .table
            .get(item_id)
            .ok_or(Error::UnknownItem(item_id.get()))?;
        if !item.is_marketable() {
            return Ok(None);
        }

        let listings = self
            .repository
            .listings_for_item_on_data_center(item.id, player.data_center)
            .await?;
        let Some(pair) = best_arbitrage(&listings, player.home_world) else {
            return Ok(None);
        };
        let margin = pair.margin_per_unit();
        if margin <= 0 {
            return Ok(None);
        }

        let sales = self
            .repository
            .sales_for_item_on_world(item.id, player.home_world)
            .await?;
        let sales_per_hour = sales_per_hour(
            &sales,
            now,
            self.scoring.sales_window_days,
            self.scoring.min_sales_per_hour,
        );
        let volume = margin as f64 * f64::from(pair.away.quantity) * sales_per_hour;

        Ok(Some(ArbitrageInfo {
            item_id: item.id,
            cross_world: pair.cross_world(),
            margin_per_unit: margin,
            sales_per_hour,
            score: volume.round() as i64,
            away: pair.away,
            home: pair.home,
        }))
    }
}

/// Sales per hour over the trailing window, never below `floor`.
///
/// The reciprocal of the mean gap between consecutive sales; fewer than two
/// sales in the window gives the floor.
pub fn sales_per_hour(sales: &[Sale], now: DateTime<Utc>, window_days: i64, floor: f64) -> f64 {
    let cutoff = now - Duration::days(window_days);
    let mut times: Vec<DateTime<Utc>> = sales
        .iter()
        .map(|sale| sale.timestamp)
        .filter(|at| *at >= cutoff && *at <= now)
        .collect();
    if times.len() < 2 {
        return floor;
    }
    times.sort();

    let total_secs: f64 = times
        .windows(2)
        .map(|pair| ((pair[1] - pair[0]).num_seconds() as f64).max(MIN_SALE_GAP_SECS))
        .sum();
    let mean_gap_hours = total_secs / (times.len() - 1) as f64 / 3600.0;

    (1.0 / mean_gap_hours).max(floor)
}

/// Penalty for items the player already lists on the home world.
pub fn competition_factor(listings: &[Listing], player: &PlayerContext) -> f64 {
    let own = listings
        .iter()
        .filter(|listing| {
            listing.world_id == player.home_world && player.owns_retainer(&listing.retainer_name)
        })
        .count();
    1.0 / own.max(1) as f64
}

fn profit_score(margin: Gil, sales_per_hour: f64, competition: f64, effort: Effort) -> i64 {
    if effort <= 0.0 {
        return 0;
    }
    (margin as f64 * sales_per_hour * competition / effort).round() as i64
}
