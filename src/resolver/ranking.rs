//! Bulk ranking of many items for one player.

use std::time::Duration;

use futures_util::stream::{self, StreamExt};

use crate::config::RankingConfig;
use crate::domain::{ItemId, PlayerContext, ProfitInfo};
use crate::error::Error;

use super::scorer::ProfitScorer;

/// Score every item and return the best, highest score first.
///
/// Items are scored concurrently up to the configured bound, each under its
/// own deadline. Unscoreable items are skipped; failures and timeouts are
/// logged and skipped so one bad item never sinks the ranking.
pub async fn rank_items(
    scorer: &ProfitScorer,
    items: &[ItemId],
    player: &PlayerContext,
    config: &RankingConfig,
) -> Vec<ProfitInfo> {
    let deadline = Duration::from_millis(config.score_timeout_ms);

    let outcomes: Vec<_> = stream::iter(items.iter().copied())
        .map(|item_id| async move {
            let outcome = tokio::time::timeout(deadline, scorer.score(item_id, player)).await;
            (item_id, outcome)
        })
        .buffer_unordered(config.concurrency.max(1))
        .collect()
        .await;

    let mut ranked = Vec::new();
    let mut failed = 0usize;
    for (item_id, outcome) in outcomes {
        match outcome {
            Ok(Ok(Some(profit))) => ranked.push(profit),
            Ok(Ok(None)) => {}
            Ok(Err(e)) => {
                failed += 1;
                tracing::warn!(item_id = %item_id, error = %e, "failed to score item");
            }
            Err(_) => {
                failed += 1;
                let e = Error::Timeout {
                    item_id: item_id.get(),
                    millis: config.score_timeout_ms,
                };
                tracing::warn!(item_id = %item_id, error = %e, "failed to score item");
            }
        }
    }

    let scored = ranked.len();
    if let Some(ceiling) = config.max_sale_value {
        ranked.retain(|profit| profit.sale.value_per_unit <= ceiling);
    }
    ranked.sort_by(|a, b| b.score.cmp(&a.score).then(a.item_id.cmp(&b.item_id)));
    if let Some(limit) = config.limit {
        ranked.truncate(limit);
    }

    tracing::info!(
        requested = items.len(),
        scored,
        failed,
        returned = ranked.len(),
        "ranking complete"
    );
    ranked
}
