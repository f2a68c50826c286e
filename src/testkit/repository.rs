//! Repositories with scripted behavior.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{DataCenterId, ItemId, Listing, Sale, WorldId};
use crate::error::{RepositoryError, Result};
use crate::port::MarketRepository;

/// Wraps a repository, failing or stalling for chosen items and counting calls.
pub struct ScriptedRepository {
    inner: Arc<dyn MarketRepository>,
    failing: HashSet<ItemId>,
    stalled: HashSet<ItemId>,
    stall: Duration,
    listing_calls: AtomicUsize,
    sale_calls: AtomicUsize,
}

impl ScriptedRepository {
    pub fn new(inner: Arc<dyn MarketRepository>) -> Self {
        Self {
            inner,
            failing: HashSet::new(),
            stalled: HashSet::new(),
            stall: Duration::from_secs(60),
            listing_calls: AtomicUsize::new(0),
            sale_calls: AtomicUsize::new(0),
        }
    }

    /// Every call for this item fails as unavailable.
    pub fn failing_for(mut self, item_id: ItemId) -> Self {
        self.failing.insert(item_id);
        self
    }

    /// Every call for this item sleeps before answering.
    pub fn stalled_for(mut self, item_id: ItemId, stall: Duration) -> Self {
        self.stalled.insert(item_id);
        self.stall = stall;
        self
    }

    pub fn listing_calls(&self) -> usize {
        self.listing_calls.load(Ordering::SeqCst)
    }

    pub fn sale_calls(&self) -> usize {
        self.sale_calls.load(Ordering::SeqCst)
    }

    async fn script(&self, item_id: ItemId) -> Result<()> {
        if self.stalled.contains(&item_id) {
            tokio::time::sleep(self.stall).await;
        }
        if self.failing.contains(&item_id) {
            return Err(RepositoryError::Unavailable(format!("scripted failure for {item_id}")).into());
        }
        Ok(())
    }
}

#[async_trait]
impl MarketRepository for ScriptedRepository {
    async fn listings_for_item_on_data_center(
        &self,
        item_id: ItemId,
        data_center: DataCenterId,
    ) -> Result<Vec<Listing>> {
        self.listing_calls.fetch_add(1, Ordering::SeqCst);
        self.script(item_id).await?;
        self.inner
            .listings_for_item_on_data_center(item_id, data_center)
            .await
    }

    async fn sales_for_item_on_world(&self, item_id: ItemId, world: WorldId) -> Result<Vec<Sale>> {
        self.sale_calls.fetch_add(1, Ordering::SeqCst);
        self.script(item_id).await?;
        self.inner.sales_for_item_on_world(item_id, world).await
    }

    fn repository_name(&self) -> &'static str {
        "scripted"
    }
}
