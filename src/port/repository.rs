//! Market data port.
//!
//! The only suspend point of a scoring run. Implementations may be slow or
//! fail; an empty vector is a valid answer meaning "no channel available".

use async_trait::async_trait;

use crate::domain::{DataCenterId, ItemId, Listing, Sale, WorldId};
use crate::error::Result;

/// Read access to marketboard listings and sale history.
#[async_trait]
pub trait MarketRepository: Send + Sync {
    /// Live listings for an item on every world of a data center.
    async fn listings_for_item_on_data_center(
        &self,
        item_id: ItemId,
        data_center: DataCenterId,
    ) -> Result<Vec<Listing>>;

    /// Historical sales of an item on one world.
    async fn sales_for_item_on_world(&self, item_id: ItemId, world: WorldId) -> Result<Vec<Sale>>;

    /// Get the repository name for logging/debugging.
    fn repository_name(&self) -> &'static str;
}
