//! In-memory market repository.
//!
//! Backs the CLI (loaded from a JSON market dump) and the tests.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::Deserialize;

use crate::domain::{DataCenterId, ItemId, Listing, Sale, WorldId};
use crate::error::Result;
use crate::port::MarketRepository;

/// A world and the data center it belongs to.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WorldEntry {
    pub id: WorldId,
    pub data_center: DataCenterId,
}

/// Serialized form of a market snapshot.
#[derive(Debug, Default, Deserialize)]
pub struct MarketDump {
    #[serde(default)]
    pub worlds: Vec<WorldEntry>,
    #[serde(default)]
    pub listings: Vec<Listing>,
    #[serde(default)]
    pub sales: Vec<Sale>,
}

/// Market repository held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    worlds: RwLock<HashMap<WorldId, DataCenterId>>,
    listings: RwLock<HashMap<ItemId, Vec<Listing>>>,
    sales: RwLock<HashMap<ItemId, Vec<Sale>>>,
}

impl MemoryRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository from a dump.
    pub fn from_dump(dump: MarketDump) -> Self {
        let repo = Self::new();
        for world in dump.worlds {
            repo.add_world(world.id, world.data_center);
        }
        for listing in dump.listings {
            repo.add_listing(listing);
        }
        for sale in dump.sales {
            repo.add_sale(sale);
        }
        repo
    }

    /// Load a repository from a JSON dump file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let dump: MarketDump = serde_json::from_str(&content)?;
        Ok(Self::from_dump(dump))
    }

    /// Register a world as part of a data center.
    pub fn add_world(&self, world: WorldId, data_center: DataCenterId) {
        self.worlds.write().insert(world, data_center);
    }

    pub fn add_listing(&self, listing: Listing) {
        self.listings
            .write()
            .entry(listing.item_id)
            .or_default()
            .push(listing);
    }

    pub fn add_sale(&self, sale: Sale) {
        self.sales.write().entry(sale.item_id).or_default().push(sale);
    }

    /// Number of listings across all items.
    pub fn listing_count(&self) -> usize {
        self.listings.read().values().map(Vec::len).sum()
    }
}

#[async_trait]
impl MarketRepository for MemoryRepository {
    async fn listings_for_item_on_data_center(
        &self,
        item_id: ItemId,
        data_center: DataCenterId,
    ) -> Result<Vec<Listing>> {
        let worlds = self.worlds.read();
        let listings = self.listings.read();
        Ok(listings
            .get(&item_id)
            .map(|all| {
                all.iter()
                    .filter(|l| worlds.get(&l.world_id) == Some(&data_center))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn sales_for_item_on_world(&self, item_id: ItemId, world: WorldId) -> Result<Vec<Sale>> {
        let sales = self.sales.read();
        Ok(sales
            .get(&item_id)
            .map(|all| all.iter().filter(|s| s.world_id == world).cloned().collect())
            .unwrap_or_default())
    }

    fn repository_name(&self) -> &'static str {
        "memory"
    }
}
