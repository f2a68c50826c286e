//! Marketboard listings and historical sales.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ItemId, ListingId, WorldId};
use super::money::Gil;

/// A live marketboard offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub item_id: ItemId,
    pub world_id: WorldId,
    pub price_per_unit: Gil,
    pub quantity: u32,
    pub total: Gil,
    #[serde(default)]
    pub retainer_name: String,
    #[serde(default)]
    pub hq: bool,
    pub last_review_time: DateTime<Utc>,
}

impl Listing {
    /// Create a listing; the total is derived from price and quantity.
    pub fn new(
        id: impl Into<ListingId>,
        item_id: ItemId,
        world_id: WorldId,
        price_per_unit: Gil,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            item_id,
            world_id,
            price_per_unit,
            quantity,
            total: price_per_unit * i64::from(quantity),
            retainer_name: String::new(),
            hq: false,
            last_review_time: Utc::now(),
        }
    }

    pub fn with_retainer(mut self, name: impl Into<String>) -> Self {
        self.retainer_name = name.into();
        self
    }

    pub fn with_hq(mut self, hq: bool) -> Self {
        self.hq = hq;
        self
    }
}

/// A completed marketboard transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub item_id: ItemId,
    pub world_id: WorldId,
    pub price_per_unit: Gil,
    pub quantity: u32,
    #[serde(default)]
    pub buyer_name: String,
    #[serde(default)]
    pub hq: bool,
    pub timestamp: DateTime<Utc>,
}

impl Sale {
    pub fn new(
        item_id: ItemId,
        world_id: WorldId,
        price_per_unit: Gil,
        quantity: u32,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            item_id,
            world_id,
            price_per_unit,
            quantity,
            buyer_name: String::new(),
            hq: false,
            timestamp,
        }
    }
}
