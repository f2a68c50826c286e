//! Resolver outputs: how to obtain an item, how to sell it, and what it earns.

use serde::Serialize;
use std::cmp::Ordering;

use super::cart::ShoppingCart;
use super::ids::ItemId;
use super::market::Listing;
use super::money::{Effort, Gil};

/// The cheapest-feeling way found to obtain a quantity of an item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObtainInfo {
    pub cart: ShoppingCart,
    /// Human-readable channel label.
    pub method: String,
    /// Units the plan yields; may exceed the request when buying whole lots.
    pub quantity: u32,
    pub effort: Effort,
}

impl ObtainInfo {
    pub fn new(cart: ShoppingCart, method: impl Into<String>, quantity: u32, effort: Effort) -> Self {
        Self {
            cart,
            method: method.into(),
            quantity,
            effort,
        }
    }

    /// Total currency spent by the plan.
    pub fn cost(&self) -> Gil {
        self.cart.total_cost()
    }

    /// Cost weighted by effort; the quantity plans are compared on.
    pub fn weighted_cost(&self) -> f64 {
        self.cost() as f64 * self.effort
    }

    /// Whether this plan should replace the current best.
    ///
    /// Lower weighted cost wins; on an exact tie the plan needing fewer
    /// distinct items wins. Anything beats no plan at all.
    pub fn is_easier_than(&self, current: Option<&ObtainInfo>) -> bool {
        let Some(current) = current else {
            return true;
        };
        match self.weighted_cost().total_cmp(&current.weighted_cost()) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => self.cart.distinct_items() < current.cart.distinct_items(),
        }
    }
}

/// Which disposal channel a sale method uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleKind {
    /// List one unit below the cheapest home-world listing.
    Undercut,
    /// No competing listing; price from sale history.
    HistoricalAverage,
    /// Hand the item to a vendor or shop.
    Exchange,
}

/// Channel label of marketboard sales.
pub const MARKET_CHANNEL: &str = "marketboard";

/// The best way found to dispose of an item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleMethod {
    pub kind: SaleKind,
    pub label: String,
    /// Short type label of the channel, e.g. `marketboard` or `gil`.
    pub channel: &'static str,
    /// Total value received for `quantity` units.
    pub value: Gil,
    pub quantity: u32,
    pub value_per_unit: f64,
}

impl SaleMethod {
    pub fn new(kind: SaleKind, label: impl Into<String>, value: Gil, quantity: u32) -> Self {
        let quantity = quantity.max(1);
        let channel = match kind {
            SaleKind::Undercut | SaleKind::HistoricalAverage => MARKET_CHANNEL,
            SaleKind::Exchange => "exchange",
        };
        Self {
            kind,
            label: label.into(),
            channel,
            value,
            quantity,
            value_per_unit: value as f64 / f64::from(quantity),
        }
    }

    pub fn with_channel(mut self, channel: &'static str) -> Self {
        self.channel = channel;
        self
    }
}

/// Final scoring of an item for a player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitInfo {
    pub item_id: ItemId,
    pub obtain: ObtainInfo,
    pub sale: SaleMethod,
    pub profit_margin: Gil,
    pub sales_per_hour: f64,
    pub competition_factor: f64,
    pub score: i64,
}

/// Buy on one world, sell on another.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArbitrageInfo {
    pub item_id: ItemId,
    /// The entry to buy.
    pub away: Listing,
    /// The higher-priced entry the resale is measured against.
    pub home: Listing,
    pub margin_per_unit: Gil,
    pub cross_world: bool,
    pub sales_per_hour: f64,
    pub score: i64,
}
