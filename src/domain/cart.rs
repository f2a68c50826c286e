//! Shopping cart: the working representation of a purchase plan.
//!
//! A cart tracks two things that deliberately diverge: the lines the player
//! would actually buy (whole listings, whole vendor lots) and the quantity of
//! each item the plan truly requires. Merging keeps the requirement ledger
//! exact and stops bulk lots from being bought twice.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

use super::exchange::ExchangeMethod;
use super::ids::{ItemId, ListingId, WorldId};
use super::market::Listing;
use super::money::{div_ceil, Gil};

/// Where a cart line is bought from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineSource {
    /// A specific marketboard listing.
    Listing { id: ListingId, world: WorldId },
    /// A non-market exchange method, identified by its description.
    Method { label: String },
}

/// Deduplication key of a cart line.
///
/// Two listings of the same item stay distinct; repeated use of the same
/// non-market method for the same item collapses into one line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey {
    pub item_id: ItemId,
    pub source: LineSource,
}

/// One purchase in a plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub item_id: ItemId,
    pub quantity: u32,
    /// Units per indivisible purchase.
    pub lot_size: u32,
    /// Price of one lot in the source's currency.
    pub lot_price: Gil,
    pub source: LineSource,
    pub description: String,
}

impl CartLine {
    /// Buy a whole marketboard listing.
    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            item_id: listing.item_id,
            quantity: listing.quantity,
            lot_size: listing.quantity.max(1),
            lot_price: listing.total,
            source: LineSource::Listing {
                id: listing.id.clone(),
                world: listing.world_id,
            },
            description: format!("Marketboard (world {})", listing.world_id),
        }
    }

    /// Use an exchange method a number of times.
    pub fn from_method(item_id: ItemId, method: &ExchangeMethod, transactions: u32) -> Self {
        let lot_size = method.quantity();
        let description = method.description();
        Self {
            item_id,
            quantity: lot_size.saturating_mul(transactions),
            lot_size,
            lot_price: method.cost(),
            source: LineSource::Method {
                label: description.clone(),
            },
            description,
        }
    }

    pub fn key(&self) -> LineKey {
        LineKey {
            item_id: self.item_id,
            source: self.source.clone(),
        }
    }

    pub fn is_listing(&self) -> bool {
        matches!(self.source, LineSource::Listing { .. })
    }

    /// Number of lots bought.
    pub fn lots(&self) -> u32 {
        div_ceil(u64::from(self.quantity), u64::from(self.lot_size.max(1))) as u32
    }

    pub fn cost(&self) -> Gil {
        i64::from(self.lots()) * self.lot_price
    }

    pub fn cost_per_unit(&self) -> f64 {
        self.lot_price as f64 / f64::from(self.lot_size.max(1))
    }
}

/// A purchase plan: committed lines plus the true per-item requirement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingCart {
    lines: Vec<CartLine>,
    items_required: HashMap<ItemId, u32>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cart holding a single line that covers `required` units.
    pub fn single(line: CartLine, required: u32) -> Self {
        let mut cart = Self::new();
        cart.require(line.item_id, required);
        cart.lines.push(line);
        cart
    }

    /// Append a line without touching the requirement ledger.
    pub fn push_line(&mut self, line: CartLine) {
        self.lines.push(line);
    }

    /// Record that the plan needs `quantity` more units of an item.
    pub fn require(&mut self, item_id: ItemId, quantity: u32) {
        let entry = self.items_required.entry(item_id).or_default();
        *entry = entry.saturating_add(quantity);
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn items_required(&self) -> &HashMap<ItemId, u32> {
        &self.items_required
    }

    pub fn required(&self, item_id: ItemId) -> u32 {
        self.items_required.get(&item_id).copied().unwrap_or(0)
    }

    /// Units of an item bought across all lines.
    pub fn present(&self, item_id: ItemId) -> u32 {
        self.lines
            .iter()
            .filter(|line| line.item_id == item_id)
            .map(|line| line.quantity)
            .fold(0u32, u32::saturating_add)
    }

    /// Units bought beyond what the plan requires.
    pub fn surplus(&self, item_id: ItemId) -> u32 {
        self.present(item_id).saturating_sub(self.required(item_id))
    }

    /// Ids of the marketboard listings the plan buys.
    pub fn listing_ids(&self) -> impl Iterator<Item = &ListingId> {
        self.lines.iter().filter_map(|line| match &line.source {
            LineSource::Listing { id, .. } => Some(id),
            LineSource::Method { .. } => None,
        })
    }

    pub fn total_cost(&self) -> Gil {
        self.lines.iter().map(CartLine::cost).sum()
    }

    /// Number of distinct items the plan requires.
    pub fn distinct_items(&self) -> usize {
        self.items_required.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.items_required.is_empty()
    }

    /// Lines ordered by item id, then source.
    pub fn sorted_lines(&self) -> Vec<&CartLine> {
        let mut lines: Vec<&CartLine> = self.lines.iter().collect();
        lines.sort_by(|a, b| {
            a.item_id
                .cmp(&b.item_id)
                .then_with(|| a.source.cmp(&b.source))
        });
        lines
    }

    /// Fold a sub-plan into this one.
    ///
    /// Requirements add up. A child line is only taken while the parent's
    /// lines fall short of the updated requirement; a line for a method the
    /// parent already uses is grown to the smallest lot multiple covering the
    /// shortfall instead of being duplicated, and a listing already in the
    /// cart is never bought twice.
    pub fn merge(&mut self, child: ShoppingCart) {
        for (item_id, quantity) in &child.items_required {
            self.require(*item_id, *quantity);
        }

        let mut present: HashMap<ItemId, u32> = HashMap::new();
        for line in &self.lines {
            let entry = present.entry(line.item_id).or_default();
            *entry = entry.saturating_add(line.quantity);
        }

        for line in child.lines {
            let required = self.required(line.item_id);
            let have = present.get(&line.item_id).copied().unwrap_or(0);
            if have >= required {
                continue;
            }

            let key = line.key();
            match self.lines.iter_mut().find(|existing| existing.key() == key) {
                Some(existing) if existing.is_listing() => {}
                Some(existing) => {
                    let from_others = have.saturating_sub(existing.quantity);
                    let shortfall = required.saturating_sub(from_others);
                    let lot = existing.lot_size.max(1);
                    let covering =
                        (div_ceil(u64::from(shortfall), u64::from(lot)) * u64::from(lot)) as u32;
                    if covering > existing.quantity {
                        *present.entry(line.item_id).or_default() += covering - existing.quantity;
                        existing.quantity = covering;
                    }
                }
                None => {
                    *present.entry(line.item_id).or_default() += line.quantity;
                    self.lines.push(line);
                }
            }
        }
    }
}

impl Serialize for ShoppingCart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let required: BTreeMap<&ItemId, &u32> = self.items_required.iter().collect();
        let mut state = serializer.serialize_struct("ShoppingCart", 3)?;
        state.serialize_field("lines", &self.sorted_lines())?;
        state.serialize_field("items_required", &required)?;
        state.serialize_field("total_cost", &self.total_cost())?;
        state.end()
    }
}
