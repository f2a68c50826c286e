//! Items and the immutable item table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::exchange::{ExchangeMethod, SealExchange};
use super::ids::ItemId;
use super::recipe::RecipeInfo;
use crate::error::Result;

/// A tradeable thing in the economy, with every known way in and out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub market_prohibited: bool,
    #[serde(default = "default_true")]
    pub tradable: bool,
    #[serde(default)]
    pub can_be_hq: bool,
    #[serde(default)]
    pub dungeon_drop: bool,
    #[serde(default)]
    pub collectable: bool,
    #[serde(default = "default_stack_size")]
    pub stack_size: u32,
    #[serde(default)]
    pub item_level: u16,
    #[serde(default)]
    pub rarity: u8,
    #[serde(default)]
    pub class_job_category: u16,
    #[serde(default)]
    pub search_category: u16,
    /// Ways to receive the item.
    #[serde(default)]
    pub obtain_methods: Vec<ExchangeMethod>,
    /// Ways to hand the item over for currency.
    #[serde(default)]
    pub exchange_methods: Vec<ExchangeMethod>,
    #[serde(default)]
    pub recipes: Vec<RecipeInfo>,
}

fn default_true() -> bool {
    true
}

fn default_stack_size() -> u32 {
    999
}

impl Item {
    /// Create a tradable item with no methods or recipes.
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            market_prohibited: false,
            tradable: true,
            can_be_hq: false,
            dungeon_drop: false,
            collectable: false,
            stack_size: default_stack_size(),
            item_level: 0,
            rarity: 1,
            class_job_category: 0,
            search_category: 0,
            obtain_methods: Vec::new(),
            exchange_methods: Vec::new(),
            recipes: Vec::new(),
        }
    }

    /// Whether the item can be listed on or bought from the marketboard.
    pub fn is_marketable(&self) -> bool {
        self.tradable && !self.market_prohibited
    }

    pub fn with_obtain_method(mut self, method: ExchangeMethod) -> Self {
        self.obtain_methods.push(method);
        self
    }

    pub fn with_exchange_method(mut self, method: ExchangeMethod) -> Self {
        self.exchange_methods.push(method);
        self
    }

    pub fn with_recipe(mut self, recipe: RecipeInfo) -> Self {
        self.recipes.push(recipe);
        self
    }

    pub fn with_hq(mut self, can_be_hq: bool) -> Self {
        self.can_be_hq = can_be_hq;
        self
    }

    pub fn market_prohibited(mut self) -> Self {
        self.market_prohibited = true;
        self
    }

    pub fn collectable(mut self) -> Self {
        self.collectable = true;
        self
    }

    pub fn with_level_and_rarity(mut self, item_level: u16, rarity: u8) -> Self {
        self.item_level = item_level;
        self.rarity = rarity;
        self
    }

    /// Add the channels implied by the item's own attributes.
    ///
    /// An item worth seals gains an expert delivery sale unless it already
    /// lists a seal sale. Gathering a collectable item yields collectables.
    fn with_derived_methods(mut self) -> Self {
        if self.collectable {
            for method in &mut self.obtain_methods {
                if let ExchangeMethod::Gathering(info) = method {
                    info.collectable = true;
                }
            }
        }

        let has_seal_sale = self
            .exchange_methods
            .iter()
            .any(|method| matches!(method, ExchangeMethod::Seal(_)));
        if !has_seal_sale {
            if let Some(delivery) = SealExchange::for_delivery(self.item_level, self.rarity) {
                self.exchange_methods.push(ExchangeMethod::Seal(delivery));
            }
        }
        self
    }
}

/// Read-only lookup of every item, built once and shared.
///
/// Construction completes each item with its derived channels.
#[derive(Debug, Clone, Default)]
pub struct ItemTable {
    items: HashMap<ItemId, Item>,
}

impl ItemTable {
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| (item.id, item.with_derived_methods()))
                .collect(),
        }
    }

    /// Load a table from a JSON array of items.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let items: Vec<Item> = serde_json::from_str(&content)?;
        Ok(Self::new(items))
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Iterate items in ascending id order.
    pub fn iter_sorted(&self) -> impl Iterator<Item = &Item> {
        let mut items: Vec<&Item> = self.items.values().collect();
        items.sort_by_key(|item| item.id);
        items.into_iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
