//! Crafting blueprints.

use serde::{Deserialize, Serialize};

use super::ids::ItemId;
use super::player::{Job, PlayerContext};

/// One ingredient line of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item_id: ItemId,
    pub quantity: u32,
}

impl Ingredient {
    pub const fn new(item_id: ItemId, quantity: u32) -> Self {
        Self { item_id, quantity }
    }
}

/// A way to craft an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeInfo {
    pub job: Job,
    pub level: u8,
    #[serde(default = "default_yield")]
    pub yield_quantity: u32,
    #[serde(default)]
    pub specialist: bool,
    #[serde(default)]
    pub expert: bool,
    #[serde(default)]
    pub quick_synth: bool,
    /// Name of the master recipe book this recipe is locked behind.
    #[serde(default)]
    pub secret_book: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

fn default_yield() -> u32 {
    1
}

impl RecipeInfo {
    /// Create a single-yield recipe with no special flags.
    pub fn new(job: Job, level: u8, ingredients: Vec<Ingredient>) -> Self {
        Self {
            job,
            level,
            yield_quantity: 1,
            specialist: false,
            expert: false,
            quick_synth: false,
            secret_book: None,
            ingredients,
        }
    }

    /// Set the number of units produced per craft.
    pub fn with_yield(mut self, yield_quantity: u32) -> Self {
        self.yield_quantity = yield_quantity;
        self
    }

    /// Mark the recipe as requiring a specialist.
    pub fn specialist(mut self) -> Self {
        self.specialist = true;
        self
    }

    /// Mark the recipe as an expert recipe.
    pub fn expert(mut self) -> Self {
        self.expert = true;
        self
    }

    /// Lock the recipe behind a master book.
    pub fn with_secret_book(mut self, book: impl Into<String>) -> Self {
        self.secret_book = Some(book.into());
        self
    }

    /// Units produced per craft, never zero.
    pub fn yield_per_craft(&self) -> u32 {
        self.yield_quantity.max(1)
    }

    /// Whether the player's crafting job meets the level requirement.
    ///
    /// Recipes filed under a gathering job are never craftable.
    pub fn craftable_by(&self, player: &PlayerContext) -> bool {
        !self.job.is_gatherer() && player.job_level(self.job) >= self.level
    }
}
