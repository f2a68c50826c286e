//! Economy domain: items, the ways to trade them, and purchase plans.

mod cart;
mod ids;
mod item;
mod market;
mod money;
mod plan;
mod player;
mod recipe;

pub mod exchange;

// Core domain types
pub use ids::{DataCenterId, ItemId, ListingId, WorldId};
pub use item::{Item, ItemTable};
pub use market::{Listing, Sale};
pub use money::{div_ceil, Effort, Gil};
pub use player::{Job, PlayerContext, ALL_JOBS};
pub use recipe::{Ingredient, RecipeInfo};

// Exchange methods
pub use exchange::{
    CurrencyExchange, ExchangeMethod, GatheringInfo, GatheringLocation, GilExchange, NodeType,
    SealExchange,
};

// Plans
pub use cart::{CartLine, LineKey, LineSource, ShoppingCart};
pub use plan::{ArbitrageInfo, ObtainInfo, ProfitInfo, SaleKind, SaleMethod, MARKET_CHANNEL};
