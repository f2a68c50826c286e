//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for items, listings, sales and
//! players, plus a small recipe tree, so tests focus on assertions rather
//! than construction boilerplate.

use chrono::{DateTime, Duration, Utc};

use crate::adapter::MemoryRepository;
use crate::domain::exchange::{GilExchange, SealExchange};
use crate::domain::{
    DataCenterId, ExchangeMethod, Gil, Ingredient, Item, ItemId, ItemTable, Job, Listing,
    PlayerContext, RecipeInfo, Sale, WorldId,
};

/// The player's home world.
pub const HOME_WORLD: WorldId = WorldId::new(73);
/// Another world on the same data center.
pub const OTHER_WORLD: WorldId = WorldId::new(79);
/// The player's data center.
pub const DATA_CENTER: DataCenterId = DataCenterId::new(8);

/// Crafted from yarn and crystals.
pub const CLOTH: ItemId = ItemId::new(1);
/// Crafted three at a time from fleece and crystals.
pub const YARN: ItemId = ItemId::new(2);
/// Vendor-bought at 5 gil.
pub const CRYSTAL: ItemId = ItemId::new(3);
/// Vendor-bought at 2 gil.
pub const FLEECE: ItemId = ItemId::new(4);

/// A player with every job at level 90 and one retainer named `Mog`.
pub fn player() -> PlayerContext {
    PlayerContext::new(HOME_WORLD, DATA_CENTER)
        .with_all_jobs(90)
        .with_retainer("Mog")
}

/// A gil vendor selling one unit for `price`.
pub fn vendor(price: Gil) -> ExchangeMethod {
    ExchangeMethod::Gil(GilExchange { price })
}

/// A Grand Company seal trade.
pub fn seal(price: Gil, required_rank: u8) -> ExchangeMethod {
    ExchangeMethod::Seal(SealExchange {
        price,
        required_rank,
    })
}

/// A listing with the given id.
pub fn listing(id: &str, item: ItemId, world: WorldId, price: Gil, quantity: u32) -> Listing {
    Listing::new(id, item, world, price, quantity)
}

/// A home-world sale `hours_ago` hours before `now`.
pub fn sale_hours_ago(
    item: ItemId,
    price: Gil,
    quantity: u32,
    now: DateTime<Utc>,
    hours_ago: i64,
) -> Sale {
    Sale::new(item, HOME_WORLD, price, quantity, now - Duration::hours(hours_ago))
}

/// Home-world sales one hour apart, starting an hour before `now`.
pub fn hourly_sales(item: ItemId, price: Gil, count: i64, now: DateTime<Utc>) -> Vec<Sale> {
    (1..=count)
        .map(|hours| sale_hours_ago(item, price, 1, now, hours))
        .collect()
}

/// The cloth recipe tree.
///
/// Cloth takes 3 yarn and 4 crystals; yarn yields 3 per craft from 4 fleece
/// and 3 crystals. Fifty cloth therefore needs 350 crystals and 200 fleece.
pub fn yarn_items() -> Vec<Item> {
    vec![
        Item::new(CLOTH, "Cloth").with_recipe(RecipeInfo::new(
            Job::Wvr,
            50,
            vec![Ingredient::new(YARN, 3), Ingredient::new(CRYSTAL, 4)],
        )),
        Item::new(YARN, "Yarn").with_recipe(
            RecipeInfo::new(
                Job::Wvr,
                40,
                vec![Ingredient::new(FLEECE, 4), Ingredient::new(CRYSTAL, 3)],
            )
            .with_yield(3),
        ),
        Item::new(CRYSTAL, "Crystal").with_obtain_method(vendor(5)),
        Item::new(FLEECE, "Fleece").with_obtain_method(vendor(2)),
    ]
}

pub fn yarn_table() -> ItemTable {
    ItemTable::new(yarn_items())
}

/// An empty repository with the home data center's worlds registered.
pub fn repository() -> MemoryRepository {
    let repo = MemoryRepository::new();
    repo.add_world(HOME_WORLD, DATA_CENTER);
    repo.add_world(OTHER_WORLD, DATA_CENTER);
    repo
}
