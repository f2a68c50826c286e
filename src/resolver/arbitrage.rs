//! Cross-world arbitrage within a data center.

use serde::Serialize;

use crate::domain::{Gil, Listing, WorldId};

/// A buy-low entry paired with the higher-priced entry it resells against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArbitragePair {
    pub away: Listing,
    pub home: Listing,
}

impl ArbitragePair {
    pub fn margin_per_unit(&self) -> Gil {
        self.home.price_per_unit - self.away.price_per_unit
    }

    /// Whether buying requires visiting another world.
    pub fn cross_world(&self) -> bool {
        self.away.world_id != self.home.world_id
    }
}

/// Pair the cheapest home-world entry with the cheapest entry in the data center.
///
/// Entries are scanned by price, then listing id, so the result does not
/// depend on repository order. The away candidate is only replaced by a
/// strictly cheaper entry. The higher-priced side is always `home`, so the
/// margin is never negative; `None` when there is no home-world entry.
pub fn best_arbitrage(listings: &[Listing], home_world: WorldId) -> Option<ArbitragePair> {
    let mut ordered: Vec<&Listing> = listings.iter().collect();
    ordered.sort_by(|a, b| {
        a.price_per_unit
            .cmp(&b.price_per_unit)
            .then_with(|| a.id.cmp(&b.id))
    });

    let home = ordered
        .iter()
        .copied()
        .find(|listing| listing.world_id == home_world)?;

    // Starting from the home entry keeps away <= home.
    let mut away = home;
    for candidate in ordered.iter().copied() {
        if candidate.price_per_unit < away.price_per_unit {
            away = candidate;
        }
    }

    Some(ArbitragePair {
        away: away.clone(),
        home: home.clone(),
    })
}
