//! Sale resolver: the most valuable way to dispose of an item.

use crate::domain::{Item, Listing, PlayerContext, Sale, SaleKind, SaleMethod};

/// Label of an undercutting marketboard sale.
pub const UNDERCUT_LABEL: &str = "Marketboard (undercut)";

/// Label of a marketboard sale priced from history.
pub const HISTORY_LABEL: &str = "Marketboard (history)";

/// Pick the disposal channel with the greatest value per unit.
///
/// `listings` are the item's data-center listings and `sales` its home-world
/// sale history. Marketboard channels are only considered for marketable
/// items. An exchange method replaces the current best only when strictly
/// better. Returns `None` when no channel yields a positive value.
pub fn best_sale_method(
    item: &Item,
    listings: &[Listing],
    sales: &[Sale],
    player: &PlayerContext,
) -> Option<SaleMethod> {
    let mut best = if item.is_marketable() {
        undercut(listings, player).or_else(|| historical(sales))
    } else {
        None
    };

    for method in &item.exchange_methods {
        let Some(method) = method.usable_by(player) else {
            continue;
        };
        let candidate = SaleMethod::new(
            SaleKind::Exchange,
            method.description(),
            method.cost(),
            method.quantity(),
        )
        .with_channel(method.kind_label());
        if candidate.value_per_unit <= 0.0 {
            continue;
        }
        let better = best
            .as_ref()
            .map_or(true, |current| candidate.value_per_unit > current.value_per_unit);
        if better {
            best = Some(candidate);
        }
    }

    best.filter(|sale| sale.value > 0 && sale.value_per_unit > 0.0)
}

/// One below the cheapest home-world listing, for that listing's quantity.
fn undercut(listings: &[Listing], player: &PlayerContext) -> Option<SaleMethod> {
    let cheapest = listings
        .iter()
        .filter(|listing| listing.world_id == player.home_world)
        .min_by(|a, b| {
            a.price_per_unit
                .cmp(&b.price_per_unit)
                .then_with(|| a.id.cmp(&b.id))
        })?;

    let price = cheapest.price_per_unit - 1;
    let quantity = cheapest.quantity.max(1);
    Some(SaleMethod::new(
        SaleKind::Undercut,
        UNDERCUT_LABEL,
        price * i64::from(quantity),
        quantity,
    ))
}

/// Average price and batch size over the supplied sales.
fn historical(sales: &[Sale]) -> Option<SaleMethod> {
    if sales.is_empty() {
        return None;
    }
    let count = sales.len() as f64;
    let avg_price = sales.iter().map(|s| s.price_per_unit as f64).sum::<f64>() / count;
    let avg_quantity = sales.iter().map(|s| f64::from(s.quantity)).sum::<f64>() / count;

    let value = (avg_price * avg_quantity).round() as i64;
    let quantity = (avg_quantity.round() as u32).max(1);
    Some(SaleMethod::new(SaleKind::HistoricalAverage, HISTORY_LABEL, value, quantity))
}
