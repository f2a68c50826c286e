//! Exchange methods: the non-market ways to trade currency or effort for items.
//!
//! Every variant exposes the same capability set (cost, quantity per
//! transaction, cost per unit, effort factor, description). Behaviour only
//! diverges where the variants genuinely differ: rank gating for seals and
//! location/job gating for gathering.
//!
//! The same type describes both directions. An item's `obtain_methods` are
//! what the player pays to receive the item; its `exchange_methods` are what
//! a vendor or shop pays the player for it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::{Effort, Gil};
use super::player::{Job, PlayerContext};

/// Effort of a plain gil vendor trade.
pub const GIL_EFFORT: Effort = 0.85;

/// Effort of a Grand Company seal trade.
pub const SEAL_EFFORT: Effort = 0.9;

/// Effort of an unknown shop currency.
pub const DEFAULT_CURRENCY_EFFORT: Effort = 1.0;

/// Effort of a level-capped, visible gathering node.
pub const GATHERING_BASE_EFFORT: Effort = 1.1;

/// Extra effort for nodes that only appear under special conditions.
pub const HIDDEN_NODE_EFFORT: Effort = 0.1;

/// Level at which gathering nodes receive no low-level discount.
pub const GATHERING_LEVEL_REFERENCE: u8 = 90;

/// Discount for the first ten levels below the reference; halves per tier.
const GATHERING_FIRST_STEP: Effort = 0.1;

/// Units gathered per collectable action.
const COLLECTABLE_YIELD: u32 = 3;

/// Units gathered per action at effort 1.0.
const GATHERING_YIELD_BASE: f64 = 30.0;

/// Known shop currencies and their effort weights.
const CURRENCY_EFFORTS: [(&str, Effort); 30] = [
    ("Allagan Tomestone of Poetics", 1.0),
    ("Allagan Tomestone of Aesthetics", 1.0),
    ("Allagan Tomestone of Heliometry", 1.0),
    ("Allagan Tomestone of Mathematics", 1.0),
    ("White Crafters' Scrip", 0.96),
    ("Purple Crafters' Scrip", 0.98),
    ("Orange Crafters' Scrip", 0.99),
    ("White Gatherers' Scrip", 0.96),
    ("Purple Gatherers' Scrip", 0.98),
    ("Orange Gatherers' Scrip", 0.99),
    ("Skybuilders' Scrip", 0.97),
    ("Bicolor Gemstone", 0.95),
    ("Wolf Mark", 1.0),
    ("Trophy Crystal", 1.0),
    ("Allied Seal", 0.97),
    ("Centurio Seal", 0.98),
    ("Sack of Nuts", 0.97),
    ("MGP", 0.99),
    ("Seafarer's Cowrie", 0.98),
    ("Islander's Cowrie", 0.96),
    ("Faux Leaf", 1.0),
    ("Storm Seal", 0.95),
    ("Serpent Seal", 0.95),
    ("Flame Seal", 0.95),
    ("Venture", 0.95),
    ("Achievement Certificate", 1.0),
    ("Irregular Tomestone of Philosophy", 1.0),
    ("Irregular Tomestone of Mythology", 1.0),
    ("Fête Token", 0.99),
    ("Bozjan Cluster", 0.99),
];

/// Effort weight of a named shop currency.
pub fn currency_effort(currency: &str) -> Effort {
    CURRENCY_EFFORTS
        .iter()
        .find(|(name, _)| *name == currency)
        .map_or(DEFAULT_CURRENCY_EFFORT, |(_, effort)| *effort)
}

/// Seals awarded for delivering an item to a Grand Company.
///
/// Piecewise linear in item level, scaled up for rarer items. Common items
/// (rarity 0 or 1) and items without an item level are worth nothing.
pub fn seal_value(item_level: u16, rarity: u8) -> Gil {
    if rarity <= 1 || item_level == 0 {
        return 0;
    }

    let ilvl = i64::from(item_level);
    let base = if ilvl < 400 {
        2 * ilvl + 14
    } else if ilvl < 535 {
        814 + 4 * (ilvl - 400)
    } else {
        1354 + 6 * (ilvl - 535)
    };

    match rarity {
        2 => base,
        3 => base * 6 / 5,
        _ => base * 3 / 2,
    }
}

/// One way to trade currency or effort for a quantity of an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExchangeMethod {
    Gil(GilExchange),
    Seal(SealExchange),
    Currency(CurrencyExchange),
    Gathering(GatheringInfo),
}

/// Vendor trade for gil, one unit per transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GilExchange {
    pub price: Gil,
}

/// Grand Company seal trade, gated by the player's rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealExchange {
    pub price: Gil,
    #[serde(default)]
    pub required_rank: u8,
}

impl SealExchange {
    /// The seal sale an item qualifies for through expert delivery.
    ///
    /// Returns `None` when the item is worth no seals.
    pub fn for_delivery(item_level: u16, rarity: u8) -> Option<Self> {
        let price = seal_value(item_level, rarity);
        (price > 0).then_some(Self {
            price,
            required_rank: 0,
        })
    }
}

/// Shop trade in an arbitrary named currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyExchange {
    pub currency: String,
    pub price: Gil,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Gathering activity across one or more node locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatheringInfo {
    pub locations: Vec<GatheringLocation>,
    #[serde(default)]
    pub collectable: bool,
}

/// Kind of gathering node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Mining,
    Quarrying,
    Logging,
    Harvesting,
    Fishing,
    Spearfishing,
}

impl NodeType {
    /// Gathering job able to work this node.
    pub const fn job(self) -> Job {
        match self {
            NodeType::Mining | NodeType::Quarrying => Job::Min,
            NodeType::Logging | NodeType::Harvesting => Job::Btn,
            NodeType::Fishing | NodeType::Spearfishing => Job::Fsh,
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeType::Mining => "Mining",
            NodeType::Quarrying => "Quarrying",
            NodeType::Logging => "Logging",
            NodeType::Harvesting => "Harvesting",
            NodeType::Fishing => "Fishing",
            NodeType::Spearfishing => "Spearfishing",
        };
        f.write_str(name)
    }
}

/// A single place an item can be gathered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatheringLocation {
    pub region: String,
    pub area: String,
    pub place: String,
    pub node: NodeType,
    pub level: u8,
    #[serde(default)]
    pub hidden: bool,
}

impl GatheringLocation {
    /// Effort of gathering at this location.
    pub fn effort(&self) -> Effort {
        let mut effort = GATHERING_BASE_EFFORT;
        if self.hidden {
            effort += HIDDEN_NODE_EFFORT;
        }

        let tiers = GATHERING_LEVEL_REFERENCE.saturating_sub(self.level) / 10;
        let mut step = GATHERING_FIRST_STEP;
        for _ in 0..tiers {
            effort -= step;
            step /= 2.0;
        }
        effort
    }

    /// Whether the player's gathering job reaches this node.
    pub fn usable_by(&self, player: &PlayerContext) -> bool {
        player.job_level(self.node.job()) >= self.level
    }
}

impl GatheringInfo {
    /// The easiest location, if any.
    fn easiest(&self) -> Option<&GatheringLocation> {
        self.locations
            .iter()
            .min_by(|a, b| a.effort().total_cmp(&b.effort()))
    }

    /// Effort of the easiest location; base effort when none are listed.
    pub fn effort(&self) -> Effort {
        self.easiest()
            .map_or(GATHERING_BASE_EFFORT, GatheringLocation::effort)
    }

    /// Units received per gathering action.
    pub fn yield_per_action(&self) -> u32 {
        if self.collectable {
            return COLLECTABLE_YIELD;
        }
        let units = (GATHERING_YIELD_BASE / self.effort()).floor();
        (units as u32).max(1)
    }
}

impl ExchangeMethod {
    /// Short type label of the channel.
    pub const fn kind_label(&self) -> &'static str {
        match self {
            ExchangeMethod::Gil(_) => "gil",
            ExchangeMethod::Seal(_) => "grand_company_seal",
            ExchangeMethod::Currency(_) => "currency",
            ExchangeMethod::Gathering(_) => "gathering",
        }
    }

    /// Price of one transaction in the method's own currency.
    pub fn cost(&self) -> Gil {
        match self {
            ExchangeMethod::Gil(m) => m.price,
            ExchangeMethod::Seal(m) => m.price,
            ExchangeMethod::Currency(m) => m.price,
            ExchangeMethod::Gathering(_) => 0,
        }
    }

    /// Units of the item exchanged per transaction.
    pub fn quantity(&self) -> u32 {
        match self {
            ExchangeMethod::Gil(_) | ExchangeMethod::Seal(_) => 1,
            ExchangeMethod::Currency(m) => m.quantity.max(1),
            ExchangeMethod::Gathering(m) => m.yield_per_action(),
        }
    }

    pub fn cost_per_unit(&self) -> f64 {
        self.cost() as f64 / f64::from(self.quantity())
    }

    pub fn effort_factor(&self) -> Effort {
        match self {
            ExchangeMethod::Gil(_) => GIL_EFFORT,
            ExchangeMethod::Seal(_) => SEAL_EFFORT,
            ExchangeMethod::Currency(m) => currency_effort(&m.currency),
            ExchangeMethod::Gathering(m) => m.effort(),
        }
    }

    /// Human-readable description; also distinguishes methods in a cart.
    pub fn description(&self) -> String {
        match self {
            ExchangeMethod::Gil(_) => "Gil vendor".to_string(),
            ExchangeMethod::Seal(m) if m.required_rank > 0 => {
                format!("Grand Company seals (rank {})", m.required_rank)
            }
            ExchangeMethod::Seal(_) => "Grand Company seals".to_string(),
            ExchangeMethod::Currency(m) => format!("Currency: {}", m.currency),
            ExchangeMethod::Gathering(m) => match m.easiest() {
                Some(loc) => format!("Gathering: {} lv{} ({})", loc.node, loc.level, loc.place),
                None => "Gathering".to_string(),
            },
        }
    }

    /// Restrict the method to what the player can actually use.
    ///
    /// Seal trades need the required rank; gathering keeps only the locations
    /// the player's gathering jobs reach. Returns `None` when nothing is left.
    pub fn usable_by(&self, player: &PlayerContext) -> Option<ExchangeMethod> {
        match self {
            ExchangeMethod::Seal(m) if player.gc_rank < m.required_rank => None,
            ExchangeMethod::Gathering(m) => {
                let locations: Vec<GatheringLocation> = m
                    .locations
                    .iter()
                    .filter(|loc| loc.usable_by(player))
                    .cloned()
                    .collect();
                if locations.is_empty() {
                    return None;
                }
                Some(ExchangeMethod::Gathering(GatheringInfo {
                    locations,
                    collectable: m.collectable,
                }))
            }
            other => Some(other.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::{DataCenterId, WorldId};

    fn location(node: NodeType, level: u8, hidden: bool) -> GatheringLocation {
        GatheringLocation {
            region: "La Noscea".into(),
            area: "Lower La Noscea".into(),
            place: "Moraby Bay".into(),
            node,
            level,
            hidden,
        }
    }

    fn player() -> PlayerContext {
        PlayerContext::new(WorldId::new(1), DataCenterId::new(1))
    }

    #[test]
    fn seal_value_matches_known_delivery() {
        assert_eq!(seal_value(635, 2), 1954);
    }

    #[test]
    fn seal_value_is_zero_for_common_or_unleveled_items() {
        assert_eq!(seal_value(0, 2), 0);
        assert_eq!(seal_value(635, 1), 0);
        assert_eq!(seal_value(635, 0), 0);
    }

    #[test]
    fn seal_value_scales_with_rarity() {
        assert!(seal_value(500, 3) > seal_value(500, 2));
        assert!(seal_value(500, 4) > seal_value(500, 3));
    }

    #[test]
    fn seal_value_is_continuous_at_breakpoints() {
        assert_eq!(seal_value(399, 2) + 2, seal_value(400, 2));
        assert_eq!(seal_value(534, 2) + 4, seal_value(535, 2));
    }

    #[test]
    fn gil_exchange_capabilities() {
        let method = ExchangeMethod::Gil(GilExchange { price: 120 });
        assert_eq!(method.cost(), 120);
        assert_eq!(method.quantity(), 1);
        assert_eq!(method.cost_per_unit(), 120.0);
        assert_eq!(method.effort_factor(), GIL_EFFORT);
        assert_eq!(method.kind_label(), "gil");
    }

    #[test]
    fn currency_effort_uses_table_with_default() {
        assert_eq!(currency_effort("Bicolor Gemstone"), 0.95);
        assert_eq!(currency_effort("Imaginary Coin"), DEFAULT_CURRENCY_EFFORT);
    }

    #[test]
    fn currency_exchange_cost_per_unit() {
        let method = ExchangeMethod::Currency(CurrencyExchange {
            currency: "White Crafters' Scrip".into(),
            price: 25,
            quantity: 5,
        });
        assert_eq!(method.cost_per_unit(), 5.0);
        assert_eq!(method.effort_factor(), 0.96);
        assert_eq!(method.description(), "Currency: White Crafters' Scrip");
    }

    #[test]
    fn gathering_effort_at_reference_level() {
        let loc = location(NodeType::Mining, 90, false);
        assert!((loc.effort() - 1.1).abs() < 1e-9);
    }

    #[test]
    fn hidden_nodes_cost_more_effort() {
        let loc = location(NodeType::Mining, 90, true);
        assert!((loc.effort() - 1.2).abs() < 1e-9);
    }

    #[test]
    fn low_level_nodes_get_decaying_discount() {
        // 40 levels below: 0.1 + 0.05 + 0.025 + 0.0125
        let loc = location(NodeType::Logging, 50, false);
        assert!((loc.effort() - (1.1 - 0.1875)).abs() < 1e-9);

        // a partial tier gives no discount
        let loc = location(NodeType::Logging, 85, false);
        assert!((loc.effort() - 1.1).abs() < 1e-9);
    }

    #[test]
    fn gathering_yield_depends_on_effort_and_collectability() {
        let info = GatheringInfo {
            locations: vec![location(NodeType::Mining, 90, false)],
            collectable: false,
        };
        assert_eq!(info.yield_per_action(), 27);

        let collectable = GatheringInfo {
            collectable: true,
            ..info
        };
        assert_eq!(collectable.yield_per_action(), 3);
    }

    #[test]
    fn gathering_uses_easiest_location() {
        let info = GatheringInfo {
            locations: vec![
                location(NodeType::Mining, 90, true),
                location(NodeType::Mining, 70, false),
            ],
            collectable: false,
        };
        assert!((info.effort() - 0.95).abs() < 1e-9);
        assert_eq!(ExchangeMethod::Gathering(info).cost(), 0);
    }

    #[test]
    fn seal_exchange_is_gated_by_rank() {
        let method = ExchangeMethod::Seal(SealExchange {
            price: 200,
            required_rank: 5,
        });
        assert!(method.usable_by(&player().with_gc_rank(4)).is_none());
        assert!(method.usable_by(&player().with_gc_rank(5)).is_some());
    }

    #[test]
    fn gathering_keeps_only_reachable_locations() {
        let method = ExchangeMethod::Gathering(GatheringInfo {
            locations: vec![
                location(NodeType::Mining, 50, false),
                location(NodeType::Fishing, 20, false),
            ],
            collectable: false,
        });

        assert!(method.usable_by(&player()).is_none());

        let usable = method
            .usable_by(&player().with_job(Job::Fsh, 30))
            .unwrap();
        match usable {
            ExchangeMethod::Gathering(info) => {
                assert_eq!(info.locations.len(), 1);
                assert_eq!(info.locations[0].node, NodeType::Fishing);
            }
            other => panic!("unexpected method {other:?}"),
        }
    }

    #[test]
    fn delivery_seal_sale_only_for_valuable_items() {
        assert!(SealExchange::for_delivery(635, 1).is_none());
        assert_eq!(SealExchange::for_delivery(635, 2).unwrap().price, 1954);
    }

    #[test]
    fn exchange_method_deserializes_tagged() {
        let json = r#"{"type":"currency","currency":"MGP","price":1000}"#;
        let method: ExchangeMethod = serde_json::from_str(json).unwrap();
        assert_eq!(method.quantity(), 1);
        assert_eq!(method.kind_label(), "currency");
    }
}
