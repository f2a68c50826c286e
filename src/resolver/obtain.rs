//! Obtain resolver: the easiest way to get a quantity of an item.
//!
//! Three channels compete for every item and every recursive ingredient:
//! non-market exchange methods, marketboard listings, and crafting. A plan
//! beats another when its cost weighted by effort is lower. The search is
//! greedy; it does not promise a globally optimal plan.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::config::{MissingIngredientPolicy, ResolverConfig};
use crate::domain::{
    div_ceil, CartLine, Effort, Item, ItemId, ItemTable, Listing, ListingId, ObtainInfo,
    PlayerContext, RecipeInfo, ShoppingCart,
};

use super::snapshot::MarketSnapshot;

/// Effort multiplier per repeated transaction with the same method.
const REPEAT_TRANSACTION_EFFORT: Effort = 1.01;

const MARKET_BASE_EFFORT: Effort = 1.0;
const HOME_LISTING_EFFORT: Effort = 0.01;
const FOREIGN_LISTING_EFFORT: Effort = 0.06;

/// Travel surcharge applied to foreign listings when ordering them.
const FOREIGN_PRICE_FACTOR: f64 = 1.05;

const SECRET_BOOK_EFFORT: Effort = 1.02;
const SPECIALIST_EFFORT: Effort = 1.05;
const EXPERT_EFFORT: Effort = 1.2;
const LOW_LEVEL_DISCOUNT: Effort = 0.95;
const NO_QUALITY_DISCOUNT: Effort = 0.95;

/// Levels below the cap at which a recipe counts as low level.
const LOW_LEVEL_MARGIN: u8 = 10;

/// Label of the marketboard channel.
pub const MARKET_METHOD: &str = "Marketboard";

/// Resolves obtain plans over an immutable item table and market snapshot.
///
/// Cheap to construct; holds only references and can be used from any
/// number of threads at once.
pub struct ObtainResolver<'a> {
    table: &'a ItemTable,
    snapshot: &'a MarketSnapshot,
    player: &'a PlayerContext,
    config: &'a ResolverConfig,
}

impl<'a> ObtainResolver<'a> {
    pub fn new(
        table: &'a ItemTable,
        snapshot: &'a MarketSnapshot,
        player: &'a PlayerContext,
        config: &'a ResolverConfig,
    ) -> Self {
        Self {
            table,
            snapshot,
            player,
            config,
        }
    }

    /// Find the easiest plan for `quantity` units of `item`.
    ///
    /// Returns `None` when no channel can supply the item or the quantity is 0.
    pub fn resolve(&self, item: &Item, quantity: u32) -> Option<ObtainInfo> {
        if quantity == 0 {
            return None;
        }
        let mut path = Vec::new();
        self.resolve_at(item, quantity, &mut path, &HashSet::new())
    }

    /// `path` holds the items being crafted above this one and `taken` the
    /// listings already bought by the plans enclosing this one.
    fn resolve_at(
        &self,
        item: &Item,
        quantity: u32,
        path: &mut Vec<ItemId>,
        taken: &HashSet<ListingId>,
    ) -> Option<ObtainInfo> {
        let mut best = self.from_methods(item, quantity);

        if let Some(market) = self.from_market(item, quantity, taken) {
            if market.is_easier_than(best.as_ref()) {
                best = Some(market);
            }
        }

        if item.recipes.is_empty() {
            return best;
        }
        if path.len() >= self.config.max_depth {
            tracing::debug!(
                item_id = %item.id,
                depth = path.len(),
                "crafting depth limit reached"
            );
            return best;
        }

        path.push(item.id);
        for recipe in &item.recipes {
            if !recipe.craftable_by(self.player) {
                continue;
            }
            if let Some(crafted) =
                self.from_recipe(item, recipe, quantity, path, taken, best.as_ref())
            {
                if crafted.is_easier_than(best.as_ref()) {
                    best = Some(crafted);
                }
            }
        }
        path.pop();

        best
    }

    /// Non-market exchange methods the player can use.
    fn from_methods(&self, item: &Item, quantity: u32) -> Option<ObtainInfo> {
        let mut best: Option<ObtainInfo> = None;

        for method in &item.obtain_methods {
            let Some(method) = method.usable_by(self.player) else {
                continue;
            };
            let transactions =
                div_ceil(u64::from(quantity), u64::from(method.quantity())) as u32;
            let line = CartLine::from_method(item.id, &method, transactions);
            let produced = line.quantity;
            let repeats = transactions.saturating_sub(1).min(i32::MAX as u32) as i32;
            let effort = method.effort_factor() * REPEAT_TRANSACTION_EFFORT.powi(repeats);

            let candidate = ObtainInfo::new(
                ShoppingCart::single(line, quantity),
                method.description(),
                produced,
                effort,
            );
            if candidate.is_easier_than(best.as_ref()) {
                best = Some(candidate);
            }
        }

        best
    }

    /// Buy whole listings, cheapest first, until the quantity is covered.
    ///
    /// Listings in `taken` belong to another part of the plan and are skipped.
    fn from_market(
        &self,
        item: &Item,
        quantity: u32,
        taken: &HashSet<ListingId>,
    ) -> Option<ObtainInfo> {
        if !item.is_marketable() {
            return None;
        }

        let mut listings: Vec<&Listing> = self
            .snapshot
            .listings(item.id)
            .iter()
            .filter(|listing| listing.quantity > 0 && !taken.contains(&listing.id))
            .collect();
        listings.sort_by(|a, b| self.compare_listings(a, b));

        let mut cart = ShoppingCart::new();
        cart.require(item.id, quantity);
        let mut bought = 0u32;
        let mut effort = MARKET_BASE_EFFORT;

        for listing in listings {
            if bought >= quantity {
                break;
            }
            cart.push_line(CartLine::from_listing(listing));
            bought = bought.saturating_add(listing.quantity);
            effort += if listing.world_id == self.player.home_world {
                HOME_LISTING_EFFORT
            } else {
                FOREIGN_LISTING_EFFORT
            };
        }

        if bought < quantity {
            return None;
        }
        Some(ObtainInfo::new(cart, MARKET_METHOD, bought, effort))
    }

    /// Travel-weighted total, then raw total, then listing id.
    fn compare_listings(&self, a: &Listing, b: &Listing) -> Ordering {
        self.weighted_total(a)
            .cmp(&self.weighted_total(b))
            .then(a.total.cmp(&b.total))
            .then_with(|| a.id.cmp(&b.id))
    }

    fn weighted_total(&self, listing: &Listing) -> i64 {
        if listing.world_id == self.player.home_world {
            listing.total
        } else {
            (listing.total as f64 * FOREIGN_PRICE_FACTOR).round() as i64
        }
    }

    /// Craft the item with one recipe, resolving every ingredient.
    fn from_recipe(
        &self,
        item: &Item,
        recipe: &RecipeInfo,
        quantity: u32,
        path: &mut Vec<ItemId>,
        taken: &HashSet<ListingId>,
        current_best: Option<&ObtainInfo>,
    ) -> Option<ObtainInfo> {
        let yield_per_craft = recipe.yield_per_craft();
        let crafts = div_ceil(u64::from(quantity), u64::from(yield_per_craft));
        let modifier = self.recipe_modifier(item, recipe);

        let mut taken = taken.clone();
        let mut cart = ShoppingCart::new();
        let mut weighted_effort = 0.0;
        let mut total_cost = 0.0;
        let mut plain_effort = 0.0;
        let mut resolved = 0u32;

        for ingredient in &recipe.ingredients {
            let needed = div_ceil(
                u64::from(ingredient.quantity) * u64::from(quantity),
                u64::from(yield_per_craft),
            )
            .min(u64::from(u32::MAX)) as u32;
            if needed == 0 {
                continue;
            }

            if path.contains(&ingredient.item_id) {
                tracing::warn!(
                    item_id = %item.id,
                    ingredient_id = %ingredient.item_id,
                    "recipe cycle detected, abandoning recipe"
                );
                return None;
            }

            let Some(child) = self.table.get(ingredient.item_id) else {
                match self.config.missing_ingredient {
                    MissingIngredientPolicy::Skip => {
                        tracing::debug!(
                            item_id = %item.id,
                            ingredient_id = %ingredient.item_id,
                            "skipping unknown ingredient"
                        );
                        continue;
                    }
                    MissingIngredientPolicy::Fail => {
                        tracing::debug!(
                            item_id = %item.id,
                            ingredient_id = %ingredient.item_id,
                            "unknown ingredient, abandoning recipe"
                        );
                        return None;
                    }
                }
            };

            // Leftovers bought for an earlier ingredient are used first.
            let reused = cart.surplus(child.id).min(needed);
            cart.require(child.id, reused);
            let remaining = needed - reused;
            if remaining == 0 {
                continue;
            }

            let Some(plan) = self.resolve_at(child, remaining, path, &taken) else {
                tracing::debug!(
                    item_id = %item.id,
                    ingredient_id = %child.id,
                    "ingredient unobtainable, abandoning recipe"
                );
                return None;
            };

            let cost = plan.cost() as f64;
            weighted_effort += cost * plan.effort;
            total_cost += cost;
            plain_effort += plan.effort;
            resolved += 1;
            cart.merge(plan.cart);
            taken.extend(cart.listing_ids().cloned());

            if let Some(best) = current_best {
                let partial_effort =
                    mean_effort(weighted_effort, total_cost, plain_effort, resolved) * modifier;
                if cart.total_cost() as f64 * partial_effort > best.weighted_cost() {
                    tracing::debug!(
                        item_id = %item.id,
                        job = %recipe.job,
                        "recipe already harder than best plan, pruning"
                    );
                    return None;
                }
            }
        }

        let effort = mean_effort(weighted_effort, total_cost, plain_effort, resolved) * modifier;
        let produced = (crafts * u64::from(yield_per_craft)).min(u64::from(u32::MAX)) as u32;

        Some(ObtainInfo::new(
            cart,
            format!("Crafting ({})", recipe.job),
            produced,
            effort,
        ))
    }

    fn recipe_modifier(&self, item: &Item, recipe: &RecipeInfo) -> Effort {
        let mut modifier = 1.0;
        if recipe.secret_book.is_some() {
            modifier *= SECRET_BOOK_EFFORT;
        }
        if recipe.specialist {
            modifier *= SPECIALIST_EFFORT;
        }
        if recipe.expert {
            modifier *= EXPERT_EFFORT;
        }
        let low_level = recipe.level < self.config.level_cap.saturating_sub(LOW_LEVEL_MARGIN);
        if low_level && !recipe.expert && item.can_be_hq {
            modifier *= LOW_LEVEL_DISCOUNT;
        }
        if !item.can_be_hq {
            modifier *= NO_QUALITY_DISCOUNT;
        }
        modifier
    }
}

/// Cost-weighted mean effort; plain mean when nothing costs anything.
fn mean_effort(weighted: f64, total_cost: f64, plain: f64, count: u32) -> Effort {
    if count == 0 {
        1.0
    } else if total_cost > 0.0 {
        weighted / total_cost
    } else {
        plain / f64::from(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::exchange::{CurrencyExchange, GilExchange, SealExchange};
    use crate::domain::{DataCenterId, ExchangeMethod, Ingredient, Job, WorldId};

    const HOME: WorldId = WorldId::new(1);
    const AWAY: WorldId = WorldId::new(2);
    const DC: DataCenterId = DataCenterId::new(1);

    fn player() -> PlayerContext {
        PlayerContext::new(HOME, DC).with_all_jobs(90)
    }

    fn vendor(price: i64) -> ExchangeMethod {
        ExchangeMethod::Gil(GilExchange { price })
    }

    fn id(n: u32) -> ItemId {
        ItemId::new(n)
    }

    fn resolve(
        table: &ItemTable,
        snapshot: &MarketSnapshot,
        player: &PlayerContext,
        config: &ResolverConfig,
        item: u32,
        quantity: u32,
    ) -> Option<ObtainInfo> {
        let item = table.get(id(item)).unwrap();
        ObtainResolver::new(table, snapshot, player, config).resolve(item, quantity)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn zero_quantity_is_unresolvable() {
        let table = ItemTable::new([Item::new(id(1), "Shard").with_obtain_method(vendor(5))]);
        let snapshot = MarketSnapshot::new();
        let config = ResolverConfig::default();
        assert!(resolve(&table, &snapshot, &player(), &config, 1, 0).is_none());
    }

    #[test]
    fn nothing_available_is_unresolvable() {
        let table = ItemTable::new([Item::new(id(1), "Relic")]);
        let snapshot = MarketSnapshot::new();
        let config = ResolverConfig::default();
        assert!(resolve(&table, &snapshot, &player(), &config, 1, 1).is_none());
    }

    #[test]
    fn vendor_transactions_scale_effort() {
        let table = ItemTable::new([Item::new(id(1), "Shard").with_obtain_method(vendor(5))]);
        let snapshot = MarketSnapshot::new();
        let config = ResolverConfig::default();

        let plan = resolve(&table, &snapshot, &player(), &config, 1, 3).unwrap();

        assert_eq!(plan.cost(), 15);
        assert_eq!(plan.quantity, 3);
        assert_eq!(plan.method, "Gil vendor");
        assert!(approx(plan.effort, 0.85 * 1.01 * 1.01));
        assert_eq!(plan.cart.required(id(1)), 3);
    }

    #[test]
    fn currency_lots_round_up() {
        let method = ExchangeMethod::Currency(CurrencyExchange {
            currency: "White Crafters' Scrip".into(),
            price: 40,
            quantity: 10,
        });
        let table = ItemTable::new([Item::new(id(1), "Ink").with_obtain_method(method)]);
        let snapshot = MarketSnapshot::new();
        let config = ResolverConfig::default();

        let plan = resolve(&table, &snapshot, &player(), &config, 1, 12).unwrap();

        assert_eq!(plan.quantity, 20);
        assert_eq!(plan.cost(), 80);
        assert_eq!(plan.cart.required(id(1)), 12);
    }

    #[test]
    fn gated_seal_method_is_ignored() {
        let seal = ExchangeMethod::Seal(SealExchange {
            price: 10,
            required_rank: 5,
        });
        let table = ItemTable::new([Item::new(id(1), "Ration")
            .with_obtain_method(seal)
            .with_obtain_method(vendor(300))]);
        let snapshot = MarketSnapshot::new();
        let config = ResolverConfig::default();

        let low_rank = player().with_gc_rank(1);
        let plan = resolve(&table, &snapshot, &low_rank, &config, 1, 1).unwrap();
        assert_eq!(plan.method, "Gil vendor");

        let high_rank = player().with_gc_rank(5);
        let plan = resolve(&table, &snapshot, &high_rank, &config, 1, 1).unwrap();
        assert_eq!(plan.method, "Grand Company seals (rank 5)");
    }

    #[test]
    fn market_listing_tie_break_is_deterministic() {
        let table = ItemTable::new([Item::new(id(1), "Cloth")]);
        let config = ResolverConfig::default();
        let listings = vec![
            Listing::new("l-b", id(1), HOME, 100, 1),
            Listing::new("l-c", id(1), HOME, 100, 1),
            Listing::new("l-a", id(1), HOME, 100, 1),
        ];

        let mut chosen = Vec::new();
        for rotation in 0..listings.len() {
            let mut rotated = listings.clone();
            rotated.rotate_left(rotation);
            let snapshot = MarketSnapshot::new().with_listings(id(1), rotated);
            let plan = resolve(&table, &snapshot, &player(), &config, 1, 1).unwrap();
            chosen.push(plan.cart.lines()[0].source.clone());
        }

        assert!(chosen.windows(2).all(|pair| pair[0] == pair[1]));
        assert!(matches!(
            &chosen[0],
            crate::domain::LineSource::Listing { id, .. } if id.as_str() == "l-a"
        ));
    }

    #[test]
    fn foreign_listings_carry_travel_surcharge() {
        let table = ItemTable::new([Item::new(id(1), "Cloth")]);
        let config = ResolverConfig::default();
        let snapshot = MarketSnapshot::new().with_listings(
            id(1),
            vec![
                Listing::new("away", id(1), AWAY, 100, 1),
                Listing::new("home", id(1), HOME, 104, 1),
            ],
        );

        let plan = resolve(&table, &snapshot, &player(), &config, 1, 1).unwrap();

        assert_eq!(plan.cost(), 104);
        assert!(approx(plan.effort, 1.01));
    }

    #[test]
    fn market_buys_whole_listings_until_covered() {
        let table = ItemTable::new([Item::new(id(1), "Cloth")]);
        let config = ResolverConfig::default();
        let snapshot = MarketSnapshot::new().with_listings(
            id(1),
            vec![
                Listing::new("a", id(1), HOME, 10, 5),
                Listing::new("b", id(1), AWAY, 10, 5),
            ],
        );

        let plan = resolve(&table, &snapshot, &player(), &config, 1, 7).unwrap();

        assert_eq!(plan.quantity, 10);
        assert_eq!(plan.cost(), 100);
        assert_eq!(plan.cart.lines().len(), 2);
        assert!(approx(plan.effort, 1.0 + 0.01 + 0.06));
        assert_eq!(plan.method, MARKET_METHOD);
    }

    #[test]
    fn market_that_cannot_cover_is_absent() {
        let table = ItemTable::new([Item::new(id(1), "Cloth").with_obtain_method(vendor(50))]);
        let config = ResolverConfig::default();
        let snapshot = MarketSnapshot::new()
            .with_listings(id(1), vec![Listing::new("a", id(1), HOME, 1, 2)]);

        let plan = resolve(&table, &snapshot, &player(), &config, 1, 3).unwrap();

        assert_eq!(plan.method, "Gil vendor");
    }

    #[test]
    fn prohibited_items_ignore_listings() {
        let table = ItemTable::new([Item::new(id(1), "Token").market_prohibited()]);
        let config = ResolverConfig::default();
        let snapshot = MarketSnapshot::new()
            .with_listings(id(1), vec![Listing::new("a", id(1), HOME, 1, 1)]);

        assert!(resolve(&table, &snapshot, &player(), &config, 1, 1).is_none());
    }

    #[test]
    fn vendor_beats_slightly_cheaper_listing() {
        let table = ItemTable::new([Item::new(id(1), "Cloth").with_obtain_method(vendor(100))]);
        let config = ResolverConfig::default();
        let snapshot = MarketSnapshot::new()
            .with_listings(id(1), vec![Listing::new("a", id(1), HOME, 90, 1)]);

        // 100 * 0.85 = 85 against 90 * 1.01.
        let plan = resolve(&table, &snapshot, &player(), &config, 1, 1).unwrap();
        assert_eq!(plan.method, "Gil vendor");
    }

    fn yarn_table() -> ItemTable {
        ItemTable::new([
            Item::new(id(1), "Cloth").with_recipe(RecipeInfo::new(
                Job::Wvr,
                50,
                vec![Ingredient::new(id(2), 3), Ingredient::new(id(3), 4)],
            )),
            Item::new(id(2), "Yarn").with_recipe(
                RecipeInfo::new(
                    Job::Wvr,
                    40,
                    vec![Ingredient::new(id(4), 4), Ingredient::new(id(3), 3)],
                )
                .with_yield(3),
            ),
            Item::new(id(3), "Crystal").with_obtain_method(vendor(5)),
            Item::new(id(4), "Fleece").with_obtain_method(vendor(2)),
        ])
    }

    #[test]
    fn nested_recipe_requirements_flatten() {
        let table = yarn_table();
        let snapshot = MarketSnapshot::new();
        let config = ResolverConfig::default();

        let plan = resolve(&table, &snapshot, &player(), &config, 1, 50).unwrap();

        assert_eq!(plan.method, "Crafting (WVR)");
        assert_eq!(plan.quantity, 50);
        assert_eq!(plan.cart.required(id(3)), 350);
        assert_eq!(plan.cart.required(id(4)), 200);
        assert_eq!(plan.cart.present(id(3)), 350);
        assert_eq!(plan.cost(), 350 * 5 + 200 * 2);
        assert_eq!(plan.cart.lines().len(), 2);
    }

    #[test]
    fn crafting_yield_rounds_up_to_whole_crafts() {
        let table = yarn_table();
        let snapshot = MarketSnapshot::new();
        let config = ResolverConfig::default();

        let plan = resolve(&table, &snapshot, &player(), &config, 2, 4).unwrap();

        assert_eq!(plan.quantity, 6);
        assert_eq!(plan.cart.required(id(4)), 6);
        assert_eq!(plan.cart.required(id(3)), 4);
    }

    #[test]
    fn recipe_requires_job_level() {
        let table = yarn_table();
        let snapshot = MarketSnapshot::new();
        let config = ResolverConfig::default();
        let novice = PlayerContext::new(HOME, DC).with_job(Job::Wvr, 45);

        assert!(resolve(&table, &snapshot, &novice, &config, 1, 1).is_none());
        assert!(resolve(&table, &snapshot, &novice, &config, 2, 1).is_some());
    }

    #[test]
    fn surplus_from_earlier_ingredient_is_reused() {
        let ink = ExchangeMethod::Currency(CurrencyExchange {
            currency: "Unknown Token".into(),
            price: 40,
            quantity: 10,
        });
        let table = ItemTable::new([
            Item::new(id(1), "Scroll").with_recipe(RecipeInfo::new(
                Job::Alc,
                10,
                vec![Ingredient::new(id(2), 1), Ingredient::new(id(3), 3)],
            )),
            Item::new(id(2), "Quill").with_recipe(RecipeInfo::new(
                Job::Alc,
                10,
                vec![Ingredient::new(id(3), 2)],
            )),
            Item::new(id(3), "Ink").with_obtain_method(ink),
        ]);
        let snapshot = MarketSnapshot::new();
        let config = ResolverConfig::default();

        let plan = resolve(&table, &snapshot, &player(), &config, 1, 1).unwrap();

        assert_eq!(plan.cart.required(id(3)), 5);
        assert_eq!(plan.cart.present(id(3)), 10);
        assert_eq!(plan.cart.lines().len(), 1);
        assert_eq!(plan.cost(), 40);
    }

    #[test]
    fn recipe_modifiers_apply() {
        let build = |item: Item| {
            ItemTable::new([item, Item::new(id(2), "Ore").with_obtain_method(vendor(10))])
        };
        let snapshot = MarketSnapshot::new();
        let config = ResolverConfig::default();
        let ingredients = vec![Ingredient::new(id(2), 1)];

        // Low level and high quality capable.
        let table = build(
            Item::new(id(1), "Ingot")
                .with_hq(true)
                .with_recipe(RecipeInfo::new(Job::Bsm, 50, ingredients.clone())),
        );
        let plan = resolve(&table, &snapshot, &player(), &config, 1, 1).unwrap();
        assert!(approx(plan.effort, 0.85 * 0.95));

        // Expert, secret book, specialist at cap.
        let table = build(
            Item::new(id(1), "Ingot").with_hq(true).with_recipe(
                RecipeInfo::new(Job::Bsm, 90, ingredients.clone())
                    .expert()
                    .specialist()
                    .with_secret_book("Master Blacksmith IX"),
            ),
        );
        let plan = resolve(&table, &snapshot, &player(), &config, 1, 1).unwrap();
        assert!(approx(plan.effort, 0.85 * 1.02 * 1.05 * 1.2));

        // No high quality.
        let table = build(
            Item::new(id(1), "Ingot").with_recipe(RecipeInfo::new(Job::Bsm, 90, ingredients)),
        );
        let plan = resolve(&table, &snapshot, &player(), &config, 1, 1).unwrap();
        assert!(approx(plan.effort, 0.85 * 0.95));
    }

    #[test]
    fn recipe_without_ingredients_has_unit_effort() {
        let table = ItemTable::new([Item::new(id(1), "Gift")
            .with_hq(true)
            .with_recipe(RecipeInfo::new(Job::Cul, 90, vec![]))]);
        let snapshot = MarketSnapshot::new();
        let config = ResolverConfig::default();

        let plan = resolve(&table, &snapshot, &player(), &config, 1, 1).unwrap();
        assert_eq!(plan.cost(), 0);
        assert!(approx(plan.effort, 1.0));
    }

    #[test]
    fn cycles_are_unresolvable() {
        let table = ItemTable::new([
            Item::new(id(1), "Ouroboros").with_recipe(RecipeInfo::new(
                Job::Alc,
                1,
                vec![Ingredient::new(id(2), 1)],
            )),
            Item::new(id(2), "Tail").with_recipe(RecipeInfo::new(
                Job::Alc,
                1,
                vec![Ingredient::new(id(1), 1)],
            )),
        ]);
        let snapshot = MarketSnapshot::new();
        let config = ResolverConfig::default();

        assert!(resolve(&table, &snapshot, &player(), &config, 1, 1).is_none());
    }

    #[test]
    fn depth_limit_stops_crafting() {
        let table = yarn_table();
        let snapshot = MarketSnapshot::new();
        let config = ResolverConfig {
            max_depth: 1,
            ..ResolverConfig::default()
        };

        // Yarn would need a second level of crafting.
        assert!(resolve(&table, &snapshot, &player(), &config, 1, 1).is_none());
        assert!(resolve(&table, &snapshot, &player(), &config, 2, 1).is_some());
    }

    #[test]
    fn missing_ingredient_policy() {
        let table = ItemTable::new([
            Item::new(id(1), "Charm").with_recipe(RecipeInfo::new(
                Job::Gsm,
                1,
                vec![Ingredient::new(id(2), 1), Ingredient::new(id(99), 1)],
            )),
            Item::new(id(2), "Bead").with_obtain_method(vendor(3)),
        ]);
        let snapshot = MarketSnapshot::new();

        let skip = ResolverConfig::default();
        let plan = resolve(&table, &snapshot, &player(), &skip, 1, 1).unwrap();
        assert_eq!(plan.cost(), 3);

        let fail = ResolverConfig {
            missing_ingredient: MissingIngredientPolicy::Fail,
            ..ResolverConfig::default()
        };
        assert!(resolve(&table, &snapshot, &player(), &fail, 1, 1).is_none());
    }

    #[test]
    fn crafting_beats_expensive_vendor() {
        let table = ItemTable::new([
            Item::new(id(1), "Ingot")
                .with_obtain_method(vendor(1_000))
                .with_recipe(RecipeInfo::new(
                    Job::Bsm,
                    90,
                    vec![Ingredient::new(id(2), 2)],
                )),
            Item::new(id(2), "Ore").with_obtain_method(vendor(10)),
        ]);
        let snapshot = MarketSnapshot::new();
        let config = ResolverConfig::default();

        let plan = resolve(&table, &snapshot, &player(), &config, 1, 1).unwrap();
        assert_eq!(plan.method, "Crafting (BSM)");
        assert_eq!(plan.cost(), 20);
    }

    #[test]
    fn recipe_discount_counts_before_pruning() {
        // Vendor: 97 * 0.85 = 82.45. Crafting: 100 * 0.85 * 0.95 = 80.75.
        let table = ItemTable::new([
            Item::new(id(1), "Ingot")
                .with_obtain_method(vendor(97))
                .with_recipe(RecipeInfo::new(
                    Job::Bsm,
                    90,
                    vec![Ingredient::new(id(2), 1)],
                )),
            Item::new(id(2), "Ore").with_obtain_method(vendor(100)),
        ]);
        let snapshot = MarketSnapshot::new();
        let config = ResolverConfig::default();

        let plan = resolve(&table, &snapshot, &player(), &config, 1, 1).unwrap();

        assert_eq!(plan.method, "Crafting (BSM)");
        assert!(approx(plan.weighted_cost(), 80.75));
    }

    #[test]
    fn sibling_ingredients_never_share_listings() {
        let table = ItemTable::new([
            Item::new(id(1), "Cloth").with_recipe(RecipeInfo::new(
                Job::Wvr,
                50,
                vec![Ingredient::new(id(2), 3), Ingredient::new(id(3), 4)],
            )),
            Item::new(id(2), "Yarn").with_recipe(
                RecipeInfo::new(
                    Job::Wvr,
                    40,
                    vec![Ingredient::new(id(4), 4), Ingredient::new(id(3), 3)],
                )
                .with_yield(3),
            ),
            Item::new(id(3), "Crystal"),
            Item::new(id(4), "Fleece").with_obtain_method(vendor(2)),
        ]);
        let crystals = (1..=4)
            .map(|n| Listing::new(format!("c{n}"), id(3), HOME, 1, 100))
            .collect();
        let snapshot = MarketSnapshot::new().with_listings(id(3), crystals);
        let config = ResolverConfig::default();

        let plan = resolve(&table, &snapshot, &player(), &config, 1, 50).unwrap();

        for (item_id, required) in plan.cart.items_required() {
            assert!(plan.cart.present(*item_id) >= *required, "short on {item_id}");
        }
        assert_eq!(plan.cart.required(id(3)), 350);
        assert_eq!(plan.cart.present(id(3)), 400);
        assert_eq!(plan.cart.listing_ids().count(), 4);
        assert_eq!(plan.cost(), 200 * 2 + 400);
    }

    #[test]
    fn market_skips_taken_listings() {
        let table = ItemTable::new([Item::new(id(1), "Cloth")]);
        let config = ResolverConfig::default();
        let snapshot = MarketSnapshot::new().with_listings(
            id(1),
            vec![
                Listing::new("cheap", id(1), HOME, 10, 1),
                Listing::new("dear", id(1), HOME, 20, 1),
            ],
        );
        let player = player();
        let resolver = ObtainResolver::new(&table, &snapshot, &player, &config);
        let item = table.get(id(1)).unwrap();

        let taken = HashSet::from([ListingId::from("cheap")]);
        let plan = resolver.from_market(item, 1, &taken).unwrap();
        assert_eq!(plan.cost(), 20);

        let taken = HashSet::from([ListingId::from("cheap"), ListingId::from("dear")]);
        assert!(resolver.from_market(item, 1, &taken).is_none());
    }
}
