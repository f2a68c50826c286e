//! Market listings prefetched for one scoring pass.
//!
//! The obtain resolver is synchronous, so every listing it may look at is
//! fetched up front: the requested item plus each distinct marketable
//! ingredient reachable through recipes the player can craft.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::domain::{Item, ItemId, ItemTable, Listing, PlayerContext};
use crate::error::Result;
use crate::port::MarketRepository;

/// Immutable listings by item, taken from one data center.
#[derive(Debug, Clone, Default)]
pub struct MarketSnapshot {
    listings: HashMap<ItemId, Vec<Listing>>,
}

impl MarketSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add listings for an item, replacing any previous entry.
    pub fn insert(&mut self, item_id: ItemId, listings: Vec<Listing>) {
        self.listings.insert(item_id, listings);
    }

    pub fn with_listings(mut self, item_id: ItemId, listings: Vec<Listing>) -> Self {
        self.insert(item_id, listings);
        self
    }

    /// Listings for an item; empty when none were fetched.
    pub fn listings(&self, item_id: ItemId) -> &[Listing] {
        self.listings.get(&item_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of items with an entry.
    pub fn item_count(&self) -> usize {
        self.listings.len()
    }

    /// Fetch listings for the recipe tree below `root`.
    ///
    /// `root_listings` are the listings the caller already holds for the root
    /// item. Ingredients are fetched once each, no deeper than `max_depth`
    /// recipe levels, in a stable order. The walk is breadth first so every
    /// ingredient is expanded at the shallowest depth it appears.
    pub async fn collect(
        repository: &dyn MarketRepository,
        table: &ItemTable,
        root: &Item,
        root_listings: Vec<Listing>,
        player: &PlayerContext,
        max_depth: usize,
    ) -> Result<Self> {
        let mut snapshot = Self::new().with_listings(root.id, root_listings);
        let mut visited: HashSet<ItemId> = HashSet::from([root.id]);
        let mut frontier: VecDeque<(ItemId, usize)> = VecDeque::from([(root.id, 0)]);

        while let Some((item_id, depth)) = frontier.pop_front() {
            if depth >= max_depth {
                continue;
            }
            let Some(item) = table.get(item_id) else {
                continue;
            };

            let ingredients = item
                .recipes
                .iter()
                .filter(|recipe| recipe.craftable_by(player))
                .flat_map(|recipe| recipe.ingredients.iter());

            for ingredient in ingredients {
                if !visited.insert(ingredient.item_id) {
                    continue;
                }
                let Some(child) = table.get(ingredient.item_id) else {
                    continue;
                };
                if child.is_marketable() {
                    let listings = repository
                        .listings_for_item_on_data_center(child.id, player.data_center)
                        .await?;
                    snapshot.insert(child.id, listings);
                }
                frontier.push_back((child.id, depth + 1));
            }
        }

        tracing::debug!(
            item_id = %root.id,
            repository = repository.repository_name(),
            items = snapshot.item_count(),
            "market snapshot collected"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::MemoryRepository;
    use crate::domain::{DataCenterId, Ingredient, Job, RecipeInfo, WorldId};

    const HOME: WorldId = WorldId::new(1);
    const DC: DataCenterId = DataCenterId::new(1);

    fn player() -> PlayerContext {
        PlayerContext::new(HOME, DC).with_all_jobs(90)
    }

    fn chain() -> ItemTable {
        // 1 <- 2 <- 3, with 4 market prohibited under 1.
        ItemTable::new([
            Item::new(ItemId::new(1), "Top").with_recipe(RecipeInfo::new(
                Job::Wvr,
                10,
                vec![
                    Ingredient::new(ItemId::new(2), 1),
                    Ingredient::new(ItemId::new(4), 1),
                ],
            )),
            Item::new(ItemId::new(2), "Middle").with_recipe(RecipeInfo::new(
                Job::Wvr,
                10,
                vec![Ingredient::new(ItemId::new(3), 1)],
            )),
            Item::new(ItemId::new(3), "Bottom"),
            Item::new(ItemId::new(4), "Bound").market_prohibited(),
        ])
    }

    fn repo() -> MemoryRepository {
        let repo = MemoryRepository::new();
        repo.add_world(HOME, DC);
        for id in 1..=4 {
            repo.add_listing(Listing::new(
                format!("l{id}"),
                ItemId::new(id),
                HOME,
                10,
                1,
            ));
        }
        repo
    }

    #[tokio::test]
    async fn collects_marketable_ingredients() {
        let table = chain();
        let root = table.get(ItemId::new(1)).unwrap();
        let snapshot = MarketSnapshot::collect(&repo(), &table, root, vec![], &player(), 10)
            .await
            .unwrap();

        assert!(snapshot.listings(ItemId::new(1)).is_empty());
        assert_eq!(snapshot.listings(ItemId::new(2)).len(), 1);
        assert_eq!(snapshot.listings(ItemId::new(3)).len(), 1);
        assert!(snapshot.listings(ItemId::new(4)).is_empty());
    }

    #[tokio::test]
    async fn respects_depth_bound() {
        let table = chain();
        let root = table.get(ItemId::new(1)).unwrap();
        let snapshot = MarketSnapshot::collect(&repo(), &table, root, vec![], &player(), 1)
            .await
            .unwrap();

        assert_eq!(snapshot.listings(ItemId::new(2)).len(), 1);
        assert!(snapshot.listings(ItemId::new(3)).is_empty());
    }

    #[tokio::test]
    async fn shared_ingredient_expands_at_shallowest_depth() {
        // 5 sits under 2 at depth 2 and under 3 -> 4 at depth 3.
        let recipe = |ids: &[u32]| {
            RecipeInfo::new(
                Job::Wvr,
                10,
                ids.iter().map(|id| Ingredient::new(ItemId::new(*id), 1)).collect(),
            )
        };
        let table = ItemTable::new([
            Item::new(ItemId::new(1), "Top").with_recipe(recipe(&[2, 3])),
            Item::new(ItemId::new(2), "Left").with_recipe(recipe(&[5])),
            Item::new(ItemId::new(3), "Right").with_recipe(recipe(&[4])),
            Item::new(ItemId::new(4), "Deep").with_recipe(recipe(&[5])),
            Item::new(ItemId::new(5), "Shared").with_recipe(recipe(&[6])),
            Item::new(ItemId::new(6), "Leaf"),
        ]);
        let repo = repo();
        for id in 5..=6 {
            repo.add_listing(Listing::new(format!("l{id}"), ItemId::new(id), HOME, 10, 1));
        }
        let root = table.get(ItemId::new(1)).unwrap();

        let snapshot = MarketSnapshot::collect(&repo, &table, root, vec![], &player(), 3)
            .await
            .unwrap();

        assert_eq!(snapshot.listings(ItemId::new(6)).len(), 1);
    }

    #[tokio::test]
    async fn skips_recipes_the_player_cannot_craft() {
        let table = chain();
        let root = table.get(ItemId::new(1)).unwrap();
        let novice = PlayerContext::new(HOME, DC);
        let snapshot = MarketSnapshot::collect(&repo(), &table, root, vec![], &novice, 10)
            .await
            .unwrap();

        assert_eq!(snapshot.item_count(), 1);
    }
}
