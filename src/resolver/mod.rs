//! Profit resolution.
//!
//! ```text
//! ProfitScorer::score
//!   ├── MarketRepository  (listings, sales, ingredient listings)
//!   ├── best_sale_method  → SaleMethod
//!   └── ObtainResolver    → ObtainInfo   (over an immutable MarketSnapshot)
//! ```
//!
//! All repository calls happen before resolution starts; the resolvers
//! themselves are synchronous and never block.

mod arbitrage;
mod obtain;
mod ranking;
mod sale;
mod scorer;
mod snapshot;

pub use arbitrage::{best_arbitrage, ArbitragePair};
pub use obtain::{ObtainResolver, MARKET_METHOD};
pub use ranking::rank_items;
pub use sale::{best_sale_method, HISTORY_LABEL, UNDERCUT_LABEL};
pub use scorer::{competition_factor, sales_per_hour, ProfitScorer};
pub use snapshot::MarketSnapshot;
