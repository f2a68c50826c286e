//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the extension points adapters implement to plug external
//! systems into the resolvers.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │        Resolvers        │
//!                    │   obtain · sale · score │
//!                    └────────────┬────────────┘
//!                                 │
//!                                 ▼
//!                        ┌────────────────┐
//!                        │MarketRepository│
//!                        └───────┬────────┘
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌─────────────┐              ┌──────────────┐
//!          │   Memory    │              │  HTTP / DB   │
//!          │   Adapter   │              │ (external)   │
//!          └─────────────┘              └──────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`MarketRepository`] - Live listings and sale history lookups

mod repository;

pub use repository::MarketRepository;
