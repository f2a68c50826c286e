//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for items, listings, sales, players and the
//!   canonical recipe fixtures.
//! - [`repository`] - Repositories that fail, stall, or count calls.

pub mod domain;
pub mod repository;
