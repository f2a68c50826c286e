//! Adapters implementing the ports.

pub mod memory;

pub use memory::{MarketDump, MemoryRepository, WorldEntry};
