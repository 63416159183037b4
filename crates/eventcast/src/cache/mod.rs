//! Cache backend implementations.
//!
//! Concrete implementations of the [`Cache`](eventcast_core::cache::Cache)
//! trait defined in `eventcast_core::cache`.

pub mod memory;

pub use memory::MemoryCache;
