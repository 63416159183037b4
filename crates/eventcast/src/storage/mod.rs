//! Storage backend implementations.
//!
//! Concrete implementations of [`EventRepository`](eventcast_core::storage::EventRepository).
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//!
//! Without `sqlite` the service runs on the in-memory repository, which is
//! always compiled for tests.

pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
