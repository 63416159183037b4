//! In-memory storage backend.
//!
//! Events live in a `BTreeMap` behind `Arc<RwLock<_>>`, so listing is
//! naturally ordered by ID. Nothing is persisted.
//!
//! # Example
//!
//! ```rust,ignore
//! use eventcast::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
