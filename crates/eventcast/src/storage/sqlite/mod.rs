//! SQLite storage backend.
//!
//! Uses `rusqlite` for the synchronous driver and `tokio-rusqlite` to run
//! every statement on a dedicated connection thread.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
