//! eventcast_core - pure domain logic for eventcast.
//!
//! Everything in this crate is free of I/O: types, validation, the forecast
//! staleness policy, provider payload parsing and the traits that the
//! service crate implements.

pub mod cache;
pub mod event;
pub mod forecast;
pub mod storage;
pub mod time;
