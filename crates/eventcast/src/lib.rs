//! Event service that attaches short-range weather forecasts to upcoming
//! events, refreshing them on read.

pub mod app;
pub mod cache;
pub mod config;
pub mod forecast;
pub mod handlers;
pub mod mock_data;
pub mod models;
pub mod state;
pub mod storage;
