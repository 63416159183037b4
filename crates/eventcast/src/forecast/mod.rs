//! Forecast retrieval: the provider client and the read-through service.

mod client;
mod error;
mod service;

pub use client::MetForecastClient;
pub use error::ForecastServiceError;
pub use service::ForecastService;
