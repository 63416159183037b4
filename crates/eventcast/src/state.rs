//! Application state.
//!
//! Shared by every request handler. The repository, cache, provider and
//! clock are trait objects so the backend combination is picked at startup
//! (and swapped for fakes in tests).

use std::sync::Arc;
use std::time::Duration;

use eventcast_core::cache::Cache;
use eventcast_core::forecast::ForecastProvider;
use eventcast_core::storage::EventRepository;
use eventcast_core::time::{Clock, SystemClock};

use crate::{
    cache::MemoryCache,
    config::Config,
    forecast::{ForecastService, MetForecastClient},
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Read-through forecast orchestrator.
    pub forecast: ForecastService,
    /// Underlying event store, used directly by the seeder.
    pub repository: Arc<dyn EventRepository>,
}

impl AppState {
    /// Builds the production state from configuration.
    ///
    /// Uses SQLite when the `sqlite` feature is enabled and the in-memory
    /// repository otherwise.
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let repository = create_repository(config).await?;
        let cache = MemoryCache::new(config.cache_max_entries)?;
        let provider = MetForecastClient::new(
            config.forecast_url.clone(),
            &config.forecast_user_agent,
            config.forecast_timeout(),
        )?;

        tracing::info!(
            forecast_url = provider.url(),
            cache_max_entries = config.cache_max_entries,
            cache_ttl_seconds = config.cache_ttl_seconds,
            "Application state initialized"
        );

        Ok(Self::from_parts(
            repository,
            Arc::new(cache),
            Arc::new(provider),
            Arc::new(SystemClock),
            config.cache_ttl(),
        ))
    }

    /// Assembles the state from already constructed components.
    pub fn from_parts(
        repository: Arc<dyn EventRepository>,
        cache: Arc<dyn Cache>,
        provider: Arc<dyn ForecastProvider>,
        clock: Arc<dyn Clock>,
        cache_ttl: Duration,
    ) -> Self {
        let forecast = ForecastService::new(repository.clone(), cache, provider, clock, cache_ttl);
        Self {
            forecast,
            repository,
        }
    }
}

#[cfg(feature = "sqlite")]
async fn create_repository(config: &Config) -> anyhow::Result<Arc<dyn EventRepository>> {
    use crate::storage::SqliteRepository;

    tracing::info!(path = %config.sqlite_path, "Opening SQLite event store");
    let repository = SqliteRepository::new(&config.sqlite_path).await?;
    Ok(Arc::new(repository))
}

#[cfg(not(feature = "sqlite"))]
async fn create_repository(_config: &Config) -> anyhow::Result<Arc<dyn EventRepository>> {
    use crate::storage::InMemoryRepository;

    tracing::info!("Using in-memory event store");
    Ok(Arc::new(InMemoryRepository::new()))
}
