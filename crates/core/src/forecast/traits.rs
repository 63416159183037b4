use async_trait::async_trait;

use super::error::ProviderError;
use super::snapshot::ForecastOutcome;
use crate::event::Event;

/// Upstream point-forecast service.
///
/// Implementations send a conditional request when the event already has a
/// `forecast_last_modified_at`, and must not fabricate data: anything they
/// cannot interpret is reported as an outcome that keeps the old forecast.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetches the forecast for the event's location and start time.
    async fn fetch_forecast(&self, event: &Event) -> Result<ForecastOutcome, ProviderError>;
}
