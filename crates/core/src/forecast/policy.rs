//! Forecast staleness and eligibility rules.
//!
//! Pure functions over an [`Event`] and the current time. The read path
//! combines them into a [`ReadPlan`] after loading an event from the store.

use chrono::{DateTime, Duration, Utc};

use crate::event::Event;

/// Look-ahead inside which an event gets a forecast.
pub const ELIGIBILITY_WINDOW: Duration = Duration::days(7);

/// Freshness of an event's forecast at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastStatus {
    /// No forecast has been fetched yet.
    Missing,
    /// The forecast expired before `now`.
    Expired,
    /// The forecast is still valid.
    Fresh,
}

impl ForecastStatus {
    /// Returns true when the forecast must be refreshed before use.
    pub fn is_expired(self) -> bool {
        !matches!(self, ForecastStatus::Fresh)
    }

    /// Returns true when a cached copy of the event must be evicted.
    ///
    /// Only a forecast that has run past its expiry invalidates the cache;
    /// a missing forecast has nothing stale to evict.
    pub fn requires_invalidation(self) -> bool {
        matches!(self, ForecastStatus::Expired)
    }
}

/// Classifies the event's forecast at `now`.
pub fn forecast_status(event: &Event, now: DateTime<Utc>) -> ForecastStatus {
    match event.forecast_expires_at {
        None => ForecastStatus::Missing,
        Some(expires_at) if now > expires_at => ForecastStatus::Expired,
        Some(_) => ForecastStatus::Fresh,
    }
}

/// Returns true if the forecast is unset or `now` is strictly after its expiry.
pub fn is_forecast_expired(event: &Event, now: DateTime<Utc>) -> bool {
    forecast_status(event, now).is_expired()
}

/// Returns true if the event starts strictly between `now` and
/// `now + ELIGIBILITY_WINDOW`.
pub fn is_eligible_for_forecast(event: &Event, now: DateTime<Utc>) -> bool {
    event.start_date_time > now && event.start_date_time < now + ELIGIBILITY_WINDOW
}

/// What the read path should do with an event loaded from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadPlan {
    /// The stored forecast is fresh; serve it.
    Serve,
    /// The forecast is stale or missing and the event is imminent; fetch.
    Fetch,
    /// The forecast is stale or missing but the event is outside the window.
    Skip,
}

/// Decides between serving, fetching and skipping for a loaded event.
pub fn plan_read(event: &Event, now: DateTime<Utc>) -> ReadPlan {
    if !is_forecast_expired(event, now) {
        ReadPlan::Serve
    } else if is_eligible_for_forecast(event, now) {
        ReadPlan::Fetch
    } else {
        ReadPlan::Skip
    }
}
