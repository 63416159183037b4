use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// The forecast values attached to an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastSnapshot {
    pub air_temperature: Option<f64>,
    pub wind_speed: Option<f64>,
    pub expires_at: Option<DateTime<Utc>>,
    pub last_modified_at: Option<DateTime<Utc>>,
}

impl ForecastSnapshot {
    /// Returns the event's current forecast fields unchanged.
    pub fn carry_forward(event: &Event) -> Self {
        Self {
            air_temperature: event.air_temperature,
            wind_speed: event.wind_speed,
            expires_at: event.forecast_expires_at,
            last_modified_at: event.forecast_last_modified_at,
        }
    }
}

/// Result of asking the provider for a forecast.
///
/// Every variant except `Updated` resolves to the event's existing forecast,
/// but they are kept apart so logs can tell "nothing changed" from "we
/// couldn't understand the response".
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastOutcome {
    /// A fresh forecast parsed from a successful response.
    Updated(ForecastSnapshot),
    /// The provider answered 304 Not Modified.
    NotModified,
    /// The provider answered with a status that is neither success nor 304.
    UnexpectedStatus(u16),
    /// The response was successful but could not be parsed.
    Unparseable(String),
}

impl ForecastOutcome {
    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ForecastOutcome::Updated(_) => "updated",
            ForecastOutcome::NotModified => "not_modified",
            ForecastOutcome::UnexpectedStatus(_) => "unexpected_status",
            ForecastOutcome::Unparseable(_) => "unparseable",
        }
    }

    /// Returns true if the outcome carries new forecast data.
    pub fn is_update(&self) -> bool {
        matches!(self, ForecastOutcome::Updated(_))
    }

    /// Resolves the outcome into the snapshot to store on `event`.
    pub fn into_snapshot(self, event: &Event) -> ForecastSnapshot {
        match self {
            ForecastOutcome::Updated(snapshot) => snapshot,
            ForecastOutcome::NotModified
            | ForecastOutcome::UnexpectedStatus(_)
            | ForecastOutcome::Unparseable(_) => ForecastSnapshot::carry_forward(event),
        }
    }
}
