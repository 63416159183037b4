use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::forecast::ForecastSnapshot;

/// Store-assigned identifier of an event.
pub type EventId = i64;

/// An event at a geographic location, with optional forecast data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub description: Option<String>,
    /// Latitude rounded to 4 decimal places.
    pub latitude: f64,
    /// Longitude rounded to 4 decimal places.
    pub longitude: f64,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    /// Air temperature (celsius) of the forecast sample closest to the start.
    pub air_temperature: Option<f64>,
    /// Wind speed (m/s) of the forecast sample closest to the start.
    pub wind_speed: Option<f64>,
    /// When the forecast must be refreshed.
    pub forecast_expires_at: Option<DateTime<Utc>>,
    /// Provider freshness marker, replayed as `If-Modified-Since`.
    pub forecast_last_modified_at: Option<DateTime<Utc>>,
}

impl Event {
    /// Overwrites the four forecast fields from a snapshot.
    pub fn apply_forecast(&mut self, snapshot: ForecastSnapshot) {
        self.air_temperature = snapshot.air_temperature;
        self.wind_speed = snapshot.wind_speed;
        self.forecast_expires_at = snapshot.expires_at;
        self.forecast_last_modified_at = snapshot.last_modified_at;
    }

    /// Returns a copy of this event with the forecast applied.
    pub fn with_forecast(mut self, snapshot: ForecastSnapshot) -> Self {
        self.apply_forecast(snapshot);
        self
    }
}

/// An event that has not been persisted yet.
///
/// The store turns it into an [`Event`] by assigning an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    pub name: String,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
}

impl NewEvent {
    /// Creates an event spanning `start..end` at the given location.
    ///
    /// Coordinates are normalized to 4 decimal places.
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        start_date_time: DateTime<Utc>,
        end_date_time: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            latitude: super::round_coordinate(latitude),
            longitude: super::round_coordinate(longitude),
            start_date_time,
            end_date_time,
        }
    }

    /// Sets the description for this event.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches the store-assigned id. All forecast fields start out unset.
    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            name: self.name,
            description: self.description,
            latitude: self.latitude,
            longitude: self.longitude,
            start_date_time: self.start_date_time,
            end_date_time: self.end_date_time,
            air_temperature: None,
            wind_speed: None,
            forecast_expires_at: None,
            forecast_last_modified_at: None,
        }
    }
}
