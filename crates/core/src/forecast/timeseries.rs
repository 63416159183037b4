//! Provider payload model and sample selection.
//!
//! The provider answers with a GeoJSON-like document whose
//! `properties.timeseries` holds one entry per forecast step. Only the
//! instant air temperature and wind speed are used.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::error::ForecastParseError;
use super::http_date::parse_http_date;
use super::snapshot::ForecastSnapshot;

#[derive(Debug, Clone, Deserialize)]
pub struct LocationForecast {
    pub properties: ForecastProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastProperties {
    #[serde(default)]
    pub timeseries: Vec<TimeSeriesEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeSeriesEntry {
    pub time: DateTime<Utc>,
    pub data: TimeSeriesData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeSeriesData {
    pub instant: InstantData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstantData {
    pub details: InstantDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstantDetails {
    pub air_temperature: Option<f64>,
    pub wind_speed: Option<f64>,
}

/// Returns the sample whose time is nearest to `target`.
///
/// Ties go to the earliest entry in the series.
pub fn closest_sample(
    timeseries: &[TimeSeriesEntry],
    target: DateTime<Utc>,
) -> Option<&TimeSeriesEntry> {
    let mut best: Option<(&TimeSeriesEntry, i64)> = None;

    for entry in timeseries {
        let diff = (entry.time - target).num_seconds().abs();
        match best {
            Some((_, best_diff)) if diff >= best_diff => {}
            _ => best = Some((entry, diff)),
        }
    }

    best.map(|(entry, _)| entry)
}

fn header_date(
    name: &'static str,
    value: Option<&str>,
) -> Result<DateTime<Utc>, ForecastParseError> {
    let value = value.ok_or(ForecastParseError::MissingHeader(name))?;
    parse_http_date(value).ok_or_else(|| ForecastParseError::InvalidHeader {
        name,
        value: value.to_string(),
    })
}

/// Parses a successful provider response into a snapshot for an event
/// starting at `event_start`.
///
/// `expires` and `last_modified` are the raw header values.
pub fn parse_forecast(
    body: &str,
    expires: Option<&str>,
    last_modified: Option<&str>,
    event_start: DateTime<Utc>,
) -> Result<ForecastSnapshot, ForecastParseError> {
    let expires_at = header_date("Expires", expires)?;
    let last_modified_at = header_date("Last-Modified", last_modified)?;

    let forecast: LocationForecast = serde_json::from_str(body)?;
    let sample = closest_sample(&forecast.properties.timeseries, event_start)
        .ok_or(ForecastParseError::EmptyTimeSeries)?;

    let details = &sample.data.instant.details;
    let air_temperature = details
        .air_temperature
        .ok_or(ForecastParseError::MissingDetail("air_temperature"))?;
    let wind_speed = details
        .wind_speed
        .ok_or(ForecastParseError::MissingDetail("wind_speed"))?;

    Ok(ForecastSnapshot {
        air_temperature: Some(air_temperature),
        wind_speed: Some(wind_speed),
        expires_at: Some(expires_at),
        last_modified_at: Some(last_modified_at),
    })
}
