//! SQLite row conversion functions.
//!
//! Timestamps are stored as RFC 3339 text in UTC.

use chrono::{DateTime, Utc};
use rusqlite::Row;

use eventcast_core::event::Event;

/// Convert a SQLite row to an Event.
///
/// Expected columns: id, name, description, latitude, longitude,
/// start_date_time, end_date_time, air_temperature, wind_speed,
/// forecast_expires_at, forecast_last_modified_at
pub fn row_to_event(row: &Row) -> rusqlite::Result<Event> {
    let start: String = row.get(5)?;
    let end: String = row.get(6)?;
    let expires_at: Option<String> = row.get(9)?;
    let last_modified_at: Option<String> = row.get(10)?;

    Ok(Event {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        latitude: row.get(3)?,
        longitude: row.get(4)?,
        start_date_time: parse_datetime(5, &start)?,
        end_date_time: parse_datetime(6, &end)?,
        air_temperature: row.get(7)?,
        wind_speed: row.get(8)?,
        forecast_expires_at: expires_at
            .as_deref()
            .map(|s| parse_datetime(9, s))
            .transpose()?,
        forecast_last_modified_at: last_modified_at
            .as_deref()
            .map(|s| parse_datetime(10, s))
            .transpose()?,
    })
}

fn parse_datetime(column: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                column,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}

/// Format a DateTime for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}
