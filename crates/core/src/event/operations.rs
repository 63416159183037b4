use super::error::EventError;
use super::types::NewEvent;

/// Number of decimal places kept for coordinates.
pub const COORDINATE_PRECISION: i32 = 4;

/// Maximum length of an event name, in characters.
pub const MAX_NAME_LENGTH: usize = 200;

/// Rounds a latitude or longitude to [`COORDINATE_PRECISION`] decimals.
///
/// # Examples
///
/// ```
/// use eventcast_core::event::round_coordinate;
///
/// assert_eq!(round_coordinate(59.912_345), 59.9123);
/// assert_eq!(round_coordinate(-10.750_06), -10.7501);
/// ```
pub fn round_coordinate(value: f64) -> f64 {
    let factor = 10f64.powi(COORDINATE_PRECISION);
    (value * factor).round() / factor
}

/// Validates an event before it is persisted.
pub fn validate_new_event(event: &NewEvent) -> Result<(), EventError> {
    if event.name.trim().is_empty() {
        return Err(EventError::EmptyName);
    }
    if event.name.chars().count() > MAX_NAME_LENGTH {
        return Err(EventError::NameTooLong);
    }
    if !(-90.0..=90.0).contains(&event.latitude) {
        return Err(EventError::InvalidLatitude(event.latitude));
    }
    if !(-180.0..=180.0).contains(&event.longitude) {
        return Err(EventError::InvalidLongitude(event.longitude));
    }
    if event.end_date_time < event.start_date_time {
        return Err(EventError::InvalidTimeRange);
    }
    Ok(())
}
