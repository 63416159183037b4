use thiserror::Error;

/// Errors that can occur when validating an event.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EventError {
    #[error("Event name cannot be empty")]
    EmptyName,
    #[error("Event name too long (max 200 characters)")]
    NameTooLong,
    #[error("Latitude must be between -90 and 90, got {0}")]
    InvalidLatitude(f64),
    #[error("Longitude must be between -180 and 180, got {0}")]
    InvalidLongitude(f64),
    #[error("End date and time must not be before the start date and time")]
    InvalidTimeRange,
}
