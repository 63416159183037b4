//! JSON encoding of events for cache storage.

use thiserror::Error;

use crate::event::Event;

use super::CacheError;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

impl From<SerializationError> for CacheError {
    fn from(err: SerializationError) -> Self {
        CacheError::Serialization(err.to_string())
    }
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes an event, forecast fields included, to JSON bytes.
pub fn serialize_event(event: &Event) -> Result<Vec<u8>> {
    serde_json::to_vec(event).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to an event.
pub fn deserialize_event(bytes: &[u8]) -> Result<Event> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::NewEvent;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn test_event_survives_cache_encoding() {
        let start = Utc.with_ymd_and_hms(2024, 6, 3, 18, 0, 0).unwrap();
        let mut event = NewEvent::new("Concert", 59.9139, 10.7522, start, start + Duration::hours(2))
            .with_description("Open air")
            .into_event(3);
        event.air_temperature = Some(-0.1);
        event.wind_speed = Some(7.3);
        event.forecast_expires_at = Some(start - Duration::days(1));

        let bytes = serialize_event(&event).unwrap();
        let decoded = deserialize_event(&bytes).unwrap();

        assert_eq!(decoded, event);
        assert_eq!(decoded.forecast_last_modified_at, None);
    }

    #[test]
    fn test_forecast_values_decode_bit_identical() {
        let start = Utc.with_ymd_and_hms(2024, 6, 3, 18, 0, 0).unwrap();
        let mut event = NewEvent::new("Concert", 59.9139, 10.7522, start, start).into_event(1);

        for value in [18.926758544961622, 12.965807465686595, 0.1 + 0.2, -3.0e-7] {
            event.air_temperature = Some(value);
            event.wind_speed = Some(value * 3.0);

            let decoded = deserialize_event(&serialize_event(&event).unwrap()).unwrap();

            assert_eq!(
                decoded.air_temperature.map(f64::to_bits),
                Some(value.to_bits())
            );
            assert_eq!(
                decoded.wind_speed.map(f64::to_bits),
                Some((value * 3.0).to_bits())
            );
        }
    }

    #[test]
    fn test_deserialize_event_invalid_bytes() {
        let result = deserialize_event(b"not json");
        assert!(matches!(
            result,
            Err(SerializationError::DeserializeFailed(_))
        ));
    }

    #[test]
    fn test_serialization_error_becomes_cache_error() {
        let error: CacheError = SerializationError::DeserializeFailed("eof".to_string()).into();
        assert_eq!(
            error,
            CacheError::Serialization("Failed to deserialize: eof".to_string())
        );
    }
}
