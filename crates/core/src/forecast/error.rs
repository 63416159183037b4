use thiserror::Error;

/// Failure to reach the forecast provider.
///
/// These are never masked: the read path propagates them to the caller.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProviderError {
    #[error("Forecast provider request timed out")]
    Timeout,

    #[error("Forecast provider transport error: {0}")]
    Transport(String),
}

/// Failure to interpret a successful provider response.
///
/// Recoverable: the event keeps its previous forecast.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ForecastParseError {
    #[error("Invalid forecast payload: {0}")]
    InvalidJson(String),

    #[error("Forecast time series is empty")]
    EmptyTimeSeries,

    #[error("Forecast sample is missing {0}")]
    MissingDetail(&'static str),

    #[error("Response is missing the {0} header")]
    MissingHeader(&'static str),

    #[error("Invalid {name} header: {value}")]
    InvalidHeader { name: &'static str, value: String },
}

impl From<serde_json::Error> for ForecastParseError {
    fn from(err: serde_json::Error) -> Self {
        ForecastParseError::InvalidJson(err.to_string())
    }
}
