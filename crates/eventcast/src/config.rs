use std::{env, str::FromStr, time::Duration};

/// Default MET Norway compact point-forecast endpoint.
pub const DEFAULT_FORECAST_URL: &str =
    "https://api.met.no/weatherapi/locationforecast/2.0/compact";

/// MET Norway rejects requests without an identifying `User-Agent`.
pub const DEFAULT_FORECAST_USER_AGENT: &str =
    "eventcast/0.1 (https://github.com/eventcast/eventcast)";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cache TTL in seconds (default: 3600)
    pub cache_ttl_seconds: u64,
    /// Maximum number of cache entries (default: 100)
    pub cache_max_entries: usize,
    /// Path to SQLite database file (default: "eventcast.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    pub sqlite_path: String,
    /// Forecast endpoint queried with `lat` and `lon`
    pub forecast_url: String,
    /// `User-Agent` sent to the forecast provider
    pub forecast_user_agent: String,
    /// Forecast provider request timeout in seconds (default: 30)
    pub forecast_timeout_seconds: u64,
    /// HTTP request timeout in seconds (default: 60)
    pub request_timeout_seconds: u64,
}

fn parsed_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 3600)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 100)
    /// - `SQLITE_PATH` - SQLite database path (default: "eventcast.db")
    /// - `FORECAST_URL` - Forecast endpoint (default: MET Norway compact)
    /// - `FORECAST_USER_AGENT` - Provider `User-Agent`
    /// - `FORECAST_TIMEOUT_SECONDS` - Provider timeout (default: 30)
    /// - `REQUEST_TIMEOUT_SECONDS` - HTTP request timeout (default: 60)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            cache_ttl_seconds: parsed_or(&lookup, "CACHE_TTL_SECONDS", 3600),
            cache_max_entries: parsed_or(&lookup, "CACHE_MAX_ENTRIES", 100),
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| "eventcast.db".to_string()),
            forecast_url: lookup("FORECAST_URL")
                .unwrap_or_else(|| DEFAULT_FORECAST_URL.to_string()),
            forecast_user_agent: lookup("FORECAST_USER_AGENT")
                .unwrap_or_else(|| DEFAULT_FORECAST_USER_AGENT.to_string()),
            forecast_timeout_seconds: parsed_or(&lookup, "FORECAST_TIMEOUT_SECONDS", 30),
            request_timeout_seconds: parsed_or(&lookup, "REQUEST_TIMEOUT_SECONDS", 60),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    pub fn forecast_timeout(&self) -> Duration {
        Duration::from_secs(self.forecast_timeout_seconds)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
