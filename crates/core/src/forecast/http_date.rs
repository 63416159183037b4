//! HTTP date handling (RFC 1123, always GMT).
//!
//! Used for `If-Modified-Since` on requests and `Expires` / `Last-Modified`
//! on provider responses.

use chrono::{DateTime, NaiveDateTime, Utc};

const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Formats a timestamp as an HTTP date, e.g. `Tue, 04 Jun 2024 10:15:00 GMT`.
pub fn format_http_date(value: DateTime<Utc>) -> String {
    value.format(HTTP_DATE_FORMAT).to_string()
}

/// Parses an HTTP date.
///
/// Accepts the RFC 1123 `GMT` form and falls back to RFC 2822 with a
/// numeric offset.
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, HTTP_DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .or_else(|_| DateTime::parse_from_rfc2822(value).map(|dt| dt.with_timezone(&Utc)))
        .ok()
}
