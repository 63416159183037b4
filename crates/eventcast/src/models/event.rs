use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use eventcast_core::event::{Event, EventId, NewEvent};
use eventcast_core::storage::Page;

/// Request payload for creating an event.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
}

impl From<CreateEvent> for NewEvent {
    fn from(payload: CreateEvent) -> Self {
        let event = NewEvent::new(
            payload.name,
            payload.latitude,
            payload.longitude,
            payload.start_date_time,
            payload.end_date_time,
        );
        match payload.description.filter(|d| !d.trim().is_empty()) {
            Some(description) => event.with_description(description),
            None => event,
        }
    }
}

/// An event as returned by the API.
///
/// Forecast bookkeeping (`expires_at`, `last_modified_at`) stays internal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: EventId,
    pub name: String,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    pub air_temperature: Option<f64>,
    pub wind_speed: Option<f64>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            name: event.name,
            description: event.description,
            latitude: event.latitude,
            longitude: event.longitude,
            start_date_time: event.start_date_time,
            end_date_time: event.end_date_time,
            air_temperature: event.air_temperature,
            wind_speed: event.wind_speed,
        }
    }
}

/// One page of API items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub total_pages: u64,
    pub total_items: u64,
}

impl<T, U: From<T>> From<Page<T>> for PageResponse<U> {
    fn from(page: Page<T>) -> Self {
        let page = page.map(U::from);
        Self {
            items: page.items,
            page: page.page,
            total_pages: page.total_pages,
            total_items: page.total_items,
        }
    }
}

/// Query parameters for listing events.
#[derive(Debug, Deserialize)]
pub struct ListEventsQuery {
    /// Zero-based page index (default: 0)
    #[serde(default)]
    pub page: u32,
    /// Page size (default: 10)
    #[serde(default = "default_size")]
    pub size: u32,
}

fn default_size() -> u32 {
    10
}
