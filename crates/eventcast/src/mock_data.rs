use chrono::{DateTime, Duration, Utc};

use eventcast_core::event::NewEvent;
use eventcast_core::storage::EventRepository;

/// Demo events spread around `now`: one in the past, two inside the
/// forecast window and one beyond it.
pub fn seed_events(now: DateTime<Utc>) -> Vec<NewEvent> {
    let at = |days: i64, name: &str, lat: f64, lon: f64| {
        let start = now + Duration::days(days);
        NewEvent::new(name, lat, lon, start, start + Duration::hours(2))
    };

    vec![
        at(-1, "Harbour Cleanup", 59.9075, 10.7380)
            .with_description("Picking litter along the fjord"),
        at(2, "Open Air Concert", 59.9139, 10.7522)
            .with_description("Chamber music in the park"),
        at(3, "Trail Run", 60.9625, 10.2470),
        at(8, "Summer Market", 63.4305, 10.3951)
            .with_description("Local produce and crafts"),
    ]
}

/// Inserts [`seed_events`] when the store is empty.
///
/// Returns the number of events created.
pub async fn seed_if_empty(
    repository: &dyn EventRepository,
    now: DateTime<Utc>,
) -> anyhow::Result<usize> {
    if repository.count_events().await? > 0 {
        tracing::debug!("Event store is not empty, skipping demo data");
        return Ok(0);
    }

    let events = seed_events(now);
    for event in &events {
        let created = repository.create_event(event).await?;
        tracing::debug!(event_id = created.id, name = %created.name, "Seeded demo event");
    }

    tracing::info!(count = events.len(), "Seeded demo events");
    Ok(events.len())
}
