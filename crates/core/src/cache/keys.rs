use crate::event::EventId;

/// Returns the cache key for a single event.
pub fn event_key(event_id: EventId) -> String {
    format!("event:{}", event_id)
}
