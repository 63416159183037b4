use async_trait::async_trait;

use crate::event::{Event, EventId, NewEvent};

use super::{Page, PageRequest, Result};

/// Durable store for events.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Gets an event by its ID.
    async fn get_event(&self, id: EventId) -> Result<Option<Event>>;

    /// Persists a new event and returns it with its assigned ID.
    async fn create_event(&self, event: &NewEvent) -> Result<Event>;

    /// Overwrites an existing event.
    ///
    /// Fails with `NotFound` if no event has this ID.
    async fn save_event(&self, event: &Event) -> Result<Event>;

    /// Lists one page of events ordered by ID.
    async fn list_events(&self, request: PageRequest) -> Result<Page<Event>>;

    /// Counts all stored events.
    async fn count_events(&self) -> Result<u64>;
}
