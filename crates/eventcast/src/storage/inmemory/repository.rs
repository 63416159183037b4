//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use eventcast_core::event::{Event, EventId, NewEvent};
use eventcast_core::storage::{EventRepository, Page, PageRequest, RepositoryError, Result};

#[derive(Debug)]
struct Store {
    events: BTreeMap<EventId, Event>,
    next_id: EventId,
}

/// In-memory event storage.
///
/// IDs start at 1 and are never reused.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    store: Arc<RwLock<Store>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store {
                events: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

#[async_trait]
impl EventRepository for InMemoryRepository {
    async fn get_event(&self, id: EventId) -> Result<Option<Event>> {
        let store = self.store.read().await;
        Ok(store.events.get(&id).cloned())
    }

    async fn create_event(&self, event: &NewEvent) -> Result<Event> {
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id += 1;

        let event = event.clone().into_event(id);
        store.events.insert(id, event.clone());
        Ok(event)
    }

    async fn save_event(&self, event: &Event) -> Result<Event> {
        let mut store = self.store.write().await;
        match store.events.get_mut(&event.id) {
            Some(existing) => {
                *existing = event.clone();
                Ok(event.clone())
            }
            None => Err(RepositoryError::NotFound {
                entity_type: "Event",
                id: event.id.to_string(),
            }),
        }
    }

    async fn list_events(&self, request: PageRequest) -> Result<Page<Event>> {
        let store = self.store.read().await;
        let total = store.events.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);

        let items = store
            .events
            .values()
            .skip(offset)
            .take(request.size() as usize)
            .cloned()
            .collect();

        Ok(Page::new(items, request, total))
    }

    async fn count_events(&self) -> Result<u64> {
        let store = self.store.read().await;
        Ok(store.events.len() as u64)
    }
}
