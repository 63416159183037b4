mod event;

pub use event::{CreateEvent, EventResponse, ListEventsQuery, PageResponse};
