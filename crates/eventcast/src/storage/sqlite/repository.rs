//! SQLite repository implementation.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use eventcast_core::event::{Event, EventId, NewEvent};
use eventcast_core::storage::{EventRepository, Page, PageRequest, RepositoryError, Result};

use super::conversions::{format_datetime, row_to_event};
use super::error::map_tokio_rusqlite_error;
use super::schema;

const ENTITY: &str = "Event";

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

fn select_event(conn: &rusqlite::Connection, id: EventId) -> rusqlite::Result<Option<Event>> {
    let mut stmt = conn.prepare(&schema::select_event_by_id())?;
    match stmt.query_row([id], row_to_event) {
        Ok(event) => Ok(Some(event)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// SQLite-based event repository.
///
/// All statements run on the single `tokio_rusqlite` connection thread, so
/// each write is atomic per event.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens (or creates) a file-based database and applies the schema.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a repository backed by an in-memory database.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl EventRepository for SqliteRepository {
    async fn get_event(&self, id: EventId) -> Result<Option<Event>> {
        self.conn
            .call(move |conn| select_event(conn, id).map_err(wrap_err))
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, id.to_string()))
    }

    async fn create_event(&self, event: &NewEvent) -> Result<Event> {
        let new_event = event.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_EVENT,
                    rusqlite::params![
                        new_event.name,
                        new_event.description,
                        new_event.latitude,
                        new_event.longitude,
                        format_datetime(&new_event.start_date_time),
                        format_datetime(&new_event.end_date_time),
                    ],
                )
                .map_err(wrap_err)?;
                Ok(new_event.into_event(conn.last_insert_rowid()))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, "new"))
    }

    async fn save_event(&self, event: &Event) -> Result<Event> {
        let event = event.clone();
        let id = event.id;

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_EVENT,
                        rusqlite::params![
                            event.id,
                            event.name,
                            event.description,
                            event.latitude,
                            event.longitude,
                            format_datetime(&event.start_date_time),
                            format_datetime(&event.end_date_time),
                            event.air_temperature,
                            event.wind_speed,
                            event.forecast_expires_at.as_ref().map(format_datetime),
                            event.forecast_last_modified_at.as_ref().map(format_datetime),
                        ],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(event)
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, id.to_string()))
    }

    async fn list_events(&self, request: PageRequest) -> Result<Page<Event>> {
        let limit = i64::from(request.size());
        let offset = i64::try_from(request.offset()).unwrap_or(i64::MAX);

        let (items, total) = self
            .conn
            .call(move |conn| {
                let total: i64 = conn
                    .query_row(schema::COUNT_EVENTS, [], |row| row.get(0))
                    .map_err(wrap_err)?;

                let mut stmt = conn
                    .prepare(&schema::select_events_page())
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([limit, offset], row_to_event)
                    .map_err(wrap_err)?;

                let mut events = Vec::new();
                for row_result in rows {
                    events.push(row_result.map_err(wrap_err)?);
                }
                Ok((events, total))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, "page"))?;

        Ok(Page::new(items, request, total.max(0) as u64))
    }

    async fn count_events(&self) -> Result<u64> {
        let total: i64 = self
            .conn
            .call(|conn| {
                conn.query_row(schema::COUNT_EVENTS, [], |row| row.get(0))
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, "count"))?;

        Ok(total.max(0) as u64)
    }
}
