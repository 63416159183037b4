//! SQLite schema definitions and SQL query constants.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS events (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT,
    latitude REAL NOT NULL,
    longitude REAL NOT NULL,
    start_date_time TEXT NOT NULL,
    end_date_time TEXT NOT NULL,
    air_temperature REAL,
    wind_speed REAL,
    forecast_expires_at TEXT,
    forecast_last_modified_at TEXT
);
"#;

const EVENT_COLUMNS: &str = "id, name, description, latitude, longitude, start_date_time, \
     end_date_time, air_temperature, wind_speed, forecast_expires_at, forecast_last_modified_at";

/// Select an event by ID.
pub fn select_event_by_id() -> String {
    format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?1")
}

/// Select one page of events ordered by ID. Params: limit, offset.
pub fn select_events_page() -> String {
    format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY id ASC LIMIT ?1 OFFSET ?2")
}

/// Insert a new event. The ID is assigned by SQLite.
pub const INSERT_EVENT: &str = r#"
INSERT INTO events (name, description, latitude, longitude, start_date_time, end_date_time)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#;

/// Overwrite every mutable column of an event.
pub const UPDATE_EVENT: &str = r#"
UPDATE events
SET name = ?2, description = ?3, latitude = ?4, longitude = ?5,
    start_date_time = ?6, end_date_time = ?7,
    air_temperature = ?8, wind_speed = ?9,
    forecast_expires_at = ?10, forecast_last_modified_at = ?11
WHERE id = ?1
"#;

/// Count all events.
pub const COUNT_EVENTS: &str = "SELECT COUNT(*) FROM events";
