mod error;
mod operations;
mod types;

pub use error::EventError;
pub use operations::{round_coordinate, validate_new_event, COORDINATE_PRECISION, MAX_NAME_LENGTH};
pub use types::{Event, EventId, NewEvent};
