mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::event_key;
pub use serialization::{deserialize_event, serialize_event, SerializationError};
pub use traits::Cache;
