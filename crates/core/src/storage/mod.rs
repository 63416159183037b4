mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{PageRequestError, RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use traits::EventRepository;
pub use types::{Page, PageRequest};
