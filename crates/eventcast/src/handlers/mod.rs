pub mod error;
pub mod events;
pub mod extract;
pub mod health;

pub use error::AppError;
pub use extract::ApiJson;
