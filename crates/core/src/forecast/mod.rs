//! Forecast domain: staleness policy, provider payloads and the provider seam.

mod error;
pub mod http_date;
mod policy;
mod snapshot;
pub mod timeseries;
mod traits;

pub use error::{ForecastParseError, ProviderError};
pub use policy::{
    forecast_status, is_eligible_for_forecast, is_forecast_expired, plan_read, ForecastStatus,
    ReadPlan, ELIGIBILITY_WINDOW,
};
pub use snapshot::{ForecastOutcome, ForecastSnapshot};
pub use timeseries::{closest_sample, parse_forecast};
pub use traits::ForecastProvider;
