//! HTTP client for a MET Norway style point-forecast API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, EXPIRES, IF_MODIFIED_SINCE, LAST_MODIFIED};
use reqwest::{Response, StatusCode};

use eventcast_core::event::Event;
use eventcast_core::forecast::http_date::format_http_date;
use eventcast_core::forecast::{parse_forecast, ForecastOutcome, ForecastProvider, ProviderError};

fn to_provider_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Transport(err.to_string())
    }
}

fn header_value(response: &Response, name: reqwest::header::HeaderName) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Forecast provider client.
///
/// Sends `If-Modified-Since` whenever the event already carries a
/// `forecast_last_modified_at`, and reduces every response to a
/// [`ForecastOutcome`].
#[derive(Debug, Clone)]
pub struct MetForecastClient {
    client: reqwest::Client,
    url: String,
}

impl MetForecastClient {
    /// Creates a client for `url` with the given `User-Agent` and timeout.
    pub fn new(
        url: impl Into<String>,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(to_provider_error)?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// The forecast endpoint this client queries.
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn interpret(
        &self,
        event: &Event,
        response: Response,
    ) -> Result<ForecastOutcome, ProviderError> {
        let status = response.status();

        if status == StatusCode::NOT_MODIFIED {
            tracing::debug!(event_id = event.id, "Forecast not modified");
            return Ok(ForecastOutcome::NotModified);
        }

        if !status.is_success() {
            tracing::warn!(
                event_id = event.id,
                status = status.as_u16(),
                "Unexpected forecast provider status"
            );
            return Ok(ForecastOutcome::UnexpectedStatus(status.as_u16()));
        }

        let expires = header_value(&response, EXPIRES);
        let last_modified = header_value(&response, LAST_MODIFIED);
        let body = response.text().await.map_err(to_provider_error)?;

        match parse_forecast(
            &body,
            expires.as_deref(),
            last_modified.as_deref(),
            event.start_date_time,
        ) {
            Ok(snapshot) => Ok(ForecastOutcome::Updated(snapshot)),
            Err(err) => {
                tracing::error!(
                    event_id = event.id,
                    error = %err,
                    "Failed to parse forecast response"
                );
                Ok(ForecastOutcome::Unparseable(err.to_string()))
            }
        }
    }
}

#[async_trait]
impl ForecastProvider for MetForecastClient {
    async fn fetch_forecast(&self, event: &Event) -> Result<ForecastOutcome, ProviderError> {
        let mut request = self
            .client
            .get(&self.url)
            .query(&[
                ("lat", event.latitude.to_string()),
                ("lon", event.longitude.to_string()),
            ])
            .header(ACCEPT, "application/json");

        if let Some(last_modified) = event.forecast_last_modified_at {
            request = request.header(IF_MODIFIED_SINCE, format_http_date(last_modified));
        }

        tracing::debug!(
            event_id = event.id,
            conditional = event.forecast_last_modified_at.is_some(),
            "Requesting forecast"
        );

        let response = request.send().await.map_err(to_provider_error)?;
        self.interpret(event, response).await
    }
}
