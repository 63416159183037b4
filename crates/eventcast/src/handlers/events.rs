//! Event handlers.
//!
//! Reads go through [`ForecastService`](crate::forecast::ForecastService),
//! which refreshes forecasts on demand.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use eventcast_core::event::{EventId, NewEvent};

use crate::{
    handlers::{ApiJson, AppError},
    models::{CreateEvent, EventResponse, ListEventsQuery, PageResponse},
    state::AppState,
};

/// POST /api/events
#[axum::debug_handler]
pub async fn create_event(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateEvent>,
) -> Result<(StatusCode, Json<EventResponse>), AppError> {
    let event = state.forecast.create_event(NewEvent::from(payload)).await?;
    Ok((StatusCode::CREATED, Json(event.into())))
}

/// GET /api/events/{id}
#[axum::debug_handler]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<EventId>,
) -> Result<Json<EventResponse>, AppError> {
    let event = state.forecast.get_event_by_id(id).await?;
    Ok(Json(event.into()))
}

/// GET /api/events?page=0&size=10
#[axum::debug_handler]
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Json<PageResponse<EventResponse>>, AppError> {
    let page = state.forecast.list_events(query.page, query.size).await?;
    Ok(Json(page.into()))
}
