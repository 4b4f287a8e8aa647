//! One handler per event operation. Handlers orchestrate the
//! validator and the repository and map domain outcomes to responses;
//! they hold no state of their own across requests.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::models::{validate_create, validate_update, EventCreate, EventUpdate};
use crate::utils::error::AppError;

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct ListEventsParams {
    /// Filter by status (active, cancelled, completed, postponed);
    /// matched case-insensitively against stored values.
    #[serde(default)]
    pub status: Option<String>,
}

/// POST /events
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EventCreate>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload?;
    let new_event = validate_create(&payload).map_err(AppError::Validation)?;
    let record = state
        .events
        .create(new_event)
        .await
        .map_err(|err| AppError::internal("Failed to create event", err))?;
    Ok((StatusCode::CREATED, Json(record)).into_response())
}

/// GET /events
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListEventsParams>,
) -> Result<Response, AppError> {
    let mut events = state
        .events
        .list()
        .await
        .map_err(|err| AppError::internal("Failed to retrieve events", err))?;
    if let Some(status) = params.status.as_deref().filter(|s| !s.is_empty()) {
        events.retain(|event| event.status.as_str().eq_ignore_ascii_case(status));
    }
    Ok((StatusCode::OK, Json(events)).into_response())
}

/// GET /events/:event_id
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Response, AppError> {
    require_event_id(&event_id)?;
    let record = state
        .events
        .get(&event_id)
        .await
        .map_err(|err| AppError::internal("Failed to retrieve event", err))?;
    match record {
        Some(record) => Ok((StatusCode::OK, Json(record)).into_response()),
        None => Err(not_found(&event_id)),
    }
}

/// PUT /events/:event_id
pub async fn update_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    payload: Result<Json<EventUpdate>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload?;
    let fields = validate_update(&payload).map_err(AppError::Validation)?;
    require_event_id(&event_id)?;
    if fields.is_empty() {
        return Err(AppError::BadRequest(
            "At least one field must be provided for update".to_string(),
        ));
    }

    // Existence pre-check: afterwards a None from update means the
    // patch itself failed, not that the record never existed.
    let existing = state
        .events
        .get(&event_id)
        .await
        .map_err(|err| AppError::internal("Failed to update event", err))?;
    if existing.is_none() {
        return Err(not_found(&event_id));
    }

    let updated = state
        .events
        .update(&event_id, &fields)
        .await
        .map_err(|err| AppError::internal("Failed to update event", err))?;
    match updated {
        Some(record) => Ok((StatusCode::OK, Json(record)).into_response()),
        None => Err(AppError::Internal {
            detail: "Failed to update event".to_string(),
            source: None,
        }),
    }
}

/// DELETE /events/:event_id
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Response, AppError> {
    require_event_id(&event_id)?;

    let existing = state
        .events
        .get(&event_id)
        .await
        .map_err(|err| AppError::internal("Failed to delete event", err))?;
    if existing.is_none() {
        return Err(not_found(&event_id));
    }

    let deleted = state
        .events
        .delete(&event_id)
        .await
        .map_err(|err| AppError::internal("Failed to delete event", err))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Err(AppError::Internal {
            detail: "Failed to delete event".to_string(),
            source: None,
        })
    }
}

fn require_event_id(event_id: &str) -> Result<(), AppError> {
    if event_id.trim().is_empty() {
        Err(AppError::BadRequest("Event ID is required".to_string()))
    } else {
        Ok(())
    }
}

fn not_found(event_id: &str) -> AppError {
    AppError::NotFound(format!("Event with ID {event_id} not found"))
}
