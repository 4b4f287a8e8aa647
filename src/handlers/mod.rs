pub mod events;

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::store::EventRepository;

/// Shared per-process state, constructed once at startup and injected
/// into every handler.
pub struct AppState {
    pub events: EventRepository,
}

impl AppState {
    pub fn new(events: EventRepository) -> Self {
        Self { events }
    }
}

#[derive(Serialize)]
struct RootPayload {
    message: &'static str,
    version: &'static str,
}

pub async fn read_root() -> Response {
    let payload = RootPayload {
        message: "Events API",
        version: env!("CARGO_PKG_VERSION"),
    };
    Json(payload).into_response()
}

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload { status: "healthy" };
    Json(payload).into_response()
}
