use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::config::create_cors_layer;
use crate::handlers::{events, health_check, read_root, AppState};

pub fn create_routes(state: Arc<AppState>) -> Router {
    // Collection routes are registered with and without the trailing
    // slash; there is no redirect between the two.
    Router::new()
        .route("/", get(read_root))
        .route("/health", get(health_check))
        .route(
            "/events",
            post(events::create_event).get(events::list_events),
        )
        .route(
            "/events/",
            post(events::create_event).get(events::list_events),
        )
        .route(
            "/events/:event_id",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .layer(create_cors_layer())
        .with_state(state)
}
