use axum::Router;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use events_api::config::Config;
use events_api::handlers::AppState;
use events_api::routes::create_routes;
use events_api::store::{EventRepository, MemoryStore};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    let store = Arc::new(MemoryStore::new());
    let state = Arc::new(AppState::new(EventRepository::new(store)));

    tracing::info!("Event store initialized");

    let app: Router = create_routes(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server running at http://{}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
