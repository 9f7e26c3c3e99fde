use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::posts;
use super::state::AppState;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Post API
        .nest("/api", posts::create_posts_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
