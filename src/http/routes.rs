use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.assets_path);

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Score store
        .route("/api/scores", get(handlers::get_scores))
        .route("/api/scores/:game", post(handlers::record_score))
        .route("/api/reset", post(handlers::reset_scores))
        // Sound listing
        .route("/api/sounds", get(handlers::list_sounds))
        // Static UI assets
        .fallback_service(assets)
        .layer(CorsLayer::permissive())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
