//! Route definitions for the Drive HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use std::time::Duration;

use axum::http::StatusCode;
use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    let api_routes = Router::new()
        .merge(browse_routes())
        .merge(folder_routes())
        .merge(file_routes())
        .merge(drive_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Folder page
fn browse_routes() -> Router<AppState> {
    Router::new().route("/f/{folder_id}", get(handlers::browse::open_folder))
}

/// Folder lookups, listings, and creation
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route("/folders", post(handlers::folder::create_folder))
        .route("/folders/{id}", get(handlers::folder::get_folder))
        .route("/folders/{id}/children", get(handlers::folder::list_children))
        .route("/folders/{id}/files", get(handlers::folder::list_files))
        .route("/folders/{id}/parents", get(handlers::folder::list_parents))
        .route("/folders/{id}/subtree", get(handlers::folder::get_subtree))
}

/// File records
fn file_routes() -> Router<AppState> {
    Router::new().route("/files", post(handlers::file::create_file))
}

/// Current user's drive
fn drive_routes() -> Router<AppState> {
    Router::new()
        .route("/onboard", post(handlers::drive::onboard))
        .route("/drive", get(handlers::drive::get_root))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
