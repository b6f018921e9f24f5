//! HTTP API server

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::clock::{Clock, SystemClock};

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/time", get(handlers::time))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Router backed by the host clock
pub fn create_system_router() -> Router {
    create_router(AppState::new(Arc::new(SystemClock)))
}

/// Router backed by an arbitrary clock
pub fn create_router_with_clock(clock: Arc<dyn Clock>) -> Router {
    create_router(AppState::new(clock))
}
