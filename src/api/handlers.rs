//! API handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::AppState;
use crate::clock::format_time_of_day;
use crate::error::Result;

/// Current local time of day as `HH:MM:SS`
pub async fn time(State(state): State<AppState>) -> Result<String> {
    let now = state.clock.now()?;
    Ok(format_time_of_day(now))
}

/// Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
