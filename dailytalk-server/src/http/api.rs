//! REST API handlers

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the server
    pub status: String,
    /// Server version
    pub version: String,
    /// Seconds since server started
    pub uptime_seconds: i64,
    /// Number of deployed activities
    pub deployed_activities: usize,
}

/// Health check endpoint
///
/// Returns server status, version, uptime, and deployed activity count.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let deployed_activities = state.activities.read().await.len();

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        deployed_activities,
    })
}
