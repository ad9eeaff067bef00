//! HTTP server module

mod analytics;
mod api;
mod provider;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub use analytics::{AnalyticsField, AnalyticsListResponse, AnalyticsValue, StudentAnalytics};
pub use api::HealthResponse;
pub use provider::{ConfigParam, ErrorResponse, SubmitRequest, SubmitResponse};

/// Create the HTTP router with all routes configured
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(provider::index))
        .route("/config", get(provider::config_page))
        .route("/json-params", get(provider::json_params))
        .route("/deploy", get(provider::deploy))
        .route("/submit", post(provider::submit))
        .route("/analytics-list", get(analytics::analytics_list))
        .route("/analytics", post(analytics::analytics))
        .route("/api/health", get(api::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
