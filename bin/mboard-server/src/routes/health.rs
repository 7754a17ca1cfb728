//! Health / heartbeat endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_health), components(schemas(HealthResponse)))]
pub struct HealthApi;

/// Register health-check routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(get_health))
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process is able to answer.
    pub status: String,
    /// Instant the heartbeat was answered, RFC 3339.
    pub timestamp: String,
    /// Server crate version.
    pub version: String,
    /// Deployment environment name from configuration.
    pub environment: String,
}

/// Heartbeat endpoint.
///
/// Load-balancers and monitoring systems should poll this endpoint; it
/// never touches the store.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse)
    )
)]
pub async fn get_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_owned(),
        timestamp: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        environment: state.config.environment.clone(),
    })
}

// ── Tests ──────────────────────────────────────────────────────────────────────
