//! Axum router construction.
//!
//! [`build`] assembles the complete application router, including:
//! - Request tracing via `tower_http::trace`
//! - Optional Swagger UI / OpenAPI spec endpoint (disable with `ENABLE_SWAGGER=false`)
//! - Health and message routes under `/api`

pub mod doc;
mod health;
mod messages;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa_swagger_ui::SwaggerUi;

use crate::state::AppState;

// ── Router builder ────────────────────────────────────────────────────────────

/// Build the complete Axum [`Router`] for the application.
pub fn build(state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .merge(health::router())
        .merge(messages::router());

    let mut app = Router::new().nest("/api", api_router);

    // ── Swagger UI ────────────────────────────────────────────────────────────
    // Enabled by default; disable with ENABLE_SWAGGER=false in production
    // to avoid exposing the API structure to potential attackers.
    let api_doc = doc::get_docs();

    if state.config.enable_swagger {
        app = app.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api_doc));
    }

    app.layer(TraceLayer::new_for_http()).with_state(state)
}
