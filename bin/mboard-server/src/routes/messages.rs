//! Message list / create endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use mboard_core::Message;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(list_messages, create_message),
    components(schemas(CreateMessageRequest, MessageResponse)),
)]
pub struct MessagesApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/messages", get(list_messages).post(create_message))
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateMessageRequest {
    /// Message body; must be a non-empty string.
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub id: i64,
    pub content: String,
    /// Creation instant, RFC 3339.
    pub created_at: String,
}

fn to_response(m: Message) -> MessageResponse {
    MessageResponse {
        id: m.id,
        content: m.content,
        created_at: m.created_at.to_rfc3339(),
    }
}

#[utoipa::path(
    get,
    path = "/api/messages",
    tag = "messages",
    responses(
        (status = 200, description = "Messages listed, most recent first", body = [MessageResponse]),
        (status = 500, description = "Storage failure"),
    )
)]
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MessageResponse>>, ApiError> {
    let messages = state.service.list_messages().await?;
    Ok(Json(messages.into_iter().map(to_response).collect()))
}

#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "messages",
    request_body = CreateMessageRequest,
    responses(
        (status = 201, description = "Message created", body = MessageResponse),
        (status = 400, description = "Missing or malformed content"),
        (status = 500, description = "Storage failure"),
    )
)]
pub async fn create_message(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateMessageRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(req) = payload?;
    let message = state.service.create_message(req.content).await?;
    Ok((StatusCode::CREATED, Json(to_response(message))))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
