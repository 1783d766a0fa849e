//! # Chat Route Handler
//!
//! The HTTP boundary of the chat pipeline. The handler is a thin adapter:
//! the resolver owns the FAQ short-circuit, retrieval, and generation logic,
//! and its errors map to the status codes callers expect (400 for a missing
//! or empty query, 500 for upstream failures).

use super::{AppError, AppState};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

/// The request body for the `/chat` endpoint. A missing `query` field is
/// treated the same as an empty one.
#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub query: String,
}

/// The response body for the `/chat` endpoint.
#[derive(Serialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// The handler for the `/chat` endpoint.
pub async fn chat_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    info!("Received chat query: '{}'", payload.query);

    let answer = app_state.resolver.resolve(&payload.query).await?;

    Ok(Json(ChatResponse { answer }))
}
