use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dealerbot::ChatError;
use serde_json::json;
use tracing::error;

/// A custom error type for the server application.
///
/// Encapsulates the different kinds of errors that can occur within the
/// server, converting each into an appropriate HTTP response: validation
/// failures become 400s, everything else a 500.
pub enum AppError {
    /// Errors originating from the `dealerbot` core.
    Chat(ChatError),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<ChatError> for AppError {
    fn from(err: ChatError) -> Self {
        AppError::Chat(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::Chat(err) => {
                error!("ChatError: {:?}", err);
                if err.is_validation() {
                    (StatusCode::BAD_REQUEST, err.to_string())
                } else {
                    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
                }
            }
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
