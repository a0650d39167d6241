//! Stub server errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use faketweet::StubError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("No stubbed response for {method} {target}")]
    NotStubbed { method: String, target: String },

    #[error("Stub error: {0}")]
    Stub(#[from] StubError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            ServerError::NotStubbed { method, target } => (
                StatusCode::NOT_FOUND,
                "No stubbed response",
                Some(format!("{} {}", method, target)),
            ),
            ServerError::Stub(e) => {
                tracing::error!("Stub error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Stub error", None)
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
