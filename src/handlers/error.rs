use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::{HistoryError, UpstreamFailure};

// Everything a handler can fail with, mapped to a JSON error body
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Upstream(#[from] UpstreamFailure),

    #[error(transparent)]
    History(#[from] HistoryError),

    // generation worker is gone or dropped the reply
    #[error("{0}")]
    Worker(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Upstream(e) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "error": "Ollama unavailable",
                    "kind": e.kind(),
                    "details": e.detail(),
                })),
            )
                .into_response(),
            ApiError::History(e) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response(),
            ApiError::Worker(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": msg })),
            )
                .into_response(),
        }
    }
}
