use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, extract::State};
use std::sync::Arc;
use crate::state::AppState;

// Not routed through the generation worker, so it answers while a generate is running
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.status_probe.check_status().await {
        Ok(report) => Json(report).into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "status": "disconnected",
                "error": e.detail(),
            })),
        )
            .into_response(),
    }
}
