use axum::{Json, extract::State};
use std::sync::Arc;
use crate::handlers::ApiError;
use crate::history::LIST_LIMIT;
use crate::models::{HistoryRecord, NewHistoryRecord};
use crate::state::AppState;

pub async fn list_history_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<HistoryRecord>>, ApiError> {
    Ok(Json(state.history.list_recent(LIST_LIMIT).await?))
}

pub async fn append_history_handler(
    State(state): State<Arc<AppState>>,
    Json(record): Json<NewHistoryRecord>,
) -> Result<Json<HistoryRecord>, ApiError> {
    Ok(Json(state.history.append(record).await?))
}

pub async fn clear_history_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.history.clear_all().await?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
