use axum::{Json, extract::State};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::oneshot;
use crate::handlers::ApiError;
use crate::metrics::{REQUEST_LATENCY, REQUEST_TOTAL};
use crate::models::{GenerationJob, GenerationRequest, GenerationResult};
use crate::state::AppState;

pub async fn generate_handler(
    State(state): State<Arc<AppState>>,
    payload: Option<Json<GenerationRequest>>,
) -> Result<Json<GenerationResult>, ApiError> {
    REQUEST_TOTAL.inc();
    let start_time = Instant::now();

    // a missing body means "random quote, no topic"
    let request = payload.map(|Json(req)| req).unwrap_or_default();

    let (response_tx, response_rx) = oneshot::channel();

    let job = GenerationJob {
        request,
        response_tx,
    };

    state.generate_tx.send(job).await
        .map_err(|_| ApiError::Worker("Failed to queue request"))?;

    let result = response_rx.await
        .map_err(|_| ApiError::Worker("Worker failed to respond"))?;

    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    Ok(Json(result?))
}
