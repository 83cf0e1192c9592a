use axum::http::{HeaderValue, Method, header};
use axum::{
    Router, routing::{get, post}
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

use crate::handlers::{
    append_history_handler, clear_history_handler, generate_handler, health_handler,
    list_history_handler, metrics_handler, status_handler,
};
use crate::state::AppState;

// A single "*" allows any origin, otherwise only the listed ones
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.len() == 1 && origins[0] == "*" {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(allowed))
}

pub fn build_router(state: Arc<AppState>, origins: &[String]) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/ollama/status", get(status_handler))
        .route("/api/quotes/generate", post(generate_handler))
        .route(
            "/api/history",
            get(list_history_handler)
                .post(append_history_handler)
                .delete(clear_history_handler),
        )
        .route("/metrics", get(metrics_handler))
        .layer(cors_layer(origins))
        .with_state(state)
}
