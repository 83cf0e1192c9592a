use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::client::GenerationClient;
use crate::error::UpstreamFailure;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StatusReport {
    pub status: &'static str,
    pub models: serde_json::Value,
}

// Liveness check against the backend. Shares the client, never the cache.
pub struct StatusProbe {
    client: Arc<dyn GenerationClient>,
}

impl StatusProbe {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self { client }
    }

    pub async fn check_status(&self) -> Result<StatusReport, UpstreamFailure> {
        match self.client.list_models().await {
            Ok(models) => {
                info!("Ollama status OK");
                Ok(StatusReport {
                    status: "connected",
                    models,
                })
            }
            Err(e) => {
                warn!(kind = e.kind(), detail = e.detail(), "Ollama status check failed");
                Err(e)
            }
        }
    }
}
