use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::UpstreamFailure;
use crate::models::{GenerationParams, OllamaGenerateRequest, OllamaOptions};

/// Talks to the generation backend. One attempt per call, no retries.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Raw generated text for `prompt`.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, UpstreamFailure>;

    /// Model listing, used as a lightweight liveness call.
    async fn list_models(&self) -> Result<serde_json::Value, UpstreamFailure>;
}

pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    probe_timeout: Duration,
}

impl OllamaClient {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        // add http:// if not present
        let base_url = if base_url.starts_with("http") {
            base_url.trim_end_matches('/').to_string()
        } else {
            format!("http://{}", base_url.trim_end_matches('/'))
        };
        Self {
            client,
            base_url,
            probe_timeout: Duration::from_secs(5),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn read_json(
        &self,
        res: reqwest::Response,
    ) -> Result<serde_json::Value, UpstreamFailure> {
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(UpstreamFailure::upstream_error(error_detail(status, &body)));
        }
        let body = res.text().await.map_err(transport_failure)?;
        Ok(serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body)))
    }
}

#[async_trait]
impl GenerationClient for OllamaClient {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, UpstreamFailure> {
        let payload = OllamaGenerateRequest {
            model: &params.model,
            prompt,
            stream: false,
            options: OllamaOptions {
                temperature: params.temperature,
                num_predict: params.max_tokens,
            },
        };
        debug!(model = %params.model, prompt, "sending prompt to Ollama");

        let res = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&payload)
            .send()
            .await
            .map_err(transport_failure)?;

        let body = self.read_json(res).await?;
        Ok(response_text(body))
    }

    async fn list_models(&self) -> Result<serde_json::Value, UpstreamFailure> {
        let res = self
            .client
            .get(format!("{}/api/tags", self.base_url))
            .timeout(self.probe_timeout)
            .send()
            .await
            .map_err(transport_failure)?;

        let body = self.read_json(res).await?;
        Ok(body.get("models").cloned().unwrap_or(serde_json::Value::Null))
    }
}

fn transport_failure(e: reqwest::Error) -> UpstreamFailure {
    if e.is_timeout() {
        warn!(error = %e, "Ollama request timed out");
    } else if e.is_connect() {
        warn!(error = %e, "could not connect to Ollama");
    }
    UpstreamFailure::unreachable(e.to_string())
}

// Prefer the backend's own "error" message, then the body, then the status line
fn error_detail(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = json.get("error").and_then(|v| v.as_str()) {
            return msg.to_string();
        }
    }
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    format!(
        "HTTP {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("")
    )
    .trim_end()
    .to_string()
}

// Ollama puts the text in "response"; anything else is used whole
fn response_text(body: serde_json::Value) -> String {
    match body {
        serde_json::Value::Object(ref map) => match map.get("response") {
            Some(serde_json::Value::String(s)) => s.clone(),
            _ => body.to_string(),
        },
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}
