use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use crate::error::UpstreamFailure;

pub const DEFAULT_STYLE: &str = "Random";

// Inbound generate request: {"seed": "...", "type": "..."}
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationRequest {
    #[serde(default)]
    seed: Option<String>,
    #[serde(default, rename = "type")]
    style_type: Option<String>,
}

impl GenerationRequest {
    pub fn new(seed: Option<String>, style_type: Option<String>) -> Self {
        Self { seed, style_type }
    }

    // Topic, empty when absent
    pub fn seed(&self) -> &str {
        self.seed.as_deref().unwrap_or("")
    }

    // Style label, "Random" when absent or empty
    pub fn style_type(&self) -> &str {
        match self.style_type.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => DEFAULT_STYLE,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Cache,
    Generated,
}

// What the pipeline hands back to the HTTP layer
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct GenerationResult {
    pub quote: String,
    pub author: String,
    pub source: Source,
    pub timestamp: String,
    pub raw: String,
    pub thinking: String,
}

// Model and sampling settings sent with every upstream call
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationParams {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: "deepseek-r1:1.5b".to_string(),
            temperature: 0.3,
            max_tokens: 50,
        }
    }
}

// Ollama /api/generate request body
#[derive(Serialize, Clone, Debug)]
pub struct OllamaGenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
    pub options: OllamaOptions,
}

#[derive(Serialize, Clone, Debug)]
pub struct OllamaOptions {
    pub temperature: f32,
    pub num_predict: u32,
}

// Stored history item
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct HistoryRecord {
    pub id: u64,
    pub quote: String,
    pub author: String,
    pub ts: i64,
}

// POST /api/history body
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct NewHistoryRecord {
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub ts: Option<i64>,
}

// Queued generate job - request + channel the worker answers on
pub struct GenerationJob {
    pub request: GenerationRequest,
    pub response_tx: oneshot::Sender<Result<GenerationResult, UpstreamFailure>>,
}
