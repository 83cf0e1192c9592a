use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::cache::{ResponseCache, make_cache_key};
use crate::client::GenerationClient;
use crate::error::UpstreamFailure;
use crate::metrics::{CACHE_HITS, CACHE_MISSES, UPSTREAM_FAILURES};
use crate::models::{GenerationParams, GenerationRequest, GenerationResult, Source};
use crate::parser;
use crate::prompt::build_prompt;

/// End-to-end generate pipeline.
///
/// cache probe -> prompt -> upstream call -> parse -> store. Failures are
/// returned as-is and never cached. The probe and the store are not atomic
/// with respect to each other; callers that run `generate` concurrently get
/// one upstream call per concurrent miss (see `worker::generation_worker`
/// for the serialized path the server uses).
pub struct Orchestrator {
    cache: Arc<ResponseCache>,
    client: Arc<dyn GenerationClient>,
    params: GenerationParams,
}

impl Orchestrator {
    pub fn new(
        cache: Arc<ResponseCache>,
        client: Arc<dyn GenerationClient>,
        params: GenerationParams,
    ) -> Self {
        Self {
            cache,
            client,
            params,
        }
    }

    pub fn cache(&self) -> &Arc<ResponseCache> {
        &self.cache
    }

    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, UpstreamFailure> {
        let key = make_cache_key(request);

        // check cache first
        if let Some(hit) = self.cache.get(&key) {
            CACHE_HITS.inc();
            info!(key = key.fingerprint(), "cache hit");
            return Ok(hit);
        }
        CACHE_MISSES.inc();
        debug!(key = key.fingerprint(), "cache miss - calling upstream");

        let prompt = build_prompt(request.seed(), request.style_type());
        let raw = match self.client.generate(&prompt, &self.params).await {
            Ok(raw) => raw,
            Err(e) => {
                UPSTREAM_FAILURES.with_label_values(&[e.kind()]).inc();
                warn!(kind = e.kind(), detail = e.detail(), "generation failed");
                return Err(e);
            }
        };
        debug!(raw = %raw, "raw upstream response");

        let parsed = parser::parse(&raw);
        let result = GenerationResult {
            quote: parsed.quote,
            author: parsed.author,
            source: Source::Generated,
            timestamp: chrono::Utc::now().to_rfc3339(),
            raw: parsed.thinking.clone(),
            thinking: parsed.thinking,
        };

        self.cache.put(&key, result.clone());
        Ok(result)
    }
}
