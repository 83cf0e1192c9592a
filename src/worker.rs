use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info};

use crate::cache::ResponseCache;
use crate::models::GenerationJob;
use crate::orchestrator::Orchestrator;

/// Runs queued generate jobs one at a time.
///
/// Each job's cache probe, upstream call and cache store finish before the
/// next job is picked up, so concurrent requests for the same key cost a
/// single upstream call: the later ones are served from cache.
pub async fn generation_worker(mut rx: mpsc::Receiver<GenerationJob>, orchestrator: Arc<Orchestrator>) {
    info!("generation worker started - processing requests sequentially");

    // keep receiving the requests from queue
    while let Some(job) = rx.recv().await {
        let result = orchestrator.generate(&job.request).await;
        // handler may have gone away; nothing to do then
        if job.response_tx.send(result).is_err() {
            debug!("generate caller dropped before reply");
        }
    }
    info!("generation worker stopped");
}

// Periodically drops expired cache entries
pub async fn cache_sweeper(cache: Arc<ResponseCache>, sweep_interval: Duration) {
    let mut interval = interval(sweep_interval);

    info!(interval = ?sweep_interval, "cache sweeper started");

    loop {
        interval.tick().await;
        let removed = cache.purge_expired();
        if removed > 0 {
            debug!(removed, remaining = cache.len(), "purged expired cache entries");
        }
    }
}
