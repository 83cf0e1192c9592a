use clap::Parser; // for cli
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use quote_gateway::cache::ResponseCache;
use quote_gateway::client::{GenerationClient, OllamaClient};
use quote_gateway::config::Args;
use quote_gateway::history::MemoryHistory;
use quote_gateway::models::GenerationJob;
use quote_gateway::orchestrator::Orchestrator;
use quote_gateway::server::build_router;
use quote_gateway::state::AppState;
use quote_gateway::status::StatusProbe;
use quote_gateway::worker::{cache_sweeper, generation_worker};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // parse cli arguments
    let args = Args::parse();

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(args.request_timeout))
        .build()?;
    let client: Arc<dyn GenerationClient> = Arc::new(OllamaClient::new(http, &args.ollama_url));

    let cache = Arc::new(ResponseCache::new(args.cache_ttl_ms));
    let orchestrator = Arc::new(Orchestrator::new(
        cache.clone(),
        client.clone(),
        args.generation_params(),
    ));

    // spawn the background workers
    let (generate_tx, generate_rx) = mpsc::channel::<GenerationJob>(100);
    tokio::spawn(generation_worker(generate_rx, orchestrator));
    tokio::spawn(cache_sweeper(cache, Duration::from_secs(args.sweep_interval.max(1))));

    let state = Arc::new(AppState {
        generate_tx,
        status_probe: StatusProbe::new(client),
        history: Arc::new(MemoryHistory::new()),
    });

    let app = build_router(state, &args.origins());

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(port = args.port, "quote gateway running");
    info!(url = %args.ollama_url, model = %args.model, "forwarding to Ollama");
    info!(
        ttl_ms = args.cache_ttl_ms,
        temperature = args.temperature,
        max_tokens = args.max_tokens,
        origins = %args.frontend_origins,
        "generation settings"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
