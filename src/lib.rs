//! Caching quote generator in front of an Ollama backend.
//!
//! A generate request is fingerprinted, probed against a TTL cache and, on a
//! miss, turned into a prompt, sent upstream and parsed into a
//! [`models::GenerationResult`]. See [`orchestrator::Orchestrator`].

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod history;
pub mod metrics;
pub mod models;
pub mod orchestrator;
pub mod parser;
pub mod prompt;
pub mod server;
pub mod state;
pub mod status;
pub mod worker;

pub use error::UpstreamFailure;
pub use models::{GenerationRequest, GenerationResult, Source};
pub use orchestrator::Orchestrator;
