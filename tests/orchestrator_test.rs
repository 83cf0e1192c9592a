//! End-to-end pipeline behaviour against a scripted backend.

mod common;

use std::sync::Arc;

use common::{ManualClock, ScriptedClient};
use quote_gateway::cache::ResponseCache;
use quote_gateway::models::GenerationParams;
use quote_gateway::{GenerationRequest, Orchestrator, Source, UpstreamFailure};

const TTL_MS: u64 = 300_000;

fn request(seed: &str, style: &str) -> GenerationRequest {
    GenerationRequest::new(Some(seed.to_string()), Some(style.to_string()))
}

fn setup(
    outcomes: Vec<Result<String, UpstreamFailure>>,
) -> (Orchestrator, Arc<ScriptedClient>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(1_700_000_000_000));
    let cache = Arc::new(ResponseCache::with_clock(TTL_MS, clock.clone()));
    let client = Arc::new(ScriptedClient::new(outcomes));
    let orchestrator = Orchestrator::new(cache, client.clone(), GenerationParams::default());
    (orchestrator, client, clock)
}

#[tokio::test]
async fn second_call_within_ttl_is_served_from_cache() {
    let (orch, client, clock) = setup(vec![Ok("<think>ok</think>\n\"Be the change.\"".into())]);

    let first = orch.generate(&request("change", "Inspirational")).await.unwrap();
    clock.advance(1_000);
    let second = orch.generate(&request("change", "Inspirational")).await.unwrap();

    assert_eq!(first.source, Source::Generated);
    assert_eq!(second.source, Source::Cache);
    assert_eq!(first.quote, "Be the change.");
    assert_eq!(first.quote, second.quote);
    assert_eq!(first.author, second.author);
    assert_eq!(first.thinking, second.thinking);
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn call_after_ttl_goes_upstream_again() {
    let (orch, client, clock) = setup(vec![Ok("\"First.\"".into()), Ok("\"Second.\"".into())]);

    let first = orch.generate(&request("x", "Funny")).await.unwrap();
    clock.advance(TTL_MS as i64 + 1);
    let second = orch.generate(&request("x", "Funny")).await.unwrap();

    assert_eq!(first.source, Source::Generated);
    assert_eq!(second.source, Source::Generated);
    assert_eq!(second.quote, "Second.");
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn upstream_failure_propagates_and_is_not_cached() {
    let (orch, client, _) = setup(vec![
        Err(UpstreamFailure::unreachable("connection refused")),
        Ok("Just a plain quote".into()),
    ]);

    let err = orch.generate(&request("", "Random")).await.unwrap_err();
    assert_eq!(err, UpstreamFailure::unreachable("connection refused"));
    assert!(orch.cache().is_empty());

    let retry = orch.generate(&request("", "Random")).await.unwrap();
    assert_eq!(retry.source, Source::Generated);
    assert_eq!(retry.quote, "Just a plain quote");
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn absent_fields_share_key_with_explicit_defaults() {
    let (orch, client, _) = setup(vec![Ok("\"Hello.\"".into())]);

    orch.generate(&GenerationRequest::default()).await.unwrap();
    let hit = orch.generate(&request("", "Random")).await.unwrap();

    assert_eq!(hit.source, Source::Cache);
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn prompt_uses_style_adjective_and_seed() {
    let (orch, client, _) = setup(vec![Ok("a".into()), Ok("b".into()), Ok("c".into())]);

    orch.generate(&request("cats", "Sarcastic")).await.unwrap();
    orch.generate(&request("", "Love")).await.unwrap();
    orch.generate(&request("dogs", "Whimsical")).await.unwrap();

    assert_eq!(
        client.prompts(),
        [
            "Give me one short sarcastic quote about cats.",
            "Give me one short romantic quote.",
            "Give me one short inspiring quote about dogs.",
        ]
    );
}

#[tokio::test]
async fn unknown_style_is_cached_separately_from_random() {
    let (orch, client, _) = setup(vec![Ok("a".into()), Ok("b".into())]);

    orch.generate(&request("x", "Whimsical")).await.unwrap();
    let other = orch.generate(&request("x", "Random")).await.unwrap();

    assert_eq!(other.source, Source::Generated);
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn result_carries_raw_text_and_placeholder_author() {
    let (orch, _, _) = setup(vec![Ok("  <think>x</think>\n**Be bold.**  ".into())]);

    let result = orch.generate(&request("", "Random")).await.unwrap();

    assert_eq!(result.quote, "Be bold.");
    assert_eq!(result.author, "Anonymous");
    assert_eq!(result.raw, "<think>x</think>\n**Be bold.**");
    assert_eq!(result.thinking, result.raw);
    assert!(chrono::DateTime::parse_from_rfc3339(&result.timestamp).is_ok());
}

#[tokio::test]
async fn zero_ttl_always_goes_upstream() {
    let clock = Arc::new(ManualClock::new(0));
    let cache = Arc::new(ResponseCache::with_clock(0, clock));
    let client = Arc::new(ScriptedClient::new(vec![Ok("a".into()), Ok("b".into())]));
    let orch = Orchestrator::new(cache, client.clone(), GenerationParams::default());

    orch.generate(&request("x", "Random")).await.unwrap();
    let second = orch.generate(&request("x", "Random")).await.unwrap();

    assert_eq!(second.source, Source::Generated);
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn separator_inside_seed_and_style_does_not_share_cache_entry() {
    let (orch, client, _) = setup(vec![Ok("\"Funny one.\"".into()), Ok("\"Other one.\"".into())]);

    orch.generate(&request("a|b", "Funny")).await.unwrap();
    let second = orch.generate(&request("b", "Funny|a")).await.unwrap();

    assert_eq!(second.source, Source::Generated);
    assert_eq!(second.quote, "Other one.");
    assert_eq!(
        client.prompts(),
        [
            "Give me one short funny quote about a|b.",
            "Give me one short inspiring quote about b.",
        ]
    );
}
