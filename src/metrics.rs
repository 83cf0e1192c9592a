use lazy_static::lazy_static;
use prometheus::{
    Counter, CounterVec, Gauge, Histogram, register_counter, register_counter_vec,
    register_gauge, register_histogram,
};


lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("quote_requests_total", "Total number of generate requests").unwrap();
    pub static ref CACHE_HITS: Counter =
        register_counter!("quote_cache_hits_total", "Total cache hits").unwrap();
    pub static ref CACHE_MISSES: Counter =
        register_counter!("quote_cache_misses_total", "Total cache misses").unwrap();
    pub static ref UPSTREAM_FAILURES: CounterVec = register_counter_vec!(
        "quote_upstream_failures_total",
        "Failed calls to the generation backend",
        &["kind"]
    )
    .unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "quote_request_latency_seconds",
        "Generate request latency in seconds"
    )
    .unwrap();
    pub static ref CACHE_SIZE: Gauge =
        register_gauge!("quote_cache_size", "Current number of items in cache").unwrap();
}
