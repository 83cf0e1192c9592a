use dashmap::DashMap;
use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::metrics::CACHE_SIZE;
use crate::models::{GenerationRequest, GenerationResult, Source};

// Source of "now" in epoch milliseconds. Swapped out in tests.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

// Lookup key for one (style, seed) pair
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    fingerprint: String,
    digest: String,
}

impl CacheKey {
    // Readable "style|seed" form, for logs
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }
}

// Create a cache key (hash of style + seed, after defaulting).
// Each field is length-prefixed so no seed/style content can shift the boundary.
pub fn make_cache_key(req: &GenerationRequest) -> CacheKey {
    let (style, seed) = (req.style_type(), req.seed());
    let mut hasher = Sha256::new();
    hasher.update((style.len() as u64).to_le_bytes());
    hasher.update(style);
    hasher.update((seed.len() as u64).to_le_bytes());
    hasher.update(seed);
    let fingerprint = format!("{}|{}", style, seed);
    CacheKey {
        digest: format!("{:x}", hasher.finalize()),
        fingerprint,
    }
}

// Cache entry with timestamp
#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub value: GenerationResult,
    pub stored_at_ms: i64,
}

/// Fingerprint -> result map with a single TTL.
///
/// Expiry is lazy: a stale entry reads as absent but stays in the map until
/// it is overwritten or swept by [`ResponseCache::purge_expired`].
/// A TTL of zero turns every read into a miss.
pub struct ResponseCache {
    entries: DashMap<String, CacheEntry>,
    ttl_ms: u64,
    clock: Arc<dyn Clock>,
}

impl ResponseCache {
    pub fn new(ttl_ms: u64) -> Self {
        Self::with_clock(ttl_ms, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl_ms: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            ttl_ms,
            clock,
        }
    }

    fn is_live(&self, entry: &CacheEntry, now_ms: i64) -> bool {
        // a clock that went backwards counts as age 0
        let age = now_ms.saturating_sub(entry.stored_at_ms).max(0) as u64;
        age < self.ttl_ms
    }

    /// Returns a copy of the live entry with `source` set to cache.
    pub fn get(&self, key: &CacheKey) -> Option<GenerationResult> {
        let entry = self.entries.get(key.digest())?;
        if !self.is_live(&entry, self.clock.now_ms()) {
            return None;
        }
        let mut value = entry.value.clone();
        value.source = Source::Cache;
        Some(value)
    }

    pub fn put(&self, key: &CacheKey, value: GenerationResult) {
        self.entries.insert(
            key.digest().to_string(),
            CacheEntry {
                value,
                stored_at_ms: self.clock.now_ms(),
            },
        );
        CACHE_SIZE.set(self.entries.len() as f64);
    }

    // Drop every expired entry, returns how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now_ms();
        let before = self.entries.len();
        self.entries.retain(|_, entry| self.is_live(entry, now));
        CACHE_SIZE.set(self.entries.len() as f64);
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
