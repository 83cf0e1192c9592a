//! Saved-quote history.
//!
//! The pipeline only defines the record shape; storage sits behind
//! [`HistoryStore`]. [`MemoryHistory`] keeps records for the lifetime of the
//! process.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use crate::error::HistoryError;
use crate::models::{HistoryRecord, NewHistoryRecord};

pub const LIST_LIMIT: usize = 100;

#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Up to `limit` records, newest first.
    async fn list_recent(&self, limit: usize) -> Result<Vec<HistoryRecord>, HistoryError>;

    async fn append(&self, record: NewHistoryRecord) -> Result<HistoryRecord, HistoryError>;

    async fn clear_all(&self) -> Result<(), HistoryError>;
}

#[derive(Default)]
pub struct MemoryHistory {
    // oldest first; listing reverses
    records: RwLock<Vec<HistoryRecord>>,
    next_id: AtomicU64,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistory {
    async fn list_recent(&self, limit: usize) -> Result<Vec<HistoryRecord>, HistoryError> {
        let records = self.records.read().await;
        Ok(records.iter().rev().take(limit).cloned().collect())
    }

    async fn append(&self, record: NewHistoryRecord) -> Result<HistoryRecord, HistoryError> {
        if record.quote.trim().is_empty() {
            return Err(HistoryError::InvalidRecord("quote is empty".to_string()));
        }
        let stored = HistoryRecord {
            id: self.next_id.fetch_add(1, Ordering::Relaxed) + 1,
            quote: record.quote,
            author: record.author,
            ts: record
                .ts
                .unwrap_or_else(|| chrono::Utc::now().timestamp_millis()),
        };
        self.records.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn clear_all(&self) -> Result<(), HistoryError> {
        self.records.write().await.clear();
        Ok(())
    }
}
