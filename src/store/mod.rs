//! Transient single-slot record store.
//!
//! Holds the most recent successful scrape for the download endpoints.
//! Last write wins; the slot is written only after a scrape fully succeeds,
//! so a failed re-scrape leaves the previous record available.

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::ProductRecord;

/// A successfully scraped record plus its provenance.
#[derive(Debug, Clone)]
pub struct StoredRecord {
    pub record: ProductRecord,
    pub source_url: String,
    pub scraped_at: DateTime<Utc>,
}

/// Single-slot store shared between the scrape and download handlers.
#[derive(Debug, Default)]
pub struct RecordStore {
    slot: RwLock<Option<StoredRecord>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held record with a fresh scrape.
    pub async fn replace(&self, record: ProductRecord, source_url: &str) {
        let mut slot = self.slot.write().await;
        *slot = Some(StoredRecord {
            record,
            source_url: source_url.to_string(),
            scraped_at: Utc::now(),
        });
    }

    /// The currently held record, if any scrape has succeeded yet.
    pub async fn current(&self) -> Option<StoredRecord> {
        self.slot.read().await.clone()
    }

    pub async fn clear(&self) {
        *self.slot.write().await = None;
    }
}
