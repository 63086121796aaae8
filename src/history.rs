//! Bounded prompt history
//!
//! Keeps the last [`crate::HISTORY_CAP`] generated prompts, newest first,
//! and persists the whole list through an injected [`HistoryBackend`] on
//! every mutation. Load failures fall back to an empty list; the store is a
//! best-effort cache, not a system of record.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::Category;
use crate::error::PromptError;
use crate::storage::HistoryBackend;

/// One persisted, timestamped composition result
///
/// Immutable once created. The timestamp doubles as the identity key, so it
/// must be unique within a history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRecord {
    pub category: Category,
    pub content: String,
    /// RFC 3339 timestamp, microsecond precision
    pub timestamp: String,
}

impl PromptRecord {
    /// Create a record stamped with the current time
    pub fn new(category: Category, content: impl Into<String>) -> Self {
        Self {
            category,
            content: content.into(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

/// The capped, newest-first history of generated prompts
pub struct HistoryStore {
    entries: Vec<PromptRecord>,
    backend: Box<dyn HistoryBackend>,
}

impl HistoryStore {
    /// Load the persisted history through the given backend
    ///
    /// A missing blob, an unreadable backend or a malformed blob all yield
    /// an empty list; the failure is logged, never surfaced.
    pub fn open(backend: Box<dyn HistoryBackend>) -> Self {
        let entries = match backend.read() {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<PromptRecord>>(&blob) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Discarding malformed history blob: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("History load failed, starting empty: {}", e);
                Vec::new()
            }
        };
        debug!(count = entries.len(), "History loaded");
        Self { entries, backend }
    }

    /// Read-only view, newest first
    pub fn entries(&self) -> &[PromptRecord] {
        &self.entries
    }

    /// Prepend a record, truncate to the cap and persist the full list
    ///
    /// The only growth path. Identical content with a fresh timestamp is a
    /// distinct entry; there is no dedup. On a persist failure the in-memory
    /// list is already updated and the error is returned for the caller to
    /// report as a non-fatal notice.
    pub fn append(&mut self, record: PromptRecord) -> Result<&[PromptRecord], PromptError> {
        let record = self.disambiguate(record);
        self.entries.insert(0, record);
        self.entries.truncate(crate::HISTORY_CAP);
        self.persist()?;
        Ok(&self.entries)
    }

    /// Remove the entry with the given timestamp, if any
    ///
    /// Silent no-op when nothing matches; the persisted blob is rewritten
    /// only when an entry was actually removed.
    pub fn remove(&mut self, timestamp: &str) -> Result<&[PromptRecord], PromptError> {
        let before = self.entries.len();
        self.entries.retain(|r| r.timestamp != timestamp);
        if self.entries.len() != before {
            self.persist()?;
        }
        Ok(&self.entries)
    }

    /// Bump the timestamp by one microsecond until it is unique in the list
    ///
    /// Two compositions in the same microsecond would otherwise collide on
    /// the identity key. An unparseable timestamp is left as-is.
    fn disambiguate(&self, mut record: PromptRecord) -> PromptRecord {
        while self.entries.iter().any(|r| r.timestamp == record.timestamp) {
            match DateTime::parse_from_rfc3339(&record.timestamp) {
                Ok(ts) => {
                    let bumped = ts.with_timezone(&Utc) + Duration::microseconds(1);
                    record.timestamp = bumped.to_rfc3339_opts(SecondsFormat::Micros, true);
                }
                Err(_) => break,
            }
        }
        record
    }

    fn persist(&self) -> Result<(), PromptError> {
        // Serializing Vec<PromptRecord> cannot fail; if it ever does it is a
        // write-path condition, not a malformed stored blob
        let blob = serde_json::to_string(&self.entries)
            .map_err(|e| PromptError::StorageUnavailable(e.into()))?;
        self.backend.write(&blob)
    }
}
