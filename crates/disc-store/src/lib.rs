//! Record source for the disc label pipeline.
//!
//! Provides the [`DiscRecord`] model, the [`RecordStore`] trait over a keyed
//! document collection, an HTTP-backed implementation, an in-memory fake for
//! testing, and placeholder creation for expected identifier ranges.

pub mod http;
pub mod memory;
pub mod placeholders;

use serde::{Deserialize, Serialize};

pub use http::HttpStore;
pub use memory::MemoryStore;
pub use placeholders::ensure_placeholders;

/// Sentinel value for descriptive fields that are absent from the store.
pub const SENTINEL: &str = "N/A";

fn sentinel() -> String {
    SENTINEL.to_string()
}

/// A stored disc entity: unique identifier plus three descriptive fields.
///
/// `uid` defaults to an empty string when the stored document lacks one;
/// such records are skipped by the renderer. The descriptive fields default
/// to [`SENTINEL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscRecord {
    #[serde(default)]
    pub uid: String,
    #[serde(default = "sentinel")]
    pub company: String,
    #[serde(default = "sentinel")]
    pub mold: String,
    #[serde(default = "sentinel")]
    pub color: String,
}

impl DiscRecord {
    /// Build a placeholder record with all descriptive fields set to [`SENTINEL`].
    pub fn placeholder(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            company: sentinel(),
            mold: sentinel(),
            color: sentinel(),
        }
    }
}

/// A keyed document collection holding disc records.
///
/// Implementations are injected into the pipeline so tests can substitute
/// [`MemoryStore`] for the remote store.
pub trait RecordStore {
    /// All records currently stored, in a stable order for a given store state.
    fn list_all(&self) -> Result<Vec<DiscRecord>, StoreError>;

    /// Fetch a single record by uid, `None` when absent.
    fn get(&self, uid: &str) -> Result<Option<DiscRecord>, StoreError>;

    /// Insert or replace the record stored under `record.uid`.
    fn set(&self, record: &DiscRecord) -> Result<(), StoreError>;
}

/// Errors raised by record store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("store API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode store response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("store lock poisoned")]
    LockPoisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_sentinel() {
        let record: DiscRecord = serde_json::from_str(r#"{"uid": "disc_7"}"#).unwrap();
        assert_eq!(record.uid, "disc_7");
        assert_eq!(record.company, SENTINEL);
        assert_eq!(record.mold, SENTINEL);
        assert_eq!(record.color, SENTINEL);
    }

    #[test]
    fn missing_uid_defaults_to_empty() {
        let record: DiscRecord = serde_json::from_str(r#"{"company": "Acme"}"#).unwrap();
        assert!(record.uid.is_empty());
        assert_eq!(record.company, "Acme");
    }

    #[test]
    fn placeholder_has_sentinel_fields() {
        let record = DiscRecord::placeholder("disc_1");
        assert_eq!(record.uid, "disc_1");
        assert_eq!(record.company, SENTINEL);
        assert_eq!(record.mold, SENTINEL);
        assert_eq!(record.color, SENTINEL);
    }
}
