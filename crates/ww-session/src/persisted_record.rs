//! On-disk envelope for persisted session records.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Current envelope version. Records with another version are discarded.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedRecord<T> {
    pub schema_version: u32,
    pub saved_at: DateTime<Utc>,
    pub record: T,
}

impl<T> PersistedRecord<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(record: T) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            saved_at: Utc::now(),
            record,
        }
    }

    /// Pretty JSON, for debuggability of the files on disk.
    pub fn encode(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec_pretty(self)
    }

    pub fn decode(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    pub fn is_current(&self) -> bool {
        self.schema_version == SCHEMA_VERSION
    }
}
