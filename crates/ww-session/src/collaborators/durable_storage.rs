use crate::StorageResult;

use async_trait::async_trait;

/// Key/value storage that survives process restarts.
#[async_trait]
pub trait DurableStorage: Send + Sync {
    /// Returns `None` when the key was never written or has been removed.
    async fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    async fn set(&self, key: &str, value: &[u8]) -> StorageResult<()>;

    /// Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> StorageResult<()>;
}
