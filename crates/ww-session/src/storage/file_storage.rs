use crate::{DurableStorage, StorageError, StorageResult};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go through a temp file that is fsynced and then renamed over the
/// target, so a crash mid-write never leaves a truncated record behind.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Keys are limited to `[A-Za-z0-9_-]` so they cannot escape the directory.
    #[track_caller]
    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if !valid {
            return Err(StorageError::invalid_key(key));
        }

        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl DurableStorage for FileStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let path = self.path_for(key)?;

        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::file_read(path, e)),
        }
    }

    async fn set(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        let final_path = self.path_for(key)?;

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StorageError::dir_creation(self.dir.clone(), e))?;

        // Unique per write so concurrent sets of one key never share a temp file.
        let temp_path = self
            .dir
            .join(format!("{key}.json.tmp.{}", Uuid::new_v4().simple()));

        {
            let mut file = fs::File::create(&temp_path)
                .await
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.write_all(value)
                .await
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.flush()
                .await
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .await
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;
        }

        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::atomic_rename(temp_path, final_path, e));
        }

        debug!("Wrote {} bytes to {}", value.len(), final_path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::file_remove(path, e)),
        }
    }
}
