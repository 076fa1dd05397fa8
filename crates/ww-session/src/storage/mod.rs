pub mod file_storage;
pub mod memory_storage;
pub mod storage_error;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
pub use storage_error::{Result as StorageResult, StorageError};
