use crate::{DurableStorage, IDENTITY_KEY, PersistedRecord, RESOURCE_KEY};

use std::sync::Arc;

use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::{Mutex, MutexGuard};
use ww_core::{Identity, Property};

/// Reads and writes session records. Failures are logged, never returned:
/// in-memory state stays authoritative for the rest of the process.
///
/// Callers hold [`SessionPersistence::lock`] across a state transition and
/// the writes that mirror it, so storage matches the order of transitions.
#[derive(Clone)]
pub(crate) struct SessionPersistence {
    storage: Arc<dyn DurableStorage>,
    lock: Arc<Mutex<()>>,
}

/// Outcome of reading the stored session.
#[derive(Debug, Default)]
pub(crate) struct Restored {
    pub(crate) session: Option<(Identity, Option<Property>)>,
    /// Records found corrupted, outdated or orphaned
    pub(crate) discard: Vec<&'static str>,
}

enum Stored<T> {
    Missing,
    Valid(T),
    Invalid,
}

impl SessionPersistence {
    pub(crate) fn new(storage: Arc<dyn DurableStorage>) -> Self {
        Self {
            storage,
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().await
    }

    /// Reads the persisted identity and, if it belongs to that identity, its
    /// property. Nothing is removed here; see [`SessionPersistence::discard`].
    pub(crate) async fn restore(&self) -> Restored {
        let mut restored = Restored::default();

        let identity = match self.read::<Identity>(IDENTITY_KEY).await {
            Stored::Valid(identity) => Some(identity),
            Stored::Invalid => {
                restored.discard.push(IDENTITY_KEY);
                None
            }
            Stored::Missing => None,
        };

        let property = match self.read::<Property>(RESOURCE_KEY).await {
            Stored::Valid(property) => Some(property),
            Stored::Invalid => {
                restored.discard.push(RESOURCE_KEY);
                None
            }
            Stored::Missing => None,
        };

        let Some(identity) = identity else {
            if let Some(property) = property {
                warn!(
                    "Discarding stored property {} with no stored identity",
                    property.id
                );
                restored.discard.push(RESOURCE_KEY);
            }
            return restored;
        };

        let property = match property {
            Some(property) if property.is_owned_by(&identity.id) => Some(property),
            Some(property) => {
                warn!(
                    "Discarding stored property {} owned by {} (session identity is {})",
                    property.id, property.owner_id, identity.id
                );
                restored.discard.push(RESOURCE_KEY);
                None
            }
            None => None,
        };

        restored.session = Some((identity, property));
        restored
    }

    pub(crate) async fn discard(&self, keys: &[&'static str]) {
        for key in keys {
            self.remove(key).await;
        }
    }

    pub(crate) async fn save_identity(&self, identity: &Identity) {
        self.write(IDENTITY_KEY, identity).await;
    }

    pub(crate) async fn save_property(&self, property: &Property) {
        self.write(RESOURCE_KEY, property).await;
    }

    pub(crate) async fn remove_property(&self) {
        self.remove(RESOURCE_KEY).await;
    }

    pub(crate) async fn clear(&self) {
        self.remove(RESOURCE_KEY).await;
        self.remove(IDENTITY_KEY).await;
    }

    async fn read<T>(&self, key: &str) -> Stored<T>
    where
        T: Serialize + DeserializeOwned,
    {
        let bytes = match self.storage.get(key).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!("No stored '{key}' record");
                return Stored::Missing;
            }
            Err(e) => {
                warn!("Failed to read stored '{key}' record: {e}");
                return Stored::Missing;
            }
        };

        match PersistedRecord::<T>::decode(&bytes) {
            Ok(envelope) if envelope.is_current() => Stored::Valid(envelope.record),
            Ok(envelope) => {
                warn!(
                    "Discarding stored '{key}' record with schema v{}",
                    envelope.schema_version
                );
                Stored::Invalid
            }
            Err(e) => {
                warn!("Stored '{key}' record is corrupted: {e}");
                Stored::Invalid
            }
        }
    }

    async fn write<T>(&self, key: &str, record: &T)
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        let bytes = match PersistedRecord::new(record.clone()).encode() {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to serialize '{key}' record: {e}");
                return;
            }
        };

        if let Err(e) = self.storage.set(key, &bytes).await {
            warn!("Failed to persist '{key}' record: {e}");
        }
    }

    async fn remove(&self, key: &str) {
        if let Err(e) = self.storage.remove(key).await {
            warn!("Failed to remove stored '{key}' record: {e}");
        }
    }
}
