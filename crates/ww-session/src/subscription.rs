//! Listener registration with guaranteed release.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ww_core::Identity;

/// Callback receiving the provider's view of the current identity.
pub type SessionListener = Arc<dyn Fn(Option<Identity>) + Send + Sync>;

type Release = Box<dyn FnOnce() + Send + Sync>;

/// Keeps a listener registered until dropped.
#[must_use = "dropping a Subscription unregisters the listener"]
pub struct Subscription {
    release: Option<Release>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription that was never attached to anything.
    pub fn inert() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[derive(Default)]
struct RegistryInner {
    next_id: u64,
    listeners: HashMap<u64, SessionListener>,
}

/// Listener bookkeeping for [`AuthProvider`](crate::AuthProvider) implementations.
///
/// Cloning shares the same set of listeners.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, listener: SessionListener) -> Subscription {
        let id = {
            let mut inner = lock(&self.inner);
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.insert(id, listener);
            id
        };

        let registry = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = registry.upgrade() {
                lock(&inner).listeners.remove(&id);
            }
        })
    }

    /// Calls every registered listener. Listeners run outside the registry
    /// lock, so they may register or drop subscriptions themselves.
    pub fn notify(&self, identity: Option<Identity>) {
        let listeners: Vec<SessionListener> =
            lock(&self.inner).listeners.values().cloned().collect();

        for listener in listeners {
            listener(identity.clone());
        }
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.len())
            .finish()
    }
}

fn lock(inner: &Mutex<RegistryInner>) -> MutexGuard<'_, RegistryInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}
