//! The session store: single writer of [`SessionState`].

use crate::persistence::SessionPersistence;
use crate::{
    AuthError, AuthProvider, DurableStorage, Registered, ResourceProvider, Result as AuthResult,
    SessionListener, SessionState, Subscription,
};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex as StdMutex, PoisonError};

use chrono::Utc;
use log::{debug, info, warn};
use tokio::sync::{Mutex, mpsc, watch};
use tokio::task::JoinHandle;
use ww_core::{
    Credential, Identity, IdentityPatch, NewIdentity, Property, PropertyDraft, Registration,
};

/// Owns the session and mediates every identity transition.
///
/// Construct one per application (or per test) and share it behind an `Arc`.
/// Consumers read [`SessionStore::state`] or [`SessionStore::subscribe`];
/// only the store writes.
///
/// Sign-in and sign-up are queued behind one gate: at most one is in flight,
/// and the last one to resolve determines the final state.
pub struct SessionStore {
    auth: Arc<dyn AuthProvider>,
    resources: Arc<dyn ResourceProvider>,
    persistence: SessionPersistence,
    state_tx: Arc<watch::Sender<SessionState>>,
    identity_gate: Mutex<()>,
    started: AtomicBool,
    provider_events: StdMutex<Option<ProviderEvents>>,
}

/// Provider subscription plus the task applying its notifications.
/// Both are released when the store is dropped.
struct ProviderEvents {
    _subscription: Subscription,
    task: JoinHandle<()>,
}

impl Drop for ProviderEvents {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl SessionStore {
    pub fn new(
        auth: Arc<dyn AuthProvider>,
        resources: Arc<dyn ResourceProvider>,
        storage: Arc<dyn DurableStorage>,
    ) -> Self {
        let (state_tx, _) = watch::channel(SessionState::new());

        Self {
            auth,
            resources,
            persistence: SessionPersistence::new(storage),
            state_tx: Arc::new(state_tx),
            identity_gate: Mutex::new(()),
            started: AtomicBool::new(false),
            provider_events: StdMutex::new(None),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    /// Receiver observing every state transition.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    /// Restores the persisted session and starts listening to the identity
    /// provider. Runs once; later calls return the current snapshot.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn initialize(&self) -> SessionState {
        if self.started.swap(true, Ordering::SeqCst) {
            debug!("Session store already initialized");
            return self.state();
        }

        let mut revision = 0;
        self.state_tx.send_modify(|state| {
            state.begin_restore();
            revision = state.revision();
        });

        self.listen_to_provider();

        let restored = self.persistence.restore().await;

        let _persisting = self.persistence.lock().await;
        let mut current = true;
        self.state_tx.send_modify(|state| {
            // An operation that finished while we were reading wins, and its
            // records replace whatever was read.
            current = state.revision() == revision;
            match restored.session {
                Some(_) if !current => {
                    info!("Session changed during restore; stored session ignored");
                }
                Some((identity, property)) => {
                    info!("Restored session for {}", identity.id);
                    state.set_identity(identity);
                    if let Some(property) = property {
                        state.set_property(property);
                    }
                }
                None => info!("No stored session"),
            }
            state.finish_restore();
        });

        if current {
            self.persistence.discard(&restored.discard).await;
        }

        self.state()
    }

    /// Signs in with `credential` and persists the resulting identity.
    /// On failure the state is left exactly as it was.
    pub async fn sign_in(&self, credential: &Credential) -> AuthResult<Identity> {
        let _gate = self.identity_gate.lock().await;
        debug!("Signing in {}", credential.email);

        let identity = self
            .auth
            .authenticate(credential)
            .await
            .map_err(|e| AuthError::from_collaborator(e))?;

        let identity = with_login_time(identity);
        self.commit_identity(&identity).await;

        info!("Signed in as {}", identity.id);
        Ok(identity)
    }

    /// Creates an account and, when the registration carries one, its property.
    ///
    /// If the account is created but the property is not, the account is kept
    /// (the store is authenticated without a property) and
    /// `ResourceCreationFailed` is returned; [`SessionStore::create_resource`]
    /// retries the property alone.
    pub async fn sign_up(&self, registration: &Registration) -> AuthResult<Registered> {
        let _gate = self.identity_gate.lock().await;
        debug!("Registering {}", registration.email);

        let fields = NewIdentity::from(registration);
        let mut identity = self
            .auth
            .create_identity(&fields)
            .await
            .map_err(|e| AuthError::from_collaborator(e))?;

        if identity.phone.is_none() {
            identity.phone = fields.phone.clone();
        }
        let identity = with_login_time(identity);
        self.commit_identity(&identity).await;
        info!("Registered {}", identity.id);

        let Some(draft) = &registration.property else {
            return Ok(Registered {
                identity,
                property: None,
            });
        };

        let property = self.create_property_for(&identity.id, draft).await?;

        Ok(Registered {
            identity,
            property: Some(property),
        })
    }

    /// Creates the property of the signed-in identity.
    pub async fn create_resource(&self, draft: &PropertyDraft) -> AuthResult<Property> {
        let owner_id = self
            .state_tx
            .borrow()
            .identity()
            .map(|identity| identity.id.clone())
            .ok_or_else(|| AuthError::no_active_session())?;

        self.create_property_for(&owner_id, draft).await
    }

    /// Ends the session. Calling it with no active session does nothing.
    ///
    /// Provider and storage failures are logged; local state is always cleared.
    pub async fn logout(&self) {
        let persisting = self.persistence.lock().await;
        let mut ended = None;
        self.state_tx.send_if_modified(|state| {
            ended = state.identity().map(|identity| identity.id.clone());
            if ended.is_some() {
                state.clear();
            }
            ended.is_some()
        });

        let Some(identity_id) = ended else {
            debug!("Logout requested with no active session");
            return;
        };

        self.persistence.clear().await;
        drop(persisting);

        if let Err(e) = self.auth.revoke_session().await {
            warn!("Identity provider sign-out failed: {e}");
        }

        info!("Signed out {identity_id}");
    }

    /// Merges `patch` into the current identity and persists the result.
    pub async fn update_identity(&self, patch: &IdentityPatch) -> AuthResult<Identity> {
        let _persisting = self.persistence.lock().await;
        let mut updated = None;
        self.state_tx.send_if_modified(|state| {
            let Some(merged) = state.identity().map(|current| current.merged(patch)) else {
                return false;
            };
            state.set_identity(merged.clone());
            updated = Some(merged);
            true
        });

        let identity = updated.ok_or_else(|| AuthError::no_active_session())?;
        self.persistence.save_identity(&identity).await;

        debug!("Updated identity {}", identity.id);
        Ok(identity)
    }

    async fn create_property_for(
        &self,
        owner_id: &str,
        draft: &PropertyDraft,
    ) -> AuthResult<Property> {
        let property = self
            .resources
            .create_resource(owner_id, draft)
            .await
            .map_err(|e| {
                warn!(
                    "Property creation for {owner_id} failed ({}): {}",
                    e.kind, e.detail
                );
                AuthError::resource_creation_failed(owner_id)
            })?;

        let _persisting = self.persistence.lock().await;
        let attached = self
            .state_tx
            .send_if_modified(|state| state.set_property(property.clone()));

        if !attached {
            warn!(
                "Property {} (owner {}) does not belong to the current session",
                property.id, property.owner_id
            );
            return Err(AuthError::resource_creation_failed(owner_id));
        }

        self.persistence.save_property(&property).await;
        info!("Attached property {} to {owner_id}", property.id);
        Ok(property)
    }

    async fn commit_identity(&self, identity: &Identity) {
        let _persisting = self.persistence.lock().await;
        let mut property_kept = false;
        self.state_tx.send_modify(|state| {
            state.set_identity(identity.clone());
            property_kept = state.property().is_some();
        });

        self.persistence.save_identity(identity).await;
        if !property_kept {
            self.persistence.remove_property().await;
        }
    }

    /// Subscribes to the provider once. Notifications are queued to a task so
    /// they are applied (and persisted) in arrival order.
    fn listen_to_provider(&self) {
        let (events_tx, mut events_rx) = mpsc::unbounded_channel::<Option<Identity>>();

        let listener: SessionListener = Arc::new(move |identity| {
            let _ = events_tx.send(identity);
        });
        let subscription = self.auth.subscribe(listener);

        let state_tx = Arc::clone(&self.state_tx);
        let persistence = self.persistence.clone();
        let task = tokio::spawn(async move {
            while let Some(identity) = events_rx.recv().await {
                apply_provider_change(&state_tx, &persistence, identity).await;
            }
        });

        let mut slot = self
            .provider_events
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = Some(ProviderEvents {
            _subscription: subscription,
            task,
        });
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &*self.state_tx.borrow())
            .finish_non_exhaustive()
    }
}

async fn apply_provider_change(
    state_tx: &watch::Sender<SessionState>,
    persistence: &SessionPersistence,
    identity: Option<Identity>,
) {
    let _persisting = persistence.lock().await;
    match identity {
        None => {
            let had_session = state_tx.send_if_modified(|state| {
                let active = state.is_authenticated();
                if active {
                    state.clear();
                }
                active
            });

            if had_session {
                persistence.clear().await;
                info!("Session ended by identity provider");
            }
        }
        Some(identity) => {
            let mut property_kept = false;
            state_tx.send_modify(|state| {
                state.set_identity(identity.clone());
                property_kept = state.property().is_some();
            });

            persistence.save_identity(&identity).await;
            if !property_kept {
                persistence.remove_property().await;
            }
            info!("Identity provider refreshed session for {}", identity.id);
        }
    }
}

fn with_login_time(mut identity: Identity) -> Identity {
    if identity.last_login_at.is_none() {
        identity.last_login_at = Some(Utc::now());
    }
    identity
}
