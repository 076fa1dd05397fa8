//! Client-side session state for WaterWise.
//!
//! [`SessionStore`] is the single writer of [`SessionState`]. It talks to the
//! outside world only through the collaborator traits in [`collaborators`],
//! persists the signed-in identity through a [`DurableStorage`], and lets
//! consumers observe every transition through a `watch` channel.

pub mod auth_error_kind;
pub mod collaborator_error;
pub mod collaborators;
pub mod error;
pub mod persisted_record;
pub mod registered;
pub mod session_state;
pub mod session_store;
pub mod storage;
pub mod subscription;

mod persistence;

pub use auth_error_kind::AuthErrorKind;
pub use collaborator_error::{CollaboratorError, CollaboratorResult};
pub use collaborators::{AuthProvider, DurableStorage, ResourceProvider};
pub use error::{AuthError, Result};
pub use persisted_record::{PersistedRecord, SCHEMA_VERSION};
pub use registered::Registered;
pub use session_state::{SessionPhase, SessionState};
pub use session_store::SessionStore;
pub use storage::{FileStorage, MemoryStorage, StorageError, StorageResult};
pub use subscription::{ListenerRegistry, SessionListener, Subscription};

/// Storage key of the persisted identity.
pub const IDENTITY_KEY: &str = "identity";
/// Storage key of the persisted associated property.
pub const RESOURCE_KEY: &str = "resource";
