use crate::{CollaboratorResult, SessionListener, Subscription};

use async_trait::async_trait;
use ww_core::{Credential, Identity, NewIdentity};

/// Remote identity provider.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Verifies the credential and returns the signed-in identity.
    async fn authenticate(&self, credential: &Credential) -> CollaboratorResult<Identity>;

    /// Creates a new account and returns its identity, already signed in.
    async fn create_identity(&self, fields: &NewIdentity) -> CollaboratorResult<Identity>;

    /// Ends the provider-side session.
    async fn revoke_session(&self) -> CollaboratorResult<()>;

    /// Registers a listener for session changes the provider observes on its
    /// own (token revoked, account disabled). Providers without such a channel
    /// keep the default, which never fires.
    fn subscribe(&self, listener: SessionListener) -> Subscription {
        drop(listener);
        Subscription::inert()
    }
}
