use super::dto::{
    AccountResponse, PasswordRequest, RefreshRequest, RefreshResponse, UpdateProfileRequest,
    UpdateProfileResponse,
};
use crate::http::{leading_code, send_json};
use crate::{ClientError, ClientResult, FirebaseEndpoints};

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Client as ReqwestClient;
use tokio::sync::Mutex;
use ww_core::{Credential, Identity, NewIdentity};
use ww_session::{
    AuthProvider, CollaboratorResult, ListenerRegistry, SessionListener, Subscription,
};

#[derive(Clone)]
struct TokenPair {
    local_id: String,
    id_token: String,
    refresh_token: String,
}

/// [`AuthProvider`] backed by the Firebase Identity Toolkit REST API.
///
/// Tokens live only in memory. A refresh rejected by the provider (expired,
/// disabled or deleted account) ends the session and notifies subscribers
/// with `None`.
pub struct FirebaseAuthClient {
    endpoints: FirebaseEndpoints,
    client: ReqwestClient,
    tokens: Mutex<Option<TokenPair>>,
    listeners: ListenerRegistry,
}

impl FirebaseAuthClient {
    pub fn new(endpoints: FirebaseEndpoints, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoints,
            client,
            tokens: Mutex::new(None),
            listeners: ListenerRegistry::new(),
        })
    }

    /// Bearer token of the current session, if any.
    pub async fn id_token(&self) -> Option<String> {
        self.tokens
            .lock()
            .await
            .as_ref()
            .map(|tokens| tokens.id_token.clone())
    }

    pub async fn has_session(&self) -> bool {
        self.tokens.lock().await.is_some()
    }

    /// Exchanges the refresh token for a new token pair.
    ///
    /// Returns `Ok(false)` when there is no session or the provider rejected
    /// the refresh token; in the latter case subscribers are told the
    /// session ended. Any other failure (transport, 5xx, throttling) keeps
    /// the current tokens and is returned as an error.
    pub async fn refresh_session(&self) -> ClientResult<bool> {
        let Some(current) = self.tokens.lock().await.clone() else {
            debug!("No session to refresh");
            return Ok(false);
        };

        let body = RefreshRequest {
            grant_type: "refresh_token",
            refresh_token: &current.refresh_token,
        };
        let req = self.client.post(self.endpoints.refresh_url()).json(&body);

        match send_json::<RefreshResponse>(req).await {
            Ok(refreshed) => {
                let local_id = refreshed.user_id.unwrap_or(current.local_id);
                debug!("Refreshed tokens for {local_id}");
                *self.tokens.lock().await = Some(TokenPair {
                    local_id,
                    id_token: refreshed.id_token,
                    refresh_token: refreshed.refresh_token,
                });
                Ok(true)
            }
            Err(ClientError::Api { status, code, .. }) if refresh_rejected(status, &code) => {
                warn!("Refresh token rejected ({code}); ending session");
                *self.tokens.lock().await = None;
                self.listeners.notify(None);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    async fn store_tokens(&self, account: &AccountResponse) {
        *self.tokens.lock().await = Some(TokenPair {
            local_id: account.local_id.clone(),
            id_token: account.id_token.clone(),
            refresh_token: account.refresh_token.clone(),
        });
    }

    async fn sign_in_with_password(&self, credential: &Credential) -> ClientResult<Identity> {
        let body = PasswordRequest {
            email: &credential.email,
            password: &credential.password,
            return_secure_token: true,
        };
        let req = self.client.post(self.endpoints.sign_in_url()).json(&body);
        let account: AccountResponse = send_json(req).await?;

        self.store_tokens(&account).await;
        Ok(identity_from(account))
    }

    async fn sign_up(&self, fields: &NewIdentity) -> ClientResult<Identity> {
        let body = PasswordRequest {
            email: &fields.credential.email,
            password: &fields.credential.password,
            return_secure_token: true,
        };
        let req = self.client.post(self.endpoints.sign_up_url()).json(&body);
        let account: AccountResponse = send_json(req).await?;
        self.store_tokens(&account).await;

        let mut identity = identity_from(account);
        match self.set_display_name(&fields.display_name).await {
            Ok(()) => identity.display_name = fields.display_name.clone(),
            // The account exists either way; the name can be set later.
            Err(e) => warn!("Failed to set display name for {}: {e}", identity.id),
        }

        Ok(identity)
    }

    async fn set_display_name(&self, display_name: &str) -> ClientResult<()> {
        let Some(id_token) = self.id_token().await else {
            return Ok(());
        };

        let body = UpdateProfileRequest {
            id_token: &id_token,
            display_name,
            return_secure_token: true,
        };
        let req = self.client.post(self.endpoints.update_url()).json(&body);
        let updated: UpdateProfileResponse = send_json(req).await?;

        if let (Some(id_token), Some(refresh_token)) = (updated.id_token, updated.refresh_token) {
            let mut tokens = self.tokens.lock().await;
            if let Some(tokens) = tokens.as_mut() {
                tokens.id_token = id_token;
                tokens.refresh_token = refresh_token;
            }
        }
        debug!(
            "Display name set to {:?}",
            updated.display_name.as_deref().unwrap_or(display_name)
        );
        Ok(())
    }
}

#[async_trait]
impl AuthProvider for FirebaseAuthClient {
    async fn authenticate(&self, credential: &Credential) -> CollaboratorResult<Identity> {
        let identity = self.sign_in_with_password(credential).await?;
        info!("Firebase sign-in succeeded for {}", identity.id);
        Ok(identity)
    }

    async fn create_identity(&self, fields: &NewIdentity) -> CollaboratorResult<Identity> {
        let identity = self.sign_up(fields).await?;
        info!("Firebase account created: {}", identity.id);
        Ok(identity)
    }

    async fn revoke_session(&self) -> CollaboratorResult<()> {
        // Firebase has no server-side sign-out for password sessions.
        if self.tokens.lock().await.take().is_some() {
            debug!("Dropped Firebase tokens");
        }
        Ok(())
    }

    fn subscribe(&self, listener: SessionListener) -> Subscription {
        self.listeners.register(listener)
    }
}

impl std::fmt::Debug for FirebaseAuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirebaseAuthClient")
            .field("endpoints", &self.endpoints)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

/// Only a 400 carrying one of these codes means the refresh token is dead.
fn refresh_rejected(status: u16, code: &str) -> bool {
    status == 400
        && matches!(
            leading_code(code).as_str(),
            "TOKEN_EXPIRED" | "USER_DISABLED" | "USER_NOT_FOUND" | "INVALID_REFRESH_TOKEN"
        )
}

fn identity_from(account: AccountResponse) -> Identity {
    let display_name = account
        .display_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| account.email.clone());

    Identity::new(account.local_id, display_name, account.email)
}
