#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use ww_core::{Address, Credential, Identity, NewIdentity, Property, PropertyDraft};
use ww_session::{
    AuthErrorKind, AuthProvider, CollaboratorError, CollaboratorResult, DurableStorage,
    FileStorage, ResourceProvider, SessionStore,
};

pub const ANA_EMAIL: &str = "ana@x.com";
pub const ANA_PASSWORD: &str = "abcdef1";

/// Accepts only Ana's credential; new accounts get an id derived from the email.
pub struct StubAuth;

#[async_trait]
impl AuthProvider for StubAuth {
    async fn authenticate(&self, credential: &Credential) -> CollaboratorResult<Identity> {
        if credential.email != ANA_EMAIL {
            return Err(CollaboratorError::new(
                AuthErrorKind::PrincipalNotFound,
                "EMAIL_NOT_FOUND",
            ));
        }
        if credential.password != ANA_PASSWORD {
            return Err(CollaboratorError::new(
                AuthErrorKind::InvalidCredential,
                "INVALID_PASSWORD",
            ));
        }
        Ok(Identity::new("uid-ana", "Ana", ANA_EMAIL))
    }

    async fn create_identity(&self, fields: &NewIdentity) -> CollaboratorResult<Identity> {
        Ok(Identity::new(
            format!("uid-{}", fields.credential.email),
            fields.display_name.clone(),
            fields.credential.email.clone(),
        ))
    }

    async fn revoke_session(&self) -> CollaboratorResult<()> {
        Ok(())
    }
}

pub struct StubResources;

#[async_trait]
impl ResourceProvider for StubResources {
    async fn create_resource(
        &self,
        owner_id: &str,
        draft: &PropertyDraft,
    ) -> CollaboratorResult<Property> {
        Ok(Property {
            id: format!("prop-{owner_id}"),
            name: draft.name.clone(),
            address: draft.address.clone(),
            total_area_ha: draft.area_ha,
            owner_id: owner_id.to_string(),
        })
    }
}

/// A fresh store over `dir`, as if the application had just started.
pub fn store_over(dir: &std::path::Path) -> SessionStore {
    SessionStore::new(
        Arc::new(StubAuth),
        Arc::new(StubResources),
        Arc::new(FileStorage::new(dir)),
    )
}

pub fn storage_over(dir: &std::path::Path) -> Arc<dyn DurableStorage> {
    Arc::new(FileStorage::new(dir))
}

pub fn fazenda_x() -> PropertyDraft {
    PropertyDraft::new("Fazenda X", Address::from_line("Estrada 1"), Some(10.0))
}
