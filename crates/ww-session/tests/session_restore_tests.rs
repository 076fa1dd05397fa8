//! Restart behaviour of the session store over file storage.

mod common;

use common::{ANA_EMAIL, ANA_PASSWORD, fazenda_x, storage_over, store_over};

use tempfile::TempDir;
use ww_core::{Credential, Identity, Registration};
use ww_session::{IDENTITY_KEY, PersistedRecord, RESOURCE_KEY, SessionPhase};

#[tokio::test]
async fn test_signed_in_session_survives_restart() {
    let temp = TempDir::new().unwrap();

    let first = store_over(temp.path());
    first.initialize().await;
    let identity = first
        .sign_in(&Credential::new(ANA_EMAIL, ANA_PASSWORD))
        .await
        .unwrap();
    drop(first);

    let second = store_over(temp.path());
    let state = second.initialize().await;

    assert_eq!(state.phase(), SessionPhase::Authenticated);
    assert_eq!(state.identity(), Some(&identity));
}

#[tokio::test]
async fn test_property_survives_restart_with_its_owner() {
    let temp = TempDir::new().unwrap();

    let first = store_over(temp.path());
    first.initialize().await;
    let registered = first
        .sign_up(&Registration::new("Ana", "ana@x.com", "abcdef1").with_property(fazenda_x()))
        .await
        .unwrap();
    drop(first);

    let state = store_over(temp.path()).initialize().await;

    assert_eq!(state.identity(), Some(&registered.identity));
    assert_eq!(state.property(), registered.property.as_ref());
}

#[tokio::test]
async fn test_logout_is_not_undone_by_restart() {
    let temp = TempDir::new().unwrap();

    let first = store_over(temp.path());
    first.initialize().await;
    first
        .sign_in(&Credential::new(ANA_EMAIL, ANA_PASSWORD))
        .await
        .unwrap();
    first.logout().await;
    drop(first);

    let state = store_over(temp.path()).initialize().await;

    assert_eq!(state.phase(), SessionPhase::Unauthenticated);
    assert!(!temp.path().join("identity.json").exists());
}

#[tokio::test]
async fn test_corrupted_identity_is_discarded_on_restore() {
    let temp = TempDir::new().unwrap();
    let storage = storage_over(temp.path());
    storage.set(IDENTITY_KEY, b"{\"schema_version\":1,").await.unwrap();

    let state = store_over(temp.path()).initialize().await;

    assert_eq!(state.phase(), SessionPhase::Unauthenticated);
    assert!(storage.get(IDENTITY_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn test_unknown_schema_version_is_discarded_on_restore() {
    let temp = TempDir::new().unwrap();
    let storage = storage_over(temp.path());
    let mut record = PersistedRecord::new(Identity::new("uid-ana", "Ana", ANA_EMAIL));
    record.schema_version = 42;
    storage
        .set(IDENTITY_KEY, &record.encode().unwrap())
        .await
        .unwrap();

    let state = store_over(temp.path()).initialize().await;

    assert!(!state.is_authenticated());
    assert!(storage.get(IDENTITY_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn test_property_of_another_identity_is_discarded_on_restore() {
    let temp = TempDir::new().unwrap();
    let storage = storage_over(temp.path());
    let identity = Identity::new("uid-ana", "Ana", ANA_EMAIL);
    let foreign = ww_core::Property {
        id: "prop-1".into(),
        name: "Fazenda Y".into(),
        address: ww_core::Address::from_line("Estrada 2"),
        total_area_ha: None,
        owner_id: "uid-someone-else".into(),
    };
    storage
        .set(
            IDENTITY_KEY,
            &PersistedRecord::new(identity.clone()).encode().unwrap(),
        )
        .await
        .unwrap();
    storage
        .set(RESOURCE_KEY, &PersistedRecord::new(foreign).encode().unwrap())
        .await
        .unwrap();

    let state = store_over(temp.path()).initialize().await;

    assert_eq!(state.identity(), Some(&identity));
    assert!(state.property().is_none());
    assert!(storage.get(RESOURCE_KEY).await.unwrap().is_none());
}
