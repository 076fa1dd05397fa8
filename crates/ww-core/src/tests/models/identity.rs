use crate::{AccountStatus, Identity, IdentityPatch};

use chrono::Utc;

fn ana() -> Identity {
    let mut identity = Identity::new("uid-1", "Ana", "ana@x.com");
    identity.phone = Some("+55 11 99999-9999".into());
    identity.last_login_at = Some(Utc::now());
    identity
}

#[test]
fn given_empty_patch_when_merged_then_identity_unchanged() {
    let identity = ana();

    let merged = identity.merged(&IdentityPatch::default());

    assert_eq!(merged, identity);
}

#[test]
fn given_partial_patch_when_merged_then_only_set_fields_change() {
    let identity = ana();
    let patch = IdentityPatch {
        display_name: Some("Ana Souza".into()),
        ..IdentityPatch::default()
    };

    let merged = identity.merged(&patch);

    assert_eq!(merged.display_name, "Ana Souza");
    assert_eq!(merged.email, identity.email);
    assert_eq!(merged.phone, identity.phone);
    assert_eq!(merged.id, identity.id);
    assert_eq!(merged.last_login_at, identity.last_login_at);
}

#[test]
fn given_status_patch_when_merged_then_status_overwritten() {
    let patch = IdentityPatch {
        status: Some(AccountStatus::Disabled),
        ..IdentityPatch::default()
    };

    let merged = ana().merged(&patch);

    assert!(!merged.is_active());
}

#[test]
fn given_missing_optional_fields_when_deserialize_then_defaults_apply() {
    let json = r#"{"id":"uid-1","display_name":"Ana","email":"ana@x.com"}"#;

    let identity: Identity = serde_json::from_str(json).unwrap();

    assert!(identity.phone.is_none());
    assert!(identity.last_login_at.is_none());
    assert_eq!(identity.status, AccountStatus::Active);
}

#[test]
fn test_identity_patch_is_empty() {
    assert!(IdentityPatch::default().is_empty());
    let patch = IdentityPatch {
        phone: Some("11999999999".into()),
        ..IdentityPatch::default()
    };
    assert!(!patch.is_empty());
}
