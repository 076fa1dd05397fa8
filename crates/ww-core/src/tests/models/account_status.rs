use crate::AccountStatus;

use std::str::FromStr;

#[test]
fn test_account_status_as_str() {
    assert_eq!(AccountStatus::Active.as_str(), "active");
    assert_eq!(
        AccountStatus::PendingVerification.as_str(),
        "pending_verification"
    );
    assert_eq!(AccountStatus::Disabled.as_str(), "disabled");
}

#[test]
fn test_account_status_from_str() {
    assert_eq!(
        AccountStatus::from_str("disabled").unwrap(),
        AccountStatus::Disabled
    );
    assert!(AccountStatus::from_str("banned").is_err());
}

#[test]
fn test_account_status_default() {
    assert_eq!(AccountStatus::default(), AccountStatus::Active);
}

#[test]
fn test_account_status_serializes_snake_case() {
    let json = serde_json::to_string(&AccountStatus::PendingVerification).unwrap();
    assert_eq!(json, "\"pending_verification\"");
}
