use crate::{Credential, Registration};

#[test]
fn given_credential_when_debug_then_password_is_redacted() {
    let credential = Credential::new("ana@x.com", "abcdef1");

    let printed = format!("{credential:?}");

    assert!(printed.contains("ana@x.com"));
    assert!(!printed.contains("abcdef1"));
}

#[test]
fn given_padded_email_when_new_then_email_is_trimmed() {
    let credential = Credential::new("  ana@x.com ", "abcdef1");
    assert_eq!(credential.email, "ana@x.com");
}

#[test]
fn given_registration_when_debug_then_password_is_redacted() {
    let registration = Registration::new("Ana", "ana@x.com", "abcdef1");
    assert!(!format!("{registration:?}").contains("abcdef1"));
}
