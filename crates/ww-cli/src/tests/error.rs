use crate::CliError;

use ww_core::CoreError;
use ww_session::{AuthError, AuthErrorKind};

#[test]
fn given_auth_error_when_user_message_then_localized_message() {
    let err = CliError::from(AuthError::no_active_session());
    assert_eq!(
        err.user_message(),
        AuthErrorKind::NoActiveSession.user_message()
    );
}

#[test]
fn given_validation_error_when_user_message_then_field_and_message() {
    let err = CliError::from(CoreError::validation("password", "password is too short"));
    assert_eq!(err.user_message(), "password: password is too short");
}

#[test]
fn given_logger_error_when_user_message_then_description() {
    let err = CliError::logger("Failed to open log file /nope");
    assert!(err.user_message().contains("Failed to open log file"));
}
