use crate::classify_error_code;

use googletest::prelude::*;
use ww_session::AuthErrorKind;

#[test]
fn given_credential_codes_when_classified_then_invalid_credential() {
    for code in [
        "INVALID_PASSWORD",
        "INVALID_LOGIN_CREDENTIALS",
        "INVALID_EMAIL",
        "MISSING_PASSWORD",
        "WEAK_PASSWORD",
        "USER_DISABLED",
    ] {
        assert_that!(classify_error_code(code), eq(AuthErrorKind::InvalidCredential));
    }
}

#[test]
fn given_missing_account_codes_when_classified_then_principal_not_found() {
    assert_that!(
        classify_error_code("EMAIL_NOT_FOUND"),
        eq(AuthErrorKind::PrincipalNotFound)
    );
    assert_that!(
        classify_error_code("USER_NOT_FOUND"),
        eq(AuthErrorKind::PrincipalNotFound)
    );
}

#[test]
fn given_email_exists_when_classified_then_principal_already_exists() {
    assert_that!(
        classify_error_code("EMAIL_EXISTS"),
        eq(AuthErrorKind::PrincipalAlreadyExists)
    );
}

#[test]
fn given_throttling_code_with_description_when_classified_then_rate_limited() {
    assert_that!(
        classify_error_code(
            "TOO_MANY_ATTEMPTS_TRY_LATER : Access to this account has been temporarily disabled"
        ),
        eq(AuthErrorKind::RateLimited)
    );
}

#[test]
fn given_weak_password_with_description_when_classified_then_invalid_credential() {
    assert_that!(
        classify_error_code("WEAK_PASSWORD : Password should be at least 6 characters"),
        eq(AuthErrorKind::InvalidCredential)
    );
}

#[test]
fn given_unrecognized_code_when_classified_then_unknown() {
    assert_that!(
        classify_error_code("OPERATION_NOT_ALLOWED"),
        eq(AuthErrorKind::Unknown)
    );
    assert_that!(classify_error_code(""), eq(AuthErrorKind::Unknown));
}
