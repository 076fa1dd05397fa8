use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err};
use serial_test::serial;

// =========================================================================
// Validation Tests - Auth
// =========================================================================

#[test]
#[serial]
fn given_api_key_env_when_load_then_key_set_and_required_key_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _key = EnvGuard::set("WW_AUTH_API_KEY", "abc123");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.auth.require_api_key().ok(), eq(Some("abc123")));
}

#[test]
#[serial]
fn given_no_api_key_when_require_api_key_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _key = EnvGuard::remove("WW_AUTH_API_KEY");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.auth.require_api_key(), err(anything()));
}

#[test]
#[serial]
fn given_blank_api_key_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _key = EnvGuard::set("WW_AUTH_API_KEY", "   ");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_identity_url_without_scheme_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _url = EnvGuard::set("WW_AUTH_IDENTITY_BASE_URL", "identitytoolkit.local");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
