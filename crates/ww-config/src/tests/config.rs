use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();
    let _key = EnvGuard::remove("WW_AUTH_API_KEY");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.api.base_url.as_str(), eq(crate::DEFAULT_API_BASE_URL));
    assert_that!(config.api.timeout_secs, eq(crate::DEFAULT_API_TIMEOUT_SECS));
    assert_that!(config.storage.dir.as_str(), eq(crate::DEFAULT_STORAGE_DIR));
    assert_that!(config.auth.api_key, none());
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [api]
              base_url = "http://127.0.0.1:9000/api"
              timeout_secs = 30

              [auth]
              api_key = "test-key"

              [storage]
              dir = "state"
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("http://127.0.0.1:9000/api"));
    assert_that!(config.api.timeout_secs, eq(30));
    assert_that!(config.auth.api_key.as_deref(), eq(Some("test-key")));
    assert_that!(config.storage.dir.as_str(), eq("state"));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[api]\ntimeout_secs = 30").unwrap();
    let _timeout = EnvGuard::set("WW_API_TIMEOUT_SECS", "45");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.timeout_secs, eq(45));
}

#[test]
#[serial]
fn given_unparseable_env_override_when_load_then_keeps_previous_value() {
    // Given
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("WW_API_TIMEOUT_SECS", "soon");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.timeout_secs, eq(crate::DEFAULT_API_TIMEOUT_SECS));
}

#[test]
#[serial]
fn given_invalid_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[api\nbase_url = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let nested = temp.path().join("nested").join("waterwise");
    let _dir = EnvGuard::set("WW_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_config_dir_when_storage_path_then_joined_under_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.storage_path().unwrap();

    // Then
    assert_that!(path, eq(&temp.path().join(crate::DEFAULT_STORAGE_DIR)));
}
