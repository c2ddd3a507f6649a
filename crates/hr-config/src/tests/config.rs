use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _url = EnvGuard::remove("HR_API_BASE_URL");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.api.base_url.as_str(), eq(crate::DEFAULT_BASE_URL));
    assert_that!(config.api.timeout_secs, eq(crate::DEFAULT_TIMEOUT_SECS));
    assert_that!(
        config.session.storage_key.as_str(),
        eq(crate::DEFAULT_STORAGE_KEY)
    );
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_is_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join("hr");
    let _guard = EnvGuard::set("HR_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_ok_and_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _url = EnvGuard::remove("HR_API_BASE_URL");
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [api]
              base_url = "https://hr.example.com/api"
              timeout_secs = 10

              [session]
              storage_key = "console_user"
          "#,
    )
    .unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(
        config.api.base_url.as_str(),
        eq("https://hr.example.com/api")
    );
    assert_that!(config.api.timeout_secs, eq(10));
    assert_that!(config.session.storage_key.as_str(), eq("console_user"));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[api]\nbase_url = \"http://toml.local/api\"",
    )
    .unwrap();
    let _url = EnvGuard::set("HR_API_BASE_URL", "http://env.local/api");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("http://env.local/api"));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _timeout = EnvGuard::set("HR_API_TIMEOUT_SECS", "45");
    let _key = EnvGuard::set("HR_SESSION_KEY", "other");
    let _level = EnvGuard::set("HR_LOG_LEVEL", "debug");
    let _colored = EnvGuard::set("HR_LOG_COLORED", "false");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.timeout_secs, eq(45));
    assert_that!(config.session.storage_key.as_str(), eq("other"));
    assert_that!(*config.logging.level, eq(log::LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
}
