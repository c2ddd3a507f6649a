use crate::ApiConfig;

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};

#[test]
fn given_default_api_config_when_validate_then_ok() {
    let config = ApiConfig::default();

    assert_that!(config.validate(), ok(anything()));
    assert_that!(config.timeout(), eq(Duration::from_secs(30)));
}

#[test]
fn given_trailing_slashes_when_normalized_base_url_then_trimmed() {
    let config = ApiConfig {
        base_url: "http://localhost:8080/api//".to_string(),
        ..Default::default()
    };

    assert_that!(
        config.normalized_base_url().as_str(),
        eq("http://localhost:8080/api")
    );
}

#[test]
fn given_base_url_without_scheme_when_validate_then_error_mentions_scheme() {
    let config = ApiConfig {
        base_url: "localhost:8080/api".to_string(),
        ..Default::default()
    };

    let result = config.validate();

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("http://")
    );
}

#[test]
fn given_empty_base_url_when_validate_then_error() {
    let config = ApiConfig {
        base_url: "   ".to_string(),
        ..Default::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_zero_timeout_when_validate_then_error() {
    let config = ApiConfig {
        timeout_secs: 0,
        ..Default::default()
    };

    let result = config.validate();

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("timeout_secs")
    );
}

#[test]
fn given_timeout_at_upper_bound_when_validate_then_ok() {
    let config = ApiConfig {
        timeout_secs: crate::MAX_TIMEOUT_SECS,
        ..Default::default()
    };

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_timeout_above_upper_bound_when_validate_then_error() {
    let config = ApiConfig {
        timeout_secs: crate::MAX_TIMEOUT_SECS + 1,
        ..Default::default()
    };

    assert_that!(config.validate(), err(anything()));
}
