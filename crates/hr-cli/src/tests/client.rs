use crate::Client;

use hr_auth::{Router, SessionStore};
use hr_config::ApiConfig;

use std::sync::Arc;
use std::time::Duration;

fn client(base_url: &str) -> Client {
    Client::new(
        base_url,
        Duration::from_secs(5),
        SessionStore::in_memory(),
        Arc::new(Router::default()),
    )
    .unwrap()
}

#[test]
fn given_trailing_slash_when_created_then_trimmed() {
    let client = client("http://localhost:8080/api/");
    assert_eq!(client.base_url, "http://localhost:8080/api");
}

#[test]
fn given_no_trailing_slash_when_created_then_unchanged() {
    let client = client("http://localhost:8080/api");
    assert_eq!(client.base_url, "http://localhost:8080/api");
}

#[test]
fn given_default_api_config_when_client_built_then_default_base_url() {
    let client = Client::from_config(
        &ApiConfig::default(),
        SessionStore::in_memory(),
        Arc::new(Router::default()),
    )
    .unwrap();

    assert_eq!(client.base_url, "http://localhost:8080/api");
}
