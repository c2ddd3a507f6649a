//! Guarded command dispatch end to end

mod common;

use common::{client, identity};

use hr_auth::{AuthState, GuardDecision, LOGIN_PATH, Role, Router, SessionStore, View};
use hr_cli::{App, AuthGate, Cli, CliError};

use std::sync::Arc;

use clap::Parser;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn app(server: &MockServer, session: SessionStore) -> App {
    let router = Arc::new(Router::default());
    let client = client(&server.uri(), session, router.clone());
    App::new(AuthGate::new(Arc::new(client)), router)
}

fn signed_in(role: Role) -> SessionStore {
    let session = SessionStore::in_memory();
    session.save(&identity(role)).unwrap();
    session
}

fn command(args: &[&str]) -> hr_cli::commands::Commands {
    let mut argv = vec!["hr"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap().command
}

#[tokio::test]
async fn test_protected_command_without_session_is_not_signed_in() {
    let server = MockServer::start().await;
    let app = app(&server, SessionStore::in_memory());

    let err = app.execute(command(&["dashboard"])).await.unwrap_err();

    assert!(matches!(err, CliError::NotSignedIn { .. }));
    assert_eq!(app.router().location().path, LOGIN_PATH);
    assert_eq!(app.router().location().from.as_deref(), Some("/view"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_user_role_denied_staff_command_without_network_call() {
    let server = MockServer::start().await;
    let app = app(&server, signed_in(Role::User));

    let err = app.execute(command(&["employee", "list"])).await.unwrap_err();

    assert!(matches!(err, CliError::AccessDenied { .. }));
    assert_eq!(app.router().location().path, "/");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_hr_role_denied_admin_only_department_create() {
    let server = MockServer::start().await;
    let app = app(&server, signed_in(Role::Hr));

    let err = app
        .execute(command(&["department", "create", "--name", "Finance"]))
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::AccessDenied { .. }));
    assert!(err.user_message().contains("ROLE_HR"));
}

#[tokio::test]
async fn test_authorize_resolves_parameterized_route() {
    let server = MockServer::start().await;
    let app = app(&server, signed_in(Role::Admin));

    let resolution = app.authorize("/departments/Finance/edit").unwrap();

    assert_eq!(resolution.view, View::EditDepartment);
    assert_eq!(resolution.param("name"), Some("Finance"));
    assert_eq!(resolution.decision, GuardDecision::Render);
}

#[tokio::test]
async fn test_allowed_command_runs_and_returns_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/leaves/pending"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{ "id": 12, "type": "Sick", "status": "PENDING" }],
            "message": "Pending leaves retrieved"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let app = app(&server, signed_in(Role::Hr));

    let value = app.execute(command(&["leave", "pending"])).await.unwrap();

    assert_eq!(value, json!([{ "id": 12, "type": "Sick", "status": "PENDING" }]));
}

#[tokio::test]
async fn test_self_service_uses_signed_in_employee_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/attendance/check-in/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "id": 1, "date": "2026-10-15", "checkIn": "09:00:00" },
            "message": "Clock-in successful"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let app = app(&server, signed_in(Role::User));

    let value = app
        .execute(command(&["attendance", "check-in"]))
        .await
        .unwrap();

    assert_eq!(value["checkIn"], json!("09:00:00"));
}

#[tokio::test]
async fn test_expired_token_evicts_and_next_command_is_guarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getEmployee"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    let session = signed_in(Role::Admin);
    let app = app(&server, session.clone());

    let err = app.execute(command(&["employee", "list"])).await.unwrap_err();
    assert!(matches!(&err, CliError::Client(e) if e.is_unauthorized()));
    assert_eq!(app.router().location().path, LOGIN_PATH);
    assert_eq!(app.gate().state(), AuthState::Unauthenticated);
    assert!(session.load().unwrap().is_none());

    let err = app.execute(command(&["employee", "list"])).await.unwrap_err();
    assert!(matches!(err, CliError::NotSignedIn { .. }));
}

#[tokio::test]
async fn test_login_command_navigates_to_overview() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "id": 42, "token": "token-abc", "email": "ada@corp.example", "username": "Ada", "role": "ROLE_USER" }
        })))
        .mount(&server)
        .await;
    let app = app(&server, SessionStore::in_memory());

    let value = app
        .execute(command(&["login", "--email", "ada@corp.example", "--password", "secret"]))
        .await
        .unwrap();

    assert_eq!(value["role"], json!("ROLE_USER"));
    assert!(value.get("token").is_none());
    assert_eq!(app.router().location().path, "/view");
}

#[tokio::test]
async fn test_signup_with_unknown_role_is_invalid_input() {
    let server = MockServer::start().await;
    let app = app(&server, SessionStore::in_memory());

    let err = app
        .execute(command(&[
            "signup", "--username", "ada", "--email", "a@b.c", "--password", "x", "--role",
            "owner",
        ]))
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::InvalidInput { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_whoami_hides_token() {
    let server = MockServer::start().await;
    let app = app(&server, signed_in(Role::Hr));

    let value = app.execute(command(&["whoami"])).await.unwrap();

    assert_eq!(
        value,
        json!({
            "id": "42",
            "email": "ada@corp.example",
            "name": "Ada",
            "role": "ROLE_HR",
            "roleLabel": "HR Specialist"
        })
    );
}

#[tokio::test]
async fn test_user_role_cannot_clock_in_for_another_employee() {
    let server = MockServer::start().await;
    let app = app(&server, signed_in(Role::User));

    for action in ["check-in", "check-out"] {
        let err = app
            .execute(command(&["attendance", action, "--employee-id", "99"]))
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::AccessDenied { .. }), "{action}");
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_hr_role_can_clock_in_for_another_employee() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/attendance/check-in/99"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "id": 5, "checkIn": "08:30:00" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let app = app(&server, signed_in(Role::Hr));

    let value = app
        .execute(command(&["attendance", "check-in", "--employee-id", "99"]))
        .await
        .unwrap();

    assert_eq!(value["checkIn"], json!("08:30:00"));
}
