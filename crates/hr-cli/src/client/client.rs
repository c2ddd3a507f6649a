use crate::client::envelope::{self, Reply};
use crate::client::error::{ClientError, Result as CliClientResult};
use crate::models::{
    Attendance, DashboardStats, Department, Employee, LeaveRequest, LeaveStatus, LoginRequest,
    LoginResponse, SignupRequest,
};

use hr_auth::{LOGIN_PATH, Navigator, SessionStore};
use hr_config::ApiConfig;

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use chrono::NaiveDate;
use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method, StatusCode, header::AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde_json::Value;

const REGISTRATION_FAILED: &str = "Registration failed";

/// Called after a 401 has cleared the persisted session.
pub type EvictionHook = Arc<dyn Fn() + Send + Sync>;

/// HTTP client for the HR backend REST API.
///
/// Every backend call goes through here: the persisted token is attached at
/// dispatch time, envelopes are unwrapped, and a 401 evicts the session.
pub struct Client {
    pub base_url: String,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
    on_unauthorized: RwLock<Option<EvictionHook>>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "http://localhost:8080/api")
    /// * `timeout` - Per-request timeout
    /// * `session` - Store the bearer token is read from on every request
    /// * `navigator` - Sent to `/login` when the backend rejects the token
    pub fn new(
        base_url: &str,
        timeout: Duration,
        session: SessionStore,
        navigator: Arc<dyn Navigator>,
    ) -> CliClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            navigator,
            on_unauthorized: RwLock::new(None),
            client,
        })
    }

    pub fn from_config(
        config: &ApiConfig,
        session: SessionStore,
        navigator: Arc<dyn Navigator>,
    ) -> CliClientResult<Self> {
        Self::new(
            &config.normalized_base_url(),
            config.timeout(),
            session,
            navigator,
        )
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Install the hook run after a 401 eviction, replacing any previous one.
    pub fn set_eviction_hook(&self, hook: EvictionHook) {
        *self
            .on_unauthorized
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(hook);
    }

    /// Build a request, attaching the persisted bearer token if there is one
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method.clone(), &url);

        match self.session.current_token() {
            Some(token) => {
                debug!("{method} {path} (authenticated)");
                req = req.header(AUTHORIZATION, format!("Bearer {token}"));
            }
            None => debug!("{method} {path} (no session)"),
        }

        req
    }

    /// Execute request and return the unwrapped payload
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        Ok(self.execute_reply(req, None).await?.data)
    }

    /// Execute request and handle errors
    ///
    /// `failure_message` replaces the generic message when the server gives
    /// no reason for a failure.
    async fn execute_reply(
        &self,
        req: reqwest::RequestBuilder,
        failure_message: Option<&str>,
    ) -> CliClientResult<Reply> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let body = envelope::parse_body(&text);

        if status == StatusCode::UNAUTHORIZED {
            let (code, message) = envelope::failure_details(&body, "Unauthorized");
            warn!("Backend rejected credentials ({code}): {message}");
            self.evict();
            return Err(ClientError::unauthorized(code, message));
        }

        if !status.is_success() {
            let fallback = match failure_message {
                Some(message) => message.to_string(),
                None => status
                    .canonical_reason()
                    .map(String::from)
                    .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16())),
            };
            let (code, message) = envelope::failure_details(&body, &fallback);
            return Err(ClientError::api_error(status, code, message));
        }

        envelope::unwrap(
            status,
            body,
            failure_message.unwrap_or(envelope::OPERATION_FAILED),
        )
    }

    async fn execute_as<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> CliClientResult<T> {
        let data = self.execute(req).await?;
        serde_json::from_value(data).map_err(ClientError::from_json)
    }

    /// Drop the persisted session and send the user back to the login page.
    fn evict(&self) {
        if let Err(e) = self.session.clear() {
            warn!("Failed to clear session after 401: {e}");
        }

        let hook = self
            .on_unauthorized
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(hook) = hook {
            hook();
        }

        if self.navigator.current_path() != LOGIN_PATH {
            self.navigator.replace(LOGIN_PATH);
        }
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    pub async fn login(&self, email: &str, password: &str) -> CliClientResult<LoginResponse> {
        let body = LoginRequest { email, password };
        let req = self.request(Method::POST, "/auth/login").json(&body);
        self.execute_as(req).await
    }

    /// Register an account; returns the server's reply including its message.
    pub async fn signup(&self, registration: &SignupRequest) -> CliClientResult<Reply> {
        let req = self.request(Method::POST, "/auth/signup").json(registration);
        self.execute_reply(req, Some(REGISTRATION_FAILED)).await
    }

    // =========================================================================
    // Employee Operations
    // =========================================================================

    pub async fn list_employees(&self) -> CliClientResult<Vec<Employee>> {
        let req = self.request(Method::GET, "/getEmployee");
        self.execute_as(req).await
    }

    pub async fn get_employee(&self, id: i64) -> CliClientResult<Employee> {
        let req = self.request(Method::GET, &format!("/employee/{id}"));
        self.execute_as(req).await
    }

    pub async fn create_employee(&self, employee: &Employee) -> CliClientResult<Employee> {
        let req = self.request(Method::POST, "/employee").json(employee);
        self.execute_as(req).await
    }

    pub async fn update_employee(&self, id: i64, employee: &Employee) -> CliClientResult<Employee> {
        let req = self
            .request(Method::PATCH, &format!("/employee/{id}"))
            .json(employee);
        self.execute_as(req).await
    }

    /// Delete an employee; the backend answers with a plain-text confirmation.
    pub async fn delete_employee(&self, id: i64) -> CliClientResult<String> {
        let req = self.request(Method::DELETE, &format!("/employee/{id}"));
        Ok(match self.execute(req).await? {
            Value::String(text) => text,
            Value::Null => format!("Employee {id} deleted"),
            other => other.to_string(),
        })
    }

    // =========================================================================
    // Department Operations
    // =========================================================================

    pub async fn list_departments(&self) -> CliClientResult<Vec<Department>> {
        let req = self.request(Method::GET, "/departments");
        self.execute_as(req).await
    }

    pub async fn get_department(&self, id: i64) -> CliClientResult<Department> {
        let req = self.request(Method::GET, &format!("/departments/{id}"));
        self.execute_as(req).await
    }

    pub async fn create_department(&self, department: &Department) -> CliClientResult<Department> {
        let req = self.request(Method::POST, "/departments").json(department);
        self.execute_as(req).await
    }

    pub async fn update_department(
        &self,
        id: i64,
        department: &Department,
    ) -> CliClientResult<Department> {
        let req = self
            .request(Method::PATCH, &format!("/departments/{id}"))
            .json(department);
        self.execute_as(req).await
    }

    /// Delete a department; returns the server's confirmation message.
    pub async fn delete_department(&self, id: i64) -> CliClientResult<String> {
        let req = self.request(Method::DELETE, &format!("/departments/{id}"));
        let reply = self.execute_reply(req, None).await?;
        Ok(reply
            .message
            .unwrap_or_else(|| format!("Department {id} deleted")))
    }

    // =========================================================================
    // Attendance Operations
    // =========================================================================

    pub async fn check_in(&self, employee_id: i64) -> CliClientResult<Attendance> {
        let req = self.request(Method::POST, &format!("/attendance/check-in/{employee_id}"));
        self.execute_as(req).await
    }

    pub async fn check_out(&self, employee_id: i64) -> CliClientResult<Attendance> {
        let req = self.request(Method::POST, &format!("/attendance/check-out/{employee_id}"));
        self.execute_as(req).await
    }

    pub async fn attendance_history(&self, employee_id: i64) -> CliClientResult<Vec<Attendance>> {
        let req = self.request(Method::GET, &format!("/attendance/employee/{employee_id}"));
        self.execute_as(req).await
    }

    /// Everyone's attendance for one day.
    pub async fn attendance_on_date(&self, date: NaiveDate) -> CliClientResult<Vec<Attendance>> {
        let path = format!("/attendance/all?date={}", date.format("%Y-%m-%d"));
        let req = self.request(Method::GET, &path);
        self.execute_as(req).await
    }

    // =========================================================================
    // Leave Operations
    // =========================================================================

    pub async fn apply_leave(
        &self,
        employee_id: i64,
        leave: &LeaveRequest,
    ) -> CliClientResult<LeaveRequest> {
        let req = self
            .request(Method::POST, &format!("/leaves/apply/{employee_id}"))
            .json(leave);
        self.execute_as(req).await
    }

    pub async fn update_leave_status(
        &self,
        id: i64,
        status: LeaveStatus,
    ) -> CliClientResult<LeaveRequest> {
        let path = format!("/leaves/{id}/status?status={}", status.as_str());
        let req = self.request(Method::PATCH, &path);
        self.execute_as(req).await
    }

    pub async fn employee_leaves(&self, employee_id: i64) -> CliClientResult<Vec<LeaveRequest>> {
        let req = self.request(Method::GET, &format!("/leaves/employee/{employee_id}"));
        self.execute_as(req).await
    }

    pub async fn pending_leaves(&self) -> CliClientResult<Vec<LeaveRequest>> {
        let req = self.request(Method::GET, "/leaves/pending");
        self.execute_as(req).await
    }

    /// Approved leaves covering `date` (the server's today when `None`).
    pub async fn on_leave(&self, date: Option<NaiveDate>) -> CliClientResult<Vec<LeaveRequest>> {
        let path = match date {
            Some(date) => format!("/leaves/on-leave?date={}", date.format("%Y-%m-%d")),
            None => "/leaves/on-leave".to_string(),
        };
        let req = self.request(Method::GET, &path);
        self.execute_as(req).await
    }

    // =========================================================================
    // Dashboard Operations
    // =========================================================================

    pub async fn dashboard_stats(&self) -> CliClientResult<DashboardStats> {
        let req = self.request(Method::GET, "/dashboard/stats");
        self.execute_as(req).await
    }
}
