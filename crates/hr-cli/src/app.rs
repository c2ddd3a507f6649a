use crate::{
    attendance_commands::AttendanceCommands,
    client::Client,
    commands::Commands,
    department_commands::DepartmentCommands,
    employee_commands::EmployeeCommands,
    error::{CliError, Result as CliErrorResult},
    gate::AuthGate,
    leave_commands::LeaveCommands,
    models::{Department, Employee, LeaveRequest, LeaveStatus, SignupRequest},
};

use hr_auth::{
    AuthState, DEFAULT_AFTER_LOGIN_PATH, GuardDecision, Identity, Resolution, Router,
    SessionStore, normalize_role,
};
use hr_config::Config;

use std::sync::Arc;

use log::{debug, info};
use serde::Serialize;
use serde_json::{Value, json};

/// One wired-up console: session, gate, router and HTTP client.
pub struct App {
    gate: AuthGate,
    router: Arc<Router>,
}

impl App {
    /// Build from configuration; `server` overrides the configured base URL.
    pub fn from_config(config: &Config, server: Option<&str>) -> CliErrorResult<Self> {
        let session = SessionStore::file(Config::config_dir()?, &config.session.storage_key);
        let router = Arc::new(Router::default());

        let client = match server {
            Some(url) => Client::new(url, config.api.timeout(), session, router.clone())?,
            None => Client::from_config(&config.api, session, router.clone())?,
        };
        info!("Using API at {}", client.base_url);

        Ok(Self::new(AuthGate::new(Arc::new(client)), router))
    }

    pub fn new(gate: AuthGate, router: Arc<Router>) -> Self {
        Self { gate, router }
    }

    pub fn gate(&self) -> &AuthGate {
        &self.gate
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Apply the route guard to `path` for the current auth state.
    pub fn authorize(&self, path: &str) -> CliErrorResult<Resolution> {
        let state = self.gate.state();
        let resolution = self.router.navigate(path, &state);

        match &resolution.decision {
            GuardDecision::Render => Ok(resolution),
            GuardDecision::Suspend => Err(CliError::suspended()),
            GuardDecision::RedirectToLogin { from } => Err(CliError::not_signed_in(from.clone())),
            GuardDecision::RedirectHome => {
                let role = match &state {
                    AuthState::Authenticated(identity) => identity.role.to_string(),
                    _ => "anonymous".to_string(),
                };
                Err(CliError::access_denied(path, role))
            }
        }
    }

    /// Guard, then run one command and return its JSON result.
    pub async fn execute(&self, command: Commands) -> CliErrorResult<Value> {
        let route = command.route();
        let resolution = self.authorize(&route)?;
        debug!("Running command for {:?} at {route}", resolution.view);

        let client = self.gate.client();

        match command {
            Commands::Login { email, password } => {
                let identity = self.gate.login(&email, &password).await?;
                let next = self.router.return_path(DEFAULT_AFTER_LOGIN_PATH);
                self.router.navigate(&next, &self.gate.state());
                Ok(identity_json(&identity))
            }
            Commands::Signup {
                username,
                email,
                password,
                role,
            } => {
                let mut registration = SignupRequest::new(username, email, password);
                if let Some(role) = role {
                    let role = normalize_role(&role)
                        .map_err(|e| CliError::invalid_input(e.to_string()))?;
                    registration = registration.with_role(role);
                }
                let message = self.gate.signup(&registration).await?;
                Ok(json!({ "message": message }))
            }
            Commands::Logout => {
                self.gate.logout()?;
                Ok(json!({ "message": "Signed out" }))
            }
            Commands::Whoami => match self.gate.current() {
                Some(identity) => Ok(identity_json(&identity)),
                None => Err(CliError::not_signed_in(route)),
            },
            Commands::Dashboard => to_json(client.dashboard_stats().await?),

            Commands::Employee { action } => match action {
                EmployeeCommands::List => to_json(client.list_employees().await?),
                EmployeeCommands::Get { id } => to_json(client.get_employee(id).await?),
                EmployeeCommands::Create { fields } => {
                    let employee = Employee::from(fields);
                    if employee.name.as_deref().is_none_or(|name| name.trim().is_empty()) {
                        return Err(CliError::invalid_input("--name is required"));
                    }
                    to_json(client.create_employee(&employee).await?)
                }
                EmployeeCommands::Update { id, fields } => {
                    to_json(client.update_employee(id, &Employee::from(fields)).await?)
                }
                EmployeeCommands::Delete { id } => {
                    let message = client.delete_employee(id).await?;
                    Ok(json!({ "message": message }))
                }
            },

            Commands::Department { action } => match action {
                DepartmentCommands::List => to_json(client.list_departments().await?),
                DepartmentCommands::Get { id } => to_json(client.get_department(id).await?),
                DepartmentCommands::Create { name, description } => {
                    let department = Department {
                        id: None,
                        name,
                        description,
                    };
                    to_json(client.create_department(&department).await?)
                }
                DepartmentCommands::Update {
                    id,
                    name,
                    description,
                } => {
                    let current = client.get_department(id).await?;
                    let department = Department {
                        id: Some(id),
                        name: name.unwrap_or(current.name),
                        description: description.or(current.description),
                    };
                    to_json(client.update_department(id, &department).await?)
                }
                DepartmentCommands::Delete { id } => {
                    let message = client.delete_department(id).await?;
                    Ok(json!({ "message": message }))
                }
            },

            Commands::Attendance { action } => match action {
                AttendanceCommands::CheckIn { employee_id } => {
                    let id = self.employee_id(employee_id)?;
                    to_json(client.check_in(id).await?)
                }
                AttendanceCommands::CheckOut { employee_id } => {
                    let id = self.employee_id(employee_id)?;
                    to_json(client.check_out(id).await?)
                }
                AttendanceCommands::History { employee_id } => {
                    let id = self.employee_id(employee_id)?;
                    to_json(client.attendance_history(id).await?)
                }
                AttendanceCommands::OnDate { date } => {
                    to_json(client.attendance_on_date(date).await?)
                }
            },

            Commands::Leave { action } => match action {
                LeaveCommands::Apply {
                    start,
                    end,
                    r#type,
                    reason,
                } => {
                    if end < start {
                        return Err(CliError::invalid_input("--end is before --start"));
                    }
                    let leave = LeaveRequest {
                        start_date: Some(start),
                        end_date: Some(end),
                        leave_type: Some(r#type),
                        reason,
                        ..LeaveRequest::default()
                    };
                    let id = self.employee_id(None)?;
                    to_json(client.apply_leave(id, &leave).await?)
                }
                LeaveCommands::Approve { id } => {
                    to_json(client.update_leave_status(id, LeaveStatus::Approved).await?)
                }
                LeaveCommands::Reject { id } => {
                    to_json(client.update_leave_status(id, LeaveStatus::Rejected).await?)
                }
                LeaveCommands::Mine => {
                    let id = self.employee_id(None)?;
                    to_json(client.employee_leaves(id).await?)
                }
                LeaveCommands::Pending => to_json(client.pending_leaves().await?),
                LeaveCommands::OnLeave { date } => to_json(client.on_leave(date).await?),
            },
        }
    }

    /// The explicit employee id, or the signed-in user's own.
    fn employee_id(&self, explicit: Option<i64>) -> CliErrorResult<i64> {
        if let Some(id) = explicit {
            return Ok(id);
        }

        let identity = self
            .gate
            .current()
            .ok_or_else(|| CliError::not_signed_in("/attendance"))?;

        identity.id.parse().map_err(|_| {
            CliError::invalid_input(format!(
                "signed-in id '{}' is not numeric; pass --employee-id",
                identity.id
            ))
        })
    }
}

/// Identity without its token.
fn identity_json(identity: &Identity) -> Value {
    json!({
        "id": identity.id,
        "email": identity.email,
        "name": identity.display_name,
        "role": identity.role,
        "roleLabel": identity.role.label(),
    })
}

fn to_json<T: Serialize>(value: T) -> CliErrorResult<Value> {
    Ok(serde_json::to_value(value)?)
}
