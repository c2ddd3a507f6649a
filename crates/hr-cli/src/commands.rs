use crate::{
    attendance_commands::AttendanceCommands, department_commands::DepartmentCommands,
    employee_commands::EmployeeCommands, leave_commands::LeaveCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and remember the session
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Register a new account (does not sign in)
    Signup {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// ROLE_USER (default), ROLE_HR or ROLE_ADMIN; the prefix is optional
        #[arg(long)]
        role: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in identity
    Whoami,

    /// Employee operations
    Employee {
        #[command(subcommand)]
        action: EmployeeCommands,
    },

    /// Department operations
    Department {
        #[command(subcommand)]
        action: DepartmentCommands,
    },

    /// Attendance operations
    Attendance {
        #[command(subcommand)]
        action: AttendanceCommands,
    },

    /// Leave operations
    Leave {
        #[command(subcommand)]
        action: LeaveCommands,
    },

    /// Headline numbers for the overview
    Dashboard,
}

impl Commands {
    /// Console location this command stands for; the route guard decides
    /// whether it may run.
    pub fn route(&self) -> String {
        match self {
            Commands::Login { .. } => "/login".to_string(),
            Commands::Signup { .. } => "/signup".to_string(),
            Commands::Logout => "/".to_string(),
            Commands::Whoami => "/profile".to_string(),
            Commands::Dashboard => "/view".to_string(),

            Commands::Employee { action } => match action {
                EmployeeCommands::List | EmployeeCommands::Delete { .. } => {
                    "/view/employees".to_string()
                }
                EmployeeCommands::Get { id } => format!("/personnel/{id}"),
                EmployeeCommands::Create { .. } => "/employee".to_string(),
                EmployeeCommands::Update { id, .. } => format!("/employee/{id}"),
            },

            Commands::Department { action } => match action {
                DepartmentCommands::List => "/departments".to_string(),
                DepartmentCommands::Get { id } => format!("/departments/{id}"),
                DepartmentCommands::Create { .. } => "/departments/new".to_string(),
                DepartmentCommands::Update { id, .. } | DepartmentCommands::Delete { id } => {
                    format!("/departments/{id}/edit")
                }
            },

            Commands::Attendance { action } => match action {
                AttendanceCommands::CheckIn {
                    employee_id: Some(id),
                }
                | AttendanceCommands::CheckOut {
                    employee_id: Some(id),
                }
                | AttendanceCommands::History {
                    employee_id: Some(id),
                } => format!("/personnel/{id}"),
                AttendanceCommands::OnDate { .. } => "/attendance/all".to_string(),
                _ => "/attendance".to_string(),
            },

            Commands::Leave { action } => match action {
                LeaveCommands::Apply { .. } | LeaveCommands::Mine => "/leaves".to_string(),
                LeaveCommands::Approve { .. }
                | LeaveCommands::Reject { .. }
                | LeaveCommands::Pending
                | LeaveCommands::OnLeave { .. } => "/leaves/pending".to_string(),
            },
        }
    }
}
