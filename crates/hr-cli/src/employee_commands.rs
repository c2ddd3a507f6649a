use crate::models::Employee;

use chrono::NaiveDate;
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum EmployeeCommands {
    /// List all employees
    List,
    /// Get an employee's personnel record
    Get {
        /// Employee ID
        id: i64,
    },
    /// Create a new employee
    Create {
        #[command(flatten)]
        fields: EmployeeFields,
    },
    /// Update an employee (only the given fields change)
    Update {
        /// Employee ID
        id: i64,

        #[command(flatten)]
        fields: EmployeeFields,
    },
    /// Delete an employee
    Delete {
        /// Employee ID
        id: i64,
    },
}

#[derive(Args, Debug, Default)]
pub struct EmployeeFields {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// Work email
    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Department name
    #[arg(long)]
    pub department: Option<String>,

    /// Job title
    #[arg(long)]
    pub designation: Option<String>,

    #[arg(long)]
    pub salary: Option<f64>,

    /// Joining date (YYYY-MM-DD)
    #[arg(long)]
    pub joining_date: Option<NaiveDate>,

    /// ACTIVE or INACTIVE
    #[arg(long, value_parser = ["ACTIVE", "INACTIVE"])]
    pub status: Option<String>,

    /// Custom identifier, e.g. EMP-0289
    #[arg(long)]
    pub employee_id: Option<String>,

    /// Full-Time, Part-Time or Contract
    #[arg(long)]
    pub employment_type: Option<String>,

    /// Remote, Hybrid or Office
    #[arg(long)]
    pub work_model: Option<String>,

    #[arg(long)]
    pub city: Option<String>,
}

impl From<EmployeeFields> for Employee {
    fn from(fields: EmployeeFields) -> Self {
        Employee {
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            department: fields.department,
            designation: fields.designation,
            salary: fields.salary,
            joining_date: fields.joining_date,
            status: fields.status,
            employee_id: fields.employee_id,
            employment_type: fields.employment_type,
            work_model: fields.work_model,
            city: fields.city,
            ..Employee::default()
        }
    }
}
