//! Wire records exchanged with the HR backend (camelCase JSON).

pub(crate) mod attendance;
pub(crate) mod auth;
pub(crate) mod dashboard;
pub(crate) mod department;
pub(crate) mod employee;
pub(crate) mod leave;

pub use attendance::Attendance;
pub use auth::{LoginRequest, LoginResponse, SignupRequest};
pub use dashboard::DashboardStats;
pub use department::Department;
pub use employee::Employee;
pub use leave::{LeaveRequest, LeaveStatus};
