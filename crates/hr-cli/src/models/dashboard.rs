use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_employees: u64,
    pub active_employees: u64,
    pub pending_leaves: u64,
    pub attendance_rate: f64,
    pub on_leave_employees: u64,
}
