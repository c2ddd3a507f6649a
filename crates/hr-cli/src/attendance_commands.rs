use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum AttendanceCommands {
    /// Clock in for today
    CheckIn {
        /// Clock in someone else (HR and administrators)
        #[arg(long)]
        employee_id: Option<i64>,
    },
    /// Clock out for today
    CheckOut {
        /// Clock out someone else (HR and administrators)
        #[arg(long)]
        employee_id: Option<i64>,
    },
    /// Attendance history
    History {
        /// Another employee's history (HR and administrators)
        #[arg(long)]
        employee_id: Option<i64>,
    },
    /// Everyone's attendance on one day
    OnDate {
        /// Date (YYYY-MM-DD)
        date: NaiveDate,
    },
}
