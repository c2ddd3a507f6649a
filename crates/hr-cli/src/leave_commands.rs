use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum LeaveCommands {
    /// Apply for leave
    Apply {
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,

        /// Leave type, e.g. Sick, Casual, Annual
        #[arg(long)]
        r#type: String,

        #[arg(long)]
        reason: Option<String>,
    },
    /// Approve a leave request
    Approve {
        /// Leave request ID
        id: i64,
    },
    /// Reject a leave request
    Reject {
        /// Leave request ID
        id: i64,
    },
    /// Your own leave requests
    Mine,
    /// All pending requests
    Pending,
    /// Who is on approved leave
    OnLeave {
        /// Date (YYYY-MM-DD), defaults to today on the server
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}
