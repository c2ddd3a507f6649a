use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "hr")]
#[command(about = "HR console client: employees, departments, attendance and leave")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides api.base_url / HR_API_BASE_URL)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
