use clap::Subcommand;

#[derive(Subcommand)]
pub enum DepartmentCommands {
    /// List all departments
    List,
    /// Get a department by ID
    Get {
        /// Department ID
        id: i64,
    },
    /// Create a department (administrators only)
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: Option<String>,
    },
    /// Update a department (administrators only)
    Update {
        /// Department ID
        id: i64,

        /// New name (defaults to the current one)
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a department (administrators only)
    Delete {
        /// Department ID
        id: i64,
    },
}
