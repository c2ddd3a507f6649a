//! hr - HR console client
//!
//! Signs in against the HR backend, remembers the session, and runs
//! role-gated employee, department, attendance and leave operations.
//!
//! # Examples
//!
//! ```bash
//! # Sign in (the session is stored under the config directory)
//! hr login --email ada@corp.example --password secret
//!
//! # List employees (HR and administrators)
//! hr employee list --pretty
//!
//! # Approve a leave request
//! hr leave approve 12
//! ```

use hr_cli::{App, Cli, CliError, CliErrorResult, logger};

use hr_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliErrorResult<()> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(&config.logging)?;
    config.log_summary();

    let app = App::from_config(&config, cli.server.as_deref())?;
    let value = app.execute(cli.command).await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
    .map_err(CliError::from)?;

    println!("{output}");
    Ok(())
}
