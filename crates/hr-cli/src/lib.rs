//! hr-cli library
//!
//! The HTTP client wrapper, auth gate and command dispatch behind the `hr`
//! binary, exported for integration tests.

pub mod app;
pub mod attendance_commands;
pub mod cli;
pub mod client;
pub mod commands;
pub mod department_commands;
pub mod employee_commands;
pub mod error;
pub mod gate;
pub mod leave_commands;
pub mod logger;
pub mod models;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError, EvictionHook, LoginFailure, Reply};
pub use error::{CliError, Result as CliErrorResult};
pub use gate::AuthGate;
