//! CLI module
//!
//! Provides command-line interface for:
//! - serve: Run the HTTP service
//! - search: Search the local store
//! - show: Print one stored explanation
//! - sitemap: Print the sitemap for the local store

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliErrorCode, CliResult};
