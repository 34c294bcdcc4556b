//! CLI module for manifestdb
//!
//! Provides command-line interface for:
//! - query: One-shot request
//! - start: Request loop over stdin/stdout
//! - headers: Print the manifest header labels

mod args;
mod commands;
mod config;
mod errors;
mod handler;
mod io;

pub use args::{Cli, Command};
pub use commands::{headers, query, run, run_command, serve, start};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use handler::{Request, RequestHandler};
pub use io::{read_request, read_requests, write_error, write_response};
