//! CLI argument definitions using clap
//!
//! Commands:
//! - manifestdb query --config <path> [--search <query>]
//! - manifestdb start --config <path>
//! - manifestdb headers --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// manifestdb - query a record manifest with compact key:value strings
#[derive(Parser, Debug)]
#[command(name = "manifestdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Answer one request and exit
    Query {
        /// Path to configuration file
        #[arg(long, default_value = "./manifestdb.json")]
        config: PathBuf,

        /// Query string, e.g. `clas:1st Class:first:Henry`. Without it one
        /// JSON request is read from stdin.
        #[arg(long)]
        search: Option<String>,
    },

    /// Answer JSON requests from stdin until EOF
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./manifestdb.json")]
        config: PathBuf,
    },

    /// Print the manifest header labels
    Headers {
        /// Path to configuration file
        #[arg(long, default_value = "./manifestdb.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
