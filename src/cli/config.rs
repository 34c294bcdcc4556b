//! Configuration file
//!
//! ```json
//! {
//!   "manifest_path": "/projects/csv/titanic.csv",
//!   "stride_policy": "paired",
//!   "match_mode": "exact",
//!   "log_level": "info"
//! }
//! ```
//!
//! Only `manifest_path` is required.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::observability::Severity;
use crate::query::{MatchMode, QueryOptions, StridePolicy};

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Manifest text file (required)
    pub manifest_path: String,

    /// How no-value keys advance the token cursor (default "paired")
    #[serde(default)]
    pub stride_policy: StridePolicy,

    /// Substring matching mode (default "exact")
    #[serde(default)]
    pub match_mode: MatchMode,

    /// Minimum log severity (default "info")
    #[serde(default)]
    pub log_level: Severity,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration text
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.manifest_path.trim().is_empty() {
            return Err(CliError::config_error("manifest_path must not be empty"));
        }
        Ok(())
    }

    /// Get manifest path as Path
    pub fn manifest_path(&self) -> &Path {
        Path::new(&self.manifest_path)
    }

    /// Query engine options
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            stride: self.stride_policy,
            match_mode: self.match_mode,
        }
    }
}
