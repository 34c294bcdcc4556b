//! Request dispatch
//!
//! Each request is answered against the snapshot current at the time it
//! arrives. Every request gets a fresh `request_id` for its log lines.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::manifest::{Manifest, ManifestStore, ReloadOutcome};
use crate::observability::{log_event_with_fields, Event};
use crate::query::{QueryEngine, QueryOutcome};

use super::config::Config;
use super::errors::{CliError, CliResult};

/// A request line
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    /// Evaluate a query string
    Search { query: String },
    /// Every record
    All,
    /// Records whose full name contains `name`
    Name { name: String },
    /// Header labels
    Headers,
    /// Snapshot load metadata
    Info,
    /// Re-read the manifest file
    Reload,
}

impl Request {
    fn op(&self) -> &'static str {
        match self {
            Request::Search { .. } => "search",
            Request::All => "all",
            Request::Name { .. } => "name",
            Request::Headers => "headers",
            Request::Info => "info",
            Request::Reload => "reload",
        }
    }
}

/// Answers requests against a manifest store
#[derive(Debug)]
pub struct RequestHandler {
    store: ManifestStore,
    engine: QueryEngine,
    manifest_path: PathBuf,
}

impl RequestHandler {
    /// Creates a handler around an existing store
    pub fn new(store: ManifestStore, engine: QueryEngine, manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            engine,
            manifest_path: manifest_path.into(),
        }
    }

    /// Loads the configured manifest
    pub fn from_config(config: &Config) -> CliResult<Self> {
        let store = ManifestStore::open(config.manifest_path())?;
        Ok(Self::new(
            store,
            QueryEngine::new(config.query_options()),
            config.manifest_path(),
        ))
    }

    /// Returns the manifest path used for reloads
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Decodes and answers one JSON request
    pub fn handle_value(&self, value: Value) -> CliResult<Value> {
        let request: Request = serde_json::from_value(value)
            .map_err(|e| CliError::bad_request(format!("Invalid request: {}", e)))?;
        self.handle(&request)
    }

    /// Answers one request
    pub fn handle(&self, request: &Request) -> CliResult<Value> {
        let request_id = Uuid::new_v4().to_string();
        let snapshot = self.store.snapshot();

        let data = match request {
            Request::Search { query } => {
                let outcome = snapshot.query(&self.engine, query);
                self.log_outcome(&request_id, request, query, &outcome);
                outcome_json(&snapshot, query, &outcome)?
            }
            Request::All => {
                let outcome = snapshot.all();
                self.log_outcome(&request_id, request, "", &outcome);
                outcome_json(&snapshot, "", &outcome)?
            }
            Request::Name { name } => {
                let outcome = self.engine.search_name(snapshot.records(), name);
                self.log_outcome(&request_id, request, name, &outcome);
                outcome_json(&snapshot, name, &outcome)?
            }
            Request::Headers => json!({ "headers": snapshot.headers() }),
            Request::Info => serde_json::to_value(snapshot.info())?,
            Request::Reload => match self.store.reload_from(&self.manifest_path)? {
                ReloadOutcome::Unchanged => json!({ "reloaded": false }),
                ReloadOutcome::Swapped { records } => {
                    json!({ "reloaded": true, "records": records })
                }
            },
        };

        Ok(data)
    }

    fn log_outcome(&self, request_id: &str, request: &Request, input: &str, outcome: &QueryOutcome<'_>) {
        let matches = outcome.len().to_string();
        log_event_with_fields(
            Event::QueryEvaluated,
            &[
                ("request_id", request_id),
                ("op", request.op()),
                ("input", input),
                ("matches", matches.as_str()),
            ],
        );
    }
}

fn outcome_json(manifest: &Manifest, input: &str, outcome: &QueryOutcome<'_>) -> CliResult<Value> {
    Ok(json!({
        "query": input,
        "headers": manifest.headers(),
        "records": serde_json::to_value(&outcome.matches)?,
        "survivors": outcome.survivors(),
        "not_survivors": outcome.not_survivors(),
    }))
}
