//! CLI command implementations
//!
//! Boot order for every command:
//! 1. Load and validate config
//! 2. Apply log level
//! 3. Load the manifest snapshot
//! 4. Answer requests

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::observability::{log_event, log_event_with_fields, Event, Logger};

use super::args::Command;
use super::config::Config;
use super::errors::CliResult;
use super::handler::{Request, RequestHandler};
use super::io::{
    error_response, ok_response, read_request, read_requests, write_error, write_line, write_response,
};

/// Main entry point for CLI
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Query { config, search } => query(&config, search),
        Command::Start { config } => start(&config),
        Command::Headers { config } => headers(&config),
    }
}

/// Loads config, applies the log level and opens the manifest
fn boot(config_path: &Path) -> CliResult<RequestHandler> {
    let config = Config::load(config_path)?;
    Logger::set_min_severity(config.log_level);

    let config_path_str = config_path.display().to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("config", config_path_str.as_str()),
            ("manifest_path", config.manifest_path.as_str()),
            ("stride_policy", config.stride_policy.as_str()),
        ],
    );

    RequestHandler::from_config(&config)
}

/// Answer one request and exit.
///
/// With `search` the query string comes from the flag; otherwise one JSON
/// request is read from stdin.
pub fn query(config_path: &Path, search: Option<String>) -> CliResult<()> {
    let handler = boot(config_path)?;

    let result = match search {
        Some(query) => handler.handle(&Request::Search { query }),
        None => read_request().and_then(|value| handler.handle_value(value)),
    };

    match result {
        Ok(data) => write_response(data),
        Err(e) => {
            write_error(e.code_str(), e.message())?;
            Err(e)
        }
    }
}

/// Answer JSON requests from stdin until EOF
pub fn start(config_path: &Path) -> CliResult<()> {
    let handler = boot(config_path)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(&handler, stdin.lock(), &mut stdout.lock())
}

/// Request loop. A bad request gets an error response and the loop
/// continues; only output failures end it.
pub fn serve<R: BufRead, W: Write>(handler: &RequestHandler, input: R, output: &mut W) -> CliResult<()> {
    log_event(Event::ServeStart);

    for request in read_requests(input) {
        let response = match request.and_then(|value| handler.handle_value(value)) {
            Ok(data) => ok_response(data),
            Err(e) => {
                log_event_with_fields(
                    Event::RequestRejected,
                    &[("code", e.code_str()), ("error", e.message())],
                );
                error_response(e.code_str(), e.message())
            }
        };
        write_line(output, &response)?;
    }

    log_event(Event::ServeStop);
    Ok(())
}

/// Print the manifest header labels
pub fn headers(config_path: &Path) -> CliResult<()> {
    let handler = boot(config_path)?;
    write_response(handler.handle(&Request::Headers)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{Manifest, ManifestStore};
    use crate::query::QueryEngine;
    use serde_json::{json, Value};
    use std::io::Cursor;

    fn handler() -> RequestHandler {
        let text = "Name,Age,Class,Passenger or Crew,Role,Survivor\n\
                    BROWN/ Mrs Margaret ,44,1st Class,Passenger,,T\n\
                    FLEET/ Mr Frederick,24,Deck,Crew,Lookout,T\n";
        RequestHandler::new(
            ManifestStore::new(Manifest::parse(text)),
            QueryEngine::default(),
            "unused.csv",
        )
    }

    fn responses(output: Vec<u8>) -> Vec<Value> {
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_serve_answers_each_line() {
        let input = Cursor::new(
            "{\"op\":\"search\",\"query\":\"crew\"}\n\
             garbage\n\
             {\"op\":\"all\"}\n",
        );
        let mut output = Vec::new();
        serve(&handler(), input, &mut output).unwrap();

        let responses = responses(output);
        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0]["status"], "ok");
        assert_eq!(responses[0]["data"]["records"][0]["last_name"], "FLEET");
        assert_eq!(responses[1]["status"], "error");
        assert_eq!(responses[1]["code"], "MDB_CLI_BAD_REQUEST");
        assert_eq!(responses[2]["data"]["survivors"], 2);
    }

    #[test]
    fn test_serve_empty_input() {
        let mut output = Vec::new();
        serve(&handler(), Cursor::new(""), &mut output).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_boot_fails_on_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("manifestdb.json");
        let manifest_path = dir.path().join("absent.csv");
        std::fs::write(
            &config_path,
            json!({ "manifest_path": manifest_path, "log_level": "error" }).to_string(),
        )
        .unwrap();

        let err = boot(&config_path).unwrap_err();
        assert_eq!(err.code_str(), "MDB_CLI_LOAD_FAILED");
    }
}
