//! Observable events for manifestdb
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded
    ConfigLoaded,

    // Manifest
    /// Manifest file read begins
    ManifestLoadStart,
    /// Manifest built and ready
    ManifestLoaded,
    /// Manifest snapshot swapped
    ManifestReloaded,
    /// Manifest could not be read
    ManifestLoadFailed,

    // Query
    /// Query evaluated
    QueryEvaluated,
    /// Request line could not be handled
    RequestRejected,

    // Serving loop
    /// Request loop started
    ServeStart,
    /// Request loop reached end of input
    ServeStop,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ManifestLoadStart => "MANIFEST_LOAD_BEGIN",
            Event::ManifestLoaded => "MANIFEST_LOADED",
            Event::ManifestReloaded => "MANIFEST_RELOADED",
            Event::ManifestLoadFailed => "MANIFEST_LOAD_FAILED",
            Event::QueryEvaluated => "QUERY_COMPLETE",
            Event::RequestRejected => "REQUEST_REJECTED",
            Event::ServeStart => "SERVE_BEGIN",
            Event::ServeStop => "SERVE_END",
        }
    }

    /// Returns true for events that report a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::ManifestLoadFailed | Event::RequestRejected)
    }

    /// Returns true for per-request events
    pub fn is_per_request(&self) -> bool {
        matches!(self, Event::QueryEvaluated | Event::RequestRejected)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_stable() {
        assert_eq!(Event::ManifestLoaded.as_str(), "MANIFEST_LOADED");
        assert_eq!(Event::QueryEvaluated.to_string(), "QUERY_COMPLETE");
    }

    #[test]
    fn test_failure_events() {
        assert!(Event::ManifestLoadFailed.is_failure());
        assert!(!Event::ManifestLoaded.is_failure());
    }
}
