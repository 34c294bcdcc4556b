//! Immutable manifest snapshot

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::query::{QueryEngine, QueryOutcome};
use crate::record::{build_record, Record, COLUMN_COUNT};

use super::decoder::{decode, DecodedManifest};
use super::loader::compute_checksum;

/// Load metadata for a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotInfo {
    /// File the snapshot was read from, if any
    pub source: Option<PathBuf>,
    /// CRC32 of the source bytes (0 when built from rows)
    pub checksum: u32,
    pub loaded_at: DateTime<Utc>,
    pub record_count: usize,
    /// Rows that did not carry exactly six fields
    pub malformed_rows: usize,
}

/// Ordered records plus display headers. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct Manifest {
    headers: Vec<String>,
    records: Vec<Record>,
    malformed_rows: usize,
    source: Option<PathBuf>,
    checksum: u32,
    loaded_at: DateTime<Utc>,
}

impl Manifest {
    /// Builds a manifest from header labels and raw rows
    pub fn from_rows<I>(headers: Vec<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut malformed_rows = 0;
        let records = rows
            .into_iter()
            .map(|row| {
                if row.len() != COLUMN_COUNT {
                    malformed_rows += 1;
                }
                build_record(&row)
            })
            .collect();

        Self {
            headers,
            records,
            malformed_rows,
            source: None,
            checksum: 0,
            loaded_at: Utc::now(),
        }
    }

    /// Decodes manifest text and builds every record
    pub fn parse(text: &str) -> Self {
        let DecodedManifest { headers, rows } = decode(text);
        let mut manifest = Self::from_rows(headers, rows);
        manifest.checksum = compute_checksum(text.as_bytes());
        manifest
    }

    /// Records the file this snapshot was read from
    pub(crate) fn with_source(mut self, path: &Path) -> Self {
        self.source = Some(path.to_path_buf());
        self
    }

    /// An empty manifest with no headers
    pub fn empty() -> Self {
        Self::from_rows(Vec::new(), Vec::new())
    }

    /// Header labels, in column order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Records, in file order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows built from the wrong number of fields
    pub fn malformed_rows(&self) -> usize {
        self.malformed_rows
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn checksum(&self) -> u32 {
        self.checksum
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Load metadata
    pub fn info(&self) -> SnapshotInfo {
        SnapshotInfo {
            source: self.source.clone(),
            checksum: self.checksum,
            loaded_at: self.loaded_at,
            record_count: self.records.len(),
            malformed_rows: self.malformed_rows,
        }
    }

    /// Evaluates a query string against every record
    pub fn query(&self, engine: &QueryEngine, input: &str) -> QueryOutcome<'_> {
        engine.evaluate(&self.records, input)
    }

    /// Every record with survivor counts
    pub fn all(&self) -> QueryOutcome<'_> {
        QueryOutcome::from_matches(self.records.iter().collect())
    }
}
