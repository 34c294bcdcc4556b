//! Current-snapshot holder
//!
//! Readers take an `Arc` to the current snapshot and query it without any
//! lock held. Reload builds a new snapshot off to the side and swaps it in
//! whole; snapshots already handed out are never touched.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use crate::observability::{log_event_with_fields, Event};

use super::errors::ManifestResult;
use super::loader::{file_checksum, load};
use super::snapshot::Manifest;

/// What a reload did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// File checksum matched the current snapshot; nothing swapped
    Unchanged,
    /// A new snapshot replaced the old one
    Swapped { records: usize },
}

/// Holds the current manifest snapshot
#[derive(Debug)]
pub struct ManifestStore {
    current: RwLock<Arc<Manifest>>,
}

impl ManifestStore {
    /// Creates a store around an initial snapshot
    pub fn new(manifest: Manifest) -> Self {
        Self {
            current: RwLock::new(Arc::new(manifest)),
        }
    }

    /// Loads the initial snapshot from a file
    pub fn open(path: &Path) -> ManifestResult<Self> {
        Ok(Self::new(load(path)?))
    }

    /// Returns the current snapshot
    pub fn snapshot(&self) -> Arc<Manifest> {
        // the guarded value is only ever replaced whole, so a poisoned lock
        // still holds a complete snapshot
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swaps in a new snapshot and returns the previous one
    pub fn replace(&self, manifest: Manifest) -> Arc<Manifest> {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(manifest))
    }

    /// Reloads from `path`, skipping the swap if the file is unchanged
    pub fn reload_from(&self, path: &Path) -> ManifestResult<ReloadOutcome> {
        let current = self.snapshot();
        if current.source() == Some(path) && file_checksum(path)? == current.checksum() {
            return Ok(ReloadOutcome::Unchanged);
        }

        let manifest = load(path)?;
        let records = manifest.len();
        self.replace(manifest);

        let records_str = records.to_string();
        log_event_with_fields(Event::ManifestReloaded, &[("records", records_str.as_str())]);

        Ok(ReloadOutcome::Swapped { records })
    }
}
