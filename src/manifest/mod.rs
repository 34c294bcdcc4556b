//! Manifest subsystem for manifestdb
//!
//! Turns manifest text into an immutable snapshot of records and keeps the
//! current snapshot available to any number of readers.
//!
//! # Load Flow
//!
//! 1. Read the file (I/O and encoding failures are errors)
//! 2. Decode lines into a header row and raw rows
//! 3. Build one record per raw row (never fails)
//! 4. Publish the snapshot; reload swaps a new one in whole

mod decoder;
mod errors;
mod loader;
mod snapshot;
mod store;

pub use decoder::{decode, DecodedManifest, FIELD_SEPARATOR};
pub use errors::{ManifestError, ManifestResult};
pub use loader::{compute_checksum, file_checksum, load};
pub use snapshot::{Manifest, SnapshotInfo};
pub use store::{ManifestStore, ReloadOutcome};
