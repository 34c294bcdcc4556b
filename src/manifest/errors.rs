//! # Manifest Errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for manifest loading
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Manifest loading errors. Record-level problems never surface here.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Manifest {path} is not valid UTF-8")]
    InvalidEncoding { path: PathBuf },
}

impl ManifestError {
    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ManifestError::Io { .. } => "MANIFEST_IO_ERROR",
            ManifestError::InvalidEncoding { .. } => "MANIFEST_INVALID_ENCODING",
        }
    }

    /// Path of the manifest that failed
    pub fn path(&self) -> &PathBuf {
        match self {
            ManifestError::Io { path, .. } | ManifestError::InvalidEncoding { path } => path,
        }
    }
}
