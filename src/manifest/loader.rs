//! Manifest file loader
//!
//! Reads the whole file, then decodes, checksums and builds records.
//! A missing or non-UTF-8 file is an error; bad rows are not.

use std::fs;
use std::path::Path;

use crc32fast::Hasher;

use crate::observability::{log_event_with_fields, Event, Logger};

use super::errors::{ManifestError, ManifestResult};
use super::snapshot::Manifest;

/// CRC32 over manifest bytes. Same bytes, same checksum.
pub fn compute_checksum(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

fn read_bytes(path: &Path) -> ManifestResult<Vec<u8>> {
    fs::read(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_text(path: &Path) -> ManifestResult<String> {
    String::from_utf8(read_bytes(path)?).map_err(|_| ManifestError::InvalidEncoding {
        path: path.to_path_buf(),
    })
}

/// Loads and builds a manifest from a file
pub fn load(path: &Path) -> ManifestResult<Manifest> {
    let path_str = path.display().to_string();
    let path_str = path_str.as_str();
    log_event_with_fields(Event::ManifestLoadStart, &[("path", path_str)]);

    let text = match read_text(path) {
        Ok(text) => text,
        Err(e) => {
            let message = e.to_string();
            Logger::error(
                Event::ManifestLoadFailed.as_str(),
                &[("path", path_str), ("code", e.code()), ("error", message.as_str())],
            );
            return Err(e);
        }
    };

    let manifest = Manifest::parse(&text).with_source(path);

    let records = manifest.len().to_string();
    let checksum = format!("{:08x}", manifest.checksum());
    log_event_with_fields(
        Event::ManifestLoaded,
        &[
            ("path", path_str),
            ("records", records.as_str()),
            ("checksum", checksum.as_str()),
        ],
    );

    if manifest.malformed_rows() > 0 {
        let malformed = manifest.malformed_rows().to_string();
        Logger::warn(
            Event::ManifestLoaded.as_str(),
            &[("path", path_str), ("malformed_rows", malformed.as_str())],
        );
    }

    Ok(manifest)
}

/// Checksum of the file currently on disk
pub fn file_checksum(path: &Path) -> ManifestResult<u32> {
    Ok(compute_checksum(&read_bytes(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_checksum_deterministic() {
        assert_eq!(compute_checksum(b"abc"), compute_checksum(b"abc"));
        assert_ne!(compute_checksum(b"abc"), compute_checksum(b"abd"));
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Name,Age,Class,Passenger or Crew,Role,Survivor\r\nSMITH/ Captain Edward John,62,Deck,Crew,Captain,F\r\n").unwrap();

        let manifest = load(file.path()).unwrap();
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.source(), Some(file.path()));
        assert_eq!(manifest.records()[0].role, "Captain");
        assert_eq!(manifest.checksum(), file_checksum(file.path()).unwrap());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, ManifestError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x4e, 0x61, 0xff, 0xfe]).unwrap();

        let err = load(file.path()).unwrap_err();
        assert_eq!(err.code(), "MANIFEST_INVALID_ENCODING");
    }
}
