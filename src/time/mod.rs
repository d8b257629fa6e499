//! Time extraction module
//!
//! Resolves the timestamp a file is sorted by:
//! - EXIF capture date embedded in the file
//! - File system modification time as the fallback

pub mod exif;

use crate::error::{Error, Result};
use chrono::{DateTime, Local, NaiveDateTime};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::SystemTime;
use tracing::debug;

/// Source of the extracted timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSource {
    /// Extracted from EXIF metadata
    Exif,
    /// From file system modification time
    FileSystem,
}

/// Result of timestamp extraction
#[derive(Debug, Clone)]
pub struct ExtractedTime {
    /// The extracted timestamp, in local time
    pub timestamp: NaiveDateTime,
    /// Source of the timestamp
    pub source: TimeSource,
}

/// Resolve the timestamp of a file
///
/// The file is opened once; EXIF decoding and the metadata fallback both use
/// that handle, which is closed before this function returns. Only failing
/// to open the file or to read its modification time is an error.
pub fn resolve_time(path: &Path) -> Result<ExtractedTime> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    match exif::extract_exif_time(&mut reader, path) {
        Ok(timestamp) => {
            debug!(?path, "Extracted time from EXIF");
            return Ok(ExtractedTime {
                timestamp,
                source: TimeSource::Exif,
            });
        }
        Err(e) => debug!(?path, reason = %e, "No EXIF time found, using file system time"),
    }

    let modified = reader
        .get_ref()
        .metadata()
        .and_then(|metadata| metadata.modified())
        .map_err(|source| Error::Stat {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(ExtractedTime {
        timestamp: local_naive(modified),
        source: TimeSource::FileSystem,
    })
}

/// Convert a system time into a naive local date-time
fn local_naive(time: SystemTime) -> NaiveDateTime {
    DateTime::<Local>::from(time).naive_local()
}
