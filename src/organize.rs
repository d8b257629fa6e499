//! Year/month organizer
//!
//! Handles the whole sorting pass:
//! - Listing the files directly inside the source directory
//! - Resolving a timestamp per file
//! - Moving each file to `destination/YYYY/Month/`
//!
//! Files are handled one after another. A failure only affects the file it
//! happened on; it is reported and the pass continues.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::i18n::Strings;
use crate::month::month_name_of;
use crate::output;
use crate::time::{ExtractedTime, resolve_time};
use chrono::{Datelike, NaiveDateTime};
use filetime::FileTime;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{Level, debug, error, info, span, warn};
use walkdir::WalkDir;

/// Result of processing a single file
#[derive(Debug, Clone)]
pub struct FileResult {
    /// Source file path
    pub source: PathBuf,
    /// Destination file path (if it could be computed)
    pub destination: Option<PathBuf>,
    /// Extracted time information
    pub time_info: Option<ExtractedTime>,
    /// Processing status
    pub status: ProcessingStatus,
    /// Error message (if failed)
    pub error: Option<String>,
}

/// Status of file processing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStatus {
    /// File was moved to its destination
    Moved,
    /// Dry run - would have been moved
    DryRun,
    /// Processing failed, the file was left in place
    Failed,
}

/// Sorts the files of one directory into year/month folders
#[derive(Debug, Clone)]
pub struct Organizer {
    source: PathBuf,
    destination: PathBuf,
    dry_run: bool,
}

impl Organizer {
    /// Create an organizer from a configuration
    ///
    /// Fails only when no source directory is configured (an empty path
    /// counts as none).
    pub fn new(config: &Config) -> Result<Self> {
        let source = config
            .source_dir()
            .map(Path::to_path_buf)
            .ok_or(Error::MissingSource)?;
        let destination = config
            .destination_dir()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| source.clone());

        Ok(Self {
            source,
            destination,
            dry_run: config.dry_run,
        })
    }

    pub fn source_dir(&self) -> &Path {
        &self.source
    }

    pub fn destination_dir(&self) -> &Path {
        &self.destination
    }

    /// Run the sorting pass
    ///
    /// Returns one result per regular file found directly in the source
    /// directory, in listing order.
    pub fn run(&self) -> Vec<FileResult> {
        let _span = span!(
            Level::INFO,
            "organizer_run",
            source = %self.source.display(),
            destination = %self.destination.display(),
            dry_run = self.dry_run
        )
        .entered();

        info!("Scanning source directory...");
        let mut results = Vec::new();

        for entry in WalkDir::new(&self.source)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let e = Error::from(e);
                    warn!(error = %e, "Failed to read directory entry");
                    report_failure(&e);
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || path.parent() != Some(self.source.as_path()) {
                debug!(?path, "Skipping entry that is not a top-level file");
                continue;
            }

            results.push(self.process_file(path));
        }

        info!(files = results.len(), "Sorting pass complete");
        results
    }

    /// Process a single file
    fn process_file(&self, path: &Path) -> FileResult {
        let _file_span = span!(Level::DEBUG, "process_file", ?path).entered();

        let Some(file_name) = path.file_name() else {
            return failed(path, None, None, Error::InvalidFileName { path: path.to_path_buf() });
        };

        let time_info = match resolve_time(path) {
            Ok(info) => info,
            Err(e) => return failed(path, None, None, e),
        };

        let target_dir = target_directory(&self.destination, &time_info.timestamp);
        let dest_path = target_dir.join(file_name);
        let display_name = file_name.to_string_lossy();

        if self.dry_run {
            info!(
                source = ?path,
                destination = ?dest_path,
                time_source = ?time_info.source,
                "Would move file"
            );
            output::print_dry_run(&display_name, &dest_path);
            if dest_path.exists() {
                warn!(?path, destination = ?dest_path, "Destination already exists, file would not be moved");
                output::print_warning(Strings::destination_exists(), &dest_path.display().to_string());
            }
            return FileResult {
                source: path.to_path_buf(),
                destination: Some(dest_path),
                time_info: Some(time_info),
                status: ProcessingStatus::DryRun,
                error: None,
            };
        }

        if let Err(source) = fs::create_dir_all(&target_dir) {
            let e = Error::CreateDir { path: target_dir, source };
            return failed(path, Some(dest_path), Some(time_info), e);
        }

        if let Err(e) = move_file(path, &dest_path) {
            return failed(path, Some(dest_path), Some(time_info), e);
        }

        let year = time_info.timestamp.year();
        let month = month_name_of(&time_info.timestamp);
        info!(
            source = ?path,
            destination = ?dest_path,
            time_source = ?time_info.source,
            timestamp = %time_info.timestamp,
            "Moved file"
        );
        output::print_moved(&display_name, year, month);

        FileResult {
            source: path.to_path_buf(),
            destination: Some(dest_path),
            time_info: Some(time_info),
            status: ProcessingStatus::Moved,
            error: None,
        }
    }
}

/// `destination/YYYY/Month` for a timestamp
pub fn target_directory(destination: &Path, timestamp: &NaiveDateTime) -> PathBuf {
    destination
        .join(timestamp.year().to_string())
        .join(month_name_of(timestamp))
}

/// Move a file, refusing to replace an existing destination
///
/// Uses a rename; when source and destination are on different file systems
/// the file is copied (keeping its modification time) and the source removed.
fn move_file(source: &Path, dest: &Path) -> Result<()> {
    let move_error = |e: std::io::Error| Error::Move {
        from: source.to_path_buf(),
        to: dest.to_path_buf(),
        source: e,
    };

    // symlink_metadata so a dangling link at the destination also counts
    match fs::symlink_metadata(dest) {
        Ok(_) => {
            return Err(Error::DestinationExists {
                path: dest.to_path_buf(),
            });
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(move_error(e)),
    }

    match fs::rename(source, dest) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::CrossesDevices => {
            debug!(?source, ?dest, "Rename crosses file systems, copying instead");
            copy_then_remove(source, dest).map_err(move_error)
        }
        Err(e) => Err(move_error(e)),
    }
}

/// Copy into a newly created `dest`, then remove `source`
///
/// `dest` is created exclusively, so a file that appeared after the
/// existence check is never replaced. A partial copy is removed again.
fn copy_then_remove(source: &Path, dest: &Path) -> std::io::Result<()> {
    let metadata = fs::metadata(source)?;
    let mut reader = BufReader::new(File::open(source)?);
    let mut writer = BufWriter::new(
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(dest)?,
    );

    if let Err(e) = io::copy(&mut reader, &mut writer).and_then(|_| writer.flush()) {
        drop(writer);
        if let Err(cleanup) = fs::remove_file(dest) {
            warn!(?dest, error = %cleanup, "Failed to remove partial copy");
        }
        return Err(e);
    }
    drop(writer);

    let mtime = FileTime::from_last_modification_time(&metadata);
    if let Err(e) = filetime::set_file_mtime(dest, mtime) {
        warn!(?dest, error = %e, "Failed to preserve modification time");
    }

    fs::remove_file(source)
}

/// Log and print a failure, then build its result
fn failed(
    path: &Path,
    destination: Option<PathBuf>,
    time_info: Option<ExtractedTime>,
    e: Error,
) -> FileResult {
    error!(?path, error = %e, "Failed to process file");
    report_failure(&e);

    FileResult {
        source: path.to_path_buf(),
        destination,
        time_info,
        status: ProcessingStatus::Failed,
        error: Some(e.to_string()),
    }
}

fn report_failure(e: &Error) {
    let (label, detail) = describe_failure(e);
    output::print_failure(label, &detail);
}

/// Console label and detail for an error
fn describe_failure(e: &Error) -> (&'static str, String) {
    match e {
        Error::Open { path, .. } => (Strings::open_failed(), path.display().to_string()),
        Error::Stat { path, .. } => (Strings::stat_failed(), path.display().to_string()),
        Error::CreateDir { path, .. } => (Strings::create_dir_failed(), path.display().to_string()),
        Error::Move { .. } => (Strings::move_failed(), e.to_string()),
        Error::DestinationExists { path } => (Strings::destination_exists(), path.display().to_string()),
        Error::InvalidFileName { path } => (Strings::invalid_file_name(), path.display().to_string()),
        other => (Strings::read_error(), other.to_string()),
    }
}
