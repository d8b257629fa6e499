//! Media Month Sorter - files media into year/month folders
//!
//! This library sorts the files of a single directory by date:
//! - EXIF capture date for images, file system modification time otherwise
//! - Destination folders `YYYY/Month` with fixed German month names
//! - Dry run mode that only prints the planned moves

pub mod cli;
pub mod config;
pub mod error;
pub mod i18n;
pub mod month;
pub mod organize;
pub mod output;
pub mod time;

pub use cli::Cli;
pub use config::{Config, ConfigError};
pub use error::{Error, Result};
pub use i18n::init_locale;
pub use organize::{FileResult, Organizer, ProcessingStatus};
