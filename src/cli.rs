//! CLI argument parsing with clap

use crate::config::Config;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Media Month Sorter - files photos and videos into year/month folders
///
/// Every file directly inside the source directory is moved to
/// DESTINATION/YYYY/Month/, dated by its EXIF capture time or, failing
/// that, its file system modification time.
#[derive(Parser, Debug)]
#[command(name = "media-month-sorter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (TOML format)
    ///
    /// Settings from the config file are used as defaults.
    /// CLI arguments override config file settings.
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Source directory with media files (required, not searched recursively)
    ///
    /// Parsed as a raw OS string so an empty value is reported as a missing
    /// source instead of a parse error.
    #[arg(short, long)]
    pub source: Option<OsString>,

    /// Destination root for sorted files (default: same as --source)
    #[arg(short, long)]
    pub destination: Option<OsString>,

    /// Dry run mode - only show what would be moved
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Also write log output to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Output log file lines as JSON
    #[arg(long)]
    pub json_log: bool,

    /// Print a sample configuration file and exit
    #[arg(long)]
    pub print_sample_config: bool,
}

impl Cli {
    /// Merge CLI arguments with config from file
    /// CLI arguments take precedence over config file settings
    pub fn merge_with_config(&self, mut config: Config) -> Config {
        if let Some(ref source) = self.source {
            config.source = Some(PathBuf::from(source));
        }
        if let Some(ref destination) = self.destination {
            config.destination = Some(PathBuf::from(destination));
        }
        if self.dry_run {
            config.dry_run = true;
        }
        if self.verbose {
            config.verbose = true;
        }

        config
    }

    /// Convert CLI arguments to Config (when no config file is used)
    pub fn to_config(&self) -> Config {
        self.merge_with_config(Config::default())
    }
}
