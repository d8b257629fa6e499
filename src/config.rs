//! Configuration types for the media month sorter

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for a sorting run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory whose direct children are sorted
    pub source: Option<PathBuf>,

    /// Root of the year/month folders (defaults to the source directory)
    pub destination: Option<PathBuf>,

    /// Dry run mode - only print what would be moved
    pub dry_run: bool,

    /// Verbose output
    pub verbose: bool,
}

impl Config {
    /// Source directory, treating an empty path as not given
    pub fn source_dir(&self) -> Option<&Path> {
        self.source.as_deref().filter(|s| !s.as_os_str().is_empty())
    }

    /// Destination root, falling back to the source directory
    pub fn destination_dir(&self) -> Option<&Path> {
        self.destination
            .as_deref()
            .filter(|d| !d.as_os_str().is_empty())
            .or(self.source_dir())
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Generate a sample configuration file content
    pub fn sample_config() -> String {
        r#"# Media Month Sorter Configuration File
# This file uses TOML format (https://toml.io)

# Directory to sort (only files directly inside it are moved)
source = "D:/Import"

# Root for the year/month folders, e.g. D:/Sorted/2021/Juli/
# Defaults to the source directory when omitted
destination = "D:/Sorted"

# Dry run mode - show what would be moved without moving anything
dry_run = false

# Verbose output - show detailed processing information
verbose = false
"#
        .to_string()
    }
}

/// Errors that can occur when loading configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read configuration file
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse configuration file
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError { path, source } => {
                write!(f, "Failed to read config file '{}': {}", path.display(), source)
            }
            ConfigError::ParseError { path, source } => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ReadError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_destination_defaults_to_source() {
        let config = Config {
            source: Some(PathBuf::from("/in")),
            ..Config::default()
        };
        assert_eq!(config.destination_dir(), Some(Path::new("/in")));

        let config = Config {
            source: Some(PathBuf::from("/in")),
            destination: Some(PathBuf::new()),
            ..Config::default()
        };
        assert_eq!(config.destination_dir(), Some(Path::new("/in")));

        let config = Config {
            source: Some(PathBuf::from("/in")),
            destination: Some(PathBuf::from("/out")),
            ..Config::default()
        };
        assert_eq!(config.destination_dir(), Some(Path::new("/out")));
    }

    #[test]
    fn test_empty_source_counts_as_missing() {
        let config = Config {
            source: Some(PathBuf::new()),
            ..Config::default()
        };
        assert_eq!(config.source_dir(), None);
        assert_eq!(config.destination_dir(), None);
    }

    #[test]
    fn test_sample_config_parses() {
        let config: Config = toml::from_str(&Config::sample_config()).unwrap();
        assert_eq!(config.source, Some(PathBuf::from("D:/Import")));
        assert_eq!(config.destination, Some(PathBuf::from("D:/Sorted")));
        assert!(!config.dry_run);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sorter.toml");
        fs::write(&path, "source = \"/in\"\ndry_run = true\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.source, Some(PathBuf::from("/in")));
        assert_eq!(config.destination, None);
        assert!(config.dry_run);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();
        let missing = Config::load_from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::ReadError { .. }));

        let path = dir.path().join("broken.toml");
        fs::write(&path, "source = [").unwrap();
        let broken = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(broken, ConfigError::ParseError { .. }));
        assert!(broken.to_string().contains("broken.toml"));
    }
}
