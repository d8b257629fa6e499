//! Internationalization (i18n) module
//!
//! Picks the console message language from the system locale.
//! Supports German and English.
//! Note: Log messages and month folder names do not change with the language.

use std::sync::OnceLock;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    German,
    English,
}

/// Global language instance
static LANGUAGE: OnceLock<Language> = OnceLock::new();

/// Detect the system language once, before any console output
pub fn init_locale() -> Language {
    get_language()
}

/// Initialize and get the current language based on system locale
pub fn get_language() -> Language {
    *LANGUAGE.get_or_init(detect_language)
}

/// Detect system language, preferring the `LANG`-style environment variables
fn detect_language() -> Language {
    let locale = std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .or_else(|_| std::env::var("LANG"))
        .ok()
        .filter(|l| !l.is_empty())
        .or_else(sys_locale::get_locale)
        .unwrap_or_default();

    language_for_locale(&locale)
}

fn language_for_locale(locale: &str) -> Language {
    if locale.to_lowercase().starts_with("de") {
        Language::German
    } else {
        Language::English
    }
}

/// Localized strings for the console output
pub struct Strings;

impl Strings {
    pub fn missing_source() -> &'static str {
        match get_language() {
            Language::German => "Fehler: --source muss angegeben werden",
            Language::English => "Error: --source must be specified",
        }
    }

    pub fn read_error() -> &'static str {
        match get_language() {
            Language::German => "Fehler beim Lesen:",
            Language::English => "Error while reading:",
        }
    }

    pub fn open_failed() -> &'static str {
        match get_language() {
            Language::German => "Kann Datei nicht öffnen:",
            Language::English => "Cannot open file:",
        }
    }

    pub fn stat_failed() -> &'static str {
        match get_language() {
            Language::German => "Kann Stat nicht lesen:",
            Language::English => "Cannot read file metadata:",
        }
    }

    pub fn create_dir_failed() -> &'static str {
        match get_language() {
            Language::German => "Fehler beim Erstellen von:",
            Language::English => "Failed to create:",
        }
    }

    pub fn move_failed() -> &'static str {
        match get_language() {
            Language::German => "Fehler beim Verschieben:",
            Language::English => "Failed to move:",
        }
    }

    pub fn destination_exists() -> &'static str {
        match get_language() {
            Language::German => "Ziel existiert bereits, nicht verschoben:",
            Language::English => "Destination already exists, not moved:",
        }
    }

    pub fn invalid_file_name() -> &'static str {
        match get_language() {
            Language::German => "Ungültiger Dateiname:",
            Language::English => "Invalid file name:",
        }
    }

    pub fn moved() -> &'static str {
        match get_language() {
            Language::German => "Verschoben:",
            Language::English => "Moved:",
        }
    }

    /// Same marker in every language
    pub fn dry_run_marker() -> &'static str {
        "[Dry Run]"
    }
}
