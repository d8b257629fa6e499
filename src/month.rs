//! Fixed month-name table used for destination folders
//!
//! Folder names are always the German (Austrian) month names, independent of
//! the console language.

use chrono::Datelike;

/// Month folder names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "Jänner",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Folder name for the month of a date
pub fn month_name_of<D: Datelike>(date: &D) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}
