//! EXIF capture-date extraction

use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime};
use exif::{Field, In, Reader, Tag, Value};
use std::io::{BufRead, Seek};
use std::path::Path;
use tracing::trace;

/// EXIF tags to try for date extraction, in priority order
const DATE_TAGS: &[Tag] = &[
    Tag::DateTimeOriginal,  // When the original image was taken
    Tag::DateTimeDigitized, // When the image was digitized
    Tag::DateTime,          // File modification date/time
];

/// Extract the capture time from an already opened media file
///
/// The reader is consumed from its current position; `path` is only used for
/// diagnostics. Supported containers are whatever `kamadak-exif` detects
/// (JPEG, TIFF, HEIF, PNG, WebP).
pub fn extract_exif_time<R: BufRead + Seek>(reader: &mut R, path: &Path) -> Result<NaiveDateTime> {
    let exif = Reader::new()
        .read_from_container(reader)
        .map_err(|e| Error::ExifRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    for tag in DATE_TAGS {
        if let Some(field) = exif.get_field(*tag, In::PRIMARY)
            && let Some(datetime) = field_datetime(field)
        {
            trace!(?path, ?tag, %datetime, "Found EXIF date");
            return Ok(datetime);
        }
    }

    Err(Error::ExifRead {
        path: path.to_path_buf(),
        message: "No valid date tag found in EXIF data".to_string(),
    })
}

fn field_datetime(field: &Field) -> Option<NaiveDateTime> {
    if let Value::Ascii(ref values) = field.value
        && let Some(raw) = values.first()
        && let Ok(dt) = exif::DateTime::from_ascii(raw)
    {
        return NaiveDate::from_ymd_opt(dt.year.into(), dt.month.into(), dt.day.into())?
            .and_hms_opt(dt.hour.into(), dt.minute.into(), dt.second.into());
    }

    parse_exif_datetime(&field.display_value().to_string())
}

/// Parse EXIF datetime string format: "YYYY:MM:DD HH:MM:SS"
fn parse_exif_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim().trim_matches('"');

    let formats = [
        "%Y:%m:%d %H:%M:%S",
        "%Y:%m:%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
    ];

    formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
}
