use crate::photorg_core::error::{PhotorgError, Result};
use exif::{In, Tag, Value};
use std::fs;
use std::io::BufReader;
use std::path::Path;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Date format used in EXIF data.
const EXIF_DATE_FORMAT: &[time::format_description::FormatItem] =
    time::macros::format_description!("[year]:[month]:[day] [hour]:[minute]:[second]");

/// Hyphen-delimited variant written by some cameras and phone apps.
const EXIF_DATE_FORMAT_HYPHEN: &[time::format_description::FormatItem] =
    time::macros::format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Best-known moment a photo was taken. Timestamps are naive local time,
/// matching how cameras write `DateTimeOriginal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureTimestamp {
    Known(PrimitiveDateTime),
    Unknown,
}

/// Fallback policy applied when a file carries no usable capture date.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolvePolicy {
    /// When set, unresolved files use the filesystem modification time
    /// instead of being reported as `Unknown`.
    pub fallback_to_mtime: bool,
}

/// Resolve the capture timestamp for a file.
///
/// Never fails: unreadable or tagless files are logged and resolved through
/// the fallback policy.
pub fn resolve(path: &Path, policy: ResolvePolicy) -> CaptureTimestamp {
    match read_capture_date(path) {
        Ok(date_time) => CaptureTimestamp::Known(date_time),
        Err(e) => {
            log::debug!("No capture date for {}: {}", path.display(), e);
            if policy.fallback_to_mtime {
                match modification_time(path) {
                    Ok(date_time) => CaptureTimestamp::Known(date_time),
                    Err(e) => {
                        log::warn!(
                            "Could not read modification time for {}: {}",
                            path.display(),
                            e
                        );
                        CaptureTimestamp::Unknown
                    }
                }
            } else {
                CaptureTimestamp::Unknown
            }
        }
    }
}

/// Read `DateTimeOriginal` from the file's embedded EXIF data.
fn read_capture_date(path: &Path) -> Result<PrimitiveDateTime> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let exif = exif::Reader::new()
        .read_from_container(&mut reader)
        .map_err(|e| PhotorgError::MetadataExtraction {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let field = exif
        .get_field(Tag::DateTimeOriginal, In::PRIMARY)
        .ok_or_else(|| PhotorgError::MetadataExtraction {
            path: path.to_path_buf(),
            reason: "no DateTimeOriginal tag".to_string(),
        })?;

    // Take the raw ASCII bytes instead of display_value(), which wraps
    // the string in double quotes and would break parsing.
    let raw = match &field.value {
        Value::Ascii(vec) if !vec.is_empty() => String::from_utf8_lossy(&vec[0]).into_owned(),
        _ => field.display_value().to_string(),
    };

    parse_capture_date(&raw)
}

/// Parse an EXIF date string, accepting colon- and hyphen-delimited dates.
/// Trailing NUL padding and surrounding whitespace are stripped first.
fn parse_capture_date(raw: &str) -> Result<PrimitiveDateTime> {
    let trimmed = raw.trim_matches(|c: char| c == '\0' || c.is_whitespace());
    if trimmed.is_empty() {
        return Err(PhotorgError::InvalidDateFormat("empty date".to_string()));
    }

    PrimitiveDateTime::parse(trimmed, EXIF_DATE_FORMAT)
        .or_else(|_| PrimitiveDateTime::parse(trimmed, EXIF_DATE_FORMAT_HYPHEN))
        .map_err(|e| PhotorgError::InvalidDateFormat(e.to_string()))
}

/// Read the file's modification time as a naive local timestamp.
fn modification_time(path: &Path) -> Result<PrimitiveDateTime> {
    let modified = fs::metadata(path)?.modified()?;
    let local = OffsetDateTime::from(modified).to_offset(local_offset());
    Ok(PrimitiveDateTime::new(local.date(), local.time()))
}

/// Get the local timezone offset, falling back to UTC if unavailable.
fn local_offset() -> UtcOffset {
    OffsetDateTime::now_local()
        .map(|dt| dt.offset())
        .unwrap_or(UtcOffset::UTC)
}


#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn test_parse_colon_format() {
        let dt = parse_capture_date("2024:05:21 12:30:45").unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month() as u8, 5);
        assert_eq!(dt.day(), 21);
        assert_eq!(dt.hour(), 12);
        assert_eq!(dt.minute(), 30);
        assert_eq!(dt.second(), 45);
    }

    #[test]
    fn test_parse_hyphen_format() {
        let colon = parse_capture_date("2024:12:25 08:00:59").unwrap();
        let hyphen = parse_capture_date("2024-12-25 08:00:59").unwrap();
        assert_eq!(colon, hyphen);
    }

    #[test]
    fn test_parse_strips_nul_padding() {
        let dt = parse_capture_date("2021:05:04 10:00:00\0\0").unwrap();
        assert_eq!(dt.year(), 2021);
        assert_eq!(dt.hour(), 10);

        let dt = parse_capture_date("  2021:05:04 10:00:00 \0").unwrap();
        assert_eq!(dt.day(), 4);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_capture_date("").is_err());
        assert!(parse_capture_date("\0\0\0").is_err());
        assert!(parse_capture_date("not a date").is_err());
        assert!(parse_capture_date("2021:13:04 10:00:00").is_err());
        assert!(parse_capture_date("2021/05/04 10:00:00").is_err());
    }

    #[test]
    fn test_resolve_from_exif() {
        let temp = assert_fs::TempDir::new().unwrap();
        let photo = temp.child("photo.jpg");
        photo
            .write_binary(&fixture::tiff_with_datetime_original("2021:05:04 10:00:00"))
            .unwrap();

        let resolved = resolve(photo.path(), ResolvePolicy::default());
        match resolved {
            CaptureTimestamp::Known(dt) => {
                assert_eq!(dt.year(), 2021);
                assert_eq!(dt.month() as u8, 5);
                assert_eq!(dt.day(), 4);
                assert_eq!(dt.hour(), 10);
            }
            CaptureTimestamp::Unknown => panic!("expected a known timestamp"),
        }
    }

    #[test]
    fn test_resolve_unreadable_without_fallback() {
        let temp = assert_fs::TempDir::new().unwrap();
        let junk = temp.child("junk.jpg");
        junk.write_binary(b"not an image at all").unwrap();

        let resolved = resolve(junk.path(), ResolvePolicy::default());
        assert_eq!(resolved, CaptureTimestamp::Unknown);
    }

    #[test]
    fn test_resolve_unreadable_with_mtime_fallback() {
        let temp = assert_fs::TempDir::new().unwrap();
        let junk = temp.child("junk.jpg");
        junk.write_binary(b"not an image at all").unwrap();

        let policy = ResolvePolicy {
            fallback_to_mtime: true,
        };
        let expected = modification_time(junk.path()).unwrap();
        match resolve(junk.path(), policy) {
            CaptureTimestamp::Known(dt) => {
                // Compare to the second; subsecond precision is irrelevant
                assert_eq!(
                    dt.replace_nanosecond(0).unwrap(),
                    expected.replace_nanosecond(0).unwrap()
                );
            }
            CaptureTimestamp::Unknown => panic!("expected mtime fallback"),
        }
    }
}
