use crate::photorg_core::error::Result;
use crate::photorg_core::resolve::CaptureTimestamp;
use std::fs;
use std::path::{Path, PathBuf};

/// Date format embedded in destination filenames.
const FILENAME_DATE_FORMAT: &[time::format_description::FormatItem] =
    time::macros::format_description!("[year][month][day]_[hour][minute][second]");

/// Bucket directory for photos with no resolvable capture date.
const UNKNOWN_BUCKET: &str = "unknown";

/// Compute a unique destination path for a photo, creating the bucket
/// directory if needed. Existing files are never clobbered; colliding
/// names get a `_{counter}` suffix before the extension.
pub fn plan(
    dest_root: &Path,
    timestamp: &CaptureTimestamp,
    original_filename: &str,
) -> Result<PathBuf> {
    let bucket_dir = dest_root.join(bucket_name(timestamp));
    fs::create_dir_all(&bucket_dir)?;

    let candidate = candidate_name(timestamp, original_filename)?;
    Ok(unique_destination(&bucket_dir, &candidate))
}

/// Bucket segment: the capture year, or "unknown".
pub fn bucket_name(timestamp: &CaptureTimestamp) -> String {
    match timestamp {
        CaptureTimestamp::Known(dt) => dt.year().to_string(),
        CaptureTimestamp::Unknown => UNKNOWN_BUCKET.to_string(),
    }
}

/// Candidate filename before collision resolution: timestamped for known
/// dates, the original name unchanged otherwise.
pub fn candidate_name(timestamp: &CaptureTimestamp, original_filename: &str) -> Result<String> {
    match timestamp {
        CaptureTimestamp::Known(dt) => Ok(format!(
            "{}_{}",
            dt.format(FILENAME_DATE_FORMAT)?,
            original_filename
        )),
        CaptureTimestamp::Unknown => Ok(original_filename.to_string()),
    }
}

/// Probe the bucket for a free path, appending `_1`, `_2`, ... to the stem
/// until the candidate no longer exists. Split on the last `.` only; names
/// without an extension get the bare suffix.
fn unique_destination(bucket_dir: &Path, candidate: &str) -> PathBuf {
    let mut dest = bucket_dir.join(candidate);
    if !dest.exists() {
        return dest;
    }

    let (stem, ext) = match candidate.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (candidate, None),
    };

    let mut counter = 1u32;
    loop {
        let name = match ext {
            Some(ext) => format!("{}_{}.{}", stem, counter, ext),
            None => format!("{}_{}", stem, counter),
        };
        dest = bucket_dir.join(name);
        if !dest.exists() {
            return dest;
        }
        counter += 1;
    }
}
