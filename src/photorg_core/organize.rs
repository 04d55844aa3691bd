use crate::photorg_core::error::{PhotorgError, Result};
use crate::photorg_core::media::is_image_file;
use crate::photorg_core::plan::{bucket_name, candidate_name, plan};
use crate::photorg_core::report::Reporter;
use crate::photorg_core::resolve::{CaptureTimestamp, ResolvePolicy, resolve};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Settings for an organize run.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrganizeConfig {
    pub policy: ResolvePolicy,
    /// Report what would be copied without touching the destination tree.
    pub dry_run: bool,
}

/// Statistics from an organize run.
#[derive(Debug, Default)]
pub struct OrganizeStats {
    pub files_copied: usize,
    pub bytes_copied: u64,
    pub routed_unknown: usize,
    pub errors: usize,
}

impl std::fmt::Display for OrganizeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} photos copied ({} bytes), {} without a capture date, {} errors",
            self.files_copied, self.bytes_copied, self.routed_unknown, self.errors
        )
    }
}

/// Result of processing one source file.
struct FileOutcome {
    destination: PathBuf,
    bytes: u64,
    unknown: bool,
}

/// Organize all images under `source_dir` into year buckets under
/// `dest_dir`.
///
/// Files are processed sequentially; a failure on one file is logged and
/// counted, never fatal. Only pre-flight validation errors abort the run.
pub fn organize(
    source_dir: &Path,
    dest_dir: &Path,
    config: &OrganizeConfig,
    reporter: &dyn Reporter,
) -> Result<OrganizeStats> {
    if !source_dir.exists() {
        return Err(PhotorgError::PathNotFound(source_dir.to_path_buf()));
    }
    if !source_dir.is_dir() {
        return Err(PhotorgError::NotADirectory(source_dir.to_path_buf()));
    }
    if !config.dry_run {
        fs::create_dir_all(dest_dir)?;
    }

    log::info!("Scanning {}", source_dir.display());

    // Full scan up front so the reporter gets a total
    let files: Vec<PathBuf> = WalkDir::new(source_dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                log::warn!("Directory walk error: {}", e);
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_image_file(p))
        .collect();

    log::info!("Found {} image files", files.len());
    reporter.begin(files.len() as u64);

    let mut stats = OrganizeStats::default();
    for path in &files {
        reporter.on_file_start(path);
        match process_file(path, dest_dir, config) {
            Ok(outcome) => {
                stats.files_copied += 1;
                stats.bytes_copied += outcome.bytes;
                if outcome.unknown {
                    stats.routed_unknown += 1;
                }
                reporter.on_file_done(path, &outcome.destination);
            }
            Err(e) => {
                log::warn!("Failed to process {}: {}", path.display(), e);
                stats.errors += 1;
                reporter.on_error(path, &e);
            }
        }
    }

    reporter.finish();
    Ok(stats)
}

/// Resolve, plan and copy a single file.
fn process_file(path: &Path, dest_root: &Path, config: &OrganizeConfig) -> Result<FileOutcome> {
    let filename = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let timestamp = resolve(path, config.policy);
    let unknown = matches!(timestamp, CaptureTimestamp::Unknown);

    if config.dry_run {
        // No directory creation and no collision probing in a dry run;
        // nothing gets written that a later candidate could collide with.
        let destination = dest_root
            .join(bucket_name(&timestamp))
            .join(candidate_name(&timestamp, &filename)?);
        println!("Would copy {} -> {}", path.display(), destination.display());
        return Ok(FileOutcome {
            destination,
            bytes: 0,
            unknown,
        });
    }

    let destination = plan(dest_root, &timestamp, &filename)?;
    let bytes = fs::copy(path, &destination)?;

    Ok(FileOutcome {
        destination,
        bytes,
        unknown,
    })
}
