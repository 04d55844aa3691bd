use clap::Parser;
use simplelog::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Organize photos into year folders by capture date")]
pub struct Cli {
    /// Directory containing photos to organize (traversed recursively)
    #[arg(required = true)]
    pub source_dir: PathBuf,

    /// Destination directory (created if it doesn't exist)
    #[arg(required = true)]
    pub dest_dir: PathBuf,

    /// Use the file modification time when no EXIF capture date is found,
    /// instead of routing the photo to the "unknown" folder
    #[arg(long)]
    pub mtime_fallback: bool,

    /// Show what would be copied without making changes
    #[arg(long)]
    pub dry_run: bool,

    /// Enable file logging to photorg.log
    #[arg(long = "log")]
    pub log: bool,

    /// Log level for file logging (debug, info, warn, error)
    #[arg(long, default_value_t = LevelFilter::Debug)]
    pub log_level: LevelFilter,
}
