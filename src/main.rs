use anyhow::Result;
use clap::Parser;
use photorg::photorg_core::{
    Cli, ConsoleReporter, NullReporter, OrganizeConfig, ResolvePolicy, organize,
};
use simplelog::{CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, WriteLogger};
use std::fs::File;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize loggers
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LevelFilter::Warn,
        Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )];

    if cli.log {
        loggers.push(WriteLogger::new(
            cli.log_level,
            Config::default(),
            File::create("photorg.log")?,
        ));
    }

    CombinedLogger::init(loggers)?;

    let config = OrganizeConfig {
        policy: ResolvePolicy {
            fallback_to_mtime: cli.mtime_fallback,
        },
        dry_run: cli.dry_run,
    };

    println!(
        "Processing photos from '{}' to '{}'...",
        cli.source_dir.display(),
        cli.dest_dir.display()
    );

    let stats = if cli.dry_run {
        organize(&cli.source_dir, &cli.dest_dir, &config, &NullReporter)?
    } else {
        organize(
            &cli.source_dir,
            &cli.dest_dir,
            &config,
            &ConsoleReporter::new(),
        )?
    };

    if cli.dry_run {
        println!("\n[DRY RUN] Would copy {} photos", stats.files_copied);
        if stats.routed_unknown > 0 {
            println!("  {} without a capture date", stats.routed_unknown);
        }
    } else {
        println!("\nDone!");
        println!(
            "  {} photos copied ({:.1} MB)",
            stats.files_copied,
            stats.bytes_copied as f64 / 1_048_576.0
        );
        if stats.routed_unknown > 0 {
            println!(
                "  {} routed to unknown/ (no capture date)",
                stats.routed_unknown
            );
        }
        if stats.errors > 0 {
            println!("  {} files failed, see log for details", stats.errors);
        }
    }

    Ok(())
}
