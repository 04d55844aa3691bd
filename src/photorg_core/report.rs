use crate::photorg_core::error::PhotorgError;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Progress sink called by the pipeline after each file, decoupling the
/// core from any specific terminal UI.
pub trait Reporter {
    /// Called once after the upfront scan, with the total file count.
    fn begin(&self, total: u64);

    fn on_file_start(&self, source: &Path);

    fn on_file_done(&self, source: &Path, destination: &Path);

    fn on_error(&self, source: &Path, error: &PhotorgError);

    /// Called once after the last file.
    fn finish(&self);
}

/// Terminal reporter backed by an indicatif progress bar.
pub struct ConsoleReporter {
    bar: ProgressBar,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .expect("valid progress template");
        ConsoleReporter {
            bar: ProgressBar::hidden().with_style(style),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn begin(&self, total: u64) {
        self.bar.set_length(total);
        self.bar
            .set_draw_target(indicatif::ProgressDrawTarget::stderr());
        self.bar.set_message("Copying photos");
    }

    fn on_file_start(&self, source: &Path) {
        if let Some(name) = source.file_name() {
            self.bar.set_message(name.to_string_lossy().into_owned());
        }
    }

    fn on_file_done(&self, source: &Path, destination: &Path) {
        log::debug!("Copied {} -> {}", source.display(), destination.display());
        self.bar.inc(1);
    }

    fn on_error(&self, source: &Path, error: &PhotorgError) {
        self.bar
            .println(format!("Failed to process {}: {}", source.display(), error));
        self.bar.inc(1);
    }

    fn finish(&self) {
        self.bar.finish_with_message("Copy complete");
    }
}

/// Reporter that discards all events. Used by dry runs and tests.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn begin(&self, _total: u64) {}
    fn on_file_start(&self, _source: &Path) {}
    fn on_file_done(&self, _source: &Path, _destination: &Path) {}
    fn on_error(&self, _source: &Path, _error: &PhotorgError) {}
    fn finish(&self) {}
}
