//! Progress reporting for uploads
//!
//! Wraps an optional `indicatif` progress bar counting uploaded points so
//! the upload driver can report progress whether or not a terminal is
//! attached. The import command stacks one bar per quantity below its file
//! bar in a shared [`MultiProgress`].

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use tracing::debug;

use super::stats::UploadStats;

/// Progress reporter for uploads
#[derive(Debug, Clone, Default)]
pub struct UploadProgress {
    progress_bar: Option<ProgressBar>,
}

impl UploadProgress {
    /// Reporter that shows nothing
    pub fn hidden() -> Self {
        Self { progress_bar: None }
    }

    /// Reporter with a bar over `total_points` drawn in `multi`
    pub fn new(multi: &MultiProgress, total_points: usize) -> Self {
        let pb = multi.add(ProgressBar::new(total_points as u64));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} points ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▉▊▋▌▍▎▏  "),
        );
        pb.set_message("Uploading");

        debug!("Upload progress bar initialized for {} points", total_points);
        Self {
            progress_bar: Some(pb),
        }
    }

    /// Reporter drawing into an existing bar
    pub fn with_bar(progress_bar: ProgressBar) -> Self {
        Self {
            progress_bar: Some(progress_bar),
        }
    }

    pub fn increment(&self, points: usize) {
        if let Some(ref pb) = self.progress_bar {
            pb.inc(points as u64);
        }
    }

    pub fn set_message(&self, message: impl Into<String>) {
        if let Some(ref pb) = self.progress_bar {
            pb.set_message(message.into());
        }
    }

    /// Remove the bar once the quantity is fully uploaded
    pub fn finish(&self, stats: &UploadStats) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_and_clear();
            debug!(
                "Upload completed: {} layers, {} points, {} batches",
                stats.layers, stats.points, stats.batches
            );
        }
    }

    /// Leave the bar on screen with the failure message
    pub fn finish_with_error(&self, error_message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.abandon_with_message(format!("Failed: {}", error_message));
        }
    }
}
