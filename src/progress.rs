//! Progress bar display for release builds
//!
//! Draws to stderr so stdout stays machine-readable. indicatif hides the
//! bar automatically when stderr is not a terminal.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress display for a build run
pub struct ProgressDisplay {
    bundle_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total bundle count
    pub fn new(total_bundles: u64) -> Self {
        let bundle_pb =
            ProgressBar::with_draw_target(Some(total_bundles), ProgressDrawTarget::stderr());
        if let Ok(style) =
            ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            bundle_pb.set_style(style.progress_chars("#>-"));
        }

        Self { bundle_pb }
    }

    /// Update to show current bundle being packaged
    pub fn update_bundle(&self, bundle_name: &str, version: &str) {
        self.bundle_pb.set_message(format!("{bundle_name} v{version}"));
    }

    /// Increment bundle progress
    pub fn inc_bundle(&self) {
        self.bundle_pb.inc(1);
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.bundle_pb.finish_and_clear();
    }

    /// Abandon on error, leaving the bar where it stopped
    pub fn abandon(&self) {
        self.bundle_pb.abandon();
    }
}
