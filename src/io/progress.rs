//! Progress display while restyling the overlays of a map

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Overlays: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over the overlays of one map
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bar shown yet
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Create a manager whose bar never draws, for tests and piped output
    pub fn hidden() -> Self {
        Self {
            bar: Some(ProgressBar::hidden()),
        }
    }

    /// Show a bar for `overlay_count` overlays
    pub fn initialize(&mut self, overlay_count: usize) {
        let bar = match self.bar.take() {
            Some(existing) if existing.is_hidden() => existing,
            _ => ProgressBar::new(0),
        };
        bar.set_length(overlay_count as u64);
        bar.set_position(0);
        bar.set_style(PROGRESS_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Record one processed overlay
    pub fn advance(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Number of overlays processed so far
    pub fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Complete the bar
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message("done");
        }
    }
}
