//! Progress bar display management and coordination.
//!
//! [`ProgressDisplay`] hands out a scan progress callback that creates one bar
//! per scan root on first use and finishes it when the last subdirectory of
//! that root is done.

use crate::progress::ProgressBarOpts;
use crate::scan::{ProgressCallback, ScanProgress};

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Progress display manager that coordinates one bar per scan root.
#[derive(Debug, Clone)]
pub struct ProgressDisplay {
    /// The multi-progress instance coordinating the bars.
    multi: Arc<MultiProgress>,
    /// Bars keyed by scan root.
    bars: Arc<Mutex<HashMap<PathBuf, ProgressBar>>>,
    /// Style options for the bars.
    opts: ProgressBarOpts,
}

impl ProgressDisplay {
    /// Create a new progress display manager.
    pub fn new(opts: ProgressBarOpts) -> Self {
        let multi = match opts.is_enabled() {
            true => MultiProgress::new(),
            false => MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
        };

        Self {
            multi: Arc::new(multi),
            bars: Arc::new(Mutex::new(HashMap::new())),
            opts,
        }
    }

    /// Apply one progress event.
    pub fn update(&self, progress: &ScanProgress) {
        let mut bars = self.bars.lock().unwrap_or_else(|e| e.into_inner());
        let bar = bars.entry(progress.root.clone()).or_insert_with(|| {
            let bar = self
                .multi
                .add(self.opts.to_progress_bar(progress.total as u64));
            bar.set_prefix(progress.root.display().to_string());
            bar
        });

        bar.set_position(progress.completed as u64);
        bar.set_message(format!("batch {}/{}", progress.batch + 1, progress.batches));

        if progress.completed >= progress.total {
            if self.opts.clear {
                bar.finish_and_clear();
            } else {
                bar.finish();
            }
        }
    }

    /// Position of the bar for `root`, if one was created.
    pub fn position(&self, root: &std::path::Path) -> Option<u64> {
        let bars = self.bars.lock().unwrap_or_else(|e| e.into_inner());
        bars.get(root).map(|bar| bar.position())
    }

    /// Build a scan progress callback feeding this display.
    pub fn callback(&self) -> ProgressCallback {
        let display = self.clone();
        Box::new(move |progress| display.update(progress))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn event(completed: usize) -> ScanProgress {
        ScanProgress {
            root: PathBuf::from("/data/links"),
            completed,
            total: 3,
            batch: completed.saturating_sub(1),
            batches: 3,
        }
    }

    #[test]
    fn test_callback_advances_bar_per_root() {
        let display = ProgressDisplay::new(ProgressBarOpts::hidden());
        let callback = display.callback();

        assert_eq!(display.position(Path::new("/data/links")), None);
        callback(&event(1));
        callback(&event(2));
        assert_eq!(display.position(Path::new("/data/links")), Some(2));
        callback(&event(3));
        assert_eq!(display.position(Path::new("/data/links")), Some(3));
        assert_eq!(display.position(Path::new("/elsewhere")), None);
    }
}
