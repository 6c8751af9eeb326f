//! Batched directory scanning.
//!
//! Non-recursive targets only look at the root's direct children. Recursive
//! targets list the root's immediate subdirectories, walk each one fully in
//! batches of `ceil(n / 10)`, and then pick up the files sitting directly in
//! the root. Unreadable entries are logged and skipped.

use super::{FileJob, ScanTarget};
use crate::extract::FileKind;

use std::fs;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Callback invoked once per subdirectory finished during a recursive scan.
pub type ProgressCallback = Box<dyn Fn(&ScanProgress) + Send + Sync>;

/// Progress of a recursive scan over one root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanProgress {
    /// Root being scanned.
    pub root: PathBuf,
    /// Subdirectories fully walked so far.
    pub completed: usize,
    /// Immediate subdirectories of the root.
    pub total: usize,
    /// Zero-based index of the batch the last subdirectory belonged to.
    pub batch: usize,
    /// Number of batches for this root.
    pub batches: usize,
}

/// Destination for discovered files.
pub trait JobSink {
    /// Hands over one job. Returns `false` once the sink can no longer accept
    /// jobs, which stops the scan.
    fn emit(&mut self, job: FileJob) -> bool;
}

impl JobSink for Vec<FileJob> {
    fn emit(&mut self, job: FileJob) -> bool {
        self.push(job);
        true
    }
}

/// Blocks the calling thread while the queue is full.
///
/// Must not be used from within an async context.
impl JobSink for mpsc::Sender<FileJob> {
    fn emit(&mut self, job: FileJob) -> bool {
        self.blocking_send(job).is_ok()
    }
}

/// Number of subdirectories per batch: `ceil(count / 10)`, at least one.
pub fn batch_size(count: usize) -> usize {
    count.div_ceil(10).max(1)
}

/// Walks scan targets and emits matching files into a [`JobSink`].
pub struct Scanner<S> {
    sink: S,
    on_progress: Option<Arc<ProgressCallback>>,
    emitted: usize,
}

impl<S: JobSink> Scanner<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            on_progress: None,
            emitted: 0,
        }
    }

    /// Sets the per-subdirectory progress callback.
    pub fn with_progress(mut self, callback: Option<Arc<ProgressCallback>>) -> Self {
        self.on_progress = callback;
        self
    }

    /// Number of jobs emitted so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Consumes the scanner and returns the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Scans one target. Breaks early only if the sink is closed.
    pub fn scan(&mut self, target: &ScanTarget) -> ControlFlow<()> {
        if !target.recursive() {
            return self.scan_flat(target.root());
        }

        let root = target.root();
        let subdirs = match list_subdirectories(root) {
            Ok(subdirs) => subdirs,
            Err(e) => {
                warn!(
                    root = %root.display(),
                    error = %e,
                    "Failed to list subdirectories, scanning root only"
                );
                return self.scan_flat(root);
            }
        };

        if subdirs.is_empty() {
            info!(root = %root.display(), "No subdirectories found, scanning root directory only");
            return self.scan_flat(root);
        }

        let size = batch_size(subdirs.len());
        let batches = subdirs.len().div_ceil(size);
        info!(
            root = %root.display(),
            subdirectories = subdirs.len(),
            batch_size = size,
            "Processing subdirectories in batches"
        );

        let mut completed = 0;
        for (batch, chunk) in subdirs.chunks(size).enumerate() {
            debug!(batch, len = chunk.len(), "Scanning batch");
            for dir in chunk {
                self.walk(dir)?;
                completed += 1;
                if let Some(ref callback) = self.on_progress {
                    callback(&ScanProgress {
                        root: root.to_path_buf(),
                        completed,
                        total: subdirs.len(),
                        batch,
                        batches,
                    });
                }
            }
        }

        // Files directly in the root are not covered by the subdirectory walks.
        self.scan_flat(root)
    }

    /// Emits matching direct children of `dir`.
    fn scan_flat(&mut self, dir: &Path) -> ControlFlow<()> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Failed to read directory");
                return ControlFlow::Continue(());
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "Cannot access directory entry");
                    continue;
                }
            };
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir {
                continue;
            }
            self.offer(entry.path())?;
        }

        ControlFlow::Continue(())
    }

    /// Emits every matching file anywhere beneath `dir`.
    fn walk(&mut self, dir: &Path) -> ControlFlow<()> {
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map(|p| p.display().to_string()).unwrap_or_default();
                    warn!(path = %path, error = %e, "Cannot access path, skipping");
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                continue;
            }
            self.offer(entry.into_path())?;
        }

        ControlFlow::Continue(())
    }

    fn offer(&mut self, path: PathBuf) -> ControlFlow<()> {
        if !FileKind::is_supported(&path) {
            return ControlFlow::Continue(());
        }
        debug!(path = %path.display(), "Queueing file");
        if !self.sink.emit(FileJob::new(path)) {
            warn!("Job queue closed, stopping scan");
            return ControlFlow::Break(());
        }
        self.emitted += 1;
        ControlFlow::Continue(())
    }
}

/// Immediate subdirectories of `root`, sorted by name.
fn list_subdirectories(root: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut subdirs = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(root = %root.display(), error = %e, "Cannot access directory entry");
                continue;
            }
        };
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            subdirs.push(entry.path());
        }
    }
    subdirs.sort();
    Ok(subdirs)
}
